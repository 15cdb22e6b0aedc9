pub mod path;

use serde_json::Value;

use crate::types::FieldError;

/// Key under which a node lists its concrete problems.
pub const ERRORS_KEY: &str = "_errors";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum NodeShape {
    LeafList,
    LeafNode,
    Branch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorNode {
    /// `{"_errors": [{code?, message}, ...]}`
    LeafList(Vec<FieldError>),
    /// `{code?, message}` without `_errors`.
    Leaf(FieldError),
    /// Anything else; nests further entries.
    Branch(ErrorTree),
}

impl ErrorNode {
    /// Decide which shape `value` has.
    ///
    /// Priority follows the payload conventions: an `_errors` array wins over
    /// `code`/`message` on the same object, and only objects or arrays that are
    /// neither become branches. Arrays branch on their indices. Scalars and
    /// `null` carry no errors and classify as an empty branch.
    pub fn classify(key: &str, value: &Value) -> Self {
        let node = match value {
            Value::Object(obj) => {
                if let Some(list) = obj.get(ERRORS_KEY).and_then(|v| v.as_array()) {
                    Self::LeafList(list.iter().map(field_error_from_value).collect())
                } else if obj.get("code").is_some_and(is_present)
                    || obj.get("message").is_some_and(is_present)
                {
                    Self::Leaf(field_error_from_value(value))
                } else {
                    Self::Branch(ErrorTree::from_value(value))
                }
            }
            Value::Array(_) => Self::Branch(ErrorTree::from_value(value)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                tracing::trace!(
                    key,
                    kind = value_kind(value),
                    "unrecognized error tree value, treating as empty branch"
                );
                Self::Branch(ErrorTree::default())
            }
        };
        tracing::trace!(key, shape = %node.shape(), "classified error tree entry");
        node
    }

    pub fn shape(&self) -> NodeShape {
        match self {
            Self::LeafList(_) => NodeShape::LeafList,
            Self::Leaf(_) => NodeShape::LeafNode,
            Self::Branch(_) => NodeShape::Branch,
        }
    }
}

/// Ordered `key -> node` mapping. Key order is the order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTree {
    entries: Vec<(String, ErrorNode)>,
}

impl ErrorTree {
    /// Classify every entry of an object (or every element of an array, keyed
    /// by index). Any other value yields an empty tree.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(obj) => obj
                .iter()
                .map(|(k, v)| (k.clone(), ErrorNode::classify(k, v)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let key = i.to_string();
                    let node = ErrorNode::classify(&key, v);
                    (key, node)
                })
                .collect(),
            _ => {
                tracing::trace!(
                    kind = value_kind(value),
                    "error tree root is not a mapping, treating as empty"
                );
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[(String, ErrorNode)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of `LeafList` and `Leaf` nodes reachable from this tree.
    pub fn terminal_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, node)| match node {
                ErrorNode::LeafList(_) | ErrorNode::Leaf(_) => 1,
                ErrorNode::Branch(children) => children.terminal_count(),
            })
            .sum()
    }
}

impl FromIterator<(String, ErrorNode)> for ErrorTree {
    fn from_iter<I: IntoIterator<Item = (String, ErrorNode)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Blank strings and zero count as absent, like a missing attribute.
fn is_present(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        _ => false,
    }
}

fn scalar_text(value: Option<&Value>) -> Option<String> {
    let value = value.filter(|v| is_present(v))?;
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn field_error_from_value(value: &Value) -> FieldError {
    FieldError {
        code: scalar_text(value.get("code")),
        message: scalar_text(value.get("message")).unwrap_or_default(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
