use crate::tree::path::join_key_path;
use crate::tree::{ErrorNode, ErrorTree};

/// Flatten an [`ErrorTree`] into one line per terminal node.
///
/// Lines come out depth-first in key order:
/// - `LeafList` → `"{path}: {message} {message} ..."`
/// - `Leaf` → `"{path}: {code}: {message}"` (code omitted when absent)
///
/// Branches contribute the lines of their children.
pub fn flatten(tree: &ErrorTree) -> Vec<String> {
    flatten_with_prefix(tree, "")
}

/// Same as [`flatten`], with every path rooted at `prefix`.
pub fn flatten_with_prefix(tree: &ErrorTree, prefix: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(tree.entries().len());
    collect_lines(tree, prefix, &mut lines);
    lines
}

/// Classify a raw `errors` value and flatten it.
pub fn flatten_value(errors: &serde_json::Value) -> Vec<String> {
    flatten(&ErrorTree::from_value(errors))
}

fn collect_lines(tree: &ErrorTree, prefix: &str, lines: &mut Vec<String>) {
    for (key, node) in tree.entries() {
        let path = join_key_path(prefix, key);
        match node {
            ErrorNode::LeafList(errors) => {
                let joined = errors
                    .iter()
                    .map(|e| e.message.trim())
                    .filter(|m| !m.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(format!("{path}: {joined}"));
            }
            ErrorNode::Leaf(error) => lines.push(format!("{path}: {}", error.render())),
            ErrorNode::Branch(children) => collect_lines(children, &path, lines),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::path::{PathSegment, is_index_key, parse_key_path};
    use serde_json::{Map, Value, json};

    fn lcg_next(state: &mut u64) -> u64 {
        *state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        *state >> 33
    }

    /// Random tree; records the path of every terminal node in emission order.
    fn random_tree(state: &mut u64, depth: u32, prefix: &str, paths: &mut Vec<String>) -> Value {
        let width = lcg_next(state) % 4;
        let mut map = Map::new();
        for i in 0..width {
            let key = if lcg_next(state) % 3 == 0 {
                i.to_string()
            } else {
                format!("field{i}")
            };
            let path = join_key_path(prefix, &key);
            let choice = if depth == 0 {
                lcg_next(state) % 2
            } else {
                lcg_next(state) % 3
            };
            let value = match choice {
                0 => {
                    paths.push(path);
                    json!({"_errors": [{"code": "C", "message": "m1"}, {"message": "m2"}]})
                }
                1 => {
                    paths.push(path);
                    json!({"code": "C", "message": "m"})
                }
                _ => random_tree(state, depth - 1, &path, paths),
            };
            map.insert(key, value);
        }
        Value::Object(map)
    }

    fn line_path(line: &str) -> &str {
        line.split_once(": ").map_or(line, |(path, _)| path)
    }

    #[test]
    fn flat_leaf() {
        let lines = flatten_value(&json!({
            "username": {"code": "TOO_SHORT", "message": "Must be 2-32 characters."}
        }));
        assert_eq!(lines, vec!["username: TOO_SHORT: Must be 2-32 characters."]);
    }

    #[test]
    fn leaf_list_joins_messages_without_codes() {
        let lines = flatten_value(&json!({
            "content": {"_errors": [
                {"code": "BASE_TYPE_REQUIRED", "message": "This field is required."},
                {"message": "Second."}
            ]}
        }));
        assert_eq!(lines, vec!["content: This field is required. Second."]);
    }

    #[test]
    fn nested_array_index() {
        let lines = flatten_value(&json!({
            "embeds": {"0": {"title": {"_errors": [{"message": "Too long."}]}}}
        }));
        assert_eq!(lines, vec!["embeds[0].title: Too long."]);
    }

    #[test]
    fn json_arrays_render_as_indices() {
        let lines = flatten_value(&json!({
            "components": [{}, {"custom_id": {"_errors": [{"message": "Duplicate."}]}}]
        }));
        assert_eq!(lines, vec!["components[1].custom_id: Duplicate."]);
    }

    #[test]
    fn siblings_keep_key_order() {
        let lines = flatten_value(&json!({
            "b": {"message": "second key first"},
            "a": {"message": "first key second"}
        }));
        assert_eq!(lines, vec!["b: second key first", "a: first key second"]);
    }

    #[test]
    fn errors_list_wins_over_code_and_message() {
        let lines = flatten_value(&json!({
            "name": {
                "code": "SHADOWED",
                "message": "shadowed",
                "_errors": [{"message": "listed"}]
            }
        }));
        assert_eq!(lines, vec!["name: listed"]);
    }

    #[test]
    fn blank_messages_and_zero_codes_leave_no_stray_spaces() {
        let lines = flatten_value(&json!({
            "a": {"message": "   "},
            "b": {"code": 0},
            "c": {"_errors": [{"message": "x"}, {"code": "C"}, {"message": "y"}]}
        }));
        assert_eq!(lines, vec!["c: x y"]);
    }

    #[test]
    fn leaf_text_is_trimmed() {
        let lines = flatten_value(&json!({"x": {"message": "  padded  "}}));
        assert_eq!(lines, vec!["x: padded"]);
    }

    #[test]
    fn empty_inputs_yield_no_lines() {
        assert!(flatten(&ErrorTree::default()).is_empty());
        assert!(flatten_value(&json!({})).is_empty());
        assert!(flatten_value(&json!({"a": {}, "b": {"c": {}}})).is_empty());
        assert!(flatten_value(&json!("not a tree")).is_empty());
        assert!(flatten_value(&json!({"a": null, "b": 5})).is_empty());
    }

    #[test]
    fn prefix_roots_every_path() {
        let tree = ErrorTree::from_value(&json!({
            "0": {"message": "a"},
            "name": {"message": "b"}
        }));
        assert_eq!(
            flatten_with_prefix(&tree, "options"),
            vec!["options[0]: a", "options.name: b"]
        );
    }

    #[test]
    fn line_count_matches_terminal_count_for_randomized_trees() {
        let mut seed = 0x5EED_u64;
        for _ in 0..2_000 {
            let mut paths = Vec::new();
            let value = random_tree(&mut seed, 4, "", &mut paths);
            let tree = ErrorTree::from_value(&value);
            let lines = flatten(&tree);

            assert_eq!(lines.len(), tree.terminal_count());
            assert_eq!(lines.len(), paths.len());
        }
    }

    #[test]
    fn rendered_paths_match_nesting_for_randomized_trees() {
        let mut seed = 0xFACE_u64;
        for _ in 0..2_000 {
            let mut paths = Vec::new();
            let value = random_tree(&mut seed, 4, "", &mut paths);
            let lines = flatten_value(&value);

            let rendered: Vec<&str> = lines.iter().map(|l| line_path(l)).collect();
            assert_eq!(rendered, paths);

            for path in rendered {
                let segments = parse_key_path(path);
                for (i, segment) in segments.iter().enumerate() {
                    match segment {
                        PathSegment::Index(key) => {
                            assert!(i > 0, "{path}: index segment at root");
                            assert!(is_index_key(key), "{path}: bad index {key}");
                        }
                        PathSegment::Field(key) => {
                            assert!(i == 0 || !is_index_key(key), "{path}: digit field {key}");
                        }
                    }
                }
                let rebuilt = segments
                    .iter()
                    .fold(String::new(), |acc, seg| join_key_path(&acc, seg.key()));
                assert_eq!(rebuilt, path);
            }
        }
    }
}
