//! Key paths such as `embeds[0].title`.
//!
//! A path is built one key at a time with [`join_key_path`]. Digit-only keys
//! render as array indices, every other key as a dotted field name. The first
//! key of a path is always rendered bare.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Field(String),
    Index(String),
}

impl PathSegment {
    /// The raw key this segment was rendered from.
    pub fn key(&self) -> &str {
        match self {
            Self::Field(key) | Self::Index(key) => key,
        }
    }
}

/// `true` for a non-empty key made only of ASCII decimal digits.
pub fn is_index_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

pub fn join_key_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else if is_index_key(key) {
        format!("{prefix}[{key}]")
    } else {
        format!("{prefix}.{key}")
    }
}

/// Split a rendered path back into its segments.
///
/// Keys that themselves contain `.`, `[` or `]` cannot be told apart from
/// separators; such paths split on the first separator found. An unclosed
/// `[` keeps the remainder as a single field segment.
pub fn parse_key_path(path: &str) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    if path.is_empty() {
        return segments;
    }

    let end = path.find(['.', '[']).unwrap_or(path.len());
    segments.push(PathSegment::Field(path[..end].to_string()));
    let mut rest = &path[end..];

    while !rest.is_empty() {
        if let Some(after) = rest.strip_prefix('[') {
            let Some(close) = after.find(']') else {
                segments.push(PathSegment::Field(rest.to_string()));
                break;
            };
            segments.push(PathSegment::Index(after[..close].to_string()));
            rest = &after[close + 1..];
        } else if let Some(after) = rest.strip_prefix('.') {
            let end = after.find(['.', '[']).unwrap_or(after.len());
            segments.push(PathSegment::Field(after[..end].to_string()));
            rest = &after[end..];
        } else {
            segments.push(PathSegment::Field(rest.to_string()));
            break;
        }
    }
    segments
}
