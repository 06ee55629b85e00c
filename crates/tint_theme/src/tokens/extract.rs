//! Extraction of `$type: "color"` tokens from a design-tool export
//!
//! Documents look like:
//!
//! ```json
//! {
//!   "Text": {
//!     "$description": "text colors",
//!     "primary": { "$type": "color", "$value": "{gray.900}" }
//!   }
//! }
//! ```
//!
//! Keys starting with [`METADATA_SENTINEL`] are annotations and never
//! contribute to paths.

use super::hex::HexColor;
use super::reference::{resolve_color_value, VALUE_KEY};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Prefix marking metadata keys (`$type`, `$value`, `$description`, ...)
pub const METADATA_SENTINEL: char = '$';

/// Key holding a token's type tag
pub const TYPE_KEY: &str = "$type";

/// Type tag identifying color tokens
pub const COLOR_TYPE: &str = "color";

/// Dotted path -> resolved color for one appearance mode
pub type FlatColorMap = BTreeMap<String, HexColor>;

/// Borrowed classification of a node in a token document
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenNode<'a> {
    /// Object tagged as a color with a string `$value`
    Color { value: &'a str },
    /// Group of child tokens
    Group(&'a Map<String, Value>),
    /// Anything else: non-color tokens, scalars, arrays
    Other,
}

impl<'a> TokenNode<'a> {
    pub fn classify(value: &'a Value) -> Self {
        let Some(object) = value.as_object() else {
            return TokenNode::Other;
        };
        let is_color = object.get(TYPE_KEY).and_then(Value::as_str) == Some(COLOR_TYPE);
        match object.get(VALUE_KEY).and_then(Value::as_str) {
            Some(raw) if is_color => TokenNode::Color { value: raw },
            _ => TokenNode::Group(object),
        }
    }
}

/// True for keys that carry metadata rather than data
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_SENTINEL)
}

/// Join a prefix and a key with `.`
pub fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Extract every color token in `tokens`, resolving references against
/// `primitive`.
///
/// A root that is not an object yields an empty map.
pub fn extract_colors(tokens: &Value, primitive: &Value) -> FlatColorMap {
    let mut out = FlatColorMap::new();
    if let Some(root) = tokens.as_object() {
        extract_into(root, primitive, "", &mut out);
    }
    debug!("extracted {} color tokens", out.len());
    out
}

fn extract_into(
    object: &Map<String, Value>,
    primitive: &Value,
    prefix: &str,
    out: &mut FlatColorMap,
) {
    // serde_json's default map iterates in key order
    for (key, value) in object {
        if is_metadata_key(key) {
            continue;
        }
        match TokenNode::classify(value) {
            TokenNode::Color { value: raw } => {
                let path = join_path(prefix, key);
                let color = resolve_color_value(raw, primitive);
                out.insert(path, color);
            }
            TokenNode::Group(child) => {
                extract_into(child, primitive, &join_path(prefix, key), out);
            }
            TokenNode::Other => {}
        }
    }
}
