//! Reference resolution against a primitive token tree
//!
//! A token value is either a literal hex color or a `{dot.path}` reference
//! into the primitive tree. References may point at tokens that are
//! themselves references; chains are followed until a literal is found.

use super::hex::HexColor;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

/// Maximum number of references followed for a single value
pub const MAX_REFERENCE_DEPTH: usize = 32;

/// Key holding a token's value
pub const VALUE_KEY: &str = "$value";

/// Why a value could not be turned into a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("`{0}` is neither a hex color nor a reference")]
    InvalidLiteral(String),

    #[error("could not resolve color reference `{0}`")]
    Unresolved(String),

    #[error("reference cycle through `{0}`")]
    Cycle(String),

    #[error("reference chain deeper than {MAX_REFERENCE_DEPTH} at `{0}`")]
    DepthExceeded(String),
}

/// Interior of a `{...}` reference, if the value is one
pub fn reference_path(value: &str) -> Option<&str> {
    value.strip_prefix('{')?.strip_suffix('}')
}

/// Walk `path` one segment at a time.
///
/// A missing segment degrades to "nothing found" instead of an error.
pub fn follow_path<'json>(mut node: &'json Value, path: &str) -> Option<&'json Value> {
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    Some(node)
}

/// Resolve a raw token value, reporting failures as typed errors.
pub fn try_resolve(value: &str, primitive: &Value) -> Result<HexColor, ResolveError> {
    let mut visited = HashSet::new();
    resolve_inner(value, primitive, &mut visited, 0)
}

/// Resolve a raw token value, substituting the magenta fallback on failure.
///
/// One bad reference never aborts a batch; it shows up as `#FF00FF` and a
/// warning instead.
pub fn resolve_color_value(value: &str, primitive: &Value) -> HexColor {
    match try_resolve(value, primitive) {
        Ok(color) => color,
        Err(err) => {
            warn!("{err}, using {}", HexColor::unresolved());
            HexColor::unresolved()
        }
    }
}

fn resolve_inner<'a>(
    value: &'a str,
    primitive: &'a Value,
    visited: &mut HashSet<&'a str>,
    depth: usize,
) -> Result<HexColor, ResolveError> {
    if let Some(color) = HexColor::parse(value) {
        return Ok(color);
    }

    let Some(path) = reference_path(value.trim()) else {
        return Err(ResolveError::InvalidLiteral(value.to_string()));
    };

    if depth >= MAX_REFERENCE_DEPTH {
        return Err(ResolveError::DepthExceeded(path.to_string()));
    }
    if !visited.insert(path) {
        return Err(ResolveError::Cycle(path.to_string()));
    }

    let target = follow_path(primitive, path)
        .and_then(|node| node.get(VALUE_KEY))
        .and_then(Value::as_str)
        .ok_or_else(|| ResolveError::Unresolved(path.to_string()))?;

    resolve_inner(target, primitive, visited, depth + 1)
}
