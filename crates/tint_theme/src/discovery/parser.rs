//! Schema-less color discovery
//!
//! App color files carry no `$type` tags. Colors are found by shape:
//! - `{ "light": "#hex", "dark": "#hex" }` is one theme
//! - a bare `"#hex"` string is a theme with identical halves
//! - any other object is a group and is searched recursively

use crate::error::DiscoveryError;
use crate::theme::{FlatThemeMap, Theme};
use crate::tokens::{join_path, FlatColorMap, HexColor};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const LIGHT_KEY: &str = "light";
const DARK_KEY: &str = "dark";

/// Parse a combined document holding both appearance modes.
pub fn parse_colors(data: &[u8]) -> Result<FlatThemeMap, DiscoveryError> {
    let root = parse_root(data)?;
    let colors = discover_themes(&root);
    if colors.is_empty() {
        return Err(DiscoveryError::NoColorsFound);
    }
    Ok(colors)
}

/// Parse a document holding a single appearance mode.
///
/// Used when light and dark variants live in two separate files.
pub fn parse_colors_for_single_theme(data: &[u8]) -> Result<FlatColorMap, DiscoveryError> {
    let root = parse_root(data)?;
    let colors = discover_single(&root);
    if colors.is_empty() {
        return Err(DiscoveryError::NoColorsFound);
    }
    Ok(colors)
}

/// Discover themes in an already parsed object, without the empty check.
pub fn discover_themes(root: &Map<String, Value>) -> FlatThemeMap {
    let mut out = FlatThemeMap::new();
    discover_themes_into(root, "", &mut out);
    debug!("discovered {} themed colors", out.len());
    out
}

/// Discover single-mode colors in an already parsed object.
pub fn discover_single(root: &Map<String, Value>) -> FlatColorMap {
    let mut out = FlatColorMap::new();
    discover_single_into(root, "", &mut out);
    debug!("discovered {} single-mode colors", out.len());
    out
}

fn parse_root(data: &[u8]) -> Result<Map<String, Value>, DiscoveryError> {
    match serde_json::from_slice::<Value>(data)? {
        Value::Object(map) => Ok(map),
        _ => Err(DiscoveryError::InvalidStructure(
            "root level must be a JSON object".to_string(),
        )),
    }
}

fn discover_themes_into(object: &Map<String, Value>, prefix: &str, out: &mut FlatThemeMap) {
    for (key, value) in object {
        let path = join_path(prefix, key);
        match value {
            Value::Object(child) => match (child.get(LIGHT_KEY), child.get(DARK_KEY)) {
                (Some(light), Some(dark)) => {
                    match (HexColor::from_value(light), HexColor::from_value(dark)) {
                        (Some(light), Some(dark)) => {
                            out.insert(path, Theme::new(light, dark));
                        }
                        _ => warn!("skipping `{path}`: light/dark values are not hex colors"),
                    }
                }
                _ => discover_themes_into(child, &path, out),
            },
            other => {
                if let Some(color) = HexColor::from_value(other) {
                    out.insert(path, Theme::uniform(color));
                }
            }
        }
    }
}

fn discover_single_into(object: &Map<String, Value>, prefix: &str, out: &mut FlatColorMap) {
    for (key, value) in object {
        let path = join_path(prefix, key);
        match value {
            Value::Object(child) => discover_single_into(child, &path, out),
            other => {
                if let Some(color) = HexColor::from_value(other) {
                    out.insert(path, color);
                }
            }
        }
    }
}
