//! Identifier and category derivation for dotted token paths
//!
//! Both functions are pure: the same path always produces the same name,
//! which keeps regenerated code free of spurious diffs.
//!
//! ```
//! use tint_theme::{category_name, property_name};
//!
//! assert_eq!(property_name("AppBackground.main"), "appbackgroundMain");
//! assert_eq!(property_name("brand.on-primary"), "brandOnprimary");
//! assert_eq!(property_name("100.base"), "color100Base");
//! assert_eq!(category_name("AppBackground.main"), "background");
//! ```

/// Prefix added to identifiers that would not start with a letter
pub const IDENTIFIER_ESCAPE: &str = "color";

/// Identifier used when a path yields no characters
pub const UNKNOWN_IDENTIFIER: &str = "unknownColor";

/// Prefix stripped from the first segment when deriving a category
pub const CATEGORY_PREFIX: &str = "App";

/// Category used when the first segment is empty after stripping
pub const GENERAL_CATEGORY: &str = "general";

const STRIPPED: [char; 3] = ['-', '_', ' '];

fn clean_segment(segment: &str) -> String {
    segment.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

/// Upper-case the first character, keep the rest unchanged
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive a camelCase identifier from a dotted path.
///
/// `"App.Text.Heading"` becomes `"appTextHeading"`: the first segment is
/// lower-cased, later segments get an upper-case initial, and `-`, `_` and
/// spaces are dropped everywhere.
pub fn property_name(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    for (index, segment) in path.split('.').enumerate() {
        let clean = clean_segment(segment);
        if index == 0 {
            result.push_str(&clean.to_lowercase());
        } else {
            result.push_str(&capitalize_first(&clean));
        }
    }

    if result.is_empty() {
        return UNKNOWN_IDENTIFIER.to_string();
    }
    if !result.chars().next().is_some_and(char::is_alphabetic) {
        result = format!("{IDENTIFIER_ESCAPE}{}", capitalize_first(&result));
    }
    result
}

/// Derive a coarse, lower-case category from a dotted path's first segment.
pub fn category_name(path: &str) -> String {
    let first = path.split('.').next().unwrap_or_default();
    let stripped = first.strip_prefix(CATEGORY_PREFIX).unwrap_or(first);
    let category = stripped.to_lowercase();
    if category.is_empty() {
        GENERAL_CATEGORY.to_string()
    } else {
        category
    }
}
