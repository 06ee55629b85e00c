//! Rust source generation from a discovery result
//!
//! Output is byte-stable: every listing is driven by sorted maps, so
//! regenerating from unchanged tokens produces identical files.
//!
//! Three units are produced:
//! - `colors.rs`: a `ColorName` enum with one variant per identifier
//! - `color_themes.rs`: one `ThemeColor` constant per identifier, grouped by
//!   category, plus the JSON table embedded as `DATA`
//! - `color_themes.json`: identifier -> `{ "dark", "light" }`

use crate::discovery::{capitalize_first, DiscoveryResult};
use crate::theme::Theme;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

const HEADER_TOOL: &str = "tint";

/// Generated file contents
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSources {
    pub color_names: String,
    pub color_themes: String,
    pub themes_json: String,
}

impl GeneratedSources {
    pub fn emit(result: &DiscoveryResult) -> Result<Self, serde_json::Error> {
        let emitter = CodeEmitter::new(result);
        let themes_json = emitter.themes_json()?;
        Ok(Self {
            color_names: emitter.color_names_source(),
            color_themes: emitter.color_themes_source(&themes_json),
            themes_json,
        })
    }
}

/// One identifier with its generated Rust names
#[derive(Clone, Debug)]
struct Entry<'a> {
    property: &'a str,
    key: &'a str,
    variant: String,
    constant: String,
}

/// Serializes a [`DiscoveryResult`] into generated Rust declarations
pub struct CodeEmitter<'a> {
    result: &'a DiscoveryResult,
    entries: BTreeMap<&'a str, Entry<'a>>,
}

impl<'a> CodeEmitter<'a> {
    pub fn new(result: &'a DiscoveryResult) -> Self {
        let mut variants = BTreeSet::new();
        let mut constants = BTreeSet::new();
        let mut entries = BTreeMap::new();

        for (property, key) in result.property_mappings() {
            let variant = unique(&mut variants, type_ident(property), "");
            let constant = unique(&mut constants, const_ident(property), "_");
            entries.insert(
                property.as_str(),
                Entry {
                    property: property.as_str(),
                    key: key.as_str(),
                    variant,
                    constant,
                },
            );
        }

        Self { result, entries }
    }

    /// Sorted identifiers, as listed by the generated enum
    pub fn identifiers(&self) -> Vec<&'a str> {
        self.entries.keys().copied().collect()
    }

    /// `ColorName` enum source
    pub fn color_names_source(&self) -> String {
        let mut out = header("colors.rs");
        out.push_str("/// Every color discovered in the design tokens\n");
        out.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]\n");
        out.push_str("pub enum ColorName {\n");
        for entry in self.entries.values() {
            let _ = writeln!(out, "    /// `{}`", entry.key.escape_debug());
            let _ = writeln!(out, "    {},", entry.variant);
        }
        out.push_str("}\n\nimpl ColorName {\n");

        out.push_str("    pub const ALL: &[ColorName] = &[\n");
        for entry in self.entries.values() {
            let _ = writeln!(out, "        ColorName::{},", entry.variant);
        }
        out.push_str("    ];\n\n");

        out.push_str("    /// Generated identifier\n");
        out.push_str("    pub fn as_str(self) -> &'static str {\n        match self {\n");
        for entry in self.entries.values() {
            let _ = writeln!(
                out,
                "            ColorName::{} => {:?},",
                entry.variant, entry.property
            );
        }
        out.push_str("        }\n    }\n\n");

        out.push_str("    /// Original dotted token path\n");
        out.push_str("    pub fn key(self) -> &'static str {\n        match self {\n");
        for entry in self.entries.values() {
            let _ = writeln!(out, "            ColorName::{} => {:?},", entry.variant, entry.key);
        }
        out.push_str("        }\n    }\n}\n");
        out
    }

    /// Themed constants grouped by category, with the JSON table embedded
    pub fn color_themes_source(&self, themes_json: &str) -> String {
        let mut out = header("color_themes.rs");
        out.push_str("/// Light/dark pair for one color\n");
        out.push_str("#[derive(Clone, Copy, Debug, PartialEq, Eq)]\n");
        out.push_str("pub struct ThemeColor {\n");
        out.push_str("    pub light: &'static str,\n");
        out.push_str("    pub dark: &'static str,\n");
        out.push_str("}\n");

        for (category, colors) in self.result.categorized_colors() {
            let _ = write!(out, "\n// {}\n", category.escape_debug());
            for (property, theme) in colors {
                let Some(entry) = self.entries.get(property.as_str()) else {
                    continue;
                };
                let _ = write!(out, "\n/// `{}`\n", entry.key.escape_debug());
                let _ = writeln!(
                    out,
                    "pub const {}: ThemeColor = ThemeColor {{ light: {:?}, dark: {:?} }};",
                    entry.constant,
                    theme.light.as_str(),
                    theme.dark.as_str()
                );
            }
        }

        out.push_str("\n/// Theme table as JSON, identifier -> { light, dark }\n");
        let _ = writeln!(out, "pub const DATA: &str = {};", raw_string_literal(themes_json));
        out
    }

    /// identifier -> theme as pretty-printed, key-sorted JSON
    pub fn themes_json(&self) -> Result<String, serde_json::Error> {
        let table: BTreeMap<&str, &Theme> = self
            .entries
            .values()
            .filter_map(|entry| {
                self.result
                    .all_colors()
                    .get(entry.key)
                    .map(|theme| (entry.property, theme))
            })
            .collect();
        // round-trip through Value so object keys come out sorted
        let value = serde_json::to_value(table)?;
        serde_json::to_string_pretty(&value)
    }
}

fn header(file_name: &str) -> String {
    format!("//\n// {file_name}\n// Auto-generated by {HEADER_TOOL}\n// DO NOT EDIT MANUALLY\n//\n\n")
}

fn unique(taken: &mut BTreeSet<String>, base: String, separator: &str) -> String {
    let mut candidate = base.clone();
    let mut n = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{base}{separator}{n}");
        n += 1;
    }
    candidate
}

fn ascii_ident_chars(property: &str) -> String {
    property.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// PascalCase Rust type/variant name for an identifier
pub fn type_ident(property: &str) -> String {
    let clean = ascii_ident_chars(property);
    let ident = if clean.starts_with(|c: char| c.is_ascii_alphabetic()) {
        capitalize_first(&clean)
    } else {
        format!("Color{clean}")
    };
    if ident == "Self" {
        "Self_".to_string()
    } else {
        ident
    }
}

/// SCREAMING_SNAKE_CASE Rust constant name for an identifier
pub fn const_ident(property: &str) -> String {
    let clean = ascii_ident_chars(property);
    let mut out = String::with_capacity(clean.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in clean.chars() {
        if c.is_ascii_uppercase() && prev_lower_or_digit {
            out.push('_');
        }
        prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        out.push(c.to_ascii_uppercase());
    }
    if !out.starts_with(|c: char| c.is_ascii_alphabetic()) {
        out.insert_str(0, "COLOR_");
    }
    out
}

/// Wrap `s` in a raw string literal with enough `#`s to never terminate early
fn raw_string_literal(s: &str) -> String {
    let mut longest = 0;
    let mut run: Option<usize> = None;
    for c in s.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => {
                longest = longest.max(n + 1);
                Some(n + 1)
            }
            _ => None,
        };
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{s}\"{hashes}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::FlatThemeMap;
    use crate::tokens::HexColor;
    use pretty_assertions::assert_eq;

    fn result() -> DiscoveryResult {
        let mut colors = FlatThemeMap::new();
        for (key, light, dark) in [
            ("brand.primary", "#112233", "#AABBCC"),
            ("AppText.body", "#222222", "#EEEEEE"),
            ("100.base", "#000000", "#FFFFFF"),
        ] {
            colors.insert(
                key.to_string(),
                Theme::new(HexColor::parse(light).unwrap(), HexColor::parse(dark).unwrap()),
            );
        }
        DiscoveryResult::organize(colors)
    }

    #[test]
    fn rust_idents() {
        assert_eq!(type_ident("brandPrimary"), "BrandPrimary");
        assert_eq!(type_ident("color%x"), "Colorx");
        assert_eq!(type_ident("self"), "Self_");
        assert_eq!(const_ident("brandPrimary"), "BRAND_PRIMARY");
        assert_eq!(const_ident("color100Base"), "COLOR100_BASE");
        assert_eq!(const_ident("appbackgroundMain"), "APPBACKGROUND_MAIN");
    }

    #[test]
    fn raw_literal_outlasts_hash_runs() {
        assert_eq!(raw_string_literal("{}"), "r#\"{}\"#");
        assert_eq!(raw_string_literal("\"#FF\""), "r##\"\"#FF\"\"##");
        assert_eq!(raw_string_literal("\"##x"), "r###\"\"##x\"###");
    }

    #[test]
    fn enum_lists_sorted_identifiers() {
        let result = result();
        let emitter = CodeEmitter::new(&result);
        assert_eq!(
            emitter.identifiers(),
            vec!["apptextBody", "brandPrimary", "color100Base"]
        );
        let src = emitter.color_names_source();
        assert!(src.starts_with("//\n// colors.rs\n// Auto-generated by tint\n"));
        assert!(src.contains("    /// `brand.primary`\n    BrandPrimary,\n"));
        assert!(src.contains("ColorName::Color100Base => \"color100Base\","));
        assert!(src.contains("ColorName::Color100Base => \"100.base\","));
        assert!(src.contains("    pub const ALL: &[ColorName] = &[\n"));
        assert!(!src.contains("'static [ColorName]"));
        let apptext = src.find("    ApptextBody,").unwrap();
        let brand = src.find("    BrandPrimary,").unwrap();
        assert!(apptext < brand);
    }

    #[test]
    fn declarations_grouped_by_sorted_category() {
        let result = result();
        let sources = GeneratedSources::emit(&result).unwrap();
        let src = &sources.color_themes;

        let order: Vec<usize> = ["\n// 100\n", "\n// brand\n", "\n// text\n"]
            .iter()
            .map(|h| src.find(h).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
        assert!(src.contains(
            "/// `brand.primary`\npub const BRAND_PRIMARY: ThemeColor = ThemeColor { light: \"#112233\", dark: \"#AABBCC\" };\n"
        ));
        assert!(src.contains("pub const DATA: &str = r##\"{"));
    }

    #[test]
    fn json_table_is_key_sorted() {
        let result = result();
        let json = CodeEmitter::new(&result).themes_json().unwrap();
        let expected = r##"{
  "apptextBody": {
    "dark": "#EEEEEE",
    "light": "#222222"
  },
  "brandPrimary": {
    "dark": "#AABBCC",
    "light": "#112233"
  },
  "color100Base": {
    "dark": "#FFFFFF",
    "light": "#000000"
  }
}"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn output_is_stable() {
        let a = GeneratedSources::emit(&result()).unwrap();
        let b = GeneratedSources::emit(&result()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn clashing_rust_names_get_suffixes() {
        let mut colors = FlatThemeMap::new();
        let c = Theme::uniform(HexColor::parse("#010101").unwrap());
        // distinct identifiers "a%b" and "ab" both sanitize to `Ab` / `AB`
        colors.insert("a%b".into(), c.clone());
        colors.insert("ab".into(), c);
        let result = DiscoveryResult::organize(colors);
        let src = CodeEmitter::new(&result).color_names_source();
        assert!(src.contains("    Ab,\n"));
        assert!(src.contains("    Ab2,\n"));
    }
}
