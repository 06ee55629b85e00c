//! Pairing of separately extracted light and dark maps

use crate::theme::{FlatThemeMap, Theme};
use crate::tokens::{FlatColorMap, HexColor};

/// Combine a light-mode map and a dark-mode map into themes.
///
/// The result covers the union of both key sets. A key missing from one
/// mode borrows the other mode's value; `#000000` / `#FFFFFF` are only used
/// if both are missing, which cannot happen for keys drawn from the union.
pub fn merge_themes(light: &FlatColorMap, dark: &FlatColorMap) -> FlatThemeMap {
    let mut merged = FlatThemeMap::new();
    for key in light.keys().chain(dark.keys()) {
        if merged.contains_key(key) {
            continue;
        }
        let light_value = light
            .get(key)
            .or_else(|| dark.get(key))
            .cloned()
            .unwrap_or_else(HexColor::fallback_light);
        let dark_value = dark
            .get(key)
            .or_else(|| light.get(key))
            .cloned()
            .unwrap_or_else(HexColor::fallback_dark);
        merged.insert(key.clone(), Theme::new(light_value, dark_value));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map(entries: &[(&str, &str)]) -> FlatColorMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), HexColor::parse(v).unwrap()))
            .collect()
    }

    #[test]
    fn union_of_keys_with_cross_fill() {
        let light = map(&[("shared", "#111111"), ("light.only", "#222222")]);
        let dark = map(&[("shared", "#AAAAAA"), ("dark.only", "#BBBBBB")]);
        let merged = merge_themes(&light, &dark);

        let got: Vec<_> = merged
            .iter()
            .map(|(k, t)| (k.as_str(), t.light.as_str(), t.dark.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("dark.only", "#BBBBBB", "#BBBBBB"),
                ("light.only", "#222222", "#222222"),
                ("shared", "#111111", "#AAAAAA"),
            ]
        );
    }

    #[test]
    fn empty_inputs_merge_to_empty() {
        assert!(merge_themes(&FlatColorMap::new(), &FlatColorMap::new()).is_empty());
    }

    #[test]
    fn one_sided_inputs_keep_every_key() {
        let light = map(&[("a", "#010101"), ("b", "#020202")]);
        let merged = merge_themes(&light, &FlatColorMap::new());
        assert_eq!(merged.len(), 2);
        assert!(merged.values().all(|t| t.light == t.dark));
    }
}
