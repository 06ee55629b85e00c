//! Property-based tests for hex validation, merging and naming

use proptest::prelude::*;
use std::collections::BTreeSet;
use tint_theme::{category_name, merge_themes, normalize_hex, property_name, FlatColorMap, HexColor};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Six or eight hex digits in mixed case
fn hex_digits_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-fA-F]{6}|[0-9a-fA-F]{8}").expect("valid regex")
}

/// Hex digits of any length except 6 and 8
fn wrong_length_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-fA-F]{0,16}")
        .expect("valid regex")
        .prop_filter("not 6 or 8", |s| s.len() != 6 && s.len() != 8)
}

fn optional_hash() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("#")]
}

fn color_map_strategy() -> impl Strategy<Value = FlatColorMap> {
    prop::collection::btree_map(
        prop::string::string_regex("[a-z]{1,3}(\\.[a-z]{1,3})?").expect("valid regex"),
        prop::string::string_regex("[0-9A-F]{6}")
            .expect("valid regex")
            .prop_map(|digits| HexColor::parse(&digits).expect("generated hex")),
        0..12,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any 6 or 8 hex digits are accepted, with or without `#`, and uppercased
    #[test]
    fn well_formed_hex_is_accepted(digits in hex_digits_strategy(), hash in optional_hash()) {
        let raw = format!("{hash}{digits}");
        prop_assert_eq!(normalize_hex(&raw), Some(digits.to_ascii_uppercase()));
    }

    /// Any other length is rejected
    #[test]
    fn wrong_length_is_rejected(digits in wrong_length_strategy(), hash in optional_hash()) {
        let raw = format!("{hash}{digits}");
        prop_assert_eq!(normalize_hex(&raw), None);
    }

    /// A single non-hex character anywhere is rejected
    #[test]
    fn non_hex_character_is_rejected(
        digits in hex_digits_strategy(),
        index in 0..8usize,
        bad in prop::sample::select(vec!['g', 'z', 'G', 'Z', '%', '@', '!', '.', '-', '_']),
        hash in optional_hash(),
    ) {
        let mut chars: Vec<char> = digits.chars().collect();
        let at = index % chars.len();
        chars[at] = bad;
        let raw: String = format!("{hash}{}", chars.into_iter().collect::<String>());
        prop_assert_eq!(normalize_hex(&raw), None);
    }

    /// Merging keeps exactly the union of keys and cross-fills one-sided keys
    #[test]
    fn merge_covers_union_and_cross_fills(light in color_map_strategy(), dark in color_map_strategy()) {
        let merged = merge_themes(&light, &dark);

        let expected: BTreeSet<&String> = light.keys().chain(dark.keys()).collect();
        let got: BTreeSet<&String> = merged.keys().collect();
        prop_assert_eq!(got, expected);

        for (key, theme) in &merged {
            match (light.get(key), dark.get(key)) {
                (Some(l), Some(d)) => {
                    prop_assert_eq!(&theme.light, l);
                    prop_assert_eq!(&theme.dark, d);
                }
                (Some(l), None) => {
                    prop_assert_eq!(&theme.light, l);
                    prop_assert_eq!(&theme.dark, l);
                }
                (None, Some(d)) => {
                    prop_assert_eq!(&theme.light, d);
                    prop_assert_eq!(&theme.dark, d);
                }
                (None, None) => prop_assert!(false, "unexpected key {}", key),
            }
        }
    }

    /// Identifier and category derivation are pure
    #[test]
    fn naming_is_deterministic(path in ".{0,40}") {
        prop_assert_eq!(property_name(&path), property_name(&path));
        prop_assert_eq!(category_name(&path), category_name(&path));
        prop_assert!(!property_name(&path).is_empty());
        prop_assert!(!category_name(&path).is_empty());
    }

    /// Paths sharing a first segment share a category
    #[test]
    fn category_depends_on_first_segment(
        first in "[A-Za-z][A-Za-z0-9_-]{0,8}",
        a in "[a-z0-9.]{1,12}",
        b in "[a-z0-9.]{1,12}",
    ) {
        prop_assert_eq!(
            category_name(&format!("{first}.{a}")),
            category_name(&format!("{first}.{b}"))
        );
    }
}
