use pretty_assertions::assert_eq;
use tint_theme::{
    category_name, merge_themes, parse_colors, parse_colors_for_single_theme, property_name,
    ColorContext, DiscoveryError, DiscoveryResult, MemorySource,
};

const LIGHT: &str = r##"{"brand":{"primary":"#112233"}}"##;
const DARK: &str = r##"{"brand":{"primary":"#AABBCC"}}"##;

#[test]
fn light_and_dark_documents_pair_into_one_theme() {
    let light = parse_colors_for_single_theme(LIGHT.as_bytes()).unwrap();
    let dark = parse_colors_for_single_theme(DARK.as_bytes()).unwrap();
    let result = DiscoveryResult::organize(merge_themes(&light, &dark));

    assert_eq!(result.total_color_count(), 1);
    let theme = result.theme_for_key("brand.primary").unwrap();
    assert_eq!(theme.light.as_str(), "#112233");
    assert_eq!(theme.dark.as_str(), "#AABBCC");
    assert_eq!(result.categories(), vec!["brand"]);
    assert_eq!(result.key_for_property("brandPrimary"), Some("brand.primary"));
}

#[test]
fn context_pipeline_matches_manual_pipeline() {
    let source = MemorySource::new()
        .with("tokens-light", LIGHT)
        .with("tokens-dark", DARK);
    let context = ColorContext::try_configure(&source, "tokens").unwrap();

    let light = parse_colors_for_single_theme(LIGHT.as_bytes()).unwrap();
    let dark = parse_colors_for_single_theme(DARK.as_bytes()).unwrap();
    let manual = DiscoveryResult::organize(merge_themes(&light, &dark));
    assert_eq!(context.result(), &manual);
}

#[test]
fn empty_document_has_no_colors() {
    assert!(matches!(parse_colors(b"{}"), Err(DiscoveryError::NoColorsFound)));
}

#[test]
fn asymmetric_documents_keep_every_key() {
    let light = parse_colors_for_single_theme(br##"{"a":"#111111","shared":"#222222"}"##).unwrap();
    let dark = parse_colors_for_single_theme(br##"{"b":"#333333","shared":"#444444"}"##).unwrap();
    let merged = merge_themes(&light, &dark);

    let keys: Vec<_> = merged.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b", "shared"]);
    assert_eq!(merged["a"].dark.as_str(), "#111111");
    assert_eq!(merged["b"].light.as_str(), "#333333");
}

#[test]
fn identifiers_are_stable_and_share_categories() {
    assert_eq!(property_name("App.Text.Heading"), property_name("App.Text.Heading"));
    assert_eq!(category_name("App.Text.Heading"), category_name("App.Text.Body"));
}
