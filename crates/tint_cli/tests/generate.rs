//! End-to-end generation from token documents on disk

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tint_cli::{generate, OutputConfig, TintConfig, TokensConfig};

const PRIMITIVE: &str = r##"{
  "blue": {
    "500": { "$type": "color", "$value": "#3366ff" },
    "alias": { "$type": "color", "$value": "{blue.500}" }
  }
}"##;

const LIGHT: &str = r##"{
  "$description": "light mode",
  "AppText": {
    "heading": { "$type": "color", "$value": "{blue.alias}" },
    "body": { "$type": "color", "$value": "#222222" }
  },
  "surface": { "$type": "color", "$value": "{missing.token}" }
}"##;

const DARK: &str = r##"{
  "AppText": {
    "heading": { "$type": "color", "$value": "#AABBCC" }
  },
  "overlay": { "$type": "color", "$value": "#00000080" }
}"##;

fn write_tokens(dir: &Path) {
    fs::write(dir.join("primitive.tokens.json"), PRIMITIVE).unwrap();
    fs::write(dir.join("light.tokens.json"), LIGHT).unwrap();
    fs::write(dir.join("dark.tokens.json"), DARK).unwrap();
}

fn configs(root: &Path) -> (TokensConfig, OutputConfig) {
    let mut config = TintConfig::default();
    config.tokens.dir = root.join("tokens");
    config.output.dir = root.join("out");
    (config.tokens, config.output)
}

#[test]
fn generates_all_three_files() {
    let root = tempfile::tempdir().unwrap();
    let (tokens, output) = configs(root.path());
    fs::create_dir_all(&tokens.dir).unwrap();
    write_tokens(&tokens.dir);

    let summary = generate(&tokens, &output).unwrap();
    assert_eq!(summary.colors, 4);
    assert_eq!(summary.light_tokens, 3);
    assert_eq!(summary.dark_tokens, 2);
    assert_eq!(summary.files.len(), 3);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.dir.join("color_themes.json")).unwrap())
            .unwrap();
    assert_eq!(json["apptextHeading"]["light"], "#3366FF");
    assert_eq!(json["apptextHeading"]["dark"], "#AABBCC");
    // light-only falls back to the light value for dark
    assert_eq!(json["apptextBody"]["dark"], "#222222");
    // dark-only falls back to the dark value for light
    assert_eq!(json["overlay"]["light"], "#00000080");
    assert_eq!(json["surface"]["light"], "#FF00FF");

    let names = fs::read_to_string(output.dir.join("colors.rs")).unwrap();
    assert!(names.contains("pub enum ColorName"));
    assert!(names.contains("\"apptextHeading\""));

    let themes = fs::read_to_string(output.dir.join("color_themes.rs")).unwrap();
    assert!(themes.contains("pub struct ThemeColor"));
    assert!(themes.contains("APPTEXT_HEADING"));
}

#[test]
fn regeneration_is_byte_stable() {
    let root = tempfile::tempdir().unwrap();
    let (tokens, output) = configs(root.path());
    fs::create_dir_all(&tokens.dir).unwrap();
    write_tokens(&tokens.dir);

    generate(&tokens, &output).unwrap();
    let first: Vec<_> = ["colors.rs", "color_themes.rs", "color_themes.json"]
        .iter()
        .map(|f| fs::read(output.dir.join(f)).unwrap())
        .collect();

    generate(&tokens, &output).unwrap();
    let second: Vec<_> = ["colors.rs", "color_themes.rs", "color_themes.json"]
        .iter()
        .map(|f| fs::read(output.dir.join(f)).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn missing_token_files_generate_empty_tables() {
    let root = tempfile::tempdir().unwrap();
    let (tokens, output) = configs(root.path());

    let summary = generate(&tokens, &output).unwrap();
    assert_eq!(summary.colors, 0);
    let json = fs::read_to_string(output.dir.join("color_themes.json")).unwrap();
    assert_eq!(json.trim(), "{}");
}

#[test]
fn malformed_token_file_aborts() {
    let root = tempfile::tempdir().unwrap();
    let (tokens, output) = configs(root.path());
    fs::create_dir_all(&tokens.dir).unwrap();
    fs::write(tokens.dir.join("light.tokens.json"), "\"just a string\"").unwrap();

    let err = generate(&tokens, &output).unwrap_err();
    assert!(err.to_string().contains("root level must be a JSON object"));
    assert!(!output.dir.exists());
}
