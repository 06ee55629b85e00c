//! Tint configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tint_theme::DEFAULT_RESOURCE_NAME;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "tint.toml";

/// Top-level Tint configuration (tint.toml)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct TintConfig {
    #[serde(default)]
    pub tokens: TokensConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Tagged design-token inputs
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct TokensConfig {
    /// Directory holding the token documents
    #[serde(default = "default_tokens_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_light")]
    pub light: String,
    #[serde(default = "default_dark")]
    pub dark: String,
    #[serde(default = "default_primitive")]
    pub primitive: String,
}

fn default_tokens_dir() -> PathBuf {
    PathBuf::from("design-tokens")
}

fn default_light() -> String {
    "light.tokens.json".to_string()
}

fn default_dark() -> String {
    "dark.tokens.json".to_string()
}

fn default_primitive() -> String {
    "primitive.tokens.json".to_string()
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            dir: default_tokens_dir(),
            light: default_light(),
            dark: default_dark(),
            primitive: default_primitive(),
        }
    }
}

impl TokensConfig {
    pub fn light_path(&self) -> PathBuf {
        self.dir.join(&self.light)
    }

    pub fn dark_path(&self) -> PathBuf {
        self.dir.join(&self.dark)
    }

    pub fn primitive_path(&self) -> PathBuf {
        self.dir.join(&self.primitive)
    }
}

/// Generated file locations
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_names_file")]
    pub names_file: String,
    #[serde(default = "default_themes_file")]
    pub themes_file: String,
    #[serde(default = "default_json_file")]
    pub json_file: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_names_file() -> String {
    "colors.rs".to_string()
}

fn default_themes_file() -> String {
    "color_themes.rs".to_string()
}

fn default_json_file() -> String {
    "color_themes.json".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            names_file: default_names_file(),
            themes_file: default_themes_file(),
            json_file: default_json_file(),
        }
    }
}

/// Runtime app color files
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct DiscoveryConfig {
    #[serde(default = "default_resources_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_resource_name")]
    pub name: String,
}

fn default_resources_dir() -> PathBuf {
    PathBuf::from("resources")
}

fn default_resource_name() -> String {
    DEFAULT_RESOURCE_NAME.to_string()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            dir: default_resources_dir(),
            name: default_resource_name(),
        }
    }
}

impl TintConfig {
    /// Load an explicit config file, or `tint.toml` in `dir` if present.
    ///
    /// A missing default file means defaults; a missing explicit file is an
    /// error.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} not found", path.display());
                }
                Self::load_file(path)
            }
            None => {
                let path = dir.join(CONFIG_FILE);
                if path.exists() {
                    Self::load_file(&path)
                } else {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: TintConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Replace the token and output directories when given
    pub fn with_dirs(mut self, tokens: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(tokens) = tokens {
            self.tokens.dir = tokens;
        }
        if let Some(output) = output {
            self.output.dir = output;
        }
        self
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Write a default `tint.toml` into `dir`, creating it if needed.
///
/// An existing file is only replaced when `force` is set.
pub fn write_default(dir: &Path, force: bool) -> Result<PathBuf> {
    let file = dir.join(CONFIG_FILE);
    if file.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", file.display());
    }
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&file, TintConfig::default().to_toml()?)
        .with_context(|| format!("Failed to write {}", file.display()))?;
    Ok(file)
}
