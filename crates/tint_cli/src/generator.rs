//! Batch generation from tagged design tokens

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tint_theme::{extract_colors, merge_themes, DiscoveryResult, GeneratedSources};
use tracing::{debug, info, warn};

use crate::config::{OutputConfig, TokensConfig};

/// What a generation run produced
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    pub light_tokens: usize,
    pub dark_tokens: usize,
    pub primitive_tokens: usize,
    pub colors: usize,
    pub collisions: usize,
    pub files: Vec<PathBuf>,
}

/// Load the three token documents, resolve and merge them, then write the
/// generated sources into `output.dir`.
pub fn generate(tokens: &TokensConfig, output: &OutputConfig) -> Result<GenerateSummary> {
    info!("Checking for token files in {}", tokens.dir.display());

    let light = load_tokens(&tokens.light_path())?;
    let dark = load_tokens(&tokens.dark_path())?;
    let primitive = load_tokens(&tokens.primitive_path())?;

    let light_tokens = top_level_len(&light);
    let dark_tokens = top_level_len(&dark);
    let primitive_tokens = top_level_len(&primitive);
    info!(
        "Loaded tokens - light: {}, dark: {}, primitive: {}",
        light_tokens, dark_tokens, primitive_tokens
    );

    let light_colors = extract_colors(&light, &primitive);
    let dark_colors = extract_colors(&dark, &primitive);
    debug!(
        "Extracted {} light and {} dark colors",
        light_colors.len(),
        dark_colors.len()
    );

    let merged = merge_themes(&light_colors, &dark_colors);
    info!("Extracted {} unique colors", merged.len());

    let result = DiscoveryResult::organize(merged);
    let sources = GeneratedSources::emit(&result).context("Failed to serialize color table")?;

    let files = write_sources(&sources, output)?;
    info!(
        "Generated {} colors into {}",
        result.total_color_count(),
        output.dir.display()
    );

    Ok(GenerateSummary {
        light_tokens,
        dark_tokens,
        primitive_tokens,
        colors: result.total_color_count(),
        collisions: result.collisions().len(),
        files,
    })
}

/// Read a token document; a missing file is an empty document.
pub fn load_tokens(path: &Path) -> Result<Value> {
    if !path.exists() {
        warn!("Token file not found: {}", path.display());
        return Ok(Value::Object(Map::new()));
    }

    let content =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_slice(&content)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;

    if !value.is_object() {
        anyhow::bail!("{}: root level must be a JSON object", path.display());
    }
    Ok(value)
}

fn top_level_len(value: &Value) -> usize {
    value.as_object().map_or(0, Map::len)
}

fn write_sources(sources: &GeneratedSources, output: &OutputConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(&output.dir)
        .with_context(|| format!("Failed to create {}", output.dir.display()))?;

    let files = [
        (&output.names_file, &sources.color_names),
        (&output.themes_file, &sources.color_themes),
        (&output.json_file, &sources.themes_json),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = output.dir.join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
