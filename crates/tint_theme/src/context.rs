//! Loaded color configuration
//!
//! A [`ColorContext`] is built once per load and passed to whatever needs
//! color lookups. Reloading builds a new context; [`ColorRegistry`] holds the
//! one currently in use when a single shared slot is wanted.

use crate::discovery::{
    merge_themes, parse_colors, parse_colors_for_single_theme, DiscoveryResult,
};
use crate::error::DiscoveryError;
use crate::source::{ResourceSource, JSON_EXTENSION};
use crate::theme::{FlatThemeMap, Theme};
use crate::tokens::FlatColorMap;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, info};

/// Resource name used when none is given
pub const DEFAULT_RESOURCE_NAME: &str = "app-colors";

/// Number of sample colors shown in a [`SetupReport`]
const REPORT_SAMPLES: usize = 3;

/// How the colors of a context were laid out on disk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadMode {
    /// `<name>-light` and `<name>-dark` documents
    Paired,
    /// One `<name>` document with `{light, dark}` pairs or bare values
    Combined,
    /// Built directly from a theme map
    Direct,
}

impl Display for LoadMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LoadMode::Paired => "paired light/dark files",
            LoadMode::Combined => "single combined file",
            LoadMode::Direct => "in-memory theme map",
        })
    }
}

/// Read-only color lookup over one successful (or failed) load
#[derive(Clone, Debug)]
pub struct ColorContext {
    base_name: String,
    result: Arc<DiscoveryResult>,
    loaded_files: Vec<String>,
    mode: Option<LoadMode>,
    error: Option<String>,
}

impl ColorContext {
    /// Load colors for `base_name`, never failing.
    ///
    /// On failure the error is logged and kept; the context reports
    /// `is_ready() == false` and every lookup returns `None`.
    pub fn configure<S: ResourceSource>(source: &S, base_name: &str) -> Self {
        match Self::try_configure(source, base_name) {
            Ok(context) => {
                info!(
                    "auto-discovered {} colors from '{}'",
                    context.color_count(),
                    context.loaded_files.join(", ")
                );
                context
            }
            Err(err) => {
                error!("failed to load colors - {err}");
                Self {
                    base_name: base_name.to_string(),
                    result: Arc::default(),
                    loaded_files: Vec::new(),
                    mode: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Load colors for `base_name`.
    ///
    /// Prefers a `<name>-light` / `<name>-dark` pair and falls back to a
    /// single `<name>` document.
    pub fn try_configure<S: ResourceSource>(
        source: &S,
        base_name: &str,
    ) -> Result<Self, DiscoveryError> {
        let light_name = format!("{base_name}-light");
        let dark_name = format!("{base_name}-dark");

        let (colors, mode, files) = if source.contains(&light_name) && source.contains(&dark_name)
        {
            debug!("loading paired documents '{light_name}' and '{dark_name}'");
            let light = read_single_theme(source, &light_name)?;
            let dark = read_single_theme(source, &dark_name)?;
            (
                merge_themes(&light, &dark),
                LoadMode::Paired,
                vec![file_name(&light_name), file_name(&dark_name)],
            )
        } else {
            debug!("loading combined document '{base_name}'");
            let bytes = read_required(source, base_name)?;
            (
                parse_colors(&bytes)?,
                LoadMode::Combined,
                vec![file_name(base_name)],
            )
        };

        if colors.is_empty() {
            return Err(DiscoveryError::NoColorsFound);
        }

        Ok(Self {
            base_name: base_name.to_string(),
            result: Arc::new(DiscoveryResult::organize(colors)),
            loaded_files: files,
            mode: Some(mode),
            error: None,
        })
    }

    /// Wrap an already built theme map
    pub fn from_themes(base_name: impl Into<String>, colors: FlatThemeMap) -> Self {
        Self {
            base_name: base_name.into(),
            result: Arc::new(DiscoveryResult::organize(colors)),
            loaded_files: Vec::new(),
            mode: Some(LoadMode::Direct),
            error: None,
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn result(&self) -> &DiscoveryResult {
        &self.result
    }

    /// Shared handle to the discovery result
    pub fn shared_result(&self) -> Arc<DiscoveryResult> {
        Arc::clone(&self.result)
    }

    pub fn loaded_files(&self) -> &[String] {
        &self.loaded_files
    }

    pub fn mode(&self) -> Option<LoadMode> {
        self.mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_ready(&self) -> bool {
        self.error.is_none() && !self.result.is_empty()
    }

    pub fn color_count(&self) -> usize {
        self.result.total_color_count()
    }

    /// Theme by exact original key
    pub fn theme_for_key(&self, key: &str) -> Option<&Theme> {
        self.result.theme_for_key(key)
    }

    /// Theme by generated identifier
    pub fn theme_for_property(&self, property: &str) -> Option<&Theme> {
        self.result.theme_for_property(property)
    }

    /// Theme by original key or generated identifier, key first
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.result.get_theme(name)
    }

    pub fn all_color_names(&self) -> Vec<&str> {
        self.result.color_names()
    }

    pub fn all_property_names(&self) -> Vec<&str> {
        self.result.property_names()
    }

    pub fn colors_by_category(&self) -> &BTreeMap<String, BTreeMap<String, Theme>> {
        self.result.categorized_colors()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.result.categories()
    }

    pub fn search_colors(&self, term: &str) -> Vec<&str> {
        self.result.search(term)
    }

    /// Setup diagnostics
    pub fn report(&self) -> SetupReport {
        SetupReport {
            mode: self.mode,
            files: self.loaded_files.clone(),
            color_count: self.color_count(),
            ready: self.is_ready(),
            error: self.error.clone(),
            categories: self.categories().into_iter().map(str::to_string).collect(),
            samples: self
                .result
                .all_colors()
                .iter()
                .take(REPORT_SAMPLES)
                .map(|(k, t)| (k.clone(), t.clone()))
                .collect(),
        }
    }

    /// Every color and identifier mapping, one per line
    pub fn listing(&self) -> String {
        let mut out = String::new();
        if !self.is_ready() {
            out.push_str("No colors loaded\n");
            return out;
        }
        out.push_str(&format!("{} colors found:\n", self.color_count()));
        for (name, theme) in self.result.all_colors() {
            out.push_str(&format!("  {name}: {} -> {}\n", theme.light, theme.dark));
        }
        out.push_str("\nProperty names:\n");
        for (property, key) in self.result.property_mappings() {
            out.push_str(&format!("  .{property} -> \"{key}\"\n"));
        }
        out
    }
}

fn file_name(resource: &str) -> String {
    format!("{resource}.{JSON_EXTENSION}")
}

fn read_required<S: ResourceSource>(source: &S, name: &str) -> Result<Vec<u8>, DiscoveryError> {
    source
        .read(name)
        .map_err(|err| DiscoveryError::Io {
            resource: file_name(name),
            source: err,
        })?
        .ok_or_else(|| DiscoveryError::MissingSource(file_name(name)))
}

/// One half of a pair; an empty half is allowed, the union is checked later
fn read_single_theme<S: ResourceSource>(
    source: &S,
    name: &str,
) -> Result<FlatColorMap, DiscoveryError> {
    let bytes = read_required(source, name)?;
    match parse_colors_for_single_theme(&bytes) {
        Ok(colors) => Ok(colors),
        Err(DiscoveryError::NoColorsFound) => Ok(FlatColorMap::new()),
        Err(err) => Err(err),
    }
}

/// Snapshot of a context's state for display
#[derive(Clone, Debug, PartialEq)]
pub struct SetupReport {
    pub mode: Option<LoadMode>,
    pub files: Vec<String>,
    pub color_count: usize,
    pub ready: bool,
    pub error: Option<String>,
    pub categories: Vec<String>,
    pub samples: Vec<(String, Theme)>,
}

impl Display for SetupReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tint setup validation:")?;
        match self.mode {
            Some(mode) => writeln!(f, "   Mode: {mode}")?,
            None => writeln!(f, "   Mode: not loaded")?,
        }
        if !self.files.is_empty() {
            writeln!(f, "   Files: {}", self.files.join(", "))?;
        }
        writeln!(f, "   Colors loaded: {}", self.color_count)?;
        writeln!(f, "   Status: {}", if self.ready { "ready" } else { "failed" })?;
        if let Some(error) = &self.error {
            writeln!(f, "   Error: {error}")?;
        }
        if self.ready {
            let categories = if self.categories.is_empty() {
                "none".to_string()
            } else {
                self.categories.join(", ")
            };
            writeln!(f, "   Categories: {categories}")?;
            writeln!(f, "   Sample colors:")?;
            for (name, theme) in &self.samples {
                writeln!(f, "     - {name}: {} / {}", theme.light, theme.dark)?;
            }
        }
        Ok(())
    }
}

/// Single slot holding the configuration currently in use.
///
/// Publishing replaces the whole context; the last write wins. Readers get
/// an `Arc` and keep a consistent view even if a newer context is published.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    current: RwLock<Option<Arc<ColorContext>>>,
}

impl ColorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current context
    pub fn publish(&self, context: ColorContext) -> Arc<ColorContext> {
        let context = Arc::new(context);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&context));
        context
    }

    /// Load and publish in one step
    pub fn configure<S: ResourceSource>(&self, source: &S, base_name: &str) -> Arc<ColorContext> {
        self.publish(ColorContext::configure(source, base_name))
    }

    pub fn current(&self) -> Option<Arc<ColorContext>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_ready(&self) -> bool {
        self.current().is_some_and(|context| context.is_ready())
    }

    /// Theme lookup against the current context
    pub fn get_theme(&self, name: &str) -> Option<Theme> {
        self.current()?.get_theme(name).cloned()
    }
}
