//! Organized view over a discovered theme map

use super::naming::{category_name, property_name};
use crate::theme::{FlatThemeMap, Theme};
use std::collections::BTreeMap;
use tracing::warn;

/// Two original keys that derived the same identifier
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameCollision {
    /// The shared identifier
    pub property: String,
    /// Key that owns the identifier in the result
    pub kept: String,
    /// Key whose identifier mapping was replaced
    pub dropped: String,
}

/// Result of organizing discovered colors.
///
/// Built once per load and never mutated; a reload builds a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscoveryResult {
    all_colors: FlatThemeMap,
    categorized_colors: BTreeMap<String, BTreeMap<String, Theme>>,
    property_mappings: BTreeMap<String, String>,
    collisions: Vec<NameCollision>,
}

impl DiscoveryResult {
    /// Group colors by category and map identifiers back to keys.
    ///
    /// Keys are visited in sorted order, so when two keys derive the same
    /// identifier the lexicographically later key wins. Every such case is
    /// logged and kept in [`collisions`](Self::collisions).
    pub fn organize(colors: FlatThemeMap) -> Self {
        let mut categorized_colors: BTreeMap<String, BTreeMap<String, Theme>> = BTreeMap::new();
        let mut property_mappings: BTreeMap<String, String> = BTreeMap::new();
        let mut collisions = Vec::new();

        for (key, theme) in &colors {
            let category = category_name(key);
            let property = property_name(key);

            if let Some(previous) = property_mappings.insert(property.clone(), key.clone()) {
                warn!("identifier `{property}` derived from both `{previous}` and `{key}`, keeping `{key}`");
                // the earlier key may sit in a different category
                let previous_category = category_name(&previous);
                if let Some(group) = categorized_colors.get_mut(&previous_category) {
                    group.remove(&property);
                    if group.is_empty() {
                        categorized_colors.remove(&previous_category);
                    }
                }
                collisions.push(NameCollision {
                    property: property.clone(),
                    kept: key.clone(),
                    dropped: previous,
                });
            }

            categorized_colors
                .entry(category)
                .or_default()
                .insert(property, theme.clone());
        }

        Self {
            all_colors: colors,
            categorized_colors,
            property_mappings,
            collisions,
        }
    }

    /// All colors keyed by their original dotted path
    pub fn all_colors(&self) -> &FlatThemeMap {
        &self.all_colors
    }

    /// category -> identifier -> theme
    pub fn categorized_colors(&self) -> &BTreeMap<String, BTreeMap<String, Theme>> {
        &self.categorized_colors
    }

    /// identifier -> original dotted path
    pub fn property_mappings(&self) -> &BTreeMap<String, String> {
        &self.property_mappings
    }

    pub fn collisions(&self) -> &[NameCollision] {
        &self.collisions
    }

    /// Sorted category names
    pub fn categories(&self) -> Vec<&str> {
        self.categorized_colors.keys().map(String::as_str).collect()
    }

    pub fn total_color_count(&self) -> usize {
        self.all_colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_colors.is_empty()
    }

    /// Look up by exact original key
    pub fn theme_for_key(&self, key: &str) -> Option<&Theme> {
        self.all_colors.get(key)
    }

    /// Look up by derived identifier
    pub fn theme_for_property(&self, property: &str) -> Option<&Theme> {
        self.property_mappings
            .get(property)
            .and_then(|key| self.all_colors.get(key))
    }

    /// Look up by original key first, then by identifier
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.theme_for_key(name)
            .or_else(|| self.theme_for_property(name))
    }

    /// Original key owning an identifier
    pub fn key_for_property(&self, property: &str) -> Option<&str> {
        self.property_mappings.get(property).map(String::as_str)
    }

    /// Sorted original keys
    pub fn color_names(&self) -> Vec<&str> {
        self.all_colors.keys().map(String::as_str).collect()
    }

    /// Sorted identifiers
    pub fn property_names(&self) -> Vec<&str> {
        self.property_mappings.keys().map(String::as_str).collect()
    }

    /// Keys containing `term`, case-insensitively, in sorted order
    pub fn search(&self, term: &str) -> Vec<&str> {
        let needle = term.to_lowercase();
        self.all_colors
            .keys()
            .filter(|key| key.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}
