//! Light/dark color pairs

use crate::tokens::HexColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Appearance mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// One semantic color across both appearance modes
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme {
    pub light: HexColor,
    pub dark: HexColor,
}

impl Theme {
    pub fn new(light: HexColor, dark: HexColor) -> Self {
        Self { light, dark }
    }

    /// Same color in both modes
    pub fn uniform(color: HexColor) -> Self {
        Self {
            light: color.clone(),
            dark: color,
        }
    }

    /// Select the half matching `scheme`
    pub fn for_scheme(&self, scheme: ColorScheme) -> &HexColor {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Hand the half matching `scheme` to a platform renderer
    pub fn render<R: ColorRenderer>(&self, scheme: ColorScheme, renderer: &R) -> R::Output {
        renderer.render(self.for_scheme(scheme))
    }
}

/// Dotted path (or identifier) -> theme
pub type FlatThemeMap = BTreeMap<String, Theme>;

/// Converts a validated hex color into a host color type.
///
/// Native color construction and appearance switching live outside this
/// crate; hosts implement this trait for their own color type.
pub trait ColorRenderer {
    type Output;

    fn render(&self, color: &HexColor) -> Self::Output;
}
