//! Semantic color roles
//!
//! Maps app-specific color names onto a fixed set of roles so widgets can
//! ask for "primary text" without knowing how a given design file spells it.

use crate::discovery::DiscoveryResult;
use crate::theme::Theme;
use crate::tokens::HexColor;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::{info, warn};

/// Standard semantic color roles
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum ColorRole {
    // Background colors
    Primary,
    Secondary,
    Tertiary,
    Surface,
    Elevated,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextOnPrimary,

    // Brand colors
    BrandPrimary,
    BrandSecondary,
    BrandAccent,
    BrandSubtle,

    // Status colors
    Success,
    Warning,
    Error,
    Info,

    // Border colors
    BorderLight,
    BorderMedium,
    BorderStrong,
    BorderAccent,
}

impl ColorRole {
    /// Every role, in declaration order
    pub fn all() -> &'static [ColorRole] {
        use ColorRole::*;
        const ROLES: [ColorRole; 21] = [
            Primary,
            Secondary,
            Tertiary,
            Surface,
            Elevated,
            TextPrimary,
            TextSecondary,
            TextTertiary,
            TextOnPrimary,
            BrandPrimary,
            BrandSecondary,
            BrandAccent,
            BrandSubtle,
            Success,
            Warning,
            Error,
            Info,
            BorderLight,
            BorderMedium,
            BorderStrong,
            BorderAccent,
        ];
        &ROLES
    }

    /// Stable role id for config files
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Surface => "surface",
            Self::Elevated => "elevated",
            Self::TextPrimary => "textPrimary",
            Self::TextSecondary => "textSecondary",
            Self::TextTertiary => "textTertiary",
            Self::TextOnPrimary => "textOnPrimary",
            Self::BrandPrimary => "brandPrimary",
            Self::BrandSecondary => "brandSecondary",
            Self::BrandAccent => "brandAccent",
            Self::BrandSubtle => "brandSubtle",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
            Self::BorderLight => "borderLight",
            Self::BorderMedium => "borderMedium",
            Self::BorderStrong => "borderStrong",
            Self::BorderAccent => "borderAccent",
        }
    }

    /// Look up a role by its id
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|role| role.id() == id)
    }

    /// Human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Self::Primary => "Primary Background",
            Self::Secondary => "Secondary Background",
            Self::Tertiary => "Tertiary Background",
            Self::Surface => "Surface Background",
            Self::Elevated => "Elevated Background",
            Self::TextPrimary => "Primary Text",
            Self::TextSecondary => "Secondary Text",
            Self::TextTertiary => "Tertiary Text",
            Self::TextOnPrimary => "Text on Primary",
            Self::BrandPrimary => "Primary Brand",
            Self::BrandSecondary => "Secondary Brand",
            Self::BrandAccent => "Brand Accent",
            Self::BrandSubtle => "Subtle Brand",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Info => "Info",
            Self::BorderLight => "Light Border",
            Self::BorderMedium => "Medium Border",
            Self::BorderStrong => "Strong Border",
            Self::BorderAccent => "Accent Border",
        }
    }

    /// Role group
    pub fn category(self) -> &'static str {
        match self {
            Self::Primary | Self::Secondary | Self::Tertiary | Self::Surface | Self::Elevated => {
                "Background"
            }
            Self::TextPrimary | Self::TextSecondary | Self::TextTertiary | Self::TextOnPrimary => {
                "Text"
            }
            Self::BrandPrimary | Self::BrandSecondary | Self::BrandAccent | Self::BrandSubtle => {
                "Brand"
            }
            Self::Success | Self::Warning | Self::Error | Self::Info => "Status",
            Self::BorderLight | Self::BorderMedium | Self::BorderStrong | Self::BorderAccent => {
                "Border"
            }
        }
    }
}

impl Display for ColorRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Role -> color name in the app's JSON
#[derive(Clone, Debug, Default)]
pub struct RoleMapping {
    mappings: FxHashMap<ColorRole, String>,
}

impl RoleMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a role; a later mapping for the same role replaces the earlier one
    pub fn map(mut self, role: ColorRole, json_name: impl Into<String>) -> Self {
        self.mappings.insert(role, json_name.into());
        self
    }

    pub fn json_name(&self, role: ColorRole) -> Option<&str> {
        self.mappings.get(&role).map(String::as_str)
    }

    /// Configured roles in declaration order
    pub fn configured_roles(&self) -> Vec<ColorRole> {
        let mut roles: Vec<_> = self.mappings.keys().copied().collect();
        roles.sort_unstable();
        roles
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(ColorRole, S)> for RoleMapping {
    fn from_iter<I: IntoIterator<Item = (ColorRole, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |mapping, (role, name)| mapping.map(role, name))
    }
}

#[derive(Debug, Error)]
pub enum RoleMappingError {
    #[error("failed to decode role colors: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("color `{name}` mapped to role `{role}` has invalid hex value `{value}`")]
    InvalidColor {
        role: ColorRole,
        name: String,
        value: String,
    },
}

#[derive(Deserialize)]
struct RawTheme {
    light: String,
    dark: String,
}

/// Colors resolved for each configured role
#[derive(Clone, Debug, Default)]
pub struct RoleColors {
    themes: BTreeMap<ColorRole, Theme>,
}

impl RoleColors {
    /// Decode a flat `{ name: { light, dark } }` document and apply `mapping`.
    pub fn from_slice(data: &[u8], mapping: &RoleMapping) -> Result<Self, RoleMappingError> {
        let raw: BTreeMap<String, RawTheme> = serde_json::from_slice(data)?;
        let mut themes = BTreeMap::new();
        for role in mapping.configured_roles() {
            let Some(name) = mapping.json_name(role) else {
                continue;
            };
            let Some(entry) = raw.get(name) else {
                warn!("no color named '{name}' for role '{role}'");
                continue;
            };
            let light = parse_role_color(role, name, &entry.light)?;
            let dark = parse_role_color(role, name, &entry.dark)?;
            themes.insert(role, Theme::new(light, dark));
        }
        info!("resolved {} of {} mapped roles", themes.len(), mapping.len());
        Ok(Self { themes })
    }

    /// Apply `mapping` to already discovered colors.
    ///
    /// Mapped names are looked up as original keys first, then as generated
    /// identifiers.
    pub fn from_discovery(result: &DiscoveryResult, mapping: &RoleMapping) -> Self {
        let mut themes = BTreeMap::new();
        for role in mapping.configured_roles() {
            let Some(name) = mapping.json_name(role) else {
                continue;
            };
            match result.get_theme(name) {
                Some(theme) => {
                    themes.insert(role, theme.clone());
                }
                None => warn!("no color named '{name}' for role '{role}'"),
            }
        }
        Self { themes }
    }

    pub fn theme(&self, role: ColorRole) -> Option<&Theme> {
        self.themes.get(&role)
    }

    pub fn all(&self) -> &BTreeMap<ColorRole, Theme> {
        &self.themes
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn parse_role_color(role: ColorRole, name: &str, value: &str) -> Result<HexColor, RoleMappingError> {
    HexColor::parse(value).ok_or_else(|| RoleMappingError::InvalidColor {
        role,
        name: name.to_string(),
        value: value.to_string(),
    })
}
