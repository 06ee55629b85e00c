//! Tint Theme
//!
//! Design-token color resolution and discovery: turns loosely structured
//! JSON color files into light/dark theme pairs with stable, code-safe
//! identifiers.
//!
//! # Overview
//!
//! Two document families are supported:
//! - **Tagged token trees** exported by design tools, where colors are
//!   `{ "$type": "color", "$value": "#hex" | "{path.to.token}" }` and a
//!   primitive document supplies reference targets
//! - **App color files** with no schema, where colors are
//!   `{ "light": "#hex", "dark": "#hex" }` pairs or bare `"#hex"` strings,
//!   either combined or split into `<name>-light` / `<name>-dark`
//!
//! # Quick Start
//!
//! ```rust
//! use tint_theme::{ColorContext, ColorScheme, MemorySource};
//!
//! let source = MemorySource::new()
//!     .with("app-colors-light", r##"{"brand":{"primary":"#112233"}}"##)
//!     .with("app-colors-dark", r##"{"brand":{"primary":"#AABBCC"}}"##);
//!
//! let colors = ColorContext::configure(&source, "app-colors");
//! let theme = colors.get_theme("brandPrimary").unwrap();
//! assert_eq!(theme.for_scheme(ColorScheme::Dark).as_str(), "#AABBCC");
//! ```
//!
//! # Batch generation
//!
//! ```rust
//! use serde_json::json;
//! use tint_theme::{extract_colors, merge_themes, DiscoveryResult, GeneratedSources};
//!
//! let primitive = json!({ "blue": { "500": { "$type": "color", "$value": "#3366FF" } } });
//! let light = json!({ "accent": { "$type": "color", "$value": "{blue.500}" } });
//! let dark = json!({ "accent": { "$type": "color", "$value": "#99BBFF" } });
//!
//! let merged = merge_themes(
//!     &extract_colors(&light, &primitive),
//!     &extract_colors(&dark, &primitive),
//! );
//! let sources = GeneratedSources::emit(&DiscoveryResult::organize(merged)).unwrap();
//! assert!(sources.color_names.contains("Accent,"));
//! ```

pub mod codegen;
pub mod context;
pub mod discovery;
pub mod error;
pub mod roles;
pub mod source;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use codegen::{CodeEmitter, GeneratedSources};
pub use context::{ColorContext, ColorRegistry, LoadMode, SetupReport, DEFAULT_RESOURCE_NAME};
pub use discovery::*;
pub use error::DiscoveryError;
pub use roles::{ColorRole, RoleColors, RoleMapping, RoleMappingError};
pub use source::{DirectorySource, MemorySource, ResourceSource};
pub use theme::{ColorRenderer, ColorScheme, FlatThemeMap, Theme};
pub use tokens::*;
