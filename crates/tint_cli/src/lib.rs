//! Tint CLI
//!
//! `tint generate` turns tagged design-token documents into Rust color
//! tables; `tint inspect` checks app color files the way the runtime
//! loader sees them.

pub mod config;
pub mod generator;
pub mod inspect;

pub use config::{
    write_default, DiscoveryConfig, OutputConfig, TintConfig, TokensConfig, CONFIG_FILE,
};
pub use generator::{generate, load_tokens, GenerateSummary};
pub use inspect::{inspect, Inspection};
