//! Tagged design tokens
//!
//! The design-tool export format:
//! - Hex color validation
//! - `{path.to.token}` reference resolution
//! - Extraction of `$type: "color"` leaves into flat maps

mod extract;
mod hex;
mod reference;

pub use extract::*;
pub use hex::*;
pub use reference::*;
