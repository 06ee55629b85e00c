//! Runtime color discovery
//!
//! Infers colors and friendly identifiers from app color files that follow
//! no predeclared schema.

mod merge;
mod naming;
mod parser;
mod result;

pub use merge::*;
pub use naming::*;
pub use parser::*;
pub use result::*;
