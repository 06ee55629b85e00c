use std::io;

use thiserror::Error;

/// Failure of a discovery or load step.
///
/// All variants are recoverable by the caller: try another source, fall back
/// to defaults, or report a configuration error.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid JSON structure: {0}")]
    InvalidStructure(String),

    #[error("no valid colors found in JSON")]
    NoColorsFound,

    #[error("color source not found: {0}")]
    MissingSource(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read `{resource}`: {source}")]
    Io {
        resource: String,
        #[source]
        source: io::Error,
    },
}
