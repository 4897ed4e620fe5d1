//! Structured error types for calview.
//!
//! Layout queries themselves are total; errors only come from building
//! shapes, parsing configuration and the CLI/WASM surfaces.

/// All errors that can occur while configuring or driving a calendar grid.
#[derive(Debug, thiserror::Error)]
pub enum CalviewError {
    /// Grid shape parameters out of range (zero counts, non-positive row height, ...).
    #[error("Invalid grid shape: {0}")]
    InvalidShape(String),

    /// Unrecognised calendar mode name.
    #[error("Unknown calendar mode: {0}")]
    UnknownMode(String),

    /// Color string that is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration values that parse but are out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CalviewError>;

