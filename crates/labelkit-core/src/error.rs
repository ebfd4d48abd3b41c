//! Error handling for LabelKit
//!
//! Editing operations never fail: a refused operation simply leaves the
//! editor state unchanged. Errors only arise at the I/O boundaries
//! (session scripts, colour strings coming from files, export formats).
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for LabelKit
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A colour string is not of the form `#rrggbb`
    #[error("Invalid colour '{value}': expected #rrggbb")]
    InvalidColor {
        /// The rejected input.
        value: String,
    },

    /// A file extension does not map to a known format
    #[error("Unsupported format: {extension}")]
    UnsupportedFormat {
        /// The offending extension (empty when the path has none).
        extension: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
