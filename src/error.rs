//! Error types for gdocs-html.
//!
//! Conversion itself never fails; errors only arise at the boundaries,
//! when reading document JSON or writing rendered HTML.

use thiserror::Error;

/// Errors that can occur while loading a document or writing HTML.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// The document JSON could not be parsed
    #[error("invalid document JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for boundary operations.
pub type HtmlResult<T> = Result<T, HtmlError>;
