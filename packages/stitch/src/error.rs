//! Error types for RSpec parsing and rendering.
//!
//! Uses the dual-error pattern: `StitchError` for library consumers with
//! detailed error context, and a `Result` alias for internal use.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the stitching library.
#[derive(Debug, Error)]
pub enum StitchError {
    /// Input text is not well-formed XML.
    #[error("Malformed RSpec document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    /// Well-formed XML that violates a structural expectation.
    #[error("Schema violation in <{tag}>: {detail}")]
    SchemaViolation { tag: String, detail: String },

    /// Writing the output document failed.
    #[error("Failed to render RSpec: {0}")]
    Render(#[from] std::io::Error),

    /// Rendered output was not valid UTF-8.
    #[error("Rendered RSpec is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// Reading or writing a file from the command line failed.
    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization of the object graph failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl StitchError {
    /// Build a `SchemaViolation` for the given element tag.
    pub fn schema(tag: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::SchemaViolation {
            tag: tag.into(),
            detail: detail.into(),
        }
    }

    /// Build a `SchemaViolation` for a required attribute that is absent.
    pub fn missing_attribute(tag: impl Into<String>, attribute: &str) -> Self {
        Self::schema(tag, format!("missing required attribute '{attribute}'"))
    }
}

/// Result type alias for stitching operations.
pub type Result<T> = std::result::Result<T, StitchError>;
