//! Error types for the pagechunk library.
//!
//! Extraction failures are split into "not found" and "unreadable"
//! so callers can tell a missing document from a corrupt one.
//! Truncation at `max_chunks` is not an error; the pipeline observer
//! reports it.

use thiserror::Error;

/// Result type alias for pagechunk operations
pub type Result<T> = std::result::Result<T, PagechunkError>;

/// Main error type for pagechunk
#[derive(Error, Debug)]
pub enum PagechunkError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unreadable document {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PagechunkError {
    /// Build an `Unreadable` error from anything displayable
    pub fn unreadable(path: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Unreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, PagechunkError::NotFound(_))
    }

    /// Check if the document exists but could not be extracted
    pub fn is_unreadable(&self) -> bool {
        matches!(self, PagechunkError::Unreadable { .. })
    }

    /// Check if this error rejects the configuration
    pub fn is_invalid_config(&self) -> bool {
        matches!(
            self,
            PagechunkError::InvalidConfiguration(_) | PagechunkError::TomlError(_)
        )
    }
}
