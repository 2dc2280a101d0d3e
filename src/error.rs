//! Error types for the crawl-issue list core.
//!
//! Malformed end-user input is never an error here: unknown sort fields,
//! bad orders and out-of-range page numbers are all normalized to defaults
//! at request construction. Only a collaborator breaking its contract
//! surfaces as `ListError`.

use thiserror::Error;

/// Errors raised by the list core.
#[derive(Debug, Error)]
pub enum ListError {
    /// The issue source failed to deliver records or the active category.
    #[error("issue source failed: {0:#}")]
    Source(anyhow::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ListError {
    /// Wrap an issue-source failure.
    pub fn source(err: anyhow::Error) -> Self {
        Self::Source(err)
    }
}

/// Result type alias using ListError.
pub type Result<T> = std::result::Result<T, ListError>;
