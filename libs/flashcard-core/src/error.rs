//! Error types for flashcard-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("flashcard not found: {0}")]
    NotFound(i64),

    #[error("no matches found for: {query}")]
    NoMatches { query: String },

    #[error("no flashcard ids left to assign")]
    IdSpaceExhausted,

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The in-memory change (if any) has been applied; only the file is stale.
    #[error("failed to access {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Expected outcomes the caller reports and moves past.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Persistence { .. })
    }

    pub(crate) fn no_matches(query: &str) -> Self {
        Self::NoMatches {
            query: query.to_string(),
        }
    }
}
