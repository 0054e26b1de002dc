//! Query error types.

use motif_constraint::ConstraintError;
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Invalid executor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid edge match mode: {mode:?} (expected \"all\" or \"any\")")]
    InvalidEdgeMatchMode { mode: String },

    #[error("Malformed executor config: {message}")]
    Malformed { message: String },
}

impl ConfigError {
    pub fn invalid_edge_match_mode(mode: impl Into<String>) -> Self {
        Self::InvalidEdgeMatchMode { mode: mode.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Errors that can occur while finding motifs.
///
/// Attribute mismatches never surface here; they only reject candidates.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The oracle produced a candidate that does not fit the motif or host.
    #[error("Structural inconsistency: {0}")]
    Constraint(#[from] ConstraintError),
}
