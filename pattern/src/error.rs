//! Pattern error types.

use thiserror::Error;

/// Errors that can occur while building a motif.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A constraint or automorphism names a node the motif does not have.
    #[error("Unknown motif node '{name}' referenced by {context}")]
    UnknownNode { name: String, context: String },

    /// A constraint names a node pair that is not a positive motif edge.
    #[error("No positive motif edge '{source_node}' -> '{target_node}' for {context}")]
    UnknownEdge {
        source_node: String,
        target_node: String,
        context: String,
    },

    /// The same pair was declared both present and absent.
    #[error("Edge '{source_node}' -> '{target_node}' is declared both present and absent")]
    ConflictingEdge {
        source_node: String,
        target_node: String,
    },
}

impl PatternError {
    pub fn unknown_node(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownNode {
            name: name.into(),
            context: context.into(),
        }
    }

    pub fn unknown_edge(
        source_node: impl Into<String>,
        target_node: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::UnknownEdge {
            source_node: source_node.into(),
            target_node: target_node.into(),
            context: context.into(),
        }
    }

    pub fn conflicting_edge(
        source_node: impl Into<String>,
        target_node: impl Into<String>,
    ) -> Self {
        Self::ConflictingEdge {
            source_node: source_node.into(),
            target_node: target_node.into(),
        }
    }
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
