//! Constraint error types.
//!
//! Attribute-level mismatches are never errors; they simply reject the
//! candidate. The variants here mean the match oracle produced a mapping
//! that breaks its contract.

use motif_core::NodeId;
use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur during constraint checking.
#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("Mapping has no host node for motif node '{node}'")]
    MissingNode { node: String },

    #[error("Host node {host} assigned to motif node '{node}' is not in the graph")]
    UnknownHostNode { node: String, host: NodeId },

    #[error("No host edge {from} -> {to} for motif edge '{source_node}' -> '{target_node}'")]
    MissingEdge {
        source_node: String,
        target_node: String,
        from: NodeId,
        to: NodeId,
    },

    #[error("Mapping assigns host node {host} to more than one motif node")]
    NonInjective { host: NodeId },
}

impl ConstraintError {
    pub fn missing_node(node: impl Into<String>) -> Self {
        Self::MissingNode { node: node.into() }
    }

    pub fn unknown_host_node(node: impl Into<String>, host: NodeId) -> Self {
        Self::UnknownHostNode {
            node: node.into(),
            host,
        }
    }

    pub fn missing_edge(
        source_node: impl Into<String>,
        target_node: impl Into<String>,
        from: NodeId,
        to: NodeId,
    ) -> Self {
        Self::MissingEdge {
            source_node: source_node.into(),
            target_node: target_node.into(),
            from,
            to,
        }
    }

    pub fn non_injective(host: NodeId) -> Self {
        Self::NonInjective { host }
    }
}
