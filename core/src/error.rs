//! Common error types for motif.

use crate::NodeId;
use thiserror::Error;

/// Errors that can occur during graph construction.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// A simple graph already holds an edge between these nodes.
    #[error("Duplicate edge {from} -> {to} in a simple graph")]
    DuplicateEdge { from: NodeId, to: NodeId },
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors produced when resolving operator symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperatorError {
    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),
}
