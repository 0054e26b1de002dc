//! Entity structures for motif.
//!
//! Nodes and edges are the two entity kinds of a host graph. Both carry an
//! attribute map that constraints are evaluated against.

use crate::{Attributes, EdgeId, NodeId};

/// A node in the host graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// Attribute values.
    pub attributes: Attributes,
}

impl Node {
    /// Create a new node with the given attributes.
    pub fn new(id: NodeId, attributes: Attributes) -> Self {
        Self { id, attributes }
    }
}

/// A binary edge in the host graph.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// Tail of the edge (the only meaningful end order in directed graphs).
    pub source: NodeId,
    /// Head of the edge.
    pub target: NodeId,
    /// Attribute values.
    pub attributes: Attributes,
}

impl Edge {
    /// Create a new edge with the given properties.
    pub fn new(id: EdgeId, source: NodeId, target: NodeId, attributes: Attributes) -> Self {
        Self {
            id,
            source,
            target,
            attributes,
        }
    }
}
