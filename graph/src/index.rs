//! Indexes for efficient graph lookups.

use motif_core::{EdgeId, NodeId};
use std::collections::HashMap;

/// Adjacency index: (NodeId, NodeId) -> [EdgeId]
///
/// Keys are supplied already normalized by the graph, so the index itself is
/// direction-agnostic. Edge lists keep insertion order.
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    pairs: HashMap<(NodeId, NodeId), Vec<EdgeId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: (NodeId, NodeId), edge_id: EdgeId) {
        self.pairs.entry(key).or_default().push(edge_id);
    }

    /// Get the edges stored under a key.
    pub fn get(&self, key: (NodeId, NodeId)) -> &[EdgeId] {
        self.pairs.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, key: (NodeId, NodeId)) -> bool {
        self.pairs.get(&key).map(|v| !v.is_empty()).unwrap_or(false)
    }
}
