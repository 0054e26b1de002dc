//! Candidate mappings from motif nodes to host nodes.

use motif_core::NodeId;
use std::collections::BTreeMap;

/// An assignment of host nodes to motif node names.
///
/// Produced by a match oracle; accepted mappings are the results of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    map: BTreeMap<String, NodeId>,
}

impl Mapping {
    /// Create a new empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a host node to a motif node.
    pub fn insert(&mut self, name: impl Into<String>, node: NodeId) {
        self.map.insert(name.into(), node);
    }

    /// Get the host node assigned to a motif node.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.map.get(name).copied()
    }

    /// Check if a motif node is assigned.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Returns true if no two motif nodes share a host node.
    pub fn is_injective(&self) -> bool {
        let mut seen: Vec<NodeId> = self.map.values().copied().collect();
        seen.sort();
        seen.windows(2).all(|w| w[0] != w[1])
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over assignments in motif node order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.map.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, NodeId)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (S, NodeId)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (name, node) in iter {
            mapping.insert(name, node);
        }
        mapping
    }
}
