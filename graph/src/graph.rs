//! Core graph storage implementation.

use crate::index::AdjacencyIndex;
use motif_core::{Attributes, Edge, EdgeId, GraphError, GraphResult, Node, NodeId};
use std::collections::BTreeMap;

/// ID allocator for nodes and edges.
#[derive(Debug)]
struct IdAllocator {
    next_node_id: u64,
    next_edge_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_node_id: 1,
            next_edge_id: 1,
        }
    }

    fn alloc_node_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_node_id);
        self.next_node_id += 1;
        id
    }

    fn alloc_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }
}

/// The in-memory host graph.
///
/// A graph is fixed at construction to be directed or undirected and to
/// allow parallel edges or not. Node iteration is in ascending id order.
#[derive(Debug)]
pub struct Graph {
    directed: bool,
    multi: bool,
    /// Node storage
    nodes: BTreeMap<NodeId, Node>,
    /// Edge storage
    edges: BTreeMap<EdgeId, Edge>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Adjacency index
    adj_index: AdjacencyIndex,
}

impl Graph {
    fn with_kind(directed: bool, multi: bool) -> Self {
        Self {
            directed,
            multi,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            id_alloc: IdAllocator::new(),
            adj_index: AdjacencyIndex::new(),
        }
    }

    /// Create an empty directed graph with at most one edge per ordered pair.
    pub fn directed() -> Self {
        Self::with_kind(true, false)
    }

    /// Create an empty undirected graph with at most one edge per pair.
    pub fn undirected() -> Self {
        Self::with_kind(false, false)
    }

    /// Create an empty directed multigraph.
    pub fn directed_multi() -> Self {
        Self::with_kind(true, true)
    }

    /// Create an empty undirected multigraph.
    pub fn undirected_multi() -> Self {
        Self::with_kind(false, true)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_multigraph(&self) -> bool {
        self.multi
    }

    // ==================== Node Operations ====================

    /// Create a new node with the given attributes.
    pub fn add_node(&mut self, attributes: Attributes) -> NodeId {
        let id = self.id_alloc.alloc_node_id();
        self.nodes.insert(id, Node::new(id, attributes));
        id
    }

    /// Get the attribute map of a node.
    pub fn node_attrs(&self, id: NodeId) -> Option<&Attributes> {
        self.nodes.get(&id).map(|n| &n.attributes)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    // ==================== Edge Operations ====================

    /// Create a new edge between two existing nodes.
    ///
    /// Simple graphs reject a second edge between the same pair (ordered
    /// pair when directed).
    pub fn add_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        attributes: Attributes,
    ) -> GraphResult<EdgeId> {
        for node_id in [source, target] {
            if !self.nodes.contains_key(&node_id) {
                return Err(GraphError::NodeNotFound(node_id));
            }
        }

        let key = self.pair_key(source, target);
        if !self.multi && self.adj_index.contains(key) {
            return Err(GraphError::DuplicateEdge {
                from: source,
                to: target,
            });
        }

        let id = self.id_alloc.alloc_edge_id();
        self.adj_index.insert(key, id);
        self.edges.insert(id, Edge::new(id, source, target, attributes));
        Ok(id)
    }

    /// Check for an edge from `source` to `target`.
    ///
    /// Direction matters only in directed graphs.
    pub fn has_edge(&self, source: NodeId, target: NodeId) -> bool {
        self.adj_index.contains(self.pair_key(source, target))
    }

    /// Check for an edge between two nodes in either direction.
    pub fn has_edge_either_way(&self, a: NodeId, b: NodeId) -> bool {
        self.has_edge(a, b) || self.has_edge(b, a)
    }

    /// All parallel edges from `source` to `target`, in creation order.
    pub fn edges_between(
        &self,
        source: NodeId,
        target: NodeId,
    ) -> impl Iterator<Item = &Edge> + '_ {
        self.adj_index
            .get(self.pair_key(source, target))
            .iter()
            .filter_map(|id| self.edges.get(id))
    }

    /// Normalize a node pair into an adjacency key.
    fn pair_key(&self, source: NodeId, target: NodeId) -> (NodeId, NodeId) {
        if self.directed || source <= target {
            (source, target)
        } else {
            (target, source)
        }
    }
}
