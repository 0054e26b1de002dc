//! Host-side lookups for one candidate mapping.

use crate::{ConstraintError, ConstraintResult};
use motif_core::{Attributes, Edge, NodeId};
use motif_graph::Graph;
use motif_pattern::Mapping;

/// Resolves motif names to host entities for a single candidate.
///
/// `either_direction` is set when the motif was matched without regard to
/// direction over a directed host; edge lookups then consider both
/// orientations of a node pair.
#[derive(Debug, Clone, Copy)]
pub struct CandidateContext<'a> {
    graph: &'a Graph,
    mapping: &'a Mapping,
    either_direction: bool,
}

impl<'a> CandidateContext<'a> {
    pub fn new(graph: &'a Graph, mapping: &'a Mapping, either_direction: bool) -> Self {
        Self {
            graph,
            mapping,
            either_direction,
        }
    }

    /// Host node assigned to a motif node.
    pub fn host(&self, motif_node: &str) -> ConstraintResult<NodeId> {
        self.mapping
            .get(motif_node)
            .ok_or_else(|| ConstraintError::missing_node(motif_node))
    }

    /// Attribute map of the host node assigned to a motif node.
    pub fn node_attrs(&self, motif_node: &str) -> ConstraintResult<&'a Attributes> {
        let host = self.host(motif_node)?;
        self.graph
            .node_attrs(host)
            .ok_or_else(|| ConstraintError::unknown_host_node(motif_node, host))
    }

    /// Every host edge realizing the motif edge `source -> target`.
    pub fn parallel_edges(&self, source: &str, target: &str) -> ConstraintResult<Vec<&'a Edge>> {
        let from = self.host(source)?;
        let to = self.host(target)?;
        let mut edges: Vec<&'a Edge> = self.graph.edges_between(from, to).collect();
        if self.either_direction && self.graph.is_directed() && from != to {
            edges.extend(self.graph.edges_between(to, from));
        }
        Ok(edges)
    }

    /// Like [`CandidateContext::parallel_edges`], but at least one edge must exist.
    pub fn required_edges(&self, source: &str, target: &str) -> ConstraintResult<Vec<&'a Edge>> {
        let edges = self.parallel_edges(source, target)?;
        if edges.is_empty() {
            return Err(ConstraintError::missing_edge(
                source,
                target,
                self.host(source)?,
                self.host(target)?,
            ));
        }
        Ok(edges)
    }

    /// Whether the host has an edge for the motif pair `source -> target`.
    pub fn has_host_edge(&self, source: &str, target: &str) -> ConstraintResult<bool> {
        let from = self.host(source)?;
        let to = self.host(target)?;
        Ok(if self.either_direction {
            self.graph.has_edge_either_way(from, to)
        } else {
            self.graph.has_edge(from, to)
        })
    }
}
