//! Backtracking subgraph monomorphism search.
//!
//! Pattern nodes are assigned in name order and host nodes are tried in id
//! order, so the candidate sequence is deterministic. The search keeps its
//! state on an explicit stack and yields one mapping per `next()` call.

use crate::{MatchOracle, NodePredicate};
use motif_core::NodeId;
use motif_graph::Graph;
use motif_pattern::{Mapping, StructuralPattern};
use std::collections::HashSet;

/// Reference [`MatchOracle`] enumerating non-induced embeddings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackingMatcher;

impl BacktrackingMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl MatchOracle for BacktrackingMatcher {
    fn candidates<'a>(
        &'a self,
        pattern: &'a StructuralPattern,
        graph: &'a Graph,
        node_ok: &'a NodePredicate<'a>,
    ) -> Box<dyn Iterator<Item = Mapping> + 'a> {
        Box::new(Embeddings::new(pattern, graph, node_ok))
    }
}

/// Lazy embedding iterator.
struct Embeddings<'a> {
    pattern: &'a StructuralPattern,
    graph: &'a Graph,
    node_ok: &'a NodePredicate<'a>,
    hosts: Vec<NodeId>,
    /// Host assigned to each pattern node, by depth.
    assigned: Vec<NodeId>,
    /// Next host index to try at each depth.
    cursor: Vec<usize>,
    used: HashSet<NodeId>,
    done: bool,
}

impl<'a> Embeddings<'a> {
    fn new(
        pattern: &'a StructuralPattern,
        graph: &'a Graph,
        node_ok: &'a NodePredicate<'a>,
    ) -> Self {
        let depth = pattern.nodes.len();
        Self {
            pattern,
            graph,
            node_ok,
            hosts: graph.node_ids().collect(),
            assigned: Vec::with_capacity(depth),
            cursor: vec![0; depth],
            used: HashSet::new(),
            // An empty pattern has no embeddings.
            done: depth == 0,
        }
    }

    /// Can `host` be assigned to the pattern node at `depth`?
    fn feasible(&self, depth: usize, host: NodeId) -> bool {
        if self.used.contains(&host) {
            return false;
        }
        let name = self.pattern.nodes[depth].as_str();
        if !(self.node_ok)(name, host) {
            return false;
        }
        (0..=depth).all(|earlier| {
            let other = self.pattern.nodes[earlier].as_str();
            let host_of = |n: &str| {
                if n == name {
                    host
                } else {
                    self.assigned[earlier]
                }
            };
            self.pattern
                .edges_between(name, other)
                .all(|(s, t)| self.host_has_edge(host_of(s), host_of(t)))
        })
    }

    fn host_has_edge(&self, from: NodeId, to: NodeId) -> bool {
        if self.pattern.directed {
            self.graph.has_edge(from, to)
        } else {
            self.graph.has_edge_either_way(from, to)
        }
    }

    fn current_mapping(&self) -> Mapping {
        self.pattern
            .nodes
            .iter()
            .zip(self.assigned.iter().copied())
            .collect()
    }
}

impl Iterator for Embeddings<'_> {
    type Item = Mapping;

    fn next(&mut self) -> Option<Mapping> {
        if self.done {
            return None;
        }
        let size = self.pattern.nodes.len();
        loop {
            let depth = self.assigned.len();
            let start = self.cursor[depth];
            let found = (start..self.hosts.len()).find(|&i| self.feasible(depth, self.hosts[i]));

            match found {
                Some(i) => {
                    let host = self.hosts[i];
                    self.cursor[depth] = i + 1;
                    self.assigned.push(host);
                    self.used.insert(host);
                    if self.assigned.len() == size {
                        let mapping = self.current_mapping();
                        self.assigned.pop();
                        self.used.remove(&host);
                        return Some(mapping);
                    }
                    self.cursor[depth + 1] = 0;
                }
                None => {
                    let Some(host) = self.assigned.pop() else {
                        self.done = true;
                        return None;
                    };
                    self.used.remove(&host);
                }
            }
        }
    }
}
