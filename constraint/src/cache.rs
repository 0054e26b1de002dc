//! Memoized static node checks.

use crate::check::satisfies;
use crate::{CandidateContext, ConstraintResult};
use motif_core::NodeId;
use motif_graph::Graph;
use motif_pattern::NodeConstraints;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Per-search cache of `(motif node, host node) -> satisfies node conditions`.
///
/// Owned by one search and dropped with it. Attributes are read-only for
/// the lifetime of the cache, so each entry is computed at most once.
#[derive(Debug)]
pub struct NodeMatchCache<'a> {
    graph: &'a Graph,
    constraints: &'a NodeConstraints,
    memo: RefCell<HashMap<String, HashMap<NodeId, bool>>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl<'a> NodeMatchCache<'a> {
    pub fn new(graph: &'a Graph, constraints: &'a NodeConstraints) -> Self {
        Self {
            graph,
            constraints,
            memo: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Whether `host` may stand in for `motif_node`.
    ///
    /// Unconstrained motif nodes accept every host node that exists.
    pub fn accepts(&self, motif_node: &str, host: NodeId) -> bool {
        let Some(set) = self.constraints.get(motif_node) else {
            return self.graph.contains_node(host);
        };
        if let Some(&cached) = self
            .memo
            .borrow()
            .get(motif_node)
            .and_then(|row| row.get(&host))
        {
            self.hits.set(self.hits.get() + 1);
            return cached;
        }

        self.misses.set(self.misses.get() + 1);
        let verdict = self
            .graph
            .node_attrs(host)
            .map(|attrs| satisfies(attrs, set))
            .unwrap_or(false);
        self.memo
            .borrow_mut()
            .entry(motif_node.to_string())
            .or_default()
            .insert(host, verdict);
        verdict
    }

    /// Validate every constrained motif node of a candidate through the cache.
    ///
    /// Host nodes the oracle already screened with [`NodeMatchCache::accepts`]
    /// are answered from the memo.
    pub fn validate(&self, ctx: &CandidateContext<'_>) -> ConstraintResult<bool> {
        for motif_node in self.constraints.keys() {
            // Resolves the host and errors if it is not in the graph.
            ctx.node_attrs(motif_node)?;
            if !self.accepts(motif_node, ctx.host(motif_node)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Lookups that evaluated the conditions.
    pub fn misses(&self) -> usize {
        self.misses.get()
    }
}
