//! The composed per-candidate predicate.

use crate::{
    has_no_negative_edges, is_canonical, validate_all_edge_constraints,
    validate_any_edge_constraints, validate_dynamic_edge_constraints,
    validate_dynamic_node_constraints, validate_edge_constraints, validate_node_constraints,
    CandidateContext, ConstraintError, ConstraintResult, NodeMatchCache, Rejection, Verdict,
};
use motif_graph::Graph;
use motif_pattern::{Mapping, Motif};

/// How static edge conditions are checked against the host edges of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeQuantifier {
    /// Simple host graph: exactly one edge per pair.
    Single,
    /// Multigraph: every parallel edge must satisfy all conditions.
    All,
    /// Multigraph: the parallel edges together must cover all conditions.
    Any,
}

/// Checks candidate mappings of one motif against one host graph.
///
/// Checks run in a fixed order and stop at the first failure: negative
/// edges, edge conditions, dynamic edge conditions, node conditions, dynamic
/// node conditions, automorphism order.
#[derive(Debug, Clone)]
pub struct CandidateFilter<'a> {
    graph: &'a Graph,
    motif: &'a Motif,
    quantifier: EdgeQuantifier,
    either_direction: bool,
    node_cache: Option<&'a NodeMatchCache<'a>>,
}

impl<'a> CandidateFilter<'a> {
    pub fn new(graph: &'a Graph, motif: &'a Motif, quantifier: EdgeQuantifier) -> Self {
        Self {
            graph,
            motif,
            quantifier,
            either_direction: motif.ignore_direction() && graph.is_directed(),
            node_cache: None,
        }
    }

    /// Answer node conditions from `cache`, shared with the oracle's node
    /// predicate.
    pub fn with_node_cache(mut self, cache: &'a NodeMatchCache<'a>) -> Self {
        self.node_cache = Some(cache);
        self
    }

    pub fn quantifier(&self) -> EdgeQuantifier {
        self.quantifier
    }

    /// Check one candidate.
    ///
    /// Errors only when the mapping does not fit the motif or the host
    /// graph; attribute mismatches yield [`Verdict::Reject`].
    pub fn check(&self, mapping: &Mapping) -> ConstraintResult<Verdict> {
        self.check_shape(mapping)?;
        let ctx = CandidateContext::new(self.graph, mapping, self.either_direction);
        let motif = self.motif;

        if !has_no_negative_edges(&ctx, motif.negative_edges())? {
            return Ok(Verdict::Reject(Rejection::NegativeEdge));
        }

        let edges_ok = match self.quantifier {
            EdgeQuantifier::Single => validate_edge_constraints(&ctx, motif.edge_constraints())?,
            EdgeQuantifier::All => validate_all_edge_constraints(&ctx, motif.edge_constraints())?,
            EdgeQuantifier::Any => validate_any_edge_constraints(&ctx, motif.edge_constraints())?,
        };
        if !edges_ok {
            return Ok(Verdict::Reject(Rejection::EdgeConstraint));
        }

        if !validate_dynamic_edge_constraints(
            &ctx,
            motif.dynamic_edge_constraints(),
            self.quantifier,
        )? {
            return Ok(Verdict::Reject(Rejection::DynamicEdgeConstraint));
        }

        let nodes_ok = match self.node_cache {
            Some(cache) => cache.validate(&ctx)?,
            None => validate_node_constraints(&ctx, motif.node_constraints())?,
        };
        if !nodes_ok {
            return Ok(Verdict::Reject(Rejection::NodeConstraint));
        }

        if !validate_dynamic_node_constraints(&ctx, motif.dynamic_node_constraints())? {
            return Ok(Verdict::Reject(Rejection::DynamicNodeConstraint));
        }

        if motif.exclude_automorphisms() && !is_canonical(&ctx, motif.automorphisms())? {
            return Ok(Verdict::Reject(Rejection::Automorphism));
        }

        Ok(Verdict::Accept)
    }

    /// Every motif node is mapped, to a distinct host node.
    fn check_shape(&self, mapping: &Mapping) -> ConstraintResult<()> {
        for node in self.motif.nodes() {
            if !mapping.contains(node) {
                return Err(ConstraintError::missing_node(node));
            }
        }
        if !mapping.is_injective() {
            let mut hosts: Vec<_> = mapping.iter().map(|(_, host)| host).collect();
            hosts.sort();
            if let Some(w) = hosts.windows(2).find(|w| w[0] == w[1]) {
                return Err(ConstraintError::non_injective(w[0]));
            }
        }
        Ok(())
    }
}
