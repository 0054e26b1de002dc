//! The structural matching seam.

use motif_core::NodeId;
use motif_graph::Graph;
use motif_pattern::{Mapping, StructuralPattern};

/// Acceptance test for `(motif node, host node)` assignments.
pub type NodePredicate<'a> = dyn Fn(&str, NodeId) -> bool + 'a;

/// Enumerates structural candidates for a positive-edge pattern.
///
/// Implementations must be lazy: the executor pulls one candidate at a time
/// and may stop at any point. Each candidate maps every pattern node to a
/// distinct host node. The order must be stable for a given pattern, host
/// and oracle so that results are reproducible.
pub trait MatchOracle {
    fn candidates<'a>(
        &'a self,
        pattern: &'a StructuralPattern,
        graph: &'a Graph,
        node_ok: &'a NodePredicate<'a>,
    ) -> Box<dyn Iterator<Item = Mapping> + 'a>;
}

impl<T: MatchOracle + ?Sized> MatchOracle for &T {
    fn candidates<'a>(
        &'a self,
        pattern: &'a StructuralPattern,
        graph: &'a Graph,
        node_ok: &'a NodePredicate<'a>,
    ) -> Box<dyn Iterator<Item = Mapping> + 'a> {
        (**self).candidates(pattern, graph, node_ok)
    }
}
