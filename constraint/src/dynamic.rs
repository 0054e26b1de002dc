//! Dynamic conditions: attribute comparisons between two motif entities of
//! the same candidate.

use crate::check::attr_or_null;
use crate::{CandidateContext, ConstraintResult, EdgeQuantifier};
use motif_pattern::{DynamicEdgeConstraints, DynamicNodeConstraints};
use tracing::trace;

/// Validate `node.attr <op> other.other_attr` conditions.
///
/// Both attributes must be present; a missing one rejects the candidate.
pub fn validate_dynamic_node_constraints(
    ctx: &CandidateContext<'_>,
    constraints: &DynamicNodeConstraints,
) -> ConstraintResult<bool> {
    for (motif_node, set) in constraints {
        let this_attrs = ctx.node_attrs(motif_node)?;
        for (attr, op, other) in set.iter() {
            let that_attrs = ctx.node_attrs(&other.node)?;
            let (Some(left), Some(right)) = (this_attrs.get(attr), that_attrs.get(&other.attr))
            else {
                trace!(node = %motif_node, %attr, other = %other.node, "dynamic condition on missing attribute");
                return Ok(false);
            };
            if !op.apply(left, right) {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Validate `edge.attr <op> other_edge.other_attr` conditions.
///
/// Missing edge attributes compare as null. Over parallel edges the
/// comparison is quantified like static edge conditions: under
/// [`EdgeQuantifier::All`] every pairing of the two bundles must hold, under
/// [`EdgeQuantifier::Any`] one pairing is enough, and
/// [`EdgeQuantifier::Single`] compares the one edge of each pair.
pub fn validate_dynamic_edge_constraints(
    ctx: &CandidateContext<'_>,
    constraints: &DynamicEdgeConstraints,
    quantifier: EdgeQuantifier,
) -> ConstraintResult<bool> {
    for ((source, target), set) in constraints {
        let this_edges = ctx.required_edges(source, target)?;
        for (attr, op, other) in set.iter() {
            let that_edges = ctx.required_edges(&other.source, &other.target)?;
            let holds = |i: usize, j: usize| {
                op.apply(
                    attr_or_null(&this_edges[i].attributes, attr),
                    attr_or_null(&that_edges[j].attributes, &other.attr),
                )
            };
            let mut pairs = (0..this_edges.len())
                .flat_map(|i| (0..that_edges.len()).map(move |j| (i, j)));
            let ok = match quantifier {
                EdgeQuantifier::Single => holds(0, 0),
                EdgeQuantifier::All => pairs.all(|(i, j)| holds(i, j)),
                EdgeQuantifier::Any => pairs.any(|(i, j)| holds(i, j)),
            };
            if !ok {
                return Ok(false);
            }
        }
    }
    Ok(true)
}
