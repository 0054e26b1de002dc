//! Static attribute checks for single nodes and edges.

use crate::{CandidateContext, ConstraintResult};
use motif_core::{Attributes, Value};
use motif_pattern::{ConstraintSet, EdgeConstraints, NodeConstraints};

/// Absent attributes compare as null.
pub(crate) static NULL: Value = Value::Null;

/// Read an attribute, treating absence as [`Value::Null`].
pub(crate) fn attr_or_null<'a>(attributes: &'a Attributes, attr: &str) -> &'a Value {
    attributes.get(attr).unwrap_or(&NULL)
}

/// Check one attribute map against every triple of a condition set.
///
/// Fails on the first unmet triple, in the set's iteration order.
pub fn satisfies(attributes: &Attributes, constraints: &ConstraintSet) -> bool {
    constraints
        .iter()
        .all(|(attr, op, value)| op.apply(attr_or_null(attributes, attr), value))
}

/// Validate static node conditions for every constrained motif node.
pub fn validate_node_constraints(
    ctx: &CandidateContext<'_>,
    constraints: &NodeConstraints,
) -> ConstraintResult<bool> {
    for (motif_node, set) in constraints {
        if !satisfies(ctx.node_attrs(motif_node)?, set) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Validate static edge conditions in a simple host graph.
///
/// Each constrained motif edge is realized by exactly one host edge.
pub fn validate_edge_constraints(
    ctx: &CandidateContext<'_>,
    constraints: &EdgeConstraints,
) -> ConstraintResult<bool> {
    for ((source, target), set) in constraints {
        let edges = ctx.required_edges(source, target)?;
        if !satisfies(&edges[0].attributes, set) {
            return Ok(false);
        }
    }
    Ok(true)
}
