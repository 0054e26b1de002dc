//! Edge conditions over parallel edges.
//!
//! In a multigraph a motif edge is realized by every host edge between the
//! mapped node pair. Two quantifiers decide whether that bundle satisfies a
//! condition set:
//!
//! - all: every parallel edge satisfies the whole set on its own.
//! - any: every triple of the set is covered by some parallel edge.
//!
//! The any-quantifier is a greedy cover. Edges are scanned in host order and
//! each one consumes all outstanding triples it satisfies; no search over
//! alternative assignments is made.

use crate::check::{attr_or_null, satisfies};
use crate::{CandidateContext, ConstraintResult};
use motif_core::{Attributes, Operator, Value};
use motif_pattern::{ConstraintSet, EdgeConstraints};
use tracing::trace;

/// One (attribute, operator, operand) requirement.
pub type Triple<'a> = (&'a str, Operator, &'a Value);

/// The outstanding requirements of a condition set during an any-cover.
///
/// Built fresh from an immutable [`ConstraintSet`] for each node pair.
#[derive(Debug, Clone)]
pub struct ConstraintMultiset<'a> {
    outstanding: Vec<Triple<'a>>,
}

impl<'a> ConstraintMultiset<'a> {
    pub fn new(template: &'a ConstraintSet) -> Self {
        Self {
            outstanding: template.iter().collect(),
        }
    }

    /// Drop every outstanding triple that `attributes` satisfies. Returns how
    /// many were dropped.
    pub fn consume(&mut self, attributes: &Attributes) -> usize {
        let before = self.outstanding.len();
        self.outstanding
            .retain(|(attr, op, value)| !op.apply(attr_or_null(attributes, attr), value));
        before - self.outstanding.len()
    }

    pub fn len(&self) -> usize {
        self.outstanding.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outstanding.is_empty()
    }
}

/// Every parallel edge must satisfy the full condition set.
pub fn validate_all_edge_constraints(
    ctx: &CandidateContext<'_>,
    constraints: &EdgeConstraints,
) -> ConstraintResult<bool> {
    for ((source, target), set) in constraints {
        for edge in ctx.required_edges(source, target)? {
            if !satisfies(&edge.attributes, set) {
                trace!(%source, %target, edge = %edge.id, "parallel edge fails all-quantified conditions");
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// The parallel edges together must cover every triple of the condition set.
pub fn validate_any_edge_constraints(
    ctx: &CandidateContext<'_>,
    constraints: &EdgeConstraints,
) -> ConstraintResult<bool> {
    for ((source, target), set) in constraints {
        let mut remaining = ConstraintMultiset::new(set);
        for edge in ctx.required_edges(source, target)? {
            if remaining.is_empty() {
                break;
            }
            remaining.consume(&edge.attributes);
        }
        if !remaining.is_empty() {
            trace!(%source, %target, uncovered = remaining.len(), "parallel edges leave conditions uncovered");
            return Ok(false);
        }
    }
    Ok(true)
}
