//! Symmetry breaking for interchangeable motif nodes.

use crate::{CandidateContext, ConstraintResult};

/// Accept only the canonical representative of an automorphism class.
///
/// For every interchangeable pair `(a, b)` the host node assigned to `a` must
/// not be greater than the one assigned to `b`, under host node id order.
pub fn is_canonical(
    ctx: &CandidateContext<'_>,
    pairs: &[(String, String)],
) -> ConstraintResult<bool> {
    for (a, b) in pairs {
        if ctx.host(a)? > ctx.host(b)? {
            return Ok(false);
        }
    }
    Ok(true)
}
