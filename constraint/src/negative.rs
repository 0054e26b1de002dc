//! Must-not-exist edges.

use crate::{CandidateContext, ConstraintResult};

/// Reject a candidate whose host graph holds any of the motif's negative edges.
pub fn has_no_negative_edges<'n>(
    ctx: &CandidateContext<'_>,
    negative_edges: impl IntoIterator<Item = (&'n str, &'n str)>,
) -> ConstraintResult<bool> {
    for (source, target) in negative_edges {
        if ctx.has_host_edge(source, target)? {
            return Ok(false);
        }
    }
    Ok(true)
}
