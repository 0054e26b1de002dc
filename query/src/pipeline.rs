//! Streaming candidate filtering with a result limit.

use crate::QueryResult;
use motif_constraint::{CandidateFilter, Verdict};
use motif_pattern::Mapping;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Cooperative cancellation flag for a running search.
///
/// Clones share the flag, so a token can be handed to another thread and
/// cancelled from there.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the search before its next pull from the oracle.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindStats {
    /// Candidates pulled from the oracle
    pub pulled: usize,
    /// Candidates that passed every check
    pub accepted: usize,
    /// Candidates rejected by some check
    pub rejected: usize,
    /// The limit was reached before the oracle ran dry
    pub limit_reached: bool,
    /// The search was cancelled
    pub cancelled: bool,
}

/// Accepted mappings, in acceptance order, plus counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOutcome {
    pub mappings: Vec<Mapping>,
    pub stats: FindStats,
}

/// Pull candidates one at a time and keep the accepted ones.
///
/// The limit and the cancel token are checked before every pull, so no
/// candidate is requested once either says stop. The token is checked again
/// after each pull; a candidate produced while the search was cancelled is
/// dropped unchecked.
pub(crate) fn collect<I>(
    candidates: I,
    filter: &CandidateFilter<'_>,
    limit: Option<usize>,
    cancel: Option<&CancelToken>,
) -> QueryResult<FindOutcome>
where
    I: IntoIterator<Item = Mapping>,
{
    let mut candidates = candidates.into_iter();
    let mut outcome = FindOutcome::default();

    loop {
        if limit.is_some_and(|k| outcome.mappings.len() >= k) {
            outcome.stats.limit_reached = true;
            break;
        }
        if cancel.is_some_and(|token| token.is_cancelled()) {
            outcome.stats.cancelled = true;
            break;
        }
        let Some(mapping) = candidates.next() else {
            break;
        };
        outcome.stats.pulled += 1;
        if cancel.is_some_and(|token| token.is_cancelled()) {
            outcome.stats.cancelled = true;
            break;
        }

        match filter.check(&mapping)? {
            Verdict::Accept => {
                outcome.stats.accepted += 1;
                outcome.mappings.push(mapping);
            }
            Verdict::Reject(reason) => {
                outcome.stats.rejected += 1;
                trace!(%reason, ?mapping, "candidate rejected");
            }
        }
    }

    let stats = &outcome.stats;
    debug!(
        pulled = stats.pulled,
        accepted = stats.accepted,
        rejected = stats.rejected,
        limit_reached = stats.limit_reached,
        cancelled = stats.cancelled,
        "motif search finished"
    );
    Ok(outcome)
}
