//! Motif search execution.

use motif_constraint::{CandidateFilter, EdgeQuantifier, NodeMatchCache};
use motif_core::NodeId;
use motif_graph::Graph;
use motif_pattern::{Mapping, Motif};
use tracing::debug;

use crate::config::{EdgeMatchMode, ExecutorConfig};
use crate::matcher::BacktrackingMatcher;
use crate::oracle::MatchOracle;
use crate::pipeline::{self, CancelToken, FindOutcome};
use crate::QueryResult;

/// Finds occurrences of motifs in one host graph.
///
/// The host graph is borrowed read-only for the executor's lifetime. Each
/// call builds its own node-match cache and drops it on return.
pub struct Executor<'g, O = BacktrackingMatcher> {
    graph: &'g Graph,
    config: ExecutorConfig,
    oracle: O,
}

impl<'g> Executor<'g> {
    /// Create an executor with the default config and the backtracking oracle.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_config(graph, ExecutorConfig::default())
    }

    pub fn with_config(graph: &'g Graph, config: ExecutorConfig) -> Self {
        Self {
            graph,
            config,
            oracle: BacktrackingMatcher,
        }
    }

    /// Create an executor whose edge match mode is given by name (`"all"` or
    /// `"any"`).
    pub fn with_edge_match_mode(graph: &'g Graph, mode: &str) -> QueryResult<Self> {
        let config = ExecutorConfig::new().with_edge_match(mode.parse()?);
        Ok(Self::with_config(graph, config))
    }
}

impl<'g, O: MatchOracle> Executor<'g, O> {
    /// Replace the match oracle.
    pub fn with_oracle<P: MatchOracle>(self, oracle: P) -> Executor<'g, P> {
        Executor {
            graph: self.graph,
            config: self.config,
            oracle,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// The edge quantifier used for this host graph.
    pub fn quantifier(&self) -> EdgeQuantifier {
        if !self.graph.is_multigraph() {
            return EdgeQuantifier::Single;
        }
        match self.config.edge_match {
            EdgeMatchMode::All => EdgeQuantifier::All,
            EdgeMatchMode::Any => EdgeQuantifier::Any,
        }
    }

    /// Accepted mappings in the order the oracle produced them.
    pub fn find(&self, motif: &Motif, limit: Option<usize>) -> QueryResult<Vec<Mapping>> {
        Ok(self.find_outcome(motif, limit, None)?.mappings)
    }

    /// Like [`Executor::find`], stopping early once `cancel` is set.
    pub fn find_with_cancel(
        &self,
        motif: &Motif,
        limit: Option<usize>,
        cancel: &CancelToken,
    ) -> QueryResult<Vec<Mapping>> {
        Ok(self.find_outcome(motif, limit, Some(cancel))?.mappings)
    }

    /// Number of mappings [`Executor::find`] returns for the same arguments.
    pub fn count(&self, motif: &Motif, limit: Option<usize>) -> QueryResult<usize> {
        Ok(self.find(motif, limit)?.len())
    }

    /// Run a search and report its counters along with the mappings.
    pub fn find_outcome(
        &self,
        motif: &Motif,
        limit: Option<usize>,
        cancel: Option<&CancelToken>,
    ) -> QueryResult<FindOutcome> {
        let structure = motif.split(self.graph.is_directed());
        let pruning = self.config.oracle_pruning;
        let cache = NodeMatchCache::new(self.graph, motif.node_constraints());
        let node_ok = |name: &str, host: NodeId| !pruning || cache.accepts(name, host);

        let filter =
            CandidateFilter::new(self.graph, motif, self.quantifier()).with_node_cache(&cache);
        debug!(
            nodes = motif.node_count(),
            edges = structure.edges.len(),
            quantifier = ?filter.quantifier(),
            ?limit,
            "starting motif search"
        );

        let candidates = self.oracle.candidates(&structure, self.graph, &node_ok);
        let outcome = pipeline::collect(candidates, &filter, limit, cancel)?;
        debug!(
            cache_hits = cache.hits(),
            cache_misses = cache.misses(),
            "node-match cache"
        );
        Ok(outcome)
    }
}
