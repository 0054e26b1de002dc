//! Motif Query
//!
//! Find motif occurrences in a host graph.
//!
//! Responsibilities:
//! - Hand the structural pattern to a match oracle and stream its candidates
//! - Filter candidates through the constraint checks
//! - Stop pulling candidates once the limit is met or the call is cancelled
//! - Pick the edge quantifier from the host graph kind and configuration

mod config;
mod error;
mod executor;
mod matcher;
mod oracle;
mod pipeline;

pub use config::{EdgeMatchMode, ExecutorConfig};
pub use error::{ConfigError, QueryError, QueryResult};
pub use executor::Executor;
pub use matcher::BacktrackingMatcher;
pub use oracle::{MatchOracle, NodePredicate};
pub use pipeline::{CancelToken, FindOutcome, FindStats};
