//! Motif Constraint
//!
//! Decide whether a candidate mapping is a real motif occurrence.
//!
//! Responsibilities:
//! - Check static node and edge attribute conditions
//! - Quantify edge conditions over parallel edges (all / any)
//! - Compare attributes across motif entities (dynamic conditions)
//! - Reject mappings that hit a must-not-exist edge
//! - Keep one mapping per automorphism class
//! - Report why a candidate was rejected

mod automorphism;
mod cache;
mod check;
mod context;
mod dynamic;
mod error;
mod filter;
mod multigraph;
mod negative;
mod rejection;

pub use automorphism::is_canonical;
pub use cache::NodeMatchCache;
pub use check::{satisfies, validate_edge_constraints, validate_node_constraints};
pub use context::CandidateContext;
pub use dynamic::{validate_dynamic_edge_constraints, validate_dynamic_node_constraints};
pub use error::{ConstraintError, ConstraintResult};
pub use filter::{CandidateFilter, EdgeQuantifier};
pub use multigraph::{
    validate_all_edge_constraints, validate_any_edge_constraints, ConstraintMultiset, Triple,
};
pub use negative::has_no_negative_edges;
pub use rejection::{Rejection, Verdict};
