//! Motif Pattern
//!
//! The query side of motif search: what a motif looks like and which
//! attribute conditions its nodes and edges must meet.
//!
//! Responsibilities:
//! - Hold static and dynamic constraint tables keyed by motif node or edge
//! - Build and validate motifs (positive edges, negative edges, automorphisms)
//! - Split a motif into its structural positive-edge pattern
//! - Represent candidate mappings from motif nodes to host nodes

mod constraint;
mod error;
mod mapping;
mod motif;

pub use constraint::{
    AttrConstraints, ConstraintSet, DynamicEdgeConstraints, DynamicNodeConstraints,
    EdgeAttrRef, EdgeConstraints, EdgeKey, NodeAttrRef, NodeConstraints,
};
pub use error::{PatternError, PatternResult};
pub use mapping::Mapping;
pub use motif::{Motif, MotifBuilder, MotifEdge, StructuralPattern};
