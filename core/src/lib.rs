//! Motif Core Types
//!
//! This crate provides the foundational types used throughout the motif system:
//! - Identity types (NodeId, EdgeId)
//! - Value types (the Value enum with scalar and list values)
//! - Comparison operators used by attribute constraints
//! - Entity structures (Node, Edge)
//! - Common error types

mod entity;
mod error;
mod id;
mod operator;
mod value;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use operator::*;
pub use value::*;
