//! Motif Graph Storage
//!
//! This crate provides the host graph that motifs are searched in:
//! - Node and edge storage with attribute maps
//! - Simple or multi-edge graphs, directed or undirected
//! - Adjacency index: Find the parallel edges between a node pair

mod graph;
mod index;

pub use graph::*;
