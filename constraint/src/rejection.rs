//! Why a candidate was rejected.

use std::fmt;

/// The first check a rejected candidate failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The host holds an edge the motif declares absent.
    NegativeEdge,
    /// A static edge condition failed.
    EdgeConstraint,
    /// A cross-edge comparison failed.
    DynamicEdgeConstraint,
    /// A static node condition failed.
    NodeConstraint,
    /// A cross-node comparison failed.
    DynamicNodeConstraint,
    /// The mapping is not the canonical member of its automorphism class.
    Automorphism,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::NegativeEdge => "negative_edge",
            Rejection::EdgeConstraint => "edge_constraint",
            Rejection::DynamicEdgeConstraint => "dynamic_edge_constraint",
            Rejection::NodeConstraint => "node_constraint",
            Rejection::DynamicNodeConstraint => "dynamic_node_constraint",
            Rejection::Automorphism => "automorphism",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Verdict::Accept => None,
            Verdict::Reject(r) => Some(*r),
        }
    }
}
