//! Motif definitions.
//!
//! A [`Motif`] is the small attributed graph being searched for: a set of
//! named nodes, edges that must or must not exist, constraint tables and
//! symmetry information. Motifs are built once through [`MotifBuilder`] and
//! are read-only afterwards.

use crate::constraint::{
    ConstraintSet, DynamicEdgeConstraints, DynamicNodeConstraints, EdgeAttrRef,
    EdgeConstraints, NodeAttrRef, NodeConstraints,
};
use crate::{PatternError, PatternResult};
use motif_core::{Operator, Value};
use std::collections::BTreeSet;

/// An edge declared by a motif.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifEdge {
    pub source: String,
    pub target: String,
    /// False for edges that must be absent from the host graph.
    pub exists: bool,
}

/// A compiled motif query.
#[derive(Debug, Clone, Default)]
pub struct Motif {
    nodes: BTreeSet<String>,
    edges: Vec<MotifEdge>,
    node_constraints: NodeConstraints,
    edge_constraints: EdgeConstraints,
    dynamic_node_constraints: DynamicNodeConstraints,
    dynamic_edge_constraints: DynamicEdgeConstraints,
    automorphisms: Vec<(String, String)>,
    exclude_automorphisms: bool,
    ignore_direction: bool,
}

impl Motif {
    /// Start building a motif.
    pub fn builder() -> MotifBuilder {
        MotifBuilder::default()
    }

    /// Motif node names in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|s| s.as_str())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All declared edges, positive and negative, in declaration order.
    pub fn edges(&self) -> &[MotifEdge] {
        &self.edges
    }

    /// Edges that must be absent from the host graph.
    pub fn negative_edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edges
            .iter()
            .filter(|e| !e.exists)
            .map(|e| (e.source.as_str(), e.target.as_str()))
    }

    pub fn node_constraints(&self) -> &NodeConstraints {
        &self.node_constraints
    }

    pub fn edge_constraints(&self) -> &EdgeConstraints {
        &self.edge_constraints
    }

    pub fn dynamic_node_constraints(&self) -> &DynamicNodeConstraints {
        &self.dynamic_node_constraints
    }

    pub fn dynamic_edge_constraints(&self) -> &DynamicEdgeConstraints {
        &self.dynamic_edge_constraints
    }

    /// Pairs of interchangeable motif nodes.
    pub fn automorphisms(&self) -> &[(String, String)] {
        &self.automorphisms
    }

    /// Whether to report only one mapping per automorphism class.
    pub fn exclude_automorphisms(&self) -> bool {
        self.exclude_automorphisms
    }

    /// Whether edge direction is ignored when matching.
    pub fn ignore_direction(&self) -> bool {
        self.ignore_direction
    }

    /// Extract the positive-edge structure handed to a match oracle.
    ///
    /// The structure is undirected when the motif ignores direction or the
    /// host graph is undirected.
    pub fn split(&self, host_directed: bool) -> StructuralPattern {
        let directed = host_directed && !self.ignore_direction;
        let mut edges: Vec<(String, String)> = Vec::new();
        for edge in self.edges.iter().filter(|e| e.exists) {
            let pair = (edge.source.clone(), edge.target.clone());
            let duplicate = edges.iter().any(|(s, t)| {
                (s == &pair.0 && t == &pair.1) || (!directed && s == &pair.1 && t == &pair.0)
            });
            if !duplicate {
                edges.push(pair);
            }
        }
        StructuralPattern {
            nodes: self.nodes.iter().cloned().collect(),
            edges,
            directed,
        }
    }

    /// A declared positive edge `source -> target`. Either orientation counts
    /// when direction is ignored.
    fn has_positive_edge(&self, source: &str, target: &str) -> bool {
        self.edges.iter().any(|e| {
            e.exists
                && ((e.source == source && e.target == target)
                    || (self.ignore_direction && e.source == target && e.target == source))
        })
    }
}

/// The structural part of a motif: nodes and positive edges only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralPattern {
    /// Node names in sorted order.
    pub nodes: Vec<String>,
    /// Positive edges without duplicates.
    pub edges: Vec<(String, String)>,
    pub directed: bool,
}

impl StructuralPattern {
    /// Edges between `a` and `b`, oriented as declared.
    pub fn edges_between<'a>(
        &'a self,
        a: &'a str,
        b: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.edges
            .iter()
            .filter(move |(s, t)| (s == a && t == b) || (s == b && t == a))
            .map(|(s, t)| (s.as_str(), t.as_str()))
    }
}

/// Builder for [`Motif`].
#[derive(Debug, Clone, Default)]
pub struct MotifBuilder {
    motif: Motif,
}

impl MotifBuilder {
    /// Declare a node. Nodes named by edges are declared implicitly.
    pub fn node(mut self, name: impl Into<String>) -> Self {
        self.motif.nodes.insert(name.into());
        self
    }

    /// Declare an edge that must exist.
    pub fn edge(self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.push_edge(source.into(), target.into(), true)
    }

    /// Declare an edge that must not exist.
    pub fn no_edge(self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.push_edge(source.into(), target.into(), false)
    }

    fn push_edge(mut self, source: String, target: String, exists: bool) -> Self {
        self.motif.nodes.insert(source.clone());
        self.motif.nodes.insert(target.clone());
        self.motif.edges.push(MotifEdge {
            source,
            target,
            exists,
        });
        self
    }

    /// Require `node.attr <op> value`.
    pub fn node_constraint(
        mut self,
        node: impl Into<String>,
        attr: impl Into<String>,
        op: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.motif
            .node_constraints
            .entry(node.into())
            .or_default()
            .add(attr, op, value.into());
        self
    }

    /// Replace the whole static condition set of a node.
    pub fn node_constraints(mut self, node: impl Into<String>, set: ConstraintSet) -> Self {
        self.motif.node_constraints.insert(node.into(), set);
        self
    }

    /// Require `(source -> target).attr <op> value`.
    pub fn edge_constraint(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        attr: impl Into<String>,
        op: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.motif
            .edge_constraints
            .entry((source.into(), target.into()))
            .or_default()
            .add(attr, op, value.into());
        self
    }

    /// Require `node.attr <op> other.other_attr` within one mapping.
    pub fn dynamic_node_constraint(
        mut self,
        node: impl Into<String>,
        attr: impl Into<String>,
        op: Operator,
        other: NodeAttrRef,
    ) -> Self {
        self.motif
            .dynamic_node_constraints
            .entry(node.into())
            .or_default()
            .add(attr, op, other);
        self
    }

    /// Require `(source -> target).attr <op> other` within one mapping.
    pub fn dynamic_edge_constraint(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        attr: impl Into<String>,
        op: Operator,
        other: EdgeAttrRef,
    ) -> Self {
        self.motif
            .dynamic_edge_constraints
            .entry((source.into(), target.into()))
            .or_default()
            .add(attr, op, other);
        self
    }

    /// Declare two motif nodes interchangeable.
    pub fn automorphism(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.motif.automorphisms.push((a.into(), b.into()));
        self
    }

    pub fn exclude_automorphisms(mut self, exclude: bool) -> Self {
        self.motif.exclude_automorphisms = exclude;
        self
    }

    pub fn ignore_direction(mut self, ignore: bool) -> Self {
        self.motif.ignore_direction = ignore;
        self
    }

    /// Validate cross references and produce the motif.
    pub fn build(self) -> PatternResult<Motif> {
        let motif = self.motif;
        let known = |name: &str, context: &str| -> PatternResult<()> {
            if motif.nodes.contains(name) {
                Ok(())
            } else {
                Err(PatternError::unknown_node(name, context))
            }
        };
        let positive = |source: &str, target: &str, context: &str| -> PatternResult<()> {
            if motif.has_positive_edge(source, target) {
                Ok(())
            } else {
                Err(PatternError::unknown_edge(source, target, context))
            }
        };

        for negative in motif.edges.iter().filter(|e| !e.exists) {
            let clash = motif.edges.iter().any(|e| {
                e.exists && e.source == negative.source && e.target == negative.target
            });
            if clash {
                return Err(PatternError::conflicting_edge(
                    &negative.source,
                    &negative.target,
                ));
            }
        }

        for node in motif.node_constraints.keys() {
            known(node, "a node constraint")?;
        }
        for (source, target) in motif.edge_constraints.keys() {
            positive(source, target, "an edge constraint")?;
        }
        for (node, set) in &motif.dynamic_node_constraints {
            known(node, "a dynamic node constraint")?;
            for (_, _, other) in set.iter() {
                known(&other.node, "a dynamic node constraint")?;
            }
        }
        for ((source, target), set) in &motif.dynamic_edge_constraints {
            positive(source, target, "a dynamic edge constraint")?;
            for (_, _, other) in set.iter() {
                positive(&other.source, &other.target, "a dynamic edge constraint")?;
            }
        }
        for (a, b) in &motif.automorphisms {
            known(a, "an automorphism")?;
            known(b, "an automorphism")?;
        }

        Ok(motif)
    }
}
