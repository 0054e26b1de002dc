//! Constraint tables attached to motif nodes and edges.

use motif_core::{Operator, Value};
use std::collections::BTreeMap;

/// A motif edge, named by its two endpoint motif nodes.
pub type EdgeKey = (String, String);

/// Attribute conditions for one entity: attribute -> operator -> operands.
///
/// Every (attribute, operator, operand) triple must hold on its own, so
/// repeating an operand list entry is a conjunction. Iteration is ordered by
/// attribute then operator, then operand insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrConstraints<T> {
    entries: BTreeMap<String, BTreeMap<Operator, Vec<T>>>,
}

/// Static conditions: attributes compared against literal values.
pub type ConstraintSet = AttrConstraints<Value>;

impl<T> Default for AttrConstraints<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> AttrConstraints<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one (attribute, operator, operand) triple.
    pub fn add(&mut self, attr: impl Into<String>, op: Operator, operand: T) {
        self.entries
            .entry(attr.into())
            .or_default()
            .entry(op)
            .or_default()
            .push(operand);
    }

    /// Builder-style [`AttrConstraints::add`].
    pub fn with(mut self, attr: impl Into<String>, op: Operator, operand: T) -> Self {
        self.add(attr, op, operand);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(|ops| ops.values())
            .map(Vec::len)
            .sum()
    }

    /// Iterate over every triple in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Operator, &T)> {
        self.entries.iter().flat_map(|(attr, ops)| {
            ops.iter().flat_map(move |(op, operands)| {
                operands.iter().map(move |operand| (attr.as_str(), *op, operand))
            })
        })
    }

    /// Attributes that carry at least one condition.
    pub fn attrs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }
}

/// Reference to an attribute of another motif node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAttrRef {
    pub node: String,
    pub attr: String,
}

impl NodeAttrRef {
    pub fn new(node: impl Into<String>, attr: impl Into<String>) -> Self {
        Self {
            node: node.into(),
            attr: attr.into(),
        }
    }
}

/// Reference to an attribute of another motif edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeAttrRef {
    pub source: String,
    pub target: String,
    pub attr: String,
}

impl EdgeAttrRef {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        attr: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attr: attr.into(),
        }
    }

    pub fn edge(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }
}

/// Static node conditions keyed by motif node.
pub type NodeConstraints = BTreeMap<String, ConstraintSet>;

/// Static edge conditions keyed by motif edge.
pub type EdgeConstraints = BTreeMap<EdgeKey, ConstraintSet>;

/// Cross-node conditions keyed by the motif node whose attribute is on the left.
pub type DynamicNodeConstraints = BTreeMap<String, AttrConstraints<NodeAttrRef>>;

/// Cross-edge conditions keyed by the motif edge whose attribute is on the left.
pub type DynamicEdgeConstraints = BTreeMap<EdgeKey, AttrConstraints<EdgeAttrRef>>;
