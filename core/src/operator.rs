//! Comparison operators for attribute constraints.
//!
//! Every operator is total over [`Value`] pairs: type mismatches never
//! panic, they evaluate to `false`.

use crate::{OperatorError, Value};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A binary comparison between an attribute value (left) and a reference
/// value (right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Operator {
    /// `=` and `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `in`: left is a member of right.
    In,
    /// `!in`
    NotIn,
    /// `contains`: right is a member of left.
    Contains,
    /// `!contains`
    NotContains,
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 10] = [
        Operator::Eq,
        Operator::NotEq,
        Operator::Lt,
        Operator::LtEq,
        Operator::Gt,
        Operator::GtEq,
        Operator::In,
        Operator::NotIn,
        Operator::Contains,
        Operator::NotContains,
    ];

    /// Canonical symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::NotEq => "!=",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::In => "in",
            Operator::NotIn => "!in",
            Operator::Contains => "contains",
            Operator::NotContains => "!contains",
        }
    }

    /// Evaluate `left <op> right`.
    pub fn apply(&self, left: &Value, right: &Value) -> bool {
        match self {
            Operator::Eq => left.loose_eq(right),
            Operator::NotEq => !left.loose_eq(right),
            Operator::Lt => matches!(left.partial_compare(right), Some(Ordering::Less)),
            Operator::LtEq => matches!(
                left.partial_compare(right),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Operator::Gt => matches!(left.partial_compare(right), Some(Ordering::Greater)),
            Operator::GtEq => matches!(
                left.partial_compare(right),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Operator::In => right.contains_value(left).unwrap_or(false),
            Operator::NotIn => right.contains_value(left).map(|m| !m).unwrap_or(false),
            Operator::Contains => left.contains_value(right).unwrap_or(false),
            Operator::NotContains => left.contains_value(right).map(|m| !m).unwrap_or(false),
        }
    }
}

impl FromStr for Operator {
    type Err = OperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Operator::Eq),
            "!=" => Ok(Operator::NotEq),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::LtEq),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::GtEq),
            "in" => Ok(Operator::In),
            "!in" => Ok(Operator::NotIn),
            "contains" => Ok(Operator::Contains),
            "!contains" => Ok(Operator::NotContains),
            other => Err(OperatorError::UnknownOperator(other.to_string())),
        }
    }
}

impl TryFrom<String> for Operator {
    type Error = OperatorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.symbol().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
