//! Closed operator and logic enums for rule expressions.
//!
//! Both sets are fixed by the config format; evaluation dispatches on them
//! with exhaustive matches. A catch-all `Other` variant keeps deserialization
//! permissive so a misauthored config still loads, and fails loudly at
//! evaluation time instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a single condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompareOp {
    /// Strict value equality (`==`).
    Eq,
    /// Negated value equality (`!=`).
    Ne,
    /// Numeric `>=`.
    Ge,
    /// Numeric `<=`.
    Le,
    /// Numeric `>`.
    Gt,
    /// Numeric `<`.
    Lt,
    /// Unrecognized operator string, rejected at evaluation time.
    Other(String),
}

impl CompareOp {
    /// Returns the operator as it appears in config files.
    pub fn as_str(&self) -> &str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Ge => ">=",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Other(raw) => raw,
        }
    }
}

impl From<String> for CompareOp {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "==" => CompareOp::Eq,
            "!=" => CompareOp::Ne,
            ">=" => CompareOp::Ge,
            "<=" => CompareOp::Le,
            ">" => CompareOp::Gt,
            "<" => CompareOp::Lt,
            _ => CompareOp::Other(raw),
        }
    }
}

impl From<CompareOp> for String {
    fn from(op: CompareOp) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Combinator applied over a group's conditions or an eligibility
/// expression's groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Logic {
    /// All children must hold; vacuously true for an empty list.
    And,
    /// At least one child must hold; vacuously false for an empty list.
    Or,
    /// Unrecognized logic string, rejected at evaluation time.
    Other(String),
}

impl Logic {
    /// Returns the combinator as it appears in config files.
    pub fn as_str(&self) -> &str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
            Logic::Other(raw) => raw,
        }
    }
}

impl From<String> for Logic {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "AND" => Logic::And,
            "OR" => Logic::Or,
            _ => Logic::Other(raw),
        }
    }
}

impl From<Logic> for String {
    fn from(logic: Logic) -> Self {
        logic.as_str().to_string()
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
