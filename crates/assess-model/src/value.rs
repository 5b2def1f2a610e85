//! Derived variable values.

use crate::answer::AnswerValue;
use serde::Serialize;

/// A typed value derived from one raw answer by the variable builder.
///
/// `Number` may carry the NaN sentinel for failed numeric coercion; NaN
/// compares false under every condition operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    MultiSelect(Vec<String>),
}

impl VariableValue {
    /// Generic truthiness, used by boolean mappings that declare no
    /// membership set: null, empty text, empty sequence, zero and NaN are
    /// all false.
    pub fn is_truthy(&self) -> bool {
        match self {
            VariableValue::Null => false,
            VariableValue::Bool(flag) => *flag,
            VariableValue::Number(value) => *value != 0.0 && !value.is_nan(),
            VariableValue::Text(text) => !text.is_empty(),
            VariableValue::MultiSelect(values) => !values.is_empty(),
        }
    }

    /// Returns the numeric payload, `None` for every other shape.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            VariableValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&AnswerValue> for VariableValue {
    /// Passthrough conversion: the raw answer, shape preserved.
    fn from(raw: &AnswerValue) -> Self {
        match raw {
            AnswerValue::Null => VariableValue::Null,
            AnswerValue::Number(value) => VariableValue::Number(*value),
            AnswerValue::Text(text) => VariableValue::Text(text.clone()),
            AnswerValue::MultiSelect(values) => VariableValue::MultiSelect(values.clone()),
        }
    }
}
