//! Raw questionnaire answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answers keyed by question id. A question the user skipped is simply
/// absent from the map.
pub type AnswerSet = BTreeMap<String, AnswerValue>;

/// One raw answer, tagged by runtime shape.
///
/// `number` questions answer with a number, `single_choice` with the chosen
/// option value, `multi_choice` with the ordered list of chosen values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Explicit null (distinct from an absent entry only on the wire).
    Null,
    Number(f64),
    Text(String),
    MultiSelect(Vec<String>),
}

impl AnswerValue {
    /// Returns the multi-select values, or `None` for scalar shapes.
    pub fn as_multi_select(&self) -> Option<&[String]> {
        match self {
            AnswerValue::MultiSelect(values) => Some(values),
            _ => None,
        }
    }
}
