//! Variable derivation from raw answers.

use assess_model::{AnswerSet, AnswerValue, MappingKind, VariableMapping, VariableValue};
use std::collections::BTreeMap;

/// Derive typed variables from raw answers per the declared mapping.
///
/// Pure function of its two inputs. A mapping whose source question was not
/// answered derives `Null` for number/passthrough and `false` for boolean.
/// Coercion failures produce the NaN sentinel rather than an error; NaN
/// compares false under every condition operator downstream.
pub fn build_variables(
    answers: &AnswerSet,
    mapping: &BTreeMap<String, VariableMapping>,
) -> BTreeMap<String, VariableValue> {
    let mut variables = BTreeMap::new();
    for (name, entry) in mapping {
        let raw = answers.get(&entry.from_question);
        let value = derive(raw, entry);
        tracing::trace!(variable = %name, kind = entry.kind.as_str(), "derived variable");
        variables.insert(name.clone(), value);
    }
    variables
}

fn derive(raw: Option<&AnswerValue>, entry: &VariableMapping) -> VariableValue {
    match entry.kind {
        MappingKind::Number => match raw {
            None | Some(AnswerValue::Null) => VariableValue::Null,
            Some(value) => VariableValue::Number(coerce_number(value)),
        },
        MappingKind::Boolean => VariableValue::Bool(derive_boolean(raw, entry)),
        MappingKind::Passthrough => raw.map_or(VariableValue::Null, VariableValue::from),
    }
}

/// Loose numeric coercion: numbers pass through, text parses after trimming
/// (empty text is zero), anything else is the NaN sentinel.
fn coerce_number(raw: &AnswerValue) -> f64 {
    match raw {
        AnswerValue::Number(value) => *value,
        AnswerValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        AnswerValue::Null | AnswerValue::MultiSelect(_) => f64::NAN,
    }
}

fn derive_boolean(raw: Option<&AnswerValue>, entry: &VariableMapping) -> bool {
    if let Some(true_when) = &entry.true_when {
        // Strict membership on the scalar form; a multi-select never matches.
        return matches!(
            raw,
            Some(AnswerValue::Text(text)) if true_when.iter().any(|candidate| candidate == text)
        );
    }
    if let Some(any_of) = &entry.true_when_any_of {
        // A non-sequence answer counts as an empty selection.
        let selected = raw
            .and_then(AnswerValue::as_multi_select)
            .unwrap_or_default();
        return selected
            .iter()
            .any(|value| any_of.iter().any(|candidate| candidate == value));
    }
    raw.is_some_and(answer_truthy)
}

/// Generic truthiness of a raw answer: null, empty text, empty sequence,
/// zero and NaN are false.
fn answer_truthy(raw: &AnswerValue) -> bool {
    match raw {
        AnswerValue::Null => false,
        AnswerValue::Number(value) => *value != 0.0 && !value.is_nan(),
        AnswerValue::Text(text) => !text.is_empty(),
        AnswerValue::MultiSelect(values) => !values.is_empty(),
    }
}
