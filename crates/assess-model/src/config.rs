//! Assessment configuration as loaded from one `logic_<locale>.json` file.
//!
//! The config is read-only input to the engine: evaluation never mutates it,
//! so one loaded config can serve arbitrarily many concurrent runs.

use crate::ops::{CompareOp, Logic};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level config document for one locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentConfig {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub variable_mapping: BTreeMap<String, VariableMapping>,
    #[serde(default)]
    pub rules: RuleSet,
    #[serde(default)]
    pub messages: BTreeMap<String, Message>,
}

/// Market/version identification carried along for reporting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub market: String,
    #[serde(default)]
    pub assessment_id: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub language: String,
}

/// Input kind of a questionnaire step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Number,
    SingleChoice,
    MultiChoice,
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// One questionnaire step. `min`/`max` apply only to `number` questions,
/// `options` only to the choice kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
}

/// Declared result type of a variable mapping.
///
/// Anything other than `number`/`boolean` in the config falls back to
/// passthrough, matching the permissive wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MappingKind {
    Number,
    Boolean,
    Passthrough,
}

impl MappingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MappingKind::Number => "number",
            MappingKind::Boolean => "boolean",
            MappingKind::Passthrough => "passthrough",
        }
    }
}

impl From<String> for MappingKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "number" => MappingKind::Number,
            "boolean" => MappingKind::Boolean,
            _ => MappingKind::Passthrough,
        }
    }
}

impl From<MappingKind> for String {
    fn from(kind: MappingKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Declared derivation of one variable from one raw answer.
///
/// For `boolean` mappings at most one of `true_when` (scalar membership)
/// and `true_when_any_of` (multi-select intersection) is meaningful; with
/// neither present the raw value's generic truthiness is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableMapping {
    pub from_question: String,
    #[serde(rename = "type")]
    pub kind: MappingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_when: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub true_when_any_of: Option<Vec<String>>,
}

/// One atomic comparison: `variables[var] <op> value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionExpression {
    pub var: String,
    pub op: CompareOp,
    pub value: serde_json::Value,
}

/// Conditions combined under one logic combinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionGroup {
    pub logic: Logic,
    #[serde(default)]
    pub conditions: Vec<ConditionExpression>,
}

/// Groups combined under one logic combinator. Nesting is fixed at exactly
/// two levels (eligibility -> groups -> conditions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityExpression {
    pub logic: Logic,
    #[serde(default)]
    pub groups: Vec<ConditionGroup>,
}

/// Output selection for one rule: which message to show per verdict and
/// which downstream affordance to offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligible_message_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_eligible_message_key: Option<String>,
    #[serde(default)]
    pub cta_type: String,
}

/// One named eligibility outcome ("vaccine") with its rule expression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaccineRule {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub eligibility: EligibilityExpression,
    #[serde(default)]
    pub output: RuleOutput,
}

/// Rule catalog. Vaccines keep their declared order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub vaccines: Vec<VaccineRule>,
}

/// One display message from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub title: String,
    pub body: String,
}
