//! Assessment output.

use crate::value::VariableValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// CTA tag that surfaces the location-finder affordance downstream.
pub const CTA_SEE_LOCATIONS: &str = "see_locations";

/// Verdict and resolved message for one rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaccineOutcome {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub eligible: bool,
    #[serde(rename = "messageTitle")]
    pub message_title: String,
    #[serde(rename = "messageBody")]
    pub message_body: String,
    pub cta_type: String,
}

/// Result of one completed assessment run.
///
/// `vaccines` preserves rule declaration order. Serialized field names keep
/// the original wire casing consumed by the questionnaire front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub variables: BTreeMap<String, VariableValue>,
    pub vaccines: Vec<VaccineOutcome>,
    #[serde(rename = "shouldShowLocator")]
    pub should_show_locator: bool,
}
