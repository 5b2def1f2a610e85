//! Assessment orchestration.

use crate::eval::evaluate_eligibility;
use crate::variables::build_variables;
use assess_model::{
    AnswerSet, AssessmentConfig, AssessmentResult, CTA_SEE_LOCATIONS, Result, VaccineOutcome,
};
use tracing::debug;

/// Fallback shown when a rule's selected message key is absent from the
/// catalog. A missing message is never fatal.
pub const DEFAULT_MESSAGE_TITLE: &str = "Demo result";
pub const DEFAULT_MESSAGE_BODY: &str = "No message configured.";

/// Run one full assessment: derive variables, evaluate every rule in
/// declared order, resolve output messages and aggregate the locator flag.
///
/// Deterministic and side-effect free; neither input is mutated, so one
/// config can serve any number of concurrent runs. Fails only on a
/// malformed operator or logic enum in the config.
pub fn run_assessment(answers: &AnswerSet, config: &AssessmentConfig) -> Result<AssessmentResult> {
    let variables = build_variables(answers, &config.variable_mapping);

    let mut vaccines = Vec::with_capacity(config.rules.vaccines.len());
    for rule in &config.rules.vaccines {
        let eligible = evaluate_eligibility(&variables, &rule.eligibility)?;
        let message_key = if eligible {
            rule.output.eligible_message_key.as_deref()
        } else {
            rule.output.not_eligible_message_key.as_deref()
        };
        let message = message_key.and_then(|key| config.messages.get(key));
        if message.is_none() {
            debug!(
                rule = %rule.id,
                key = message_key.unwrap_or("<none>"),
                "no message configured for selected key, using default"
            );
        }
        let (message_title, message_body) = match message {
            Some(message) => (message.title.clone(), message.body.clone()),
            None => (
                DEFAULT_MESSAGE_TITLE.to_string(),
                DEFAULT_MESSAGE_BODY.to_string(),
            ),
        };
        debug!(rule = %rule.id, eligible, "evaluated rule");
        vaccines.push(VaccineOutcome {
            id: rule.id.clone(),
            label: rule.label.clone(),
            description: rule.description.clone(),
            eligible,
            message_title,
            message_body,
            cta_type: rule.output.cta_type.clone(),
        });
    }

    let should_show_locator = vaccines
        .iter()
        .any(|outcome| outcome.eligible && outcome.cta_type == CTA_SEE_LOCATIONS);

    Ok(AssessmentResult {
        variables,
        vaccines,
        should_show_locator,
    })
}
