//! Structural config validation.
//!
//! Checks referential integrity across a whole config independently of any
//! answers: every check runs and every violation is collected, so a config
//! author sees all problems in one pass. Unlike the evaluators, nothing
//! here ever fails.

mod report;

pub use report::{
    ConfigReportSummary, REPORT_SCHEMA, REPORT_SCHEMA_VERSION, ValidationReportPayload,
    write_validation_report_json,
};

use std::collections::BTreeSet;

use assess_model::{AssessmentConfig, CompareOp, Logic, ValidationReport};
use tracing::debug;

/// Validate one config's cross-references.
///
/// `source` names the config in every finding (file name or locale) so a
/// batch run over several locales stays readable.
pub fn validate_config(config: &AssessmentConfig, source: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    let question_ids: BTreeSet<&str> = config.questions.iter().map(|q| q.id.as_str()).collect();
    let variable_names: BTreeSet<&str> =
        config.variable_mapping.keys().map(String::as_str).collect();
    let message_keys: BTreeSet<&str> = config.messages.keys().map(String::as_str).collect();

    check_duplicate_questions(config, source, &mut report);

    // Every mapping must read from an existing question.
    for (name, mapping) in &config.variable_mapping {
        if !question_ids.contains(mapping.from_question.as_str()) {
            report.errors.push(format!(
                "Config {source}: variable \"{name}\" refers to non-existing question \"{from}\".",
                from = mapping.from_question
            ));
        }
    }

    let mut seen_rule_ids = BTreeSet::new();
    for rule in &config.rules.vaccines {
        if !seen_rule_ids.insert(rule.id.as_str()) {
            report.warnings.push(format!(
                "Config {source}: duplicate vaccine id \"{id}\".",
                id = rule.id
            ));
        }

        if let Logic::Other(raw) = &rule.eligibility.logic {
            report.warnings.push(format!(
                "Config {source}: vaccine \"{id}\" uses unsupported logic \"{raw}\".",
                id = rule.id
            ));
        }
        for group in &rule.eligibility.groups {
            if let Logic::Other(raw) = &group.logic {
                report.warnings.push(format!(
                    "Config {source}: vaccine \"{id}\" uses unsupported logic \"{raw}\".",
                    id = rule.id
                ));
            }
            for condition in &group.conditions {
                if !variable_names.contains(condition.var.as_str()) {
                    report.errors.push(format!(
                        "Config {source}: vaccine \"{id}\" uses variable \"{var}\" which is not \
                         defined in variable_mapping.",
                        id = rule.id,
                        var = condition.var
                    ));
                }
                if let CompareOp::Other(raw) = &condition.op {
                    report.warnings.push(format!(
                        "Config {source}: vaccine \"{id}\" uses unsupported operator \"{raw}\".",
                        id = rule.id
                    ));
                }
            }
        }

        // Message keys must resolve on both branches when declared.
        if let Some(key) = &rule.output.eligible_message_key
            && !message_keys.contains(key.as_str())
        {
            report.errors.push(format!(
                "Config {source}: vaccine \"{id}\" uses eligible_message_key \"{key}\" not found \
                 in messages.",
                id = rule.id
            ));
        }
        if let Some(key) = &rule.output.not_eligible_message_key
            && !message_keys.contains(key.as_str())
        {
            report.errors.push(format!(
                "Config {source}: vaccine \"{id}\" uses not_eligible_message_key \"{key}\" not \
                 found in messages.",
                id = rule.id
            ));
        }
    }

    if config.questions.is_empty() {
        report
            .errors
            .push(format!("Config {source}: no questions defined."));
    }
    if config.rules.vaccines.is_empty() {
        report
            .errors
            .push(format!("Config {source}: no vaccines rules defined."));
    }

    debug!(
        source,
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated config"
    );
    report
}

fn check_duplicate_questions(
    config: &AssessmentConfig,
    source: &str,
    report: &mut ValidationReport,
) {
    let mut seen = BTreeSet::new();
    for question in &config.questions {
        if !seen.insert(question.id.as_str()) {
            report.warnings.push(format!(
                "Config {source}: duplicate question id \"{id}\".",
                id = question.id
            ));
        }
    }
}
