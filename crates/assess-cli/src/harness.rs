//! Offline conformance harness.
//!
//! Reads a batch of named test cases, validates every locale config once,
//! then runs each case through the engine and compares the expected
//! per-vaccine verdicts and locator flag. All comparison logic lives here
//! so it can be exercised without the binary.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use assess_config::{ConfigStore, LOGIC_FILES};
use assess_engine::run_assessment;
use assess_model::{AnswerSet, ValidationReport};
use assess_validate::validate_config;

use crate::logging::redact_value;

/// One named test case from `test-cases.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub locale: String,
    #[serde(default)]
    pub answers: AnswerSet,
    pub expected: Expectation,
}

/// Expected fields of one case. Absent fields are not compared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Expectation {
    #[serde(default)]
    pub vaccines: BTreeMap<String, bool>,
    #[serde(default, rename = "shouldShowLocator")]
    pub should_show_locator: Option<bool>,
}

/// Structural findings for one locale's config file.
#[derive(Debug)]
pub struct LocaleValidation {
    pub locale: &'static str,
    pub file: &'static str,
    pub report: ValidationReport,
}

/// Outcome of one executed test case.
#[derive(Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub locale: String,
    /// Load or evaluation failure; the case did not produce a result.
    pub error: Option<String>,
    pub mismatches: Vec<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.mismatches.is_empty()
    }
}

/// Load the batch test case file.
pub fn load_test_cases(path: &Path) -> Result<Vec<TestCase>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read test cases from {}", path.display()))?;
    let cases: Vec<TestCase> = serde_json::from_str(&raw)
        .with_context(|| format!("parse test cases from {}", path.display()))?;
    info!(count = cases.len(), "loaded test cases");
    Ok(cases)
}

/// Validate every routed locale once, reporting load failures as errors in
/// the same report shape so the caller sees one ordered list.
pub fn validate_locales(store: &mut ConfigStore) -> Vec<LocaleValidation> {
    let mut validations = Vec::with_capacity(LOGIC_FILES.len());
    for (locale, file) in LOGIC_FILES.iter().copied() {
        let report = match store.load(locale) {
            Ok(config) => validate_config(&config, file),
            Err(error) => ValidationReport {
                errors: vec![format!(
                    "Error loading config for locale {locale}: {error}"
                )],
                warnings: Vec::new(),
            },
        };
        validations.push(LocaleValidation {
            locale,
            file,
            report,
        });
    }
    validations
}

/// Run one case: load its locale config, run the assessment, compare every
/// expected field.
pub fn run_case(store: &mut ConfigStore, case: &TestCase) -> CaseOutcome {
    debug!(
        name = %case.name,
        locale = %case.locale,
        answers = redact_value(&serde_json::to_string(&case.answers).unwrap_or_default()),
        "running test case"
    );
    let config = match store.load(&case.locale) {
        Ok(config) => config,
        Err(error) => return failed_case(case, error.to_string()),
    };
    let result = match run_assessment(&case.answers, &config) {
        Ok(result) => result,
        Err(error) => return failed_case(case, error.to_string()),
    };

    let mut mismatches = Vec::new();
    for (vaccine_id, expected_eligible) in &case.expected.vaccines {
        match result.vaccines.iter().find(|v| v.id == *vaccine_id) {
            None => mismatches.push(format!(
                "Expected vaccine \"{vaccine_id}\" in result, but it was not found."
            )),
            Some(outcome) if outcome.eligible != *expected_eligible => mismatches.push(format!(
                "Vaccine \"{vaccine_id}\": expected eligible={expected_eligible}, got {actual}.",
                actual = outcome.eligible
            )),
            Some(_) => {}
        }
    }
    if let Some(expected) = case.expected.should_show_locator
        && result.should_show_locator != expected
    {
        mismatches.push(format!(
            "shouldShowLocator: expected {expected}, got {actual}.",
            actual = result.should_show_locator
        ));
    }

    CaseOutcome {
        name: case.name.clone(),
        locale: case.locale.clone(),
        error: None,
        mismatches,
    }
}

/// Run the whole batch in declared order.
pub fn run_cases(store: &mut ConfigStore, cases: &[TestCase]) -> Vec<CaseOutcome> {
    cases.iter().map(|case| run_case(store, case)).collect()
}

fn failed_case(case: &TestCase, error: String) -> CaseOutcome {
    CaseOutcome {
        name: case.name.clone(),
        locale: case.locale.clone(),
        error: Some(error),
        mismatches: Vec::new(),
    }
}
