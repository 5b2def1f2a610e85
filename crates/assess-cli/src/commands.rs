use anyhow::{Context, Result};
use tracing::{info, info_span};

use assess_cli::harness::{
    CaseOutcome, LocaleValidation, load_test_cases, run_cases, validate_locales,
};
use assess_config::ConfigStore;
use assess_engine::run_assessment;
use assess_model::AnswerSet;
use assess_validate::write_validation_report_json;

use crate::cli::{CheckArgs, RunArgs, ValidateArgs};

/// Everything the `check` command produced, for summary printing.
pub struct CheckReport {
    pub validations: Vec<LocaleValidation>,
    pub outcomes: Vec<CaseOutcome>,
}

impl CheckReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn structural_error_count(&self) -> usize {
        self.validations
            .iter()
            .map(|v| v.report.error_count())
            .sum()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0 || self.structural_error_count() > 0
    }
}

pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let span = info_span!("check", config_dir = %args.config_dir.display());
    let _guard = span.enter();

    let mut store = ConfigStore::new(&args.config_dir);
    let validations = validate_locales(&mut store);

    let cases_path = args
        .cases
        .clone()
        .unwrap_or_else(|| args.config_dir.join("test-cases.json"));
    let cases = load_test_cases(&cases_path)?;
    let outcomes = run_cases(&mut store, &cases);
    info!(
        cases = outcomes.len(),
        passed = outcomes.iter().filter(|o| o.passed()).count(),
        "check finished"
    );

    Ok(CheckReport {
        validations,
        outcomes,
    })
}

pub fn run_validate(args: &ValidateArgs) -> Result<Vec<LocaleValidation>> {
    let mut store = ConfigStore::new(&args.config_dir);
    let validations = validate_locales(&mut store);

    if let Some(report_path) = &args.report {
        let reports: Vec<(String, assess_model::ValidationReport)> = validations
            .iter()
            .map(|v| (v.file.to_string(), v.report.clone()))
            .collect();
        let written = write_validation_report_json(report_path, &reports)
            .context("write validation report")?;
        println!("Validation report: {}", written.display());
    }

    Ok(validations)
}

pub fn run_assess(args: &RunArgs) -> Result<()> {
    let mut store = ConfigStore::new(&args.config_dir);
    let config = store
        .load(&args.locale)
        .with_context(|| format!("load config for locale {}", args.locale))?;

    let raw = std::fs::read_to_string(&args.answers)
        .with_context(|| format!("read answers from {}", args.answers.display()))?;
    let answers: AnswerSet = serde_json::from_str(&raw)
        .with_context(|| format!("parse answers from {}", args.answers.display()))?;

    let result = run_assessment(&answers, &config)
        .with_context(|| format!("run assessment for locale {}", args.locale))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
