//! JSON report payload for batch validation runs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use assess_model::ValidationReport;
use chrono::Utc;
use serde::Serialize;

pub const REPORT_SCHEMA: &str = "eligibility-assessment.validation-report";
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Machine-readable batch report, one summary per validated config.
#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub configs: Vec<ConfigReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct ConfigReportSummary {
    pub source: String,
    pub error_count: usize,
    pub warning_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Write the batch validation report as pretty JSON.
///
/// The timestamp is the only wall-clock dependence in the repository; it
/// lives here, outside the deterministic engine.
pub fn write_validation_report_json(
    output_path: &Path,
    reports: &[(String, ValidationReport)],
) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        configs: reports
            .iter()
            .map(|(source, report)| ConfigReportSummary {
                source: source.clone(),
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                errors: report.errors.clone(),
                warnings: report.warnings.clone(),
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}
