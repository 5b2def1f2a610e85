//! Validator tests: every structural check, accumulation, report output.

use assess_model::AssessmentConfig;
use assess_validate::{validate_config, write_validation_report_json};

fn parse(config: &str) -> AssessmentConfig {
    serde_json::from_str(config).expect("parse config")
}

const VALID_CONFIG: &str = r#"{
  "questions": [
    { "id": "age", "type": "number", "label": "Age", "required": true }
  ],
  "variable_mapping": {
    "is_senior": { "from_question": "age", "type": "number" }
  },
  "rules": {
    "vaccines": [
      {
        "id": "flu",
        "label": "Flu shot",
        "eligibility": {
          "logic": "AND",
          "groups": [
            { "logic": "AND", "conditions": [ { "var": "is_senior", "op": ">=", "value": 65 } ] }
          ]
        },
        "output": {
          "eligible_message_key": "flu_yes",
          "not_eligible_message_key": "flu_no",
          "cta_type": "see_locations"
        }
      }
    ]
  },
  "messages": {
    "flu_yes": { "title": "Yes", "body": "Go." },
    "flu_no": { "title": "No", "body": "Stay." }
  }
}"#;

#[test]
fn clean_config_produces_no_findings() {
    let report = validate_config(&parse(VALID_CONFIG), "logic_en_US.json");
    assert!(report.is_clean(), "unexpected findings: {report:?}");
}

#[test]
fn unresolved_question_reference_is_reported() {
    let mut config = parse(VALID_CONFIG);
    config
        .variable_mapping
        .get_mut("is_senior")
        .unwrap()
        .from_question = "aeg".to_string();
    let report = validate_config(&config, "logic_en_US.json");
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0],
        "Config logic_en_US.json: variable \"is_senior\" refers to non-existing question \"aeg\"."
    );
}

#[test]
fn unresolved_variable_reference_is_reported() {
    let mut config = parse(VALID_CONFIG);
    config.rules.vaccines[0].eligibility.groups[0].conditions[0].var = "is_junior".to_string();
    let report = validate_config(&config, "logic_en_US.json");
    assert_eq!(report.errors.len(), 1);
    assert!(
        report.errors[0].contains("vaccine \"flu\" uses variable \"is_junior\""),
        "{}",
        report.errors[0]
    );
}

#[test]
fn unresolved_message_keys_are_reported_on_both_branches() {
    let mut config = parse(VALID_CONFIG);
    config.messages.clear();
    let report = validate_config(&config, "logic_en_US.json");
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors[0].contains("eligible_message_key \"flu_yes\""));
    assert!(report.errors[1].contains("not_eligible_message_key \"flu_no\""));
}

#[test]
fn absent_message_keys_are_not_an_error() {
    // Keys are optional; the runner falls back to the default message.
    let mut config = parse(VALID_CONFIG);
    config.rules.vaccines[0].output.eligible_message_key = None;
    config.rules.vaccines[0].output.not_eligible_message_key = None;
    let report = validate_config(&config, "logic_en_US.json");
    assert!(!report.has_errors());
}

#[test]
fn empty_sections_are_reported() {
    let config = parse("{}");
    let report = validate_config(&config, "logic_pt_BR.json");
    assert_eq!(
        report.errors,
        vec![
            "Config logic_pt_BR.json: no questions defined.".to_string(),
            "Config logic_pt_BR.json: no vaccines rules defined.".to_string(),
        ]
    );
}

#[test]
fn all_violations_accumulate_in_one_pass() {
    let mut config = parse(VALID_CONFIG);
    config
        .variable_mapping
        .get_mut("is_senior")
        .unwrap()
        .from_question = "missing_q".to_string();
    config.rules.vaccines[0].eligibility.groups[0].conditions[0].var = "missing_var".to_string();
    config.messages.clear();
    let report = validate_config(&config, "logic_es_AR.json");
    assert_eq!(report.errors.len(), 4);
}

#[test]
fn unsupported_enum_strings_are_warnings() {
    let mut config = parse(VALID_CONFIG);
    config.rules.vaccines[0].eligibility.logic = assess_model::Logic::Other("XOR".to_string());
    config.rules.vaccines[0].eligibility.groups[0].conditions[0].op =
        assess_model::CompareOp::Other("~=".to_string());
    let report = validate_config(&config, "logic_en_US.json");
    assert!(!report.has_errors());
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].contains("unsupported logic \"XOR\""));
    assert!(report.warnings[1].contains("unsupported operator \"~=\""));
}

#[test]
fn duplicate_ids_are_warnings() {
    let mut config = parse(VALID_CONFIG);
    let question = config.questions[0].clone();
    config.questions.push(question);
    let rule = config.rules.vaccines[0].clone();
    config.rules.vaccines.push(rule);
    let report = validate_config(&config, "logic_en_US.json");
    assert!(!report.has_errors());
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("duplicate question id \"age\""))
    );
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("duplicate vaccine id \"flu\""))
    );
}

#[test]
fn report_payload_writes_schema_tagged_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("validation_report.json");
    let report = validate_config(&parse("{}"), "logic_en_US.json");
    let written = write_validation_report_json(&path, &[("logic_en_US.json".to_string(), report)])
        .expect("write report");
    let raw = std::fs::read_to_string(written).unwrap();
    let payload: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        payload["schema"],
        "eligibility-assessment.validation-report"
    );
    assert_eq!(payload["configs"][0]["error_count"], 2);
}
