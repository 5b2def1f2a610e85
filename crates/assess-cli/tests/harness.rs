//! Harness integration tests over fixture config directories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use assess_cli::harness::{load_test_cases, run_case, run_cases, validate_locales};
use assess_config::ConfigStore;

const EN_US: &str = r#"{
  "meta": { "market": "US", "assessment_id": "demo", "version": "1.0", "language": "en" },
  "questions": [
    { "id": "age", "type": "number", "label": "Age", "required": true, "min": 0 },
    { "id": "conditions", "type": "multi_choice", "label": "Conditions", "required": false,
      "options": [
        { "value": "diabetes", "label": "Diabetes" },
        { "value": "none", "label": "None" }
      ] }
  ],
  "variable_mapping": {
    "is_senior": { "from_question": "age", "type": "number" },
    "has_conditions": {
      "from_question": "conditions",
      "type": "boolean",
      "true_when_any_of": ["diabetes"]
    }
  },
  "rules": {
    "vaccines": [
      {
        "id": "flu",
        "label": "Flu shot",
        "eligibility": {
          "logic": "OR",
          "groups": [
            { "logic": "AND", "conditions": [ { "var": "is_senior", "op": ">=", "value": 65 } ] },
            { "logic": "AND", "conditions": [ { "var": "has_conditions", "op": "==", "value": true } ] }
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
    "flu_yes": { "title": "Eligible", "body": "Find a location." },
    "flu_no": { "title": "Not eligible", "body": "Check next season." }
  }
}"#;

fn write_all_locales(dir: &Path) {
    for file in [
        "logic_en_US.json",
        "logic_es_AR.json",
        "logic_es_MX.json",
        "logic_pt_BR.json",
    ] {
        fs::write(dir.join(file), EN_US).unwrap();
    }
}

const CASES: &str = r#"[
  {
    "name": "senior is eligible",
    "locale": "en_US",
    "answers": { "age": 70 },
    "expected": { "vaccines": { "flu": true }, "shouldShowLocator": true }
  },
  {
    "name": "young and healthy",
    "locale": "es_AR",
    "answers": { "age": 30, "conditions": ["none"] },
    "expected": { "vaccines": { "flu": false }, "shouldShowLocator": false }
  },
  {
    "name": "diabetes qualifies",
    "locale": "pt_BR",
    "answers": { "age": 40, "conditions": ["diabetes"] },
    "expected": { "vaccines": { "flu": true } }
  }
]"#;

#[test]
fn check_flow_passes_on_consistent_fixtures() {
    let dir = TempDir::new().unwrap();
    write_all_locales(dir.path());
    let cases_path = dir.path().join("test-cases.json");
    fs::write(&cases_path, CASES).unwrap();

    let mut store = ConfigStore::new(dir.path());
    let validations = validate_locales(&mut store);
    assert_eq!(validations.len(), 4);
    assert!(validations.iter().all(|v| !v.report.has_errors()));

    let cases = load_test_cases(&cases_path).unwrap();
    let outcomes = run_cases(&mut store, &cases);
    assert_eq!(outcomes.len(), 3);
    for outcome in &outcomes {
        assert!(outcome.passed(), "case {} failed: {outcome:?}", outcome.name);
    }
}

#[test]
fn mismatches_name_the_field_and_values() {
    let dir = TempDir::new().unwrap();
    write_all_locales(dir.path());
    let cases_path = dir.path().join("test-cases.json");
    fs::write(
        &cases_path,
        r#"[
          {
            "name": "wrong expectation",
            "locale": "en_US",
            "answers": { "age": 70 },
            "expected": {
              "vaccines": { "flu": false, "ghost": true },
              "shouldShowLocator": false
            }
          }
        ]"#,
    )
    .unwrap();

    let mut store = ConfigStore::new(dir.path());
    let cases = load_test_cases(&cases_path).unwrap();
    let outcome = run_case(&mut store, &cases[0]);
    assert!(!outcome.passed());
    assert_eq!(outcome.mismatches.len(), 3);
    assert!(
        outcome
            .mismatches
            .iter()
            .any(|m| m == "Vaccine \"flu\": expected eligible=false, got true.")
    );
    assert!(
        outcome
            .mismatches
            .iter()
            .any(|m| m == "Expected vaccine \"ghost\" in result, but it was not found.")
    );
    assert!(
        outcome
            .mismatches
            .iter()
            .any(|m| m == "shouldShowLocator: expected false, got true.")
    );
}

#[test]
fn missing_locale_file_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    // Only en_US exists; the other routed locales fail to load.
    fs::write(dir.path().join("logic_en_US.json"), EN_US).unwrap();

    let mut store = ConfigStore::new(dir.path());
    let validations = validate_locales(&mut store);
    assert_eq!(validations.len(), 4);
    assert!(!validations[0].report.has_errors());
    let broken = &validations[1];
    assert_eq!(broken.report.errors.len(), 1);
    assert!(
        broken.report.errors[0]
            .starts_with(&format!("Error loading config for locale {}", broken.locale)),
        "{}",
        broken.report.errors[0]
    );
}

#[test]
fn case_with_unknown_locale_errors_without_aborting_batch() {
    let dir = TempDir::new().unwrap();
    write_all_locales(dir.path());
    fs::write(
        dir.path().join("test-cases.json"),
        r#"[
          { "name": "bad locale", "locale": "fr_FR", "answers": {},
            "expected": { "vaccines": {} } },
          { "name": "good case", "locale": "en_US", "answers": { "age": 70 },
            "expected": { "vaccines": { "flu": true } } }
        ]"#,
    )
    .unwrap();

    let mut store = ConfigStore::new(dir.path());
    let cases = load_test_cases(&dir.path().join("test-cases.json")).unwrap();
    let outcomes = run_cases(&mut store, &cases);
    assert!(!outcomes[0].passed());
    assert_eq!(
        outcomes[0].error.as_deref(),
        Some("No logic file configured for locale: fr_FR")
    );
    assert!(outcomes[1].passed());
}
