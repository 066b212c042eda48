//! Integration tests for the `oas_lint::check_spec!()` macro and the
//! top-level convenience functions.

use oas_lint::{lint_str, ParseError, ViolationCode};

// Clean document: the full pipeline passes with default config.
oas_lint::check_spec!("tests/fixtures/users.yaml");

// Dirty document made to pass by an explicit config.
oas_lint::check_spec!(
    legacy_spec_passes_with_relaxed_config,
    "tests/fixtures/legacy.json",
    config = "tests/fixtures/legacy-oas-lint.toml",
);

const LEGACY: &str = include_str!("fixtures/legacy.json");

#[test]
fn lint_str_reports_in_rule_order() {
    let codes: Vec<ViolationCode> = lint_str("legacy.json", LEGACY)
        .unwrap()
        .into_iter()
        .map(|v| v.code)
        .collect();

    assert_eq!(
        codes,
        vec![
            ViolationCode::MissingOperationDescription,
            ViolationCode::GenericIdParameterName,
        ]
    );
}

#[test]
fn lint_str_sniffs_format_without_extension() {
    let violations = lint_str("stdin", LEGACY).unwrap();
    assert_eq!(violations.len(), 2);
}

#[test]
fn lint_str_rejects_swagger_2() {
    let err = lint_str("old.yaml", "swagger: \"2.0\"\npaths: {}\n").unwrap_err();
    assert!(matches!(err, ParseError::MissingVersion { .. }));
}

#[test]
fn rules_module_exposes_registration_order() {
    let names: Vec<&str> = oas_lint::validator()
        .rules()
        .iter()
        .map(|r| r.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "operation-description",
            "property-name-case",
            "post-created-response",
            "no-generic-id-parameter",
            "enum-upper-snake-case",
        ]
    );
}
