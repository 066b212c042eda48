//! Rule requiring UPPER_SNAKE_CASE string enum values.
//!
//! # Rationale
//!
//! Enum values become constants in generated clients. A single casing
//! convention avoids collisions (`active` vs `Active`) and keeps the wire
//! values recognisable as symbols rather than prose.
//!
//! # Detected Patterns
//!
//! - `enum` on a component schema with values such as `red`, `Blue`,
//!   `dark_green`
//! - `enum` on a direct property of a component schema
//!
//! Non-string members (numbers, booleans, `null`) are ignored. Every
//! offending value is reported separately.

use oas_lint_core::utils::{is_upper_snake_case, property_location, schema_location};
use oas_lint_core::{Document, Rule, Schema, Violation, ViolationCode};

/// Rule name for enum-upper-snake-case.
pub const NAME: &str = "enum-upper-snake-case";

const CODES: &[ViolationCode] = &[ViolationCode::EnumNotUpperSnakeCase];

/// Requires string enum values to be UPPER_SNAKE_CASE.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumUpperSnakeCase;

impl EnumUpperSnakeCase {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_enum(schema: &Schema, location: impl Fn() -> String, violations: &mut Vec<Violation>) {
        for value in schema.string_enum_values() {
            if !is_upper_snake_case(value) {
                violations.push(Violation::new(
                    ViolationCode::EnumNotUpperSnakeCase,
                    location(),
                    format!("Enum value '{value}' must use UPPER_SNAKE_CASE"),
                ));
            }
        }
    }
}

impl Rule for EnumUpperSnakeCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn codes(&self) -> &'static [ViolationCode] {
        CODES
    }

    fn description(&self) -> &'static str {
        "String enum values must be UPPER_SNAKE_CASE"
    }

    fn check(&self, document: &Document) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (schema_name, schema) in document.schemas() {
            Self::check_enum(schema, || schema_location(schema_name), &mut violations);

            for (property, property_schema) in &schema.properties {
                let Some(property_schema) = property_schema else {
                    continue;
                };
                Self::check_enum(
                    property_schema,
                    || property_location(schema_name, property),
                    &mut violations,
                );
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{json, yaml};

    fn check(document: &Document) -> Vec<(String, String)> {
        EnumUpperSnakeCase::new()
            .check(document)
            .into_iter()
            .map(|v| (v.location, v.message))
            .collect()
    }

    #[test]
    fn test_detects_schema_and_property_enums() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    Color:
      type: string
      enum: [red, Blue, DARK_GREEN, dark_green]
    User:
      type: object
      properties:
        role:
          type: string
          enum: [admin, SUPER_USER]
",
        );
        let found = check(&doc);
        assert_eq!(
            found,
            vec![
                (
                    "schema Color".to_string(),
                    "Enum value 'red' must use UPPER_SNAKE_CASE".to_string()
                ),
                (
                    "schema Color".to_string(),
                    "Enum value 'Blue' must use UPPER_SNAKE_CASE".to_string()
                ),
                (
                    "schema Color".to_string(),
                    "Enum value 'dark_green' must use UPPER_SNAKE_CASE".to_string()
                ),
                (
                    "schema User.properties.role".to_string(),
                    "Enum value 'admin' must use UPPER_SNAKE_CASE".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_allows_upper_snake_case() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    Status:
      enum: [ACTIVE, IN_PROGRESS, DARK_GREEN, V2]
",
        );
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_ignores_non_string_members() {
        let doc = json(
            r#"{
              "openapi": "3.0.0",
              "components": {
                "schemas": {
                  "Level": { "enum": [1, 2.5, true, null, {"a": 1}, ["x"]] },
                  "Mixed": { "enum": [0, "low"] }
                }
              }
            }"#,
        );
        let found = check(&doc);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, "schema Mixed");
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    Twice:
      enum: [dup, dup]
",
        );
        assert_eq!(check(&doc).len(), 2);
    }

    #[test]
    fn test_nested_property_enums_are_not_visited() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    User:
      properties:
        address:
          properties:
            kind:
              enum: [home]
",
        );
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_null_property_schema_is_skipped() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    User:
      properties:
        legacy: ~
        kind:
          enum: [home]
",
        );
        assert_eq!(
            check(&doc),
            vec![(
                "schema User.properties.kind".to_string(),
                "Enum value 'home' must use UPPER_SNAKE_CASE".to_string()
            )]
        );
    }
}
