//! Rule requiring lowerCamelCase property names on component schemas.
//!
//! # Rationale
//!
//! A single property naming convention keeps payloads predictable across
//! endpoints and maps cleanly onto generated client models.
//!
//! # Detected Patterns
//!
//! - `first_name`, `First_name`, `FirstName` (underscore or uppercase start)
//! - `1stName` (leading digit)
//! - `first-name` (any character other than ASCII letters and digits)
//!
//! Only the direct properties of each schema under `components.schemas` are
//! checked; properties of nested inline objects are not visited.

use oas_lint_core::utils::{is_lower_camel_case, property_location};
use oas_lint_core::{Document, Rule, Violation, ViolationCode};

/// Rule name for property-name-case.
pub const NAME: &str = "property-name-case";

const CODES: &[ViolationCode] = &[ViolationCode::InvalidPropertyNameCase];

/// Requires component schema property names to be lowerCamelCase.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyNameCase;

impl PropertyNameCase {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PropertyNameCase {
    fn name(&self) -> &'static str {
        NAME
    }

    fn codes(&self) -> &'static [ViolationCode] {
        CODES
    }

    fn description(&self) -> &'static str {
        "Component schema property names must be lowerCamelCase"
    }

    fn check(&self, document: &Document) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (schema_name, schema) in document.schemas() {
            for property in schema.properties.keys() {
                if !is_lower_camel_case(property) {
                    violations.push(Violation::new(
                        ViolationCode::InvalidPropertyNameCase,
                        property_location(schema_name, property),
                        "Property name must be lowerCamelCase",
                    ));
                }
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{json, yaml};

    fn check(document: &Document) -> Vec<String> {
        PropertyNameCase::new()
            .check(document)
            .into_iter()
            .map(|v| v.location)
            .collect()
    }

    #[test]
    fn test_detects_snake_case_property() {
        let doc = json(
            r#"{
              "openapi": "3.0.0",
              "components": {
                "schemas": {
                  "User": {
                    "type": "object",
                    "properties": {
                      "firstName": { "type": "string" },
                      "First_name": { "type": "string" }
                    }
                  }
                }
              }
            }"#,
        );
        assert_eq!(check(&doc), vec!["schema User.properties.First_name"]);
    }

    #[test]
    fn test_detects_all_bad_shapes_in_order() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    User:
      properties:
        first_name: {}
        lastName: {}
        1stName: {}
        Email: {}
    Order:
      properties:
        order-id: {}
",
        );
        assert_eq!(
            check(&doc),
            vec![
                "schema User.properties.first_name",
                "schema User.properties.1stName",
                "schema User.properties.Email",
                "schema Order.properties.order-id",
            ]
        );
    }

    #[test]
    fn test_does_not_recurse_into_nested_objects() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    User:
      properties:
        address:
          type: object
          properties:
            street_name: {}
",
        );
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_schemas_without_properties() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    Color:
      type: string
      enum: [RED]
    Empty:
      properties: ~
",
        );
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_null_property_name_is_skipped() {
        let doc = yaml(
            r"
openapi: 3.0.3
components:
  schemas:
    User:
      properties:
        ~: {}
        ok: {}
",
        );
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_null_property_schema_name_still_checked() {
        let doc = json(
            r#"{
                "openapi": "3.0.0",
                "components": {"schemas": {"User": {"properties": {"Bad_Name": null, "ok": {}}}}}
            }"#,
        );
        assert_eq!(check(&doc), vec!["schema User.properties.Bad_Name"]);
    }
}
