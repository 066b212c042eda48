//! Rule requiring a description on every operation.
//!
//! # Rationale
//!
//! Operation descriptions are what generated reference docs and SDK doc
//! comments are built from. An operation without one is opaque to every
//! consumer of the API.
//!
//! # Detected Patterns
//!
//! - Operations with no `description`
//! - Operations whose `description` is empty or whitespace only
//!
//! A `summary` does not count as a description.
//!
//! # Good Patterns
//!
//! ```yaml
//! paths:
//!   /users:
//!     get:
//!       description: Returns all users visible to the caller.
//! ```

use oas_lint_core::utils::operation_location;
use oas_lint_core::{Document, Rule, Violation, ViolationCode};

/// Rule name for operation-description.
pub const NAME: &str = "operation-description";

const CODES: &[ViolationCode] = &[ViolationCode::MissingOperationDescription];

/// Requires a non-blank description on every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationDescription;

impl OperationDescription {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for OperationDescription {
    fn name(&self) -> &'static str {
        NAME
    }

    fn codes(&self) -> &'static [ViolationCode] {
        CODES
    }

    fn description(&self) -> &'static str {
        "Every operation must have a non-blank description"
    }

    fn check(&self, document: &Document) -> Vec<Violation> {
        document
            .operations()
            .filter(|(_, _, operation)| !operation.has_description())
            .map(|(path, method, _)| {
                Violation::new(
                    ViolationCode::MissingOperationDescription,
                    operation_location(method, path),
                    "Operation must have a non-blank description",
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{json, yaml};

    fn check(document: &Document) -> Vec<String> {
        OperationDescription::new()
            .check(document)
            .into_iter()
            .map(|v| v.location)
            .collect()
    }

    #[test]
    fn test_detects_missing_description() {
        let doc = json(
            r#"{
              "openapi": "3.0.0",
              "info": { "title": "Demo API", "version": "1.0.0" },
              "paths": {
                "/users": {
                  "get": { "responses": { "200": { "description": "OK" } } }
                }
              }
            }"#,
        );
        assert_eq!(check(&doc), vec!["GET /users"]);
    }

    #[test]
    fn test_detects_blank_description() {
        let doc = yaml(
            r#"
openapi: 3.0.3
paths:
  /users:
    get:
      description: "   "
    delete:
      description: ""
"#,
        );
        assert_eq!(check(&doc), vec!["GET /users", "DELETE /users"]);
    }

    #[test]
    fn test_allows_described_operation() {
        let doc = yaml(
            r"
openapi: 3.0.3
paths:
  /users:
    get:
      description: Returns all users
",
        );
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_summary_is_not_a_description() {
        let doc = yaml(
            r"
openapi: 3.0.3
paths:
  /users:
    get:
      summary: List users
",
        );
        assert_eq!(check(&doc), vec!["GET /users"]);
    }

    #[test]
    fn test_one_violation_per_operation_in_method_order() {
        let doc = yaml(
            r"
openapi: 3.0.3
paths:
  /users:
    patch: {}
    get: {}
  /orders:
    post: {}
",
        );
        assert_eq!(
            check(&doc),
            vec!["GET /users", "PATCH /users", "POST /orders"]
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = yaml("openapi: 3.0.3\n");
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_no_break_spaces_count_as_a_description() {
        let doc = json(
            r#"{"openapi": "3.0.3", "paths": {"/users": {
                "get": {"description": "\u00a0\u00a0"},
                "put": {"description": " \t\n"}
            }}}"#,
        );
        assert_eq!(check(&doc), vec!["PUT /users"]);
    }
}
