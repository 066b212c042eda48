//! Rule forbidding bare `id` as a path or query parameter name.
//!
//! # Rationale
//!
//! On nested resources (`/users/{id}/orders/{id}`) a bare `id` is ambiguous,
//! and even on flat paths it loses meaning once the value travels through
//! client code. Identifiers should say what they identify.
//!
//! # Detected Patterns
//!
//! - Path-level or operation-level parameters with `in: path` or
//!   `in: query` whose trimmed name is `id` in any letter case
//!
//! Header and cookie parameters are not checked, and `in` must match
//! `path`/`query` exactly.
//!
//! # Good Patterns
//!
//! ```yaml
//! /users/{userId}:
//!   parameters:
//!     - name: userId
//!       in: path
//! ```

use oas_lint_core::utils::parameter_location;
use oas_lint_core::{Document, HttpMethod, Parameter, ParameterLocation, Rule, Violation, ViolationCode};

/// Rule name for no-generic-id-parameter.
pub const NAME: &str = "no-generic-id-parameter";

const CODES: &[ViolationCode] = &[ViolationCode::GenericIdParameterName];

/// Forbids path and query parameters named `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGenericIdParameter;

impl NoGenericIdParameter {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_parameters(
        parameters: &[Parameter],
        path: &str,
        method: Option<HttpMethod>,
        violations: &mut Vec<Violation>,
    ) {
        for parameter in parameters {
            let (Some(name), Some(location)) = (&parameter.name, &parameter.location) else {
                continue;
            };
            if !matches!(
                parameter.parsed_location(),
                Some(ParameterLocation::Path | ParameterLocation::Query)
            ) {
                continue;
            }
            if name.trim().eq_ignore_ascii_case("id") {
                violations.push(Violation::new(
                    ViolationCode::GenericIdParameterName,
                    parameter_location(method, path, name, location),
                    "Path and query parameters representing identifiers must be specific, \
                     e.g. userId or resourceId instead of just 'id'",
                ));
            }
        }
    }
}

impl Rule for NoGenericIdParameter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn codes(&self) -> &'static [ViolationCode] {
        CODES
    }

    fn description(&self) -> &'static str {
        "Path and query identifier parameters must be qualified (userId, not id)"
    }

    fn check(&self, document: &Document) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (path, item) in &document.paths {
            Self::check_parameters(&item.parameters, path, None, &mut violations);

            for (method, operation) in item.operations() {
                Self::check_parameters(&operation.parameters, path, Some(method), &mut violations);
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::yaml;

    fn check(document: &Document) -> Vec<String> {
        NoGenericIdParameter::new()
            .check(document)
            .into_iter()
            .map(|v| v.location)
            .collect()
    }

    #[test]
    fn test_detects_path_and_operation_level_id() {
        let doc = yaml(
            r"
openapi: 3.0.3
paths:
  /users/{id}:
    parameters:
      - name: id
        in: path
        required: true
    get:
      parameters:
        - name: id
          in: query
  /people/{personId}:
    parameters:
      - name: personId
        in: path
    get:
      parameters:
        - name: departmentId
          in: query
",
        );
        assert_eq!(
            check(&doc),
            vec![
                "/users/{id} param 'id' in path",
                "GET /users/{id} param 'id' in query",
            ]
        );
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let doc = yaml(
            r"
openapi: 3.0.3
paths:
  /a:
    get:
      parameters:
        - name: ID
          in: query
        - name: ' Id '
          in: query
",
        );
        assert_eq!(
            check(&doc),
            vec![
                "GET /a param 'ID' in query",
                "GET /a param ' Id ' in query",
            ]
        );
    }

    #[test]
    fn test_ignores_header_cookie_and_unknown_locations() {
        let doc = yaml(
            r"
openapi: 3.0.3
paths:
  /a:
    parameters:
      - name: id
        in: header
      - name: id
        in: cookie
      - name: id
        in: Query
      - $ref: '#/components/parameters/Id'
",
        );
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_allows_qualified_names() {
        let doc = yaml(
            r"
openapi: 3.0.3
paths:
  /users/{userId}:
    parameters:
      - name: userId
        in: path
    delete:
      parameters:
        - name: idempotencyKey
          in: query
        - name: ~
          in: query
",
        );
        assert!(check(&doc).is_empty());
    }

    #[test]
    fn test_operation_parameters_follow_method_order() {
        let doc = yaml(
            r"
openapi: 3.0.3
paths:
  /a:
    post:
      parameters:
        - { name: id, in: query }
    get:
      parameters:
        - { name: id, in: query }
",
        );
        assert_eq!(
            check(&doc),
            vec!["GET /a param 'id' in query", "POST /a param 'id' in query"]
        );
    }
}
