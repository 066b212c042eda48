//! Rule requiring POST operations to declare `201 Created`.
//!
//! # Rationale
//!
//! POST creates resources; clients expect `201 Created` (usually with a
//! `Location` header) rather than a generic `200 OK`.
//!
//! # Detected Patterns
//!
//! - POST with no `responses` at all (`POST_MISSING_RESPONSES`)
//! - POST whose responses do not include `201` (`POST_SHOULD_RETURN_201`)
//!
//! The two are exclusive: an operation without responses is reported once,
//! as missing responses.

use oas_lint_core::utils::operation_location;
use oas_lint_core::{Document, HttpMethod, Rule, Violation, ViolationCode};

/// Rule name for post-created-response.
pub const NAME: &str = "post-created-response";

const CODES: &[ViolationCode] = &[
    ViolationCode::PostMissingResponses,
    ViolationCode::PostShouldReturn201,
];

const CREATED: &str = "201";

/// Requires POST operations to declare a `201` response.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostCreatedResponse;

impl PostCreatedResponse {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for PostCreatedResponse {
    fn name(&self) -> &'static str {
        NAME
    }

    fn codes(&self) -> &'static [ViolationCode] {
        CODES
    }

    fn description(&self) -> &'static str {
        "POST operations must declare a 201 Created response"
    }

    fn check(&self, document: &Document) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (path, item) in &document.paths {
            let Some(post) = item.operation(HttpMethod::Post) else {
                continue;
            };
            let location = operation_location(HttpMethod::Post, path);

            if post.responses.is_empty() {
                violations.push(Violation::new(
                    ViolationCode::PostMissingResponses,
                    location,
                    "POST operation must define a 201 Created response",
                ));
            } else if !post.responses.contains_key(CREATED) {
                violations.push(Violation::new(
                    ViolationCode::PostShouldReturn201,
                    location,
                    "POST endpoints must return 201 Created instead of 200 OK",
                ));
            }
        }

        violations
    }
}
