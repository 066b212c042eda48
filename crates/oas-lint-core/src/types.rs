//! Core types for lint violations and results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Parses a lowercase severity name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The closed set of violation codes. Serialized verbatim, these strings are
/// the stable output contract of the linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    /// An operation has no description, or only whitespace.
    MissingOperationDescription,
    /// A component schema property is not lowerCamelCase.
    InvalidPropertyNameCase,
    /// A POST operation declares no responses.
    PostMissingResponses,
    /// A POST operation does not declare a `201` response.
    #[serde(rename = "POST_SHOULD_RETURN_201")]
    PostShouldReturn201,
    /// A path or query parameter is named bare `id`.
    GenericIdParameterName,
    /// An enum value is not UPPER_SNAKE_CASE.
    EnumNotUpperSnakeCase,
}

impl ViolationCode {
    /// Every code, in rule registration order.
    pub const ALL: [Self; 6] = [
        Self::MissingOperationDescription,
        Self::InvalidPropertyNameCase,
        Self::PostMissingResponses,
        Self::PostShouldReturn201,
        Self::GenericIdParameterName,
        Self::EnumNotUpperSnakeCase,
    ];

    /// The wire identifier of this code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingOperationDescription => "MISSING_OPERATION_DESCRIPTION",
            Self::InvalidPropertyNameCase => "INVALID_PROPERTY_NAME_CASE",
            Self::PostMissingResponses => "POST_MISSING_RESPONSES",
            Self::PostShouldReturn201 => "POST_SHOULD_RETURN_201",
            Self::GenericIdParameterName => "GENERIC_ID_PARAMETER_NAME",
            Self::EnumNotUpperSnakeCase => "ENUM_NOT_UPPER_SNAKE_CASE",
        }
    }

    /// Looks up a code by its wire identifier.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lint violation found during validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Violation code.
    pub code: ViolationCode,
    /// Severity of this violation.
    pub severity: Severity,
    /// Human-readable pointer into the document, e.g. `"GET /users"`.
    pub location: String,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new error-level violation.
    #[must_use]
    pub fn new(code: ViolationCode, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    /// Sets the severity of this violation.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "{} at {}\n  {}: {}\n",
            self.code, self.location, self.severity, self.message
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}: {}", self.code, self.location, self.message)
    }
}

/// Result of validating one document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, in rule-then-discovery order.
    pub violations: Vec<Violation>,
    /// Number of operations in the document.
    pub operations_checked: usize,
    /// Number of component schemas in the document.
    pub schemas_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations
            .iter()
            .fold((0, 0, 0), |(e, w, i), v| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Counts violations per code.
    #[must_use]
    pub fn count_by_code(&self) -> BTreeMap<ViolationCode, usize> {
        let mut counts = BTreeMap::new();
        for v in &self.violations {
            *counts.entry(v.code).or_insert(0) += 1;
        }
        counts
    }

    /// Formats violations as a test failure report.
    ///
    /// Produces a human-readable multi-line report suitable for `panic!()` messages
    /// in `cargo test` integration.
    #[must_use]
    pub fn format_test_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Violation> = self
            .violations
            .iter()
            .filter(|v| v.severity >= fail_on)
            .collect();

        let mut report = String::new();
        let _ = writeln!(
            report,
            "\n=== oas-lint: {} violation(s) ===\n",
            failing.len()
        );

        for v in &failing {
            let _ = writeln!(report, "{}", v.format());
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {} error(s), {} warning(s), {} info(s) in {} operation(s), {} schema(s)",
            errors, warnings, infos, self.operations_checked, self.schemas_checked
        );

        report
    }
}
