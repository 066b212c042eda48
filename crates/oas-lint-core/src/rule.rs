//! Rule trait for defining lint rules.

use crate::document::Document;
use crate::types::{Severity, Violation, ViolationCode};

/// A document-wide lint rule.
///
/// Rules are pure: they read the document, never mutate it, and never share
/// state with other rules. Violations must be returned in discovery order,
/// which follows the document's declaration order.
///
/// # Example
///
/// ```ignore
/// use oas_lint_core::{Document, Rule, Violation, ViolationCode};
///
/// pub struct RequireOperationId;
///
/// impl Rule for RequireOperationId {
///     fn name(&self) -> &'static str { "require-operation-id" }
///     fn codes(&self) -> &'static [ViolationCode] { &[/* ... */] }
///
///     fn check(&self, document: &Document) -> Vec<Violation> {
///         document
///             .operations()
///             .filter(|(_, _, op)| op.operation_id.is_none())
///             .map(|(path, method, _)| /* ... */)
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "operation-description").
    fn name(&self) -> &'static str;

    /// Returns the violation codes this rule can emit.
    fn codes(&self) -> &'static [ViolationCode];

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns `true` if `selector` names this rule or one of its codes.
    fn matches(&self, selector: &str) -> bool {
        self.name() == selector || self.codes().iter().any(|c| c.as_str() == selector)
    }

    /// Checks a document and returns any violations found.
    fn check(&self, document: &Document) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn codes(&self) -> &'static [ViolationCode] {
            &[ViolationCode::PostMissingResponses, ViolationCode::PostShouldReturn201]
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, document: &Document) -> Vec<Violation> {
            document
                .paths
                .keys()
                .map(|path| Violation::new(self.codes()[0], path.clone(), "Test violation"))
                .collect()
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(rule.check(&Document::default()).is_empty());
    }

    #[test]
    fn test_rule_matches_name_or_code() {
        let rule = TestRule;
        assert!(rule.matches("test-rule"));
        assert!(rule.matches("POST_SHOULD_RETURN_201"));
        assert!(!rule.matches("GENERIC_ID_PARAMETER_NAME"));
    }
}
