//! The fixed, ordered set of built-in rules.

use crate::{
    EnumUpperSnakeCase, NoGenericIdParameter, OperationDescription, PostCreatedResponse,
    PropertyNameCase,
};
use oas_lint_core::RuleBox;

/// Returns every built-in rule in registration order.
///
/// This order is part of the output contract: violations are reported
/// grouped by rule in exactly this sequence.
///
/// 1. `operation-description`
/// 2. `property-name-case`
/// 3. `post-created-response`
/// 4. `no-generic-id-parameter`
/// 5. `enum-upper-snake-case`
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(OperationDescription::new()),
        Box::new(PropertyNameCase::new()),
        Box::new(PostCreatedResponse::new()),
        Box::new(NoGenericIdParameter::new()),
        Box::new(EnumUpperSnakeCase::new()),
    ]
}

/// A selector that matched no built-in rule name or code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown rule `{0}`")]
pub struct UnknownRuleSelector(pub String);

/// Selects built-in rules by name or violation code.
///
/// The result keeps registration order regardless of selector order, so a
/// filtered run reports in the same sequence as a full one.
///
/// # Errors
///
/// Returns the first selector that matches no rule.
pub fn select_rules<S: AsRef<str>>(selectors: &[S]) -> Result<Vec<RuleBox>, UnknownRuleSelector> {
    let rules = default_rules();

    if let Some(unknown) = selectors
        .iter()
        .map(|s| s.as_ref())
        .find(|s| !rules.iter().any(|r| r.matches(s)))
    {
        return Err(UnknownRuleSelector(unknown.to_string()));
    }

    let total = rules.len();
    let selected: Vec<RuleBox> = rules
        .into_iter()
        .filter(|r| selectors.iter().any(|s| r.matches(s.as_ref())))
        .collect();
    tracing::debug!("Selected {} of {} built-in rules", selected.len(), total);

    Ok(selected)
}
