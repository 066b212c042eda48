//! The validator: runs registered rules over a document in a fixed order.

use crate::config::Config;
use crate::document::Document;
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building a [`Validator`].
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Two registered rules share a name.
    #[error("Rule `{0}` is registered more than once")]
    DuplicateRule(String),

    /// The configuration names a rule that is not registered.
    #[error("Configuration references unknown rule `{0}`")]
    UnknownRule(String),
}

/// Builder for configuring a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl ValidatorBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Rules run in the order they are added.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the validator.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule name is registered twice, or if the
    /// configuration refers to a rule that is not registered.
    pub fn build(self) -> Result<Validator, ValidatorError> {
        for (i, rule) in self.rules.iter().enumerate() {
            if self.rules[..i].iter().any(|r| r.name() == rule.name()) {
                return Err(ValidatorError::DuplicateRule(rule.name().to_string()));
            }
        }

        let config = self.config.unwrap_or_default();
        if let Some(unknown) = config
            .rules
            .keys()
            .find(|name| !self.rules.iter().any(|r| r.name() == name.as_str()))
        {
            return Err(ValidatorError::UnknownRule(unknown.clone()));
        }

        Ok(Validator {
            rules: self.rules,
            config,
        })
    }
}

/// Runs a fixed, ordered list of rules over documents.
///
/// Output order is part of the contract: violations are grouped by rule in
/// registration order, and within a rule follow the document's declaration
/// order. Use [`Validator::builder()`] to attach a configuration.
pub struct Validator {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Validator {
    /// Creates a new builder for configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Creates a validator with default configuration.
    #[must_use]
    pub fn new(rules: Vec<RuleBox>) -> Self {
        Self {
            rules,
            config: Config::default(),
        }
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Registered rules in execution order.
    #[must_use]
    pub fn rules(&self) -> &[RuleBox] {
        &self.rules
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates a document, returning every violation in rule order.
    ///
    /// Never fails: missing parts of the document simply produce no
    /// violations.
    #[must_use]
    pub fn validate(&self, document: &Document) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            let severity = self
                .config
                .rule_severity(rule.name())
                .unwrap_or_else(|| rule.default_severity());

            let found = rule.check(document);
            debug!("Rule {} found {} violation(s)", rule.name(), found.len());
            violations.extend(found.into_iter().map(|v| v.with_severity(severity)));
        }

        violations
    }

    /// Validates a document and collects the violations with summary counts.
    #[must_use]
    pub fn report(&self, document: &Document) -> LintResult {
        let result = LintResult {
            violations: self.validate(document),
            operations_checked: document.operations().count(),
            schemas_checked: document.schemas().len(),
        };

        info!(
            "Validation complete: {} violation(s) in {} operation(s), {} schema(s)",
            result.violations.len(),
            result.operations_checked,
            result.schemas_checked
        );

        result
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}
