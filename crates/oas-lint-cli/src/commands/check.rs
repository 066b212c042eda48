//! Check command implementation.

use anyhow::{Context, Result};
use oas_lint_core::{parse_document, Config, DocumentFormat, RuleConfig, Validator};
use oas_lint_rules::{default_rules, select_rules};
use std::path::{Path, PathBuf};

use super::output::FileReport;
use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

const EXIT_VIOLATIONS: i32 = 1;
const EXIT_PARSE_FAILURE: i32 = 2;

/// Runs the check command.
pub fn run(
    files: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<&str>,
    source: &ConfigSource,
) -> Result<()> {
    let mut config = source.load()?;
    if let Some(filter) = rules_filter {
        let selectors: Vec<&str> = filter.split(',').map(str::trim).collect();
        restrict_to(&mut config, &selectors)?;
    }
    let fail_on = config.fail_on_severity();

    let validator = Validator::builder()
        .rules(default_rules())
        .config(config)
        .build()
        .context("Failed to build validator")?;

    let mut reports = Vec::with_capacity(files.len());
    let mut parse_failures = 0usize;

    for file in files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;

        match lint(&validator, file, &content) {
            Ok(report) => reports.push(report),
            Err(err) => {
                eprintln!("{:?}", miette::Report::new(err));
                parse_failures += 1;
            }
        }
    }

    super::output::print(&reports, format)?;

    if format == OutputFormat::Github {
        if let Some(summary) = std::env::var_os("GITHUB_STEP_SUMMARY") {
            super::github::append_step_summary(Path::new(&summary), &reports)?;
        }
    }

    if parse_failures > 0 {
        std::process::exit(EXIT_PARSE_FAILURE);
    }
    if reports.iter().any(|r| r.result.has_violations_at(fail_on)) {
        std::process::exit(EXIT_VIOLATIONS);
    }

    Ok(())
}

fn lint(
    validator: &Validator,
    file: &Path,
    content: &str,
) -> Result<FileReport, oas_lint_core::ParseError> {
    let format = DocumentFormat::detect(file, content);
    let document = parse_document(&file.display().to_string(), content, format)?;

    tracing::info!(
        "Checking {} with {} rule(s)",
        file.display(),
        validator.rule_count()
    );

    Ok(FileReport {
        file: file.to_path_buf(),
        result: validator.report(&document),
    })
}

/// Disables every built-in rule not matched by `selectors`.
///
/// Filtering through the config keeps the full rule list registered, so
/// output order and config validation are unaffected.
fn restrict_to(config: &mut Config, selectors: &[&str]) -> Result<()> {
    let selected = select_rules(selectors)?;

    for rule in default_rules() {
        if !selected.iter().any(|s| s.name() == rule.name()) {
            config
                .rules
                .entry(rule.name().to_string())
                .or_insert_with(RuleConfig::default)
                .enabled = Some(false);
        }
    }

    Ok(())
}
