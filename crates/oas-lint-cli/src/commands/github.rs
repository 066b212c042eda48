//! GitHub Actions integration: workflow-command annotations and the
//! Markdown step summary.

use anyhow::{Context, Result};
use oas_lint_core::{Severity, Violation};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use super::output::FileReport;

/// Formats a violation as a `::error`/`::warning`/`::notice` workflow command.
#[must_use]
pub fn annotation(file: &Path, violation: &Violation) -> String {
    let command = match violation.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "notice",
    };
    format!(
        "::{command} file={},title={}::{}",
        escape_property(&file.display().to_string()),
        escape_property(violation.code.as_str()),
        escape_data(&format!("{}: {}", violation.location, violation.message)),
    )
}

/// Renders the Markdown step summary.
#[must_use]
pub fn step_summary(reports: &[FileReport]) -> String {
    let mut out = String::from("## oas-lint\n\n");

    let total: usize = reports.iter().map(|r| r.result.violations.len()).sum();
    if total == 0 {
        let _ = writeln!(
            out,
            "No violations found in {} document(s).",
            reports.len()
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{total} violation(s) in {} document(s).\n",
        reports.len()
    );
    out.push_str("| File | Severity | Code | Location | Message |\n");
    out.push_str("|------|----------|------|----------|---------|\n");
    for report in reports {
        for v in &report.result.violations {
            let _ = writeln!(
                out,
                "| {} | {} | `{}` | {} | {} |",
                escape_cell(&report.file.display().to_string()),
                v.severity,
                v.code,
                escape_cell(&v.location),
                escape_cell(&v.message),
            );
        }
    }
    out
}

/// Appends the step summary to the file named by `GITHUB_STEP_SUMMARY`.
pub fn append_step_summary(path: &Path, reports: &[FileReport]) -> Result<()> {
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open step summary {}", path.display()))?;
    file.write_all(step_summary(reports).as_bytes())
        .with_context(|| format!("Failed to write step summary {}", path.display()))?;
    Ok(())
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
