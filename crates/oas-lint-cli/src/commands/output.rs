//! Shared output formatting for lint results.

use anyhow::Result;
use oas_lint_core::{LintResult, Severity};
use serde::Serialize;
use std::path::PathBuf;

use crate::OutputFormat;

/// Lint result for one document.
#[derive(Debug, Serialize)]
pub struct FileReport {
    /// Path of the linted document.
    pub file: PathBuf,
    /// Violations and counts.
    #[serde(flatten)]
    pub result: LintResult,
}

/// Print lint results in the specified format.
pub fn print(reports: &[FileReport], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(reports),
        OutputFormat::Json => return print_json(reports),
        OutputFormat::Compact => print_compact(reports),
        OutputFormat::Github => print_github(reports),
    }
    Ok(())
}

fn print_text(reports: &[FileReport]) {
    let (mut errors, mut warnings, mut infos) = (0, 0, 0);

    for report in reports {
        let (e, w, i) = report.result.count_by_severity();
        errors += e;
        warnings += w;
        infos += i;

        for violation in &report.result.violations {
            let severity_indicator = match violation.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
                Severity::Info => "\x1b[34minfo\x1b[0m",
            };

            println!(
                "{} at {} ({})",
                violation.code,
                violation.location,
                report.file.display()
            );
            println!("  {}: {}", severity_indicator, violation.message);
            println!();
        }
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} document(s)\x1b[0m",
        summary_color,
        errors,
        warnings,
        infos,
        reports.len()
    );
}

fn print_json(reports: &[FileReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{json}");
    Ok(())
}

fn print_compact(reports: &[FileReport]) {
    for report in reports {
        for violation in &report.result.violations {
            println!(
                "{}: {} [{}] {}: {}",
                report.file.display(),
                violation.severity,
                violation.code,
                violation.location,
                violation.message,
            );
        }
    }
}

fn print_github(reports: &[FileReport]) {
    for report in reports {
        for violation in &report.result.violations {
            println!("{}", super::github::annotation(&report.file, violation));
        }
    }
}
