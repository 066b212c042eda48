//! Internal runner for `check_spec!()` macro integration.
//!
//! This module is `#[doc(hidden)]` and not part of the public API.
//! It is called by the generated test function from `oas_lint::check_spec!()`.

use oas_lint_core::{parse_document, Config, DocumentFormat, Validator};
use oas_lint_rules::default_rules;
use std::path::{Path, PathBuf};

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["oas-lint.toml", ".oas-lint.toml"];

/// Lints one OpenAPI document as part of `cargo test`.
///
/// Relative paths resolve against `manifest_dir`.
///
/// # Panics
///
/// Panics if the document or config cannot be read or parsed, or if
/// violations at or above the configured `fail-on` severity are found.
pub fn run_check(manifest_dir: &str, document_path: &str, config_path: Option<&str>) {
    let root = PathBuf::from(manifest_dir);
    let config = load_config(&root, config_path);
    let fail_on = config.fail_on_severity();

    let path = resolve(&root, document_path);
    let content = std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!("oas-lint: failed to read {}: {e}", path.display());
    });
    let format = DocumentFormat::detect(&path, &content);
    let document = parse_document(&path.display().to_string(), &content, format)
        .unwrap_or_else(|e| panic!("oas-lint: {e}"));

    let validator = Validator::builder()
        .rules(default_rules())
        .config(config)
        .build()
        .unwrap_or_else(|e| panic!("oas-lint: failed to build validator: {e}"));

    let result = validator.report(&document);
    if result.has_violations_at(fail_on) {
        panic!("{}", result.format_test_report(fail_on));
    }
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        root.join(path)
    }
}

/// Loads the explicit config, else the first candidate next to the manifest.
fn load_config(root: &Path, explicit_path: Option<&str>) -> Config {
    let path = match explicit_path {
        Some(path) => resolve(root, path),
        None => match CONFIG_CANDIDATES
            .iter()
            .map(|name| root.join(name))
            .find(|candidate| candidate.exists())
        {
            Some(found) => found,
            None => return Config::default(),
        },
    };

    Config::from_file(&path).unwrap_or_else(|e| {
        panic!("oas-lint: failed to load config {}: {e}", path.display());
    })
}
