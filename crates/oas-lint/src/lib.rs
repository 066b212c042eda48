//! # oas-lint
//!
//! Style linter for OpenAPI 3.x documents.
//!
//! This is the main facade crate that re-exports core functionality and the
//! built-in rules.
//!
//! ## Quick Start — `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! oas-lint = "0.1"
//! ```
//!
//! ```rust,ignore
//! // tests/openapi.rs
//! oas_lint::check_spec!("openapi.yaml");
//! ```
//!
//! The path is relative to the crate's `Cargo.toml`. Configure via an
//! `oas-lint.toml` next to it, or pass `config = "path/to/oas-lint.toml"`.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! let violations = oas_lint::lint_str("openapi.yaml", &content)?;
//! for violation in &violations {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]

use std::path::Path;

// Re-export core types and traits
pub use oas_lint_core::*;

/// Built-in rules and their registration order.
pub mod rules {
    pub use oas_lint_rules::*;
}

mod runner;

#[doc(hidden)]
pub mod __internal {
    pub use crate::runner::run_check;
}

/// Returns a validator running every built-in rule in registration order.
#[must_use]
pub fn validator() -> Validator {
    Validator::new(oas_lint_rules::default_rules())
}

/// Validates a document with every built-in rule.
#[must_use]
pub fn validate(document: &Document) -> Vec<Violation> {
    validator().validate(document)
}

/// Parses `content` and validates it with every built-in rule.
///
/// The format is taken from `name`'s extension, or sniffed from the content.
///
/// # Errors
///
/// Returns [`ParseError`] if the content is not an OpenAPI 3.x document.
pub fn lint_str(name: &str, content: &str) -> Result<Vec<Violation>, ParseError> {
    let format = DocumentFormat::detect(Path::new(name), content);
    let document = parse_document(name, content, format)?;
    Ok(validate(&document))
}

/// Generates a `#[test]` that lints an OpenAPI document.
///
/// The test panics with a report when violations reach the configured
/// `fail-on` severity.
///
/// ```rust,ignore
/// oas_lint::check_spec!("openapi.yaml");
/// oas_lint::check_spec!(admin_api, "admin/openapi.json", config = "admin/oas-lint.toml");
/// ```
#[macro_export]
macro_rules! check_spec {
    ($name:ident, $path:literal $(, config = $config:literal)? $(,)?) => {
        #[test]
        fn $name() {
            $crate::__internal::run_check(
                env!("CARGO_MANIFEST_DIR"),
                $path,
                None $(.or(Some($config)))?,
            );
        }
    };
    ($path:literal $(, config = $config:literal)? $(,)?) => {
        $crate::check_spec!(oas_lint_check_spec, $path $(, config = $config)?);
    };
}
