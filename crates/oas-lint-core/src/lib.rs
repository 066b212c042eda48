//! # oas-lint-core
//!
//! Core framework for linting OpenAPI 3.x documents against API style
//! conventions.
//!
//! This crate provides the foundational types for building the linter:
//!
//! - [`Document`] and friends, a lenient in-memory model of an OpenAPI document
//! - [`parse_document`] for turning JSON or YAML text into a [`Document`]
//! - [`Rule`] trait for independent document checks
//! - [`Validator`] for running rules in a fixed, deterministic order
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use oas_lint_core::{parse_document, DocumentFormat, Validator};
//!
//! let document = parse_document("openapi.yaml", &content, DocumentFormat::Yaml)?;
//! let validator = Validator::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! for violation in validator.validate(&document) {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod document;
mod parser;
mod rule;
mod types;
mod validator;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{Config, ConfigError, RuleConfig};
pub use document::{
    Components, Document, HttpMethod, Info, Operation, Parameter, ParameterLocation, PathItem,
    Schema,
};
pub use parser::{parse_document, DocumentFormat, ParseError};
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Severity, Violation, ViolationCode};
pub use validator::{Validator, ValidatorBuilder, ValidatorError};
