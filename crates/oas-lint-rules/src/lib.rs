//! # oas-lint-rules
//!
//! Built-in style rules for oas-lint.
//!
//! Each rule checks one API convention and is independent of the others.
//! [`default_rules`] returns them in the fixed registration order that
//! determines output order.
//!
//! ## Available Rules
//!
//! | Name | Codes | Description |
//! |------|-------|-------------|
//! | `operation-description` | `MISSING_OPERATION_DESCRIPTION` | Every operation needs a non-blank description |
//! | `property-name-case` | `INVALID_PROPERTY_NAME_CASE` | Component schema properties are lowerCamelCase |
//! | `post-created-response` | `POST_MISSING_RESPONSES`, `POST_SHOULD_RETURN_201` | POST operations declare `201 Created` |
//! | `no-generic-id-parameter` | `GENERIC_ID_PARAMETER_NAME` | Path/query identifiers are qualified, not bare `id` |
//! | `enum-upper-snake-case` | `ENUM_NOT_UPPER_SNAKE_CASE` | String enum values are UPPER_SNAKE_CASE |
//!
//! ## Usage
//!
//! ```ignore
//! use oas_lint_core::Validator;
//! use oas_lint_rules::default_rules;
//!
//! let validator = Validator::builder().rules(default_rules()).build()?;
//! let violations = validator.validate(&document);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod enum_upper_snake_case;
mod no_generic_id_parameter;
mod operation_description;
mod post_created_response;
mod property_name_case;
mod registry;

pub use enum_upper_snake_case::EnumUpperSnakeCase;
pub use no_generic_id_parameter::NoGenericIdParameter;
pub use operation_description::OperationDescription;
pub use post_created_response::PostCreatedResponse;
pub use property_name_case::PropertyNameCase;
pub use registry::{default_rules, select_rules, UnknownRuleSelector};

/// Re-export core types for convenience.
pub use oas_lint_core::{Rule, Severity, Violation, ViolationCode};
