//! Utility functions for rule implementations.

pub mod locators;
pub mod naming;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use locators::{operation_location, parameter_location, property_location, schema_location};
#[doc(inline)]
pub use naming::{is_blank, is_lower_camel_case, is_upper_snake_case};
