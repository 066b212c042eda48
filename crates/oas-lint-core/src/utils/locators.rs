//! Builders for the human-readable location strings attached to violations.
//!
//! Every rule formats locations through these helpers so the same document
//! element is always described the same way.

use crate::document::HttpMethod;

/// `"<METHOD> <path>"`, e.g. `"GET /users"`.
#[must_use]
pub fn operation_location(method: HttpMethod, path: &str) -> String {
    format!("{method} {path}")
}

/// A parameter location, prefixed with the method for operation-level
/// parameters: `"GET /users/{id} param 'id' in query"` or
/// `"/users/{id} param 'id' in path"`.
#[must_use]
pub fn parameter_location(
    method: Option<HttpMethod>,
    path: &str,
    name: &str,
    location: &str,
) -> String {
    match method {
        Some(method) => format!("{method} {path} param '{name}' in {location}"),
        None => format!("{path} param '{name}' in {location}"),
    }
}

/// `"schema <name>"`.
#[must_use]
pub fn schema_location(schema: &str) -> String {
    format!("schema {schema}")
}

/// `"schema <name>.properties.<property>"`.
#[must_use]
pub fn property_location(schema: &str, property: &str) -> String {
    format!("schema {schema}.properties.{property}")
}
