//! Lenient in-memory model of an OpenAPI 3.x document.
//!
//! Only the parts of the document the rules inspect are modelled; every
//! other field is ignored during deserialization. Optional containers
//! default to empty and `null` entries are dropped while deserializing,
//! so rules can iterate without presence checks.

use crate::utils::naming::is_blank;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of an OpenAPI document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Declared OpenAPI version (e.g. `"3.0.3"`).
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub openapi: Option<String>,

    /// Document metadata.
    #[serde(default)]
    pub info: Option<Info>,

    /// Endpoints keyed by path template, in declaration order.
    #[serde(default, deserialize_with = "de::nullable_map")]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable components.
    #[serde(default, deserialize_with = "de::nullable_struct")]
    pub components: Components,
}

impl Document {
    /// Iterates over every operation in path declaration order, then
    /// canonical method order.
    pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, operation)| (path.as_str(), method, operation))
        })
    }

    /// Component schemas in declaration order.
    #[must_use]
    pub fn schemas(&self) -> &IndexMap<String, Schema> {
        &self.components.schemas
    }
}

/// Document metadata (`info` object).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    #[serde(default)]
    pub title: Option<String>,
    /// API version.
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub version: Option<String>,
}

/// Reusable components (`components` object).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Named schemas in declaration order.
    #[serde(default, deserialize_with = "de::nullable_map")]
    pub schemas: IndexMap<String, Schema>,
}

/// HTTP methods an operation can be bound to.
///
/// The declaration order is the canonical traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `PUT`
    Put,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
    /// `OPTIONS`
    Options,
    /// `HEAD`
    Head,
    /// `PATCH`
    Patch,
    /// `TRACE`
    Trace,
}

impl HttpMethod {
    /// All methods in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Get,
        Self::Put,
        Self::Post,
        Self::Delete,
        Self::Options,
        Self::Head,
        Self::Patch,
        Self::Trace,
    ];

    /// Upper-case method name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Trace => "TRACE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single endpoint (`paths` entry).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation on this path.
    #[serde(default, deserialize_with = "de::nullable_seq")]
    pub parameters: Vec<Parameter>,

    /// `GET` operation.
    #[serde(default)]
    pub get: Option<Operation>,
    /// `PUT` operation.
    #[serde(default)]
    pub put: Option<Operation>,
    /// `POST` operation.
    #[serde(default)]
    pub post: Option<Operation>,
    /// `DELETE` operation.
    #[serde(default)]
    pub delete: Option<Operation>,
    /// `OPTIONS` operation.
    #[serde(default)]
    pub options: Option<Operation>,
    /// `HEAD` operation.
    #[serde(default)]
    pub head: Option<Operation>,
    /// `PATCH` operation.
    #[serde(default)]
    pub patch: Option<Operation>,
    /// `TRACE` operation.
    #[serde(default)]
    pub trace: Option<Operation>,
}

impl PathItem {
    /// Returns the operation bound to `method`, if declared.
    #[must_use]
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Trace => self.trace.as_ref(),
        }
    }

    /// Iterates over declared operations in canonical method order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }
}

/// A single HTTP operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Unique operation identifier.
    #[serde(default)]
    pub operation_id: Option<String>,
    /// Operation-scoped parameters.
    #[serde(default, deserialize_with = "de::nullable_seq")]
    pub parameters: Vec<Parameter>,
    /// Response declarations keyed by status code. Only the key set is used.
    #[serde(default, deserialize_with = "de::string_keyed_map")]
    pub responses: IndexMap<String, serde_json::Value>,
}

impl Operation {
    /// Returns `true` if the description is present and not blank.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| !is_blank(d))
    }
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Templated path segment.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
}

impl ParameterLocation {
    /// Parses the exact, case-sensitive `in` value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "path" => Some(Self::Path),
            "query" => Some(Self::Query),
            "header" => Some(Self::Header),
            "cookie" => Some(Self::Cookie),
            _ => None,
        }
    }
}

/// An operation or path-level parameter.
///
/// `name` and `in` are kept raw since `$ref` parameters carry neither and
/// location strings must echo the declared values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Declared name.
    #[serde(default)]
    pub name: Option<String>,
    /// Declared `in` value.
    #[serde(default, rename = "in")]
    pub location: Option<String>,
    /// Parameter schema, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

impl Parameter {
    /// Returns the parsed location if `in` is one of the known literals.
    #[must_use]
    pub fn parsed_location(&self) -> Option<ParameterLocation> {
        self.location.as_deref().and_then(ParameterLocation::parse)
    }
}

/// A schema object. Only naming-relevant parts are modelled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Object properties in declaration order. A `null` property schema
    /// keeps its name.
    #[serde(default, deserialize_with = "de::string_keyed_map")]
    pub properties: IndexMap<String, Option<Schema>>,

    /// Enumerated values; members may be any JSON value.
    #[serde(
        default,
        rename = "enum",
        deserialize_with = "de::nullable_seq",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub enum_values: Vec<serde_json::Value>,
}

impl Schema {
    /// String members of the enum, in list order.
    pub fn string_enum_values(&self) -> impl Iterator<Item = &str> {
        self.enum_values.iter().filter_map(serde_json::Value::as_str)
    }
}

/// Deserialization helpers that fold `null` into empty containers.
mod de {
    use indexmap::IndexMap;
    use serde::de::{Deserialize, DeserializeOwned, Deserializer, MapAccess, Visitor};
    use std::fmt;
    use std::marker::PhantomData;

    /// A scalar normalized to a string. YAML allows integer, float and
    /// boolean keys (`201:`); `null` becomes `None`.
    struct Scalar(Option<String>);

    impl<'de> Deserialize<'de> for Scalar {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct ScalarVisitor;

            impl<'de> Visitor<'de> for ScalarVisitor {
                type Value = Scalar;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a string or scalar value")
                }

                fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Scalar, E> {
                    Ok(Scalar(Some(v.to_owned())))
                }

                fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Scalar, E> {
                    Ok(Scalar(Some(v)))
                }

                fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Scalar, E> {
                    Ok(Scalar(Some(v.to_string())))
                }

                fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Scalar, E> {
                    Ok(Scalar(Some(v.to_string())))
                }

                fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Scalar, E> {
                    Ok(Scalar(Some(v.to_string())))
                }

                fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<Scalar, E> {
                    Ok(Scalar(Some(v.to_string())))
                }

                fn visit_unit<E: serde::de::Error>(self) -> Result<Scalar, E> {
                    Ok(Scalar(None))
                }

                fn visit_none<E: serde::de::Error>(self) -> Result<Scalar, E> {
                    Ok(Scalar(None))
                }
            }

            deserializer.deserialize_any(ScalarVisitor)
        }
    }

    struct StringKeyedMap<V>(IndexMap<String, V>);

    impl<'de, V: Deserialize<'de>> Deserialize<'de> for StringKeyedMap<V> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct MapVisitor<V>(PhantomData<V>);

            impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
                type Value = StringKeyedMap<V>;

                fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    f.write_str("a map")
                }

                fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                    let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
                    while let Some((key, value)) = access.next_entry::<Scalar, V>()? {
                        if let Some(key) = key.0 {
                            map.insert(key, value);
                        }
                    }
                    Ok(StringKeyedMap(map))
                }
            }

            deserializer.deserialize_map(MapVisitor(PhantomData))
        }
    }

    /// Map with scalar keys coerced to strings; a `null` map is empty.
    pub(super) fn string_keyed_map<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        let map = Option::<StringKeyedMap<V>>::deserialize(deserializer)?;
        Ok(map.map(|m| m.0).unwrap_or_default())
    }

    /// Like [`string_keyed_map`], additionally dropping `null` values.
    pub(super) fn nullable_map<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        let map = string_keyed_map::<D, Option<V>>(deserializer)?;
        Ok(map
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect())
    }

    /// Sequence with `null` members dropped; a `null` sequence is empty.
    pub(super) fn nullable_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let seq = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
        Ok(seq.unwrap_or_default().into_iter().flatten().collect())
    }

    /// A `null` struct deserializes to its default.
    pub(super) fn nullable_struct<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// Any scalar as a string, e.g. `openapi: 3.0` read by YAML as a float.
    pub(super) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(|s| s.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(src: &str) -> Document {
        serde_json::from_str(src).expect("valid document")
    }

    fn from_yaml(src: &str) -> Document {
        serde_yaml::from_str(src).expect("valid document")
    }

    #[test]
    fn test_empty_object_has_no_paths_or_schemas() {
        let doc = from_json("{}");
        assert!(doc.paths.is_empty());
        assert!(doc.schemas().is_empty());
    }

    #[test]
    fn test_null_containers_default_to_empty() {
        let doc = from_json(r#"{"paths": null, "components": null}"#);
        assert!(doc.paths.is_empty());
        assert!(doc.schemas().is_empty());

        let doc = from_json(r#"{"components": {"schemas": null}}"#);
        assert!(doc.schemas().is_empty());
    }

    #[test]
    fn test_null_entries_are_dropped() {
        let doc = from_json(
            r#"{
                "paths": {
                    "/a": null,
                    "/b": {"parameters": [null, {"name": "x", "in": "query"}], "get": null}
                },
                "components": {"schemas": {"A": null, "B": {"properties": {"p": null}}}}
            }"#,
        );
        assert_eq!(doc.paths.len(), 1);
        let item = &doc.paths["/b"];
        assert_eq!(item.parameters.len(), 1);
        assert!(item.get.is_none());
        assert_eq!(doc.schemas().len(), 1);
        assert_eq!(doc.schemas()["B"].properties.get("p"), Some(&None));
    }

    #[test]
    fn test_operations_follow_canonical_method_order() {
        let doc = from_json(
            r#"{"paths": {"/x": {
                "trace": {}, "post": {}, "get": {}, "delete": {}
            }}}"#,
        );
        let methods: Vec<HttpMethod> = doc.operations().map(|(_, m, _)| m).collect();
        assert_eq!(
            methods,
            vec![
                HttpMethod::Get,
                HttpMethod::Post,
                HttpMethod::Delete,
                HttpMethod::Trace
            ]
        );
    }

    #[test]
    fn test_paths_keep_declaration_order() {
        let doc = from_json(r#"{"paths": {"/z": {}, "/a": {}, "/m": {}}}"#);
        let paths: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, vec!["/z", "/a", "/m"]);
    }

    #[test]
    fn test_yaml_integer_response_keys_become_strings() {
        let doc = from_yaml(
            r"
paths:
  /users:
    post:
      responses:
        201:
          description: Created
        '400':
          description: Bad request
",
        );
        let post = doc.paths["/users"].post.as_ref().expect("post");
        assert!(post.responses.contains_key("201"));
        assert!(post.responses.contains_key("400"));
    }

    #[test]
    fn test_null_response_value_keeps_key() {
        let doc = from_json(r#"{"paths": {"/u": {"post": {"responses": {"201": null}}}}}"#);
        let post = doc.paths["/u"].post.as_ref().expect("post");
        assert!(post.responses.contains_key("201"));
    }

    #[test]
    fn test_yaml_float_version_is_stringified() {
        let doc = from_yaml("openapi: 3.1\n");
        assert_eq!(doc.openapi.as_deref(), Some("3.1"));
    }

    #[test]
    fn test_string_enum_values_skip_non_strings() {
        let doc = from_json(
            r#"{"components": {"schemas": {"S": {"enum": ["A", 1, null, true, "b"]}}}}"#,
        );
        let values: Vec<&str> = doc.schemas()["S"].string_enum_values().collect();
        assert_eq!(values, vec!["A", "b"]);
    }

    #[test]
    fn test_has_description() {
        let mut op = Operation::default();
        assert!(!op.has_description());
        op.description = Some("  \n\t".to_string());
        assert!(!op.has_description());
        op.description = Some("\u{A0}\u{A0}".to_string());
        assert!(op.has_description());
        op.description = Some("Lists users".to_string());
        assert!(op.has_description());
    }

    #[test]
    fn test_operation_fields_use_camel_case_keys() {
        let doc = from_yaml(
            r"
paths:
  /users:
    get:
      operationId: listUsers
      summary: List users
",
        );
        let get = doc.paths["/users"].get.as_ref().expect("get");
        assert_eq!(get.operation_id.as_deref(), Some("listUsers"));
        assert_eq!(get.summary.as_deref(), Some("List users"));
    }

    #[test]
    fn test_parameter_location_is_case_sensitive() {
        assert_eq!(ParameterLocation::parse("path"), Some(ParameterLocation::Path));
        assert_eq!(ParameterLocation::parse("query"), Some(ParameterLocation::Query));
        assert_eq!(ParameterLocation::parse("Query"), None);
        assert_eq!(ParameterLocation::parse("body"), None);
    }
}
