//! Parsing JSON and YAML text into a [`Document`].
//!
//! The parser is the loud boundary in front of the validator: anything that
//! is not a well-formed OpenAPI 3.x object is rejected here with a
//! diagnostic, so validation itself never fails.

use crate::document::Document;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Serialization format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl DocumentFormat {
    /// Infers the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Self::Yaml)
        } else {
            None
        }
    }

    /// Guesses the format from content: a leading `{` means JSON.
    #[must_use]
    pub fn sniff(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Yaml
        }
    }

    /// Uses the file extension when it is conclusive, content otherwise.
    #[must_use]
    pub fn detect(path: &Path, content: &str) -> Self {
        Self::from_path(path).unwrap_or_else(|| Self::sniff(content))
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Errors produced while turning text into a [`Document`].
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    /// The input contains nothing but whitespace.
    #[error("{name} is empty")]
    #[diagnostic(code(oas_lint::parse::empty))]
    Empty {
        /// Name of the document (usually its path).
        name: String,
    },

    /// The input is not valid JSON/YAML or does not have the shape of an
    /// OpenAPI document.
    #[error("Failed to parse {name} as {format}: {message}")]
    #[diagnostic(code(oas_lint::parse::syntax))]
    Syntax {
        /// Name of the document.
        name: String,
        /// Format the input was parsed as.
        format: DocumentFormat,
        /// Message from the underlying parser.
        message: String,
        /// Full input text.
        #[source_code]
        src: NamedSource<String>,
        /// Position of the error.
        #[label("{format} error here")]
        span: SourceSpan,
    },

    /// The root object lacks an `openapi` field.
    #[error("{name} does not declare an `openapi` version")]
    #[diagnostic(
        code(oas_lint::parse::missing_version),
        help("add `openapi: 3.0.3` at the document root")
    )]
    MissingVersion {
        /// Name of the document.
        name: String,
    },

    /// The declared version is not an OpenAPI 3.x version.
    #[error("{name} declares unsupported OpenAPI version `{version}`")]
    #[diagnostic(
        code(oas_lint::parse::unsupported_version),
        help("only OpenAPI 3.x documents are supported")
    )]
    UnsupportedVersion {
        /// Name of the document.
        name: String,
        /// The declared version.
        version: String,
    },
}

/// Parses `content` into a [`Document`].
///
/// `name` is only used for diagnostics.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is blank, malformed, or not an
/// OpenAPI 3.x document.
pub fn parse_document(
    name: &str,
    content: &str,
    format: DocumentFormat,
) -> Result<Document, ParseError> {
    if content.trim().is_empty() {
        return Err(ParseError::Empty {
            name: name.to_string(),
        });
    }

    debug!("Parsing {} as {}", name, format);

    let document: Document = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| {
            let offset = offset_for(content, e.line(), e.column());
            syntax_error(name, format, content, e.to_string(), offset)
        })?,
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
            let offset = e.location().map_or(0, |loc| loc.index());
            syntax_error(name, format, content, e.to_string(), offset)
        })?,
    };

    let Some(version) = document.openapi.as_deref() else {
        return Err(ParseError::MissingVersion {
            name: name.to_string(),
        });
    };
    if version.split('.').next() != Some("3") {
        return Err(ParseError::UnsupportedVersion {
            name: name.to_string(),
            version: version.to_string(),
        });
    }

    debug!(
        "Parsed {}: {} path(s), {} schema(s)",
        name,
        document.paths.len(),
        document.schemas().len()
    );

    Ok(document)
}

fn syntax_error(
    name: &str,
    format: DocumentFormat,
    content: &str,
    message: String,
    offset: usize,
) -> ParseError {
    ParseError::Syntax {
        name: name.to_string(),
        format,
        message,
        src: NamedSource::new(name, content.to_string()),
        span: SourceSpan::from((offset.min(content.len()), 0)),
    }
}

/// Calculates byte offset for a 1-indexed line and column.
///
/// Returns the end of the input when the line is out of bounds.
fn offset_for(content: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let mut offset = 0;
    for (i, line_content) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return offset + column.saturating_sub(1).min(line_content.len());
        }
        offset += line_content.len();
    }

    offset
}
