//! Error types for decoding and rendering
//!
//! Three families mirror the stages of a conversion: [`SchemaError`] is raised by
//! the Pandoc JSON decoder, [`LinkError`] by wikilink rewriting, and
//! [`FormatError`] is the crate-level error every public entry point returns.

use thiserror::Error;

/// Raised when the decoder meets JSON that does not match the Pandoc schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// The `"t"` discriminant names no known variant of `kind`
    #[error("unknown {kind} tag '{tag}'")]
    UnknownTag { kind: &'static str, tag: String },
    /// The positional payload has the wrong number of elements
    #[error("{node}: expected {expected} payload elements, found {found}")]
    Arity {
        node: String,
        expected: usize,
        found: usize,
    },
    /// A payload element has the wrong JSON type
    #[error("{node}: expected {expected}, found {found}")]
    Type {
        node: String,
        expected: &'static str,
        found: &'static str,
    },
    /// A required object key is absent
    #[error("{node}: missing field '{field}'")]
    MissingField { node: String, field: &'static str },
    /// The value has the right type but an out-of-range value
    #[error("{node}: {detail}")]
    InvalidValue { node: String, detail: String },
    /// A no-payload variant carried a `"c"` value
    #[error("{node}: unexpected payload")]
    UnexpectedPayload { node: String },
}

/// Raised when a wikilink target cannot be turned into an output path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link '{0}' consists only of slashes")]
    SlashesOnly(String),
    #[error("link '{0}' has an empty page name")]
    EmptyPageName(String),
}

/// Errors that can occur during a conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Input is not JSON at all
    #[error("invalid JSON: {0}")]
    InvalidJson(String),
    /// Input is JSON but not a Pandoc document
    #[error("schema violation: {0}")]
    SchemaViolation(#[from] SchemaError),
    /// A valid node that the renderer deliberately does not handle
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),
    #[error("link construction failed: {0}")]
    LinkConstruction(#[from] LinkError),
    #[error("not a redirect: {0}")]
    InvalidRedirect(String),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("front matter serialization failed: {0}")]
    FrontMatter(String),
}

impl FormatError {
    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        FormatError::UnsupportedFeature(what.into())
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::InvalidJson(err.to_string())
    }
}
