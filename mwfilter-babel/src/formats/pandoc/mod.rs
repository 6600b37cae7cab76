//! Pandoc JSON input
//!
//! The MediaWiki reader of pandoc (`pandoc -f mediawiki -t json`) produces the
//! documents this crate converts. The JSON is positional: each node is
//! `{"t": tag, "c": payload}` where the payload is an array whose slots have a
//! fixed meaning per tag, for example `Header` is `[level, attr, inlines]` and a
//! table `Cell` is `[attr, alignment, row_span, col_span, blocks]`.
//!
//! Decoding targets the pandoc-types 1.23 family. The api version is recorded
//! on the [`Document`] but never branched on; a document from an incompatible
//! pandoc shows up as a [`crate::error::SchemaError`].

pub mod decoder;
mod payload;

pub use decoder::{decode_attr, decode_block, decode_document, decode_inline, decode_meta, decode_meta_value, decode_target};

use crate::ast::Document;
use crate::error::FormatError;
use serde_json::Value;

/// Parse pandoc JSON text into a [`Document`].
pub fn parse_document(source: &str) -> Result<Document, FormatError> {
    let value: Value = serde_json::from_str(source)?;
    let document = decode_document(&value)?;
    tracing::debug!(
        blocks = document.blocks.len(),
        meta = document.meta.len(),
        api_version = ?document.api_version,
        "decoded pandoc document"
    );
    Ok(document)
}
