//! MediaWiki page conversion for mwfilter
//!
//!     This crate turns the pandoc JSON of a MediaWiki page into the Markdown/HTML
//!     hybrid text that the static site is built from. Pages are fetched and
//!     cached, and pandoc is run, by the callers; this is a pure lib with no I/O,
//!     no environment access and no printing.
//!
//! Architecture
//!
//!     Data flows one way:
//!
//!         JSON text -> formats::pandoc (decode) -> ast::Document -> formats::markdown (render) -> text
//!
//!     The tree in ./ast mirrors pandoc-types: closed enums for blocks, inlines and
//!     metadata values, plus the table substructures. It is built once and only
//!     read afterwards. Adding page metadata yields a new Document that shares the
//!     block tree with the original.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # SchemaError, LinkError, FormatError
//!     ├── ast                     # Typed document tree
//!     ├── formats
//!     │   ├── pandoc              # Strict positional JSON decoder
//!     │   └── markdown            # Renderer, tables, footnotes, front matter
//!     ├── common                  # Wikilink rewriting, HTML tag helpers
//!     ├── wiki                    # Page records, redirects, settings page
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common                  # Fixture loading and tree builders
//!     ├── pandoc                  # Decoder tests over JSON fixtures
//!     ├── markdown                # Render tests, snapshots, comrak re-parsing
//!     └── fixtures
//!
//! Errors
//!
//!     Decoding is strict. A tag, payload length or element type that pandoc-types
//!     1.23 would not produce fails with a SchemaError, since it means the JSON came
//!     from an incompatible pandoc. Rendering fails with UnsupportedFeature rather
//!     than writing output that silently loses formatting. Both are per document:
//!     the caller decides whether to skip the page or stop.

pub mod ast;
pub mod common;
pub mod error;
pub mod formats;
pub mod wiki;

pub use ast::Document;
pub use error::{FormatError, LinkError, SchemaError};
pub use formats::markdown::{render, MarkdownRenderer, RenderOptions};
pub use formats::pandoc::parse_document;
pub use wiki::{PageMeta, Settings};

/// Decode pandoc JSON, merge the page record if given, and render it.
pub fn convert(
    json: &str,
    page: Option<&PageMeta>,
    options: &RenderOptions,
) -> Result<String, FormatError> {
    let document = parse_document(json)?;
    render(&document, page, options)
}
