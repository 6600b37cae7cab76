//! Markdown/HTML-hybrid output
//!
//! Output is Markdown wherever Markdown is lossless and raw HTML elsewhere.
//!
//! # Element Mapping Table
//!
//! | Pandoc node          | Output                                   | Notes                                  |
//! |----------------------|------------------------------------------|----------------------------------------|
//! | Header               | `#`-prefixed line (level 1-6)            | identifier dropped, classes rejected   |
//! | Para / Plain         | inline run                               | Plain is tight inside lists            |
//! | CodeBlock            | backtick fence                           | attributes rejected                    |
//! | HorizontalRule       | `---`                                    |                                        |
//! | BulletList           | `-   item`                               | continuation indented four spaces      |
//! | OrderedList          | `1.  item` / `1)  item`                  | start number kept, style decimal       |
//! | BlockQuote           | `<blockquote markdown="1">`              |                                        |
//! | DefinitionList       | `<dl>` / `<dt>` / `<dd>`                 |                                        |
//! | Figure               | `<figure>` + `<figcaption>`              | attributes rejected                    |
//! | Div / Span           | children, or `<div>` / `<span>` w/ attrs |                                        |
//! | Table                | `<table>` (see [`table`])                | attributes rejected                    |
//! | RawBlock / RawInline | passed through for html and markdown     | other formats rejected                 |
//! | Link                 | `[text](href)`                           | wikilinks rewritten, see `Target`      |
//! | Image                | `<img>`, or alt text only                | `skip_attachments`                     |
//! | Note                 | `[^N]`, definitions at references marker | definitions have HTML stripped         |
//! | Emph/Strong/Strikeout| `*` / `**` / `~~`                        |                                        |
//! | Underline/Sup/Sub    | `<u>` / `<sup>` / `<sub>`                |                                        |
//! | SmallCaps / Cite     | styled `<span>` / `<cite>`               |                                        |
//! | Math                 | `$...$` / `$$...$$`                      | text trimmed                           |
//!
//! Metadata, when present, becomes YAML front matter ahead of the body.
//!
//! Anything the table rejects is an [`FormatError::UnsupportedFeature`]: the
//! renderer never drops formatting it cannot express.

pub mod footnotes;
pub mod frontmatter;
pub mod serializer;
pub mod table;

use crate::ast::Document;
use crate::error::FormatError;
use crate::wiki::PageMeta;
use serde::Deserialize;

pub use serializer::MarkdownRenderer;

/// Output toggles for a render.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Write wikilinks relative (`Page.md`) instead of rooted (`/Page.md`)
    pub no_abspath: bool,
    pub no_yaml_frontmatter: bool,
    /// Leave `.md` off rewritten wikilinks
    pub no_extension: bool,
    /// Render images as their alt text only
    pub skip_attachments: bool,
    /// Raw HTML fragments that mark where footnote definitions go
    pub references_tags: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            no_abspath: false,
            no_yaml_frontmatter: false,
            no_extension: false,
            skip_attachments: false,
            references_tags: vec![
                "<references/>".to_string(),
                "<references />".to_string(),
                "<references>".to_string(),
            ],
        }
    }
}

/// Render a document, merging the page record into its metadata first.
pub fn render(
    doc: &Document,
    page: Option<&PageMeta>,
    options: &RenderOptions,
) -> Result<String, FormatError> {
    match page {
        Some(page) => {
            let merged = doc.with_page_meta(page);
            MarkdownRenderer::new(options).render(&merged)
        }
        None => MarkdownRenderer::new(options).render(doc),
    }
}
