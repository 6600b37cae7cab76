//! Input and output formats.
//!
//!     - pandoc: JSON produced by `pandoc -t json`, decoded into [`crate::ast`]
//!     - markdown: the Markdown/HTML-hybrid writer

pub mod markdown;
pub mod pandoc;
