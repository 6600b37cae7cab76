//! Typed pandoc document tree
//!
//!     The node set mirrors pandoc-types 1.23: a [`Document`] holds metadata and a
//!     sequence of [`Block`]s, blocks hold [`Inline`]s or further blocks, and
//!     tables have their own substructures. The tree is built once by the decoder
//!     and only read afterwards; nodes have no parent links.

pub mod attr;
pub mod blocks;
pub mod document;
pub mod inlines;
pub mod meta;
pub mod table;
pub mod target;

pub use attr::Attr;
pub use blocks::{Block, Caption, DefinitionItem, ListAttributes, ListNumberDelim, ListNumberStyle};
pub use document::{ApiVersion, Document};
pub use inlines::{plain_text, Citation, CitationMode, Format, Inline, MathType, QuoteType};
pub use meta::{Meta, MetaValue};
pub use table::{Alignment, Cell, ColSpec, ColWidth, Row, Table, TableBody, TableFoot, TableHead};
pub use target::{Target, WIKILINK_TITLE};
