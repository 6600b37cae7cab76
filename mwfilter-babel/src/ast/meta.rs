//! Document metadata values

use super::blocks::Block;
use super::inlines::{plain_text, Inline};
use std::collections::BTreeMap;

/// Metadata map, keyed the way pandoc sorts it.
pub type Meta = BTreeMap<String, MetaValue>;

#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    MetaMap(Meta),
    MetaList(Vec<MetaValue>),
    MetaBool(bool),
    MetaString(String),
    MetaInlines(Vec<Inline>),
    MetaBlocks(Vec<Block>),
}

impl MetaValue {
    pub fn string(text: impl Into<String>) -> Self {
        MetaValue::MetaString(text.into())
    }

    pub fn tag(&self) -> &'static str {
        match self {
            MetaValue::MetaMap(_) => "MetaMap",
            MetaValue::MetaList(_) => "MetaList",
            MetaValue::MetaBool(_) => "MetaBool",
            MetaValue::MetaString(_) => "MetaString",
            MetaValue::MetaInlines(_) => "MetaInlines",
            MetaValue::MetaBlocks(_) => "MetaBlocks",
        }
    }

    /// Text of a string-like value. Inline runs are flattened.
    pub fn as_text(&self) -> Option<String> {
        match self {
            MetaValue::MetaString(text) => Some(text.clone()),
            MetaValue::MetaInlines(inlines) => Some(plain_text(inlines)),
            MetaValue::MetaBlocks(blocks) => match blocks.as_slice() {
                [Block::Plain(inlines)] | [Block::Para(inlines)] => Some(plain_text(inlines)),
                _ => None,
            },
            _ => None,
        }
    }
}
