//! Root document value

use super::blocks::Block;
use super::meta::{Meta, MetaValue};
use crate::wiki::PageMeta;
use std::sync::Arc;

/// `pandoc-api-version` triple. Informational only.
pub type ApiVersion = (u32, u32, u32);

/// A decoded pandoc document.
///
/// Blocks sit behind an [`Arc`] so that metadata merges produce a new document
/// sharing the block tree with the original.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub api_version: ApiVersion,
    pub meta: Meta,
    pub blocks: Arc<Vec<Block>>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Document {
            api_version: (0, 0, 0),
            meta: Meta::new(),
            blocks: Arc::new(blocks),
        }
    }

    /// Same blocks, different metadata.
    pub fn with_meta(&self, meta: Meta) -> Self {
        Document {
            api_version: self.api_version,
            meta,
            blocks: Arc::clone(&self.blocks),
        }
    }

    /// Copy with `title`, `date` and `alias` taken from the page record.
    pub fn with_page_meta(&self, page: &PageMeta) -> Self {
        let mut meta = self.meta.clone();
        meta.insert("title".to_string(), MetaValue::string(&page.name));
        meta.insert("date".to_string(), MetaValue::string(&page.date));
        let aliases = page.alias.iter().map(MetaValue::string).collect();
        meta.insert("alias".to_string(), MetaValue::MetaList(aliases));
        self.with_meta(meta)
    }

    pub fn title(&self) -> Option<String> {
        self.meta.get("title").and_then(MetaValue::as_text)
    }

    pub fn date(&self) -> Option<String> {
        self.meta.get("date").and_then(MetaValue::as_text)
    }

    /// `author` as a single value or a list of values.
    pub fn authors(&self) -> Vec<String> {
        match self.meta.get("author") {
            Some(MetaValue::MetaList(values)) => values.iter().filter_map(MetaValue::as_text).collect(),
            Some(value) => value.as_text().into_iter().collect(),
            None => Vec::new(),
        }
    }
}
