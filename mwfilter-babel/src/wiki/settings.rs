//! Settings page: which wiki pages to export.
//!
//! The settings page is ordinary wiki text converted by pandoc. Each section
//! header selects a list by its identifier and the bullet list that follows
//! supplies the entries:
//!
//!     == allowpages ==
//!     * Main Page
//!     == denypatterns ==
//!     * Draft/.*
//!
//! Entries are the concatenated `Str` runs of a single-`Plain` item, with each
//! `Space` written as `_` to match page filenames. Any other block between a
//! header and its list ends the section.

use crate::ast::{Block, Document, Inline};
use crate::error::FormatError;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Settings {
    pub allow_pages: Vec<String>,
    pub allow_patterns: Vec<String>,
    pub deny_pages: Vec<String>,
    pub deny_patterns: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum Section {
    AllowPages,
    AllowPatterns,
    DenyPages,
    DenyPatterns,
}

impl Section {
    fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "allowpages" => Some(Section::AllowPages),
            "allowpatterns" => Some(Section::AllowPatterns),
            "denypages" => Some(Section::DenyPages),
            "denypatterns" => Some(Section::DenyPatterns),
            _ => None,
        }
    }
}

impl Settings {
    pub fn from_document(doc: &Document) -> Self {
        let mut settings = Settings::default();
        let mut cursor: Option<Section> = None;

        for block in doc.blocks.iter() {
            match block {
                Block::Header(_, attr, _) => cursor = Section::from_identifier(&attr.identifier),
                Block::BulletList(items) => {
                    let Some(section) = cursor else { continue };
                    let entries = items.iter().filter_map(|item| match item.as_slice() {
                        [Block::Plain(inlines)] => Some(entry_text(inlines)),
                        _ => None,
                    });
                    settings.list_mut(section).extend(entries);
                }
                _ => cursor = None,
            }
        }
        tracing::debug!(
            allow_pages = settings.allow_pages.len(),
            allow_patterns = settings.allow_patterns.len(),
            deny_pages = settings.deny_pages.len(),
            deny_patterns = settings.deny_patterns.len(),
            "read settings page"
        );
        settings
    }

    fn list_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::AllowPages => &mut self.allow_pages,
            Section::AllowPatterns => &mut self.allow_patterns,
            Section::DenyPages => &mut self.deny_pages,
            Section::DenyPatterns => &mut self.deny_patterns,
        }
    }

    /// Compile the patterns. Each one must match at the start of a title.
    pub fn compile(&self) -> Result<TitleFilter, FormatError> {
        Ok(TitleFilter {
            allow_pages: self.allow_pages.clone(),
            allow_patterns: compile_patterns(&self.allow_patterns)?,
            deny_pages: self.deny_pages.clone(),
            deny_patterns: compile_patterns(&self.deny_patterns)?,
        })
    }
}

fn entry_text(inlines: &[Inline]) -> String {
    let mut entry = String::new();
    for inline in inlines {
        match inline {
            Inline::Str(text) => entry.push_str(text),
            Inline::Space => entry.push('_'),
            _ => {}
        }
    }
    entry
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>, FormatError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(&format!("^(?:{pattern})"))
                .map_err(|e| FormatError::InvalidPattern(format!("{pattern}: {e}")))
        })
        .collect()
}

/// Compiled [`Settings`].
#[derive(Debug, Clone)]
pub struct TitleFilter {
    allow_pages: Vec<String>,
    allow_patterns: Vec<Regex>,
    deny_pages: Vec<String>,
    deny_patterns: Vec<Regex>,
}

impl TitleFilter {
    /// Allow lists win over deny lists; titles on neither are allowed.
    pub fn allows(&self, title: &str) -> bool {
        if self.allow_pages.iter().any(|page| page == title) {
            return true;
        }
        if self.allow_patterns.iter().any(|re| re.is_match(title)) {
            return true;
        }
        if self.deny_pages.iter().any(|page| page == title) {
            return false;
        }
        if self.deny_patterns.iter().any(|re| re.is_match(title)) {
            return false;
        }
        true
    }
}
