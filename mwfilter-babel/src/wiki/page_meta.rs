//! Page records from the page cache

use serde::Deserialize;

/// Per-page record written by the page cache next to each page's markup.
///
/// Only the fields the converter consumes are modeled; unknown keys in the
/// cached JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub filename: String,
    pub namespace: i64,
    pub name: String,
    /// ISO date of the last touch, e.g. `2024-05-01`
    pub date: String,
    /// Other page names redirecting here
    pub alias: Vec<String>,
    pub redirect: bool,
}

impl PageMeta {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        let name = name.into();
        PageMeta {
            filename: pagename_to_filename(&name),
            name,
            date: date.into(),
            ..PageMeta::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias.push(alias.into());
        self
    }

    /// Stored filename, or one derived from the page name.
    pub fn output_filename(&self) -> String {
        if self.filename.is_empty() {
            pagename_to_filename(&self.name)
        } else {
            self.filename.clone()
        }
    }
}

/// `"/Some page"` -> `"Some_page"`
pub fn pagename_to_filename(pagename: &str) -> String {
    pagename
        .strip_prefix('/')
        .unwrap_or(pagename)
        .replace(' ', "_")
}
