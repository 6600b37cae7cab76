//! Link targets

use crate::common::links::wikilink_to_path;
use crate::error::LinkError;

/// Title value pandoc's MediaWiki reader puts on internal links.
pub const WIKILINK_TITLE: &str = "wikilink";

/// `(url, title)` pair carried by links and images.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Target {
    pub url: String,
    pub title: String,
}

impl Target {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Target {
            url: url.into(),
            title: title.into(),
        }
    }

    /// Internal link to another wiki page.
    pub fn wikilink(url: impl Into<String>) -> Self {
        Target::new(url, WIKILINK_TITLE)
    }

    pub fn is_wikilink(&self) -> bool {
        self.title == WIKILINK_TITLE
    }

    /// The href to write into the converted page.
    ///
    /// External targets are returned unchanged; wikilinks are rewritten to the
    /// path of the converted page (see [`crate::common::links`]).
    pub fn as_output_link(&self, no_extension: bool, no_abspath: bool) -> Result<String, LinkError> {
        if !self.is_wikilink() {
            return Ok(self.url.clone());
        }
        wikilink_to_path(&self.url, no_extension, no_abspath)
    }
}
