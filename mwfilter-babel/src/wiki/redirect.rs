//! Redirect pages
//!
//! See <https://www.mediawiki.org/wiki/Help:Redirects#Creating_a_redirect>.
//! Korean wikis also accept the localized magic word `#넘겨주기`.

use crate::error::FormatError;
use once_cell::sync::Lazy;
use regex::Regex;

static REDIRECT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#(?:REDIRECT|넘겨주기)\s*\[\[(.*?)\]\]").expect("valid redirect regex")
});

/// Target page name of a redirect page's wiki text.
pub fn parse_redirect_pagename(text: &str) -> Result<String, FormatError> {
    REDIRECT_PATTERN
        .captures(text.trim())
        .and_then(|captures| captures.get(1))
        .map(|target| target.as_str().to_string())
        .ok_or_else(|| FormatError::InvalidRedirect(text.trim().to_string()))
}

/// Whether the text is a redirect page.
pub fn is_redirect(text: &str) -> bool {
    REDIRECT_PATTERN.is_match(text.trim())
}
