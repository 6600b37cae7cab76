//! Wikilink path rewriting.
//!
//! MediaWiki links arrive from pandoc as targets whose title is the `wikilink`
//! sentinel and whose url is the raw page name, optionally followed by a
//! `#anchor`. On export every page becomes a `.md` file at the site root, so the
//! page name is percent-encoded as a path, capitalized the way MediaWiki
//! capitalizes article titles, and given the extension.
//!
//! Rules, in order:
//!     - a url starting with `#` is a same-page fragment and passes through
//!     - leading slashes are stripped; nothing left is an error
//!     - the rest is split once on `#` into page and anchor
//!     - the page is percent-encoded, keeping `/` and the unreserved set
//!     - unless the url began with `/`, the first character is uppercased
//!     - `/` is prefixed and `.md` appended unless disabled

use crate::error::LinkError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone when encoding a page name as a URL path.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Output file extension for converted pages.
pub const PAGE_EXTENSION: &str = ".md";

/// Percent-encode a page name for use as a URL path (uppercase hex).
pub fn encode_path(text: &str) -> String {
    utf8_percent_encode(text, PATH_SEGMENT).to_string()
}

/// Rewrite a wikilink url into the path of the converted page.
pub fn wikilink_to_path(
    url: &str,
    no_extension: bool,
    no_abspath: bool,
) -> Result<String, LinkError> {
    if url.starts_with('#') {
        return Ok(url.to_string());
    }

    let stripped = url.trim_start_matches('/');
    if stripped.is_empty() {
        return Err(LinkError::SlashesOnly(url.to_string()));
    }

    let (page, anchor) = match stripped.split_once('#') {
        Some((page, anchor)) => (page, anchor),
        None => (stripped, ""),
    };
    if page.is_empty() {
        return Err(LinkError::EmptyPageName(url.to_string()));
    }

    let encoded = encode_path(page);
    let mut output = String::with_capacity(encoded.len() + anchor.len() + 5);
    if !no_abspath {
        output.push('/');
    }
    if url.starts_with('/') {
        output.push_str(&encoded);
    } else {
        output.push_str(&capitalize_first(&encoded));
    }
    if !no_extension {
        output.push_str(PAGE_EXTENSION);
    }
    if !anchor.is_empty() {
        output.push('#');
        output.push_str(anchor);
    }
    Ok(output)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
