//! Raw HTML tag helpers.
//!
//! Structures without a lossless Markdown form (tables, definition lists,
//! figures, attributed spans) are written as HTML. The `markdown="1"` attribute
//! asks Markdown processors that support it (python-markdown's `md_in_html`,
//! kramdown, PHP Markdown Extra) to keep parsing Markdown inside the element.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?([A-Za-z][A-Za-z0-9]*)\b[^>]*>").expect("valid tag regex"));

/// Elements that structure blocks; inline markup is not in this list.
const BLOCK_TAGS: &[&str] = &[
    "blockquote", "br", "caption", "dd", "div", "dl", "dt", "figcaption", "figure", "hr", "p",
    "pre", "table", "tbody", "td", "tfoot", "th", "thead", "tr",
];

/// Something text can be appended to.
pub trait TextSink {
    fn push_text(&mut self, text: &str);

    /// Whether the output so far ends with a line break.
    fn at_line_start(&self) -> bool;
}

impl TextSink for String {
    fn push_text(&mut self, text: &str) {
        self.push_str(text);
    }

    fn at_line_start(&self) -> bool {
        self.is_empty() || self.ends_with('\n')
    }
}

/// An HTML element to wrap rendered content in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    markdown: bool,
    block: bool,
    attrs: Vec<(String, String)>,
}

impl Tag {
    /// Block-style element carrying `markdown="1"`.
    pub fn new(name: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            markdown: true,
            block: true,
            attrs: Vec::new(),
        }
    }

    /// Open and close on the same line as the content.
    pub fn inline(mut self) -> Self {
        self.block = false;
        self
    }

    pub fn without_markdown(mut self) -> Self {
        self.markdown = false;
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn with_attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs
            .extend(attrs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn is_block(&self) -> bool {
        self.block
    }

    pub fn open(&self) -> String {
        let mut out = format!("<{}", self.name);
        if self.markdown {
            out.push_str(" markdown=\"1\"");
        }
        for (key, value) in &self.attrs {
            out.push_str(&format!(" {key}=\"{}\"", escape_attribute(value)));
        }
        out.push('>');
        out
    }

    pub fn close(&self) -> String {
        format!("</{}>", self.name)
    }
}

/// Write `tag`, the content produced by `body`, and the closing tag.
///
/// Block style puts the tags on their own lines and ends with a newline;
/// inline style writes everything contiguously.
pub fn tag_quote<S, F, E>(sink: &mut S, tag: &Tag, body: F) -> Result<(), E>
where
    S: TextSink + ?Sized,
    F: FnOnce(&mut S) -> Result<(), E>,
{
    sink.push_text(&tag.open());
    if tag.block {
        sink.push_text("\n");
    }
    body(sink)?;
    if tag.block && !sink.at_line_start() {
        sink.push_text("\n");
    }
    sink.push_text(&tag.close());
    if tag.block {
        sink.push_text("\n");
    }
    Ok(())
}

/// Remove block-level tags, keeping the text between them.
///
/// Inline tags (`<u>`, `<img>`, autolinks) stay, and a `<` escaped with a
/// backslash is text, not a tag.
pub fn strip_block_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for captures in TAG_PATTERN.captures_iter(text) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let name = name.as_str();
        if is_escaped(text, whole.start())
            || !BLOCK_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
        {
            continue;
        }
        out.push_str(&text[last..whole.start()]);
        last = whole.end();
    }
    out.push_str(&text[last..]);
    out
}

/// An odd run of backslashes before `at` escapes the character there.
fn is_escaped(text: &str, at: usize) -> bool {
    let backslashes = text[..at].bytes().rev().take_while(|&b| b == b'\\').count();
    backslashes % 2 == 1
}

/// Escape a value for use inside a double-quoted HTML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
