//! Inline (text-level) nodes

use super::attr::Attr;
use super::blocks::Block;
use super::target::Target;

/// Output format tag carried by raw nodes, e.g. `"html"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format(pub String);

impl Format {
    pub fn new(name: impl Into<String>) -> Self {
        Format(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_html(&self) -> bool {
        matches!(self.0.as_str(), "html" | "html4" | "html5")
    }

    pub fn is_markdown(&self) -> bool {
        self.0.starts_with("markdown") || self.0 == "commonmark" || self.0 == "gfm"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteType {
    SingleQuote,
    DoubleQuote,
}

impl QuoteType {
    pub fn mark(self) -> char {
        match self {
            QuoteType::SingleQuote => '\'',
            QuoteType::DoubleQuote => '"',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathType {
    DisplayMath,
    InlineMath,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationMode {
    AuthorInText,
    SuppressAuthor,
    NormalCitation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    pub id: String,
    pub prefix: Vec<Inline>,
    pub suffix: Vec<Inline>,
    pub mode: CitationMode,
    pub note_num: i64,
    pub hash: i64,
}

/// Text-level node. Variants and payloads follow pandoc-types.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Str(String),
    Emph(Vec<Inline>),
    Underline(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikeout(Vec<Inline>),
    Superscript(Vec<Inline>),
    Subscript(Vec<Inline>),
    SmallCaps(Vec<Inline>),
    Quoted(QuoteType, Vec<Inline>),
    Cite(Vec<Citation>, Vec<Inline>),
    Code(Attr, String),
    Space,
    SoftBreak,
    LineBreak,
    Math(MathType, String),
    RawInline(Format, String),
    Link(Attr, Vec<Inline>, Target),
    Image(Attr, Vec<Inline>, Target),
    /// Footnote body, embedded where it is referenced
    Note(Vec<Block>),
    Span(Attr, Vec<Inline>),
}

impl Inline {
    pub fn str(text: impl Into<String>) -> Self {
        Inline::Str(text.into())
    }

    /// Discriminant tag as it appears in pandoc JSON.
    pub fn tag(&self) -> &'static str {
        match self {
            Inline::Str(_) => "Str",
            Inline::Emph(_) => "Emph",
            Inline::Underline(_) => "Underline",
            Inline::Strong(_) => "Strong",
            Inline::Strikeout(_) => "Strikeout",
            Inline::Superscript(_) => "Superscript",
            Inline::Subscript(_) => "Subscript",
            Inline::SmallCaps(_) => "SmallCaps",
            Inline::Quoted(..) => "Quoted",
            Inline::Cite(..) => "Cite",
            Inline::Code(..) => "Code",
            Inline::Space => "Space",
            Inline::SoftBreak => "SoftBreak",
            Inline::LineBreak => "LineBreak",
            Inline::Math(..) => "Math",
            Inline::RawInline(..) => "RawInline",
            Inline::Link(..) => "Link",
            Inline::Image(..) => "Image",
            Inline::Note(_) => "Note",
            Inline::Span(..) => "Span",
        }
    }
}

/// Concatenate the visible text of an inline run, with markup dropped.
///
/// Spaces and breaks become a single space, notes contribute nothing.
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    push_plain_text(inlines, &mut out);
    out
}

fn push_plain_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Str(text) | Inline::Code(_, text) | Inline::Math(_, text) => out.push_str(text),
            Inline::Space | Inline::SoftBreak | Inline::LineBreak => out.push(' '),
            Inline::Emph(children)
            | Inline::Underline(children)
            | Inline::Strong(children)
            | Inline::Strikeout(children)
            | Inline::Superscript(children)
            | Inline::Subscript(children)
            | Inline::SmallCaps(children)
            | Inline::Cite(_, children)
            | Inline::Link(_, children, _)
            | Inline::Image(_, children, _)
            | Inline::Span(_, children) => push_plain_text(children, out),
            Inline::Quoted(kind, children) => {
                out.push(kind.mark());
                push_plain_text(children, out);
                out.push(kind.mark());
            }
            Inline::RawInline(..) | Inline::Note(_) => {}
        }
    }
}
