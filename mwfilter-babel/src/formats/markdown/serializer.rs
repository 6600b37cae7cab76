//! Markdown/HTML serialization (pandoc tree -> text)
//!
//! [`MarkdownRenderer`] walks a [`Document`] once. Every block writes its text
//! followed by a single newline; sibling blocks are separated by a blank line
//! except after a `Plain` inside a list, which keeps tight list items tight.
//! Nested content (list items, table cells, footnote bodies) is rendered into a
//! captured buffer and then indented or wrapped by the caller.

use super::footnotes::{self, FootnoteQueue};
use super::frontmatter::write_front_matter;
use super::RenderOptions;
use crate::ast::{
    plain_text, Attr, Block, Document, Format, Inline, ListAttributes, ListNumberDelim, MathType,
    Target,
};
use crate::common::tags::{strip_block_tags, tag_quote, Tag, TextSink};
use crate::error::FormatError;

/// Width of list markers; continuation lines are indented to match.
const LIST_MARKER_WIDTH: usize = 4;

/// One-shot renderer: owns the footnote queue and nesting state of one document.
pub struct MarkdownRenderer<'a> {
    pub(super) options: &'a RenderOptions,
    pub(super) output: String,
    pub(super) footnotes: FootnoteQueue<'a>,
    pub(super) list_depth: usize,
}

impl TextSink for MarkdownRenderer<'_> {
    fn push_text(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn at_line_start(&self) -> bool {
        self.output.is_empty() || self.output.ends_with('\n')
    }
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            output: String::new(),
            footnotes: FootnoteQueue::new(),
            list_depth: 0,
        }
    }

    pub fn render(mut self, doc: &'a Document) -> Result<String, FormatError> {
        if !doc.meta.is_empty() && !self.options.no_yaml_frontmatter {
            self.output.push_str(&write_front_matter(&doc.meta)?);
            self.output.push('\n');
        }

        self.render_sequence(&doc.blocks, true)?;

        if !self.footnotes.is_empty() {
            tracing::warn!(
                count = self.footnotes.len(),
                "footnotes without a references marker, appending at end of document"
            );
            self.write_footnotes()?;
        }

        while self.output.ends_with('\n') {
            self.output.pop();
        }
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        tracing::debug!(
            blocks = doc.blocks.len(),
            footnotes = self.footnotes.registered(),
            bytes = self.output.len(),
            "rendered document"
        );
        Ok(self.output)
    }

    /// Render into a fresh buffer and return what was written.
    pub(super) fn capture<F>(&mut self, render: F) -> Result<String, FormatError>
    where
        F: FnOnce(&mut Self) -> Result<(), FormatError>,
    {
        let saved = std::mem::take(&mut self.output);
        let result = render(self);
        let captured = std::mem::replace(&mut self.output, saved);
        result.map(|()| captured)
    }

    pub(super) fn render_blocks(&mut self, blocks: &'a [Block]) -> Result<(), FormatError> {
        self.render_sequence(blocks, false)
    }

    fn render_sequence(&mut self, blocks: &'a [Block], top_level: bool) -> Result<(), FormatError> {
        let mut previous: Option<&Block> = None;
        for block in blocks {
            let start = self.output.len();
            if let Some(prev) = previous {
                let tight = self.list_depth > 0 && matches!(prev, Block::Plain(_));
                if !tight {
                    self.output.push('\n');
                }
            }
            let body_start = self.output.len();
            self.render_block(block)?;
            if self.output.len() == body_start {
                self.output.truncate(start);
            } else {
                if !self.at_line_start() {
                    self.output.push('\n');
                }
                previous = Some(block);
            }

            if top_level && self.footnotes.take_flush_request() {
                self.write_footnotes()?;
            }
        }
        Ok(())
    }

    fn render_block(&mut self, block: &'a Block) -> Result<(), FormatError> {
        match block {
            Block::Plain(inlines) | Block::Para(inlines) => self.render_inlines(inlines),
            Block::LineBlock(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str("<br>\n");
                    }
                    self.render_inlines(line)?;
                }
                Ok(())
            }
            Block::CodeBlock(attr, text) => {
                require_empty_attr(attr, "CodeBlock")?;
                let fence = "`".repeat(longest_run(text, '`').max(2) + 1);
                self.output.push_str(&fence);
                self.output.push('\n');
                self.output.push_str(text.trim_end_matches('\n'));
                self.output.push('\n');
                self.output.push_str(&fence);
                self.output.push('\n');
                Ok(())
            }
            Block::RawBlock(format, text) => self.render_raw(format, text, true),
            Block::BlockQuote(blocks) => {
                tag_quote(self, &Tag::new("blockquote"), |r| r.render_blocks(blocks))
            }
            Block::OrderedList(attrs, items) => self.render_ordered_list(attrs, items),
            Block::BulletList(items) => self.render_list(items, |_| "-".to_string()),
            Block::DefinitionList(items) => tag_quote(self, &Tag::new("dl"), |r| {
                for (term, definitions) in items {
                    tag_quote(r, &Tag::new("dt").inline(), |r| r.render_inlines(term))?;
                    r.output.push('\n');
                    for definition in definitions {
                        tag_quote(r, &Tag::new("dd"), |r| r.render_blocks(definition))?;
                    }
                }
                Ok(())
            }),
            Block::Header(level, attr, inlines) => {
                if !attr.classes.is_empty() || !attr.pairs.is_empty() {
                    return Err(FormatError::unsupported("Header with classes or attributes"));
                }
                let text = self.capture(|r| r.render_inlines(inlines))?;
                let level = (*level).clamp(1, 6) as usize;
                self.output.push_str(&"#".repeat(level));
                self.output.push(' ');
                self.output.push_str(text.replace('\n', " ").trim());
                self.output.push('\n');
                Ok(())
            }
            Block::HorizontalRule => {
                self.output.push_str("---\n");
                Ok(())
            }
            Block::Table(table) => self.render_table(table),
            Block::Figure(attr, caption, blocks) => {
                require_empty_attr(attr, "Figure")?;
                tag_quote(self, &Tag::new("figure"), |r| {
                    r.render_blocks(blocks)?;
                    if !caption.blocks.is_empty() {
                        r.quote_blocks(Tag::new("figcaption"), &caption.blocks)?;
                    } else if let Some(short) = caption.short.as_deref().filter(|s| !s.is_empty()) {
                        tag_quote(r, &Tag::new("figcaption").inline(), |r| r.render_inlines(short))?;
                        r.output.push('\n');
                    }
                    Ok(())
                })
            }
            Block::Div(attr, blocks) => {
                if attr.is_empty() {
                    self.render_blocks(blocks)
                } else {
                    let tag = Tag::new("div").with_attrs(attr.html_attributes());
                    tag_quote(self, &tag, |r| r.render_blocks(blocks))
                }
            }
        }
    }

    /// Wrap rendered blocks in `tag`, inline when they fit on one line.
    pub(super) fn quote_blocks(&mut self, tag: Tag, blocks: &'a [Block]) -> Result<(), FormatError> {
        let body = self.capture(|r| r.render_blocks(blocks))?;
        let body = body.trim_end_matches('\n');
        if body.contains('\n') {
            tag_quote(self, &tag, |r| {
                r.output.push_str(body);
                Ok::<(), FormatError>(())
            })
        } else {
            tag_quote(self, &tag.inline(), |r| {
                r.output.push_str(body);
                Ok::<(), FormatError>(())
            })?;
            self.output.push('\n');
            Ok(())
        }
    }

    fn render_ordered_list(
        &mut self,
        attrs: &ListAttributes,
        items: &'a [Vec<Block>],
    ) -> Result<(), FormatError> {
        if attrs.start < 0 {
            return Err(FormatError::unsupported(format!(
                "OrderedList starting at {}",
                attrs.start
            )));
        }
        let delimiter = match attrs.delim {
            ListNumberDelim::OneParen | ListNumberDelim::TwoParens => ')',
            ListNumberDelim::DefaultDelim | ListNumberDelim::Period => '.',
        };
        let last = i64::try_from(items.len().saturating_sub(1))
            .ok()
            .and_then(|offset| attrs.start.checked_add(offset));
        if last.is_none() {
            return Err(FormatError::unsupported(format!(
                "OrderedList numbering past {} from {}",
                i64::MAX,
                attrs.start
            )));
        }
        let start = attrs.start;
        self.render_list(items, |i| format!("{}{delimiter}", start + i as i64))
    }

    fn render_list<M>(&mut self, items: &'a [Vec<Block>], marker: M) -> Result<(), FormatError>
    where
        M: Fn(usize) -> String,
    {
        let loose = items.iter().any(|item| matches!(item.first(), Some(Block::Para(_))));
        for (i, item) in items.iter().enumerate() {
            if i > 0 && loose {
                self.output.push('\n');
            }
            self.list_depth += 1;
            let body = self.capture(|r| r.render_blocks(item));
            self.list_depth -= 1;
            let body = body?;

            let mut first = marker(i);
            let width = LIST_MARKER_WIDTH.max(first.len() + 1);
            while first.len() < width {
                first.push(' ');
            }
            let rest = " ".repeat(width);
            self.output
                .push_str(&prefix_lines(body.trim_end_matches('\n'), &first, &rest));
        }
        Ok(())
    }

    fn render_raw(&mut self, format: &Format, text: &str, block: bool) -> Result<(), FormatError> {
        if format.is_html() && footnotes::is_references_marker(text, &self.options.references_tags) {
            self.footnotes.request_flush();
            return Ok(());
        }
        if !format.is_html() && !format.is_markdown() {
            let kind = if block { "RawBlock" } else { "RawInline" };
            return Err(FormatError::unsupported(format!(
                "{kind} in format '{}'",
                format.as_str()
            )));
        }
        if block {
            self.output.push_str(text.trim_end());
            self.output.push('\n');
        } else {
            self.output.push_str(text);
        }
        Ok(())
    }

    /// Write every queued footnote definition. Notes found inside definitions are
    /// queued behind the current ones and written in the same pass.
    fn write_footnotes(&mut self) -> Result<(), FormatError> {
        if self.footnotes.is_empty() {
            return Ok(());
        }
        let mut definitions = String::new();
        while let Some((index, body)) = self.footnotes.pop() {
            let depth = std::mem::take(&mut self.list_depth);
            let text = self.capture(|r| r.render_blocks(body));
            self.list_depth = depth;
            let text = strip_block_tags(&text?);
            if !definitions.is_empty() {
                definitions.push('\n');
            }
            definitions.push_str(&footnotes::format_definition(index, text.trim()));
        }
        if !self.output.is_empty() {
            while !self.output.ends_with("\n\n") {
                self.output.push('\n');
            }
        }
        self.output.push_str(&definitions);
        // markers inside definitions do not trigger a second pass
        self.footnotes.take_flush_request();
        Ok(())
    }

    pub(super) fn render_inlines(&mut self, inlines: &'a [Inline]) -> Result<(), FormatError> {
        inlines.iter().try_for_each(|inline| self.render_inline(inline))
    }

    fn wrap(&mut self, delimiter: &str, inlines: &'a [Inline]) -> Result<(), FormatError> {
        self.output.push_str(delimiter);
        self.render_inlines(inlines)?;
        self.output.push_str(delimiter);
        Ok(())
    }

    fn html_inline(&mut self, tag: Tag, inlines: &'a [Inline]) -> Result<(), FormatError> {
        tag_quote(self, &tag.inline().without_markdown(), |r| r.render_inlines(inlines))
    }

    fn render_inline(&mut self, inline: &'a Inline) -> Result<(), FormatError> {
        match inline {
            Inline::Str(text) => {
                let at_line_start = self.at_line_start();
                self.output.push_str(&escape_text(text, at_line_start));
                Ok(())
            }
            Inline::Emph(inlines) => self.wrap("*", inlines),
            Inline::Strong(inlines) => self.wrap("**", inlines),
            Inline::Strikeout(inlines) => self.wrap("~~", inlines),
            Inline::Underline(inlines) => self.html_inline(Tag::new("u"), inlines),
            Inline::Superscript(inlines) => self.html_inline(Tag::new("sup"), inlines),
            Inline::Subscript(inlines) => self.html_inline(Tag::new("sub"), inlines),
            Inline::SmallCaps(inlines) => self.html_inline(
                Tag::new("span").with_attr("style", "font-variant: small-caps;"),
                inlines,
            ),
            Inline::Quoted(kind, inlines) => {
                let mark = kind.mark().to_string();
                self.wrap(&mark, inlines)
            }
            Inline::Cite(_, inlines) => self.html_inline(Tag::new("cite"), inlines),
            Inline::Code(attr, text) => {
                require_empty_attr(attr, "Code")?;
                self.output.push_str(&code_span(text));
                Ok(())
            }
            Inline::Space => {
                self.output.push(' ');
                Ok(())
            }
            Inline::SoftBreak => {
                self.output.push('\n');
                Ok(())
            }
            Inline::LineBreak => {
                self.output.push_str("<br>");
                Ok(())
            }
            Inline::Math(kind, text) => {
                let delimiter = match kind {
                    MathType::DisplayMath => "$$",
                    MathType::InlineMath => "$",
                };
                self.output.push_str(delimiter);
                self.output.push_str(text.trim());
                self.output.push_str(delimiter);
                Ok(())
            }
            Inline::RawInline(format, text) => self.render_raw(format, text, false),
            Inline::Link(attr, inlines, target) => self.render_link(attr, inlines, target),
            Inline::Image(attr, inlines, target) => self.render_image(attr, inlines, target),
            Inline::Note(blocks) => {
                let index = self.footnotes.register(blocks);
                self.output.push_str(&footnotes::marker(index));
                Ok(())
            }
            Inline::Span(attr, inlines) => {
                if attr.is_empty() {
                    self.render_inlines(inlines)
                } else {
                    self.html_inline(Tag::new("span").with_attrs(attr.html_attributes()), inlines)
                }
            }
        }
    }

    fn render_link(
        &mut self,
        attr: &Attr,
        inlines: &'a [Inline],
        target: &Target,
    ) -> Result<(), FormatError> {
        require_empty_attr(attr, "Link")?;
        let href = target.as_output_link(self.options.no_extension, self.options.no_abspath)?;
        self.output.push('[');
        self.render_inlines(inlines)?;
        self.output.push_str("](");
        if href.contains([' ', '(', ')']) {
            self.output.push_str(&format!("<{href}>"));
        } else {
            self.output.push_str(&href);
        }
        if !target.is_wikilink() && !target.title.is_empty() {
            let title = target.title.replace('"', "\\\"");
            self.output.push_str(&format!(" \"{title}\""));
        }
        self.output.push(')');
        Ok(())
    }

    fn render_image(
        &mut self,
        attr: &Attr,
        inlines: &'a [Inline],
        target: &Target,
    ) -> Result<(), FormatError> {
        if self.options.skip_attachments {
            return self.render_inlines(inlines);
        }
        let mut tag = Tag::new("img")
            .without_markdown()
            .with_attr("src", target.url.as_str());
        let alt = plain_text(inlines);
        if !alt.is_empty() {
            tag = tag.with_attr("alt", alt);
        }
        if !target.title.is_empty() {
            tag = tag.with_attr("title", target.title.as_str());
        }
        let tag = tag.with_attrs(attr.html_attributes());
        self.output.push_str(&tag.open());
        Ok(())
    }
}

pub(super) fn require_empty_attr(attr: &Attr, node: &str) -> Result<(), FormatError> {
    if attr.is_empty() {
        Ok(())
    } else {
        Err(FormatError::unsupported(format!("{node} with attributes")))
    }
}

/// Prefix the first line with `first` and every other non-empty line with `rest`.
fn prefix_lines(body: &str, first: &str, rest: &str) -> String {
    let mut out = String::with_capacity(body.len() + first.len());
    for (i, line) in body.split('\n').enumerate() {
        if i == 0 {
            if line.is_empty() {
                out.push_str(first.trim_end());
            } else {
                out.push_str(first);
                out.push_str(line);
            }
        } else if !line.is_empty() {
            out.push_str(rest);
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

fn longest_run(text: &str, ch: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == ch {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

fn code_span(text: &str) -> String {
    let ticks = "`".repeat(longest_run(text, '`') + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{ticks} {text} {ticks}")
    } else {
        format!("{ticks}{text}{ticks}")
    }
}

/// Backslash-escape characters Markdown would read as markup. At the start of
/// a line, text that would open a block (heading, quote, list item, rule) is
/// escaped too.
fn escape_text(text: &str, at_line_start: bool) -> String {
    let marker = if at_line_start { block_marker_at(text) } else { None };
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 2);
    let mut offset = 0;
    for (i, &ch) in chars.iter().enumerate() {
        let escape = match ch {
            '\\' | '`' | '*' | '[' | ']' | '<' | '$' => true,
            '_' => !intraword(&chars, i),
            _ => marker == Some(offset),
        };
        if escape {
            out.push('\\');
        }
        out.push(ch);
        offset += ch.len_utf8();
    }
    out
}

/// Byte offset of the character that makes `text` open a block when it starts
/// a line.
fn block_marker_at(text: &str) -> Option<usize> {
    let first = text.chars().next()?;
    let rest = &text[first.len_utf8()..];
    let opens = |rest: &str| rest.is_empty() || rest.starts_with(' ');
    match first {
        '>' => Some(0),
        '-' | '+' if opens(rest) || rest.chars().all(|c| c == first) => Some(0),
        '=' if rest.chars().all(|c| c == '=') => Some(0),
        '#' => {
            let run = text.bytes().take_while(|&b| b == b'#').count();
            (run <= 6 && opens(&text[run..])).then_some(0)
        }
        '0'..='9' => {
            let digits = text.bytes().take_while(u8::is_ascii_digit).count();
            let after = text[digits..].strip_prefix(|c: char| c == '.' || c == ')')?;
            (digits <= 9 && opens(after)).then_some(digits)
        }
        _ => None,
    }
}

/// An underscore between two alphanumerics cannot open or close emphasis.
fn intraword(chars: &[char], i: usize) -> bool {
    let alnum = |c: Option<&char>| c.is_some_and(|c| c.is_alphanumeric());
    i > 0 && alnum(chars.get(i - 1)) && alnum(chars.get(i + 1))
}
