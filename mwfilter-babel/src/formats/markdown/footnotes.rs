//! Footnote collection.
//!
//! A `Note` inline is replaced by a `[^N]` marker and its body queued here,
//! `N` being the 0-based order of first encounter. Definitions are written when
//! a references marker (`<references/>` and friends) has been seen, after the
//! top-level block that contained it.

use crate::ast::Block;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct FootnoteQueue<'a> {
    next_index: usize,
    pending: VecDeque<(usize, &'a [Block])>,
    flush_requested: bool,
}

impl<'a> FootnoteQueue<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a note body, returning its index.
    pub fn register(&mut self, body: &'a [Block]) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        self.pending.push_back((index, body));
        index
    }

    pub fn pop(&mut self) -> Option<(usize, &'a [Block])> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total notes seen so far.
    pub fn registered(&self) -> usize {
        self.next_index
    }

    pub fn request_flush(&mut self) {
        self.flush_requested = true;
    }

    /// Returns and clears the pending flush request.
    pub fn take_flush_request(&mut self) -> bool {
        std::mem::take(&mut self.flush_requested)
    }
}

pub fn marker(index: usize) -> String {
    format!("[^{index}]")
}

/// Whether a raw HTML fragment is one of the configured references tags.
pub fn is_references_marker(html: &str, tags: &[String]) -> bool {
    let html = html.trim();
    tags.iter().any(|tag| tag.trim().eq_ignore_ascii_case(html))
}

/// `[^N]: text`, continuation lines indented by four spaces.
pub fn format_definition(index: usize, text: &str) -> String {
    let mut out = String::new();
    for (i, line) in text.lines().enumerate() {
        if i == 0 {
            out.push_str(&marker(index));
            out.push(':');
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
        } else if !line.trim().is_empty() {
            out.push_str("    ");
            out.push_str(line);
        }
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str(&marker(index));
        out.push_str(":\n");
    }
    out
}
