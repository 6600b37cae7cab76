//! Shared fixtures and tree builders.

#![allow(dead_code)]

use mwfilter_babel::ast::{Attr, Block, Document, Inline, Target};
use mwfilter_babel::{parse_document, render, RenderOptions};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> Document {
    let source = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"));
    parse_document(&source).unwrap_or_else(|e| panic!("failed to decode fixture {name}: {e}"))
}

pub fn render_fixture(name: &str) -> String {
    render(&load_fixture(name), None, &RenderOptions::default()).expect("render failed")
}

pub fn render_blocks(blocks: Vec<Block>) -> String {
    render_with(blocks, &RenderOptions::default()).expect("render failed")
}

pub fn render_with(
    blocks: Vec<Block>,
    options: &RenderOptions,
) -> Result<String, mwfilter_babel::FormatError> {
    render(&Document::new(blocks), None, options)
}

/// Words separated by `Space`.
pub fn words(text: &str) -> Vec<Inline> {
    let mut inlines = Vec::new();
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            inlines.push(Inline::Space);
        }
        inlines.push(Inline::str(word));
    }
    inlines
}

pub fn para(text: &str) -> Block {
    Block::Para(words(text))
}

pub fn plain(text: &str) -> Block {
    Block::Plain(words(text))
}

pub fn wikilink(text: &str, page: &str) -> Inline {
    Inline::Link(Attr::default(), words(text), Target::wikilink(page))
}
