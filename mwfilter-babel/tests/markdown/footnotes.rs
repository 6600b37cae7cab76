//! Footnote markers and definitions

use crate::common::{para, render_blocks, words};
use mwfilter_babel::ast::{Attr, Block, Format, Inline};

fn note(text: &str) -> Inline {
    Inline::Note(vec![para(text)])
}

fn references() -> Block {
    Block::RawBlock(Format::new("html"), "<references/>".into())
}

#[test]
fn notes_are_numbered_in_order() {
    let out = render_blocks(vec![
        Block::Para(vec![Inline::str("a"), note("x"), Inline::Space, Inline::str("b"), note("y")]),
        Block::Para(vec![Inline::str("c"), note("z")]),
        references(),
    ]);
    assert_eq!(
        out,
        "a[^0] b[^1]\n\nc[^2]\n\n[^0]: x\n\n[^1]: y\n\n[^2]: z\n"
    );
}

#[test]
fn definitions_follow_the_marker_block() {
    let out = render_blocks(vec![
        Block::Para(vec![Inline::str("text"), note("n")]),
        references(),
        para("after"),
    ]);
    assert_eq!(out, "text[^0]\n\n[^0]: n\n\nafter\n");
}

#[test]
fn leftover_notes_go_to_the_end() {
    let out = render_blocks(vec![
        Block::Para(vec![Inline::str("one"), note("first")]),
        para("two"),
    ]);
    assert_eq!(out, "one[^0]\n\ntwo\n\n[^0]: first\n");
}

#[test]
fn marker_inside_div_flushes_after_the_div() {
    let out = render_blocks(vec![
        Block::Para(vec![Inline::str("text"), note("n")]),
        Block::Div(Attr::default(), vec![references()]),
        para("after"),
    ]);
    assert_eq!(out, "text[^0]\n\n[^0]: n\n\nafter\n");
}

#[test]
fn inline_marker_flushes_after_its_paragraph() {
    let out = render_blocks(vec![Block::Para(vec![
        Inline::str("x"),
        note("n"),
        Inline::RawInline(Format::new("html"), "<references />".into()),
    ])]);
    assert_eq!(out, "x[^0]\n\n[^0]: n\n");
}

#[test]
fn notes_inside_notes_are_queued_behind() {
    let inner = Inline::Note(vec![para("inner")]);
    let outer = Inline::Note(vec![Block::Para(vec![Inline::str("outer"), inner])]);
    let out = render_blocks(vec![Block::Para(vec![Inline::str("a"), outer]), references()]);
    assert_eq!(out, "a[^0]\n\n[^0]: outer[^1]\n\n[^1]: inner\n");
}

#[test]
fn definitions_keep_inline_markup_with_indented_continuations() {
    let body = vec![
        Block::Para(vec![Inline::Strong(words("p1")), Inline::Underline(words("u"))]),
        para("p2"),
    ];
    let out = render_blocks(vec![
        Block::Para(vec![Inline::str("a"), Inline::Note(body)]),
        references(),
    ]);
    assert_eq!(out, "a[^0]\n\n[^0]: **p1**<u>u</u>\n\n    p2\n");
}

#[test]
fn escaped_angle_brackets_survive_in_definitions() {
    let out = render_blocks(vec![
        Block::Para(vec![Inline::str("a"), note("x<y and y>z")]),
        references(),
    ]);
    assert_eq!(out, "a[^0]\n\n[^0]: x\\<y and y>z\n");
}

#[test]
fn block_tags_are_stripped_from_definitions() {
    let body = vec![Block::BlockQuote(vec![para("quoted")])];
    let out = render_blocks(vec![
        Block::Para(vec![Inline::str("a"), Inline::Note(body)]),
        references(),
    ]);
    assert_eq!(out, "a[^0]\n\n[^0]: quoted\n");
}

#[test]
fn marker_with_no_notes_renders_nothing() {
    let out = render_blocks(vec![para("a"), references(), para("b")]);
    assert_eq!(out, "a\n\nb\n");
}
