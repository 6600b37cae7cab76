//! Block-level rendering

use crate::common::{para, plain, render_blocks, render_with, words};
use mwfilter_babel::ast::{
    Attr, Block, Caption, Format, Inline, ListAttributes, ListNumberDelim, ListNumberStyle,
};
use mwfilter_babel::{FormatError, RenderOptions};

fn ordered(start: i64, delim: ListNumberDelim, items: Vec<Vec<Block>>) -> Block {
    Block::OrderedList(
        ListAttributes {
            start,
            style: ListNumberStyle::Decimal,
            delim,
        },
        items,
    )
}

#[test]
fn paragraphs_are_separated_by_blank_lines() {
    assert_eq!(render_blocks(vec![para("one"), para("two")]), "one\n\ntwo\n");
}

#[test]
fn empty_document_renders_nothing() {
    assert_eq!(render_blocks(vec![]), "");
}

#[test]
fn header_levels() {
    let out = render_blocks(vec![
        Block::Header(1, Attr::new("a"), words("Top")),
        Block::Header(3, Attr::default(), words("Deep one")),
    ]);
    assert_eq!(out, "# Top\n\n### Deep one\n");
}

#[test]
fn header_soft_breaks_become_spaces() {
    let out = render_blocks(vec![Block::Header(
        2,
        Attr::default(),
        vec![Inline::str("a"), Inline::SoftBreak, Inline::str("b")],
    )]);
    assert_eq!(out, "## a b\n");
}

#[test]
fn header_classes_are_unsupported() {
    let result = render_with(
        vec![Block::Header(1, Attr::new("x").with_class("c"), words("T"))],
        &RenderOptions::default(),
    );
    assert!(matches!(result, Err(FormatError::UnsupportedFeature(_))));
}

#[test]
fn tight_bullet_list_with_nesting() {
    let out = render_blocks(vec![Block::BulletList(vec![
        vec![plain("a"), Block::BulletList(vec![vec![plain("b")]])],
        vec![plain("c")],
    ])]);
    assert_eq!(out, "-   a\n    -   b\n-   c\n");
}

#[test]
fn loose_list_items_are_spaced() {
    let out = render_blocks(vec![Block::BulletList(vec![vec![para("a")], vec![para("b")]])]);
    assert_eq!(out, "-   a\n\n-   b\n");
}

#[test]
fn multi_paragraph_item_is_indented() {
    let out = render_blocks(vec![Block::BulletList(vec![vec![para("a"), para("b")]])]);
    assert_eq!(out, "-   a\n\n    b\n");
}

#[test]
fn ordered_lists_keep_start_and_delimiter() {
    let out = render_blocks(vec![ordered(
        3,
        ListNumberDelim::OneParen,
        vec![vec![plain("x")], vec![plain("y")]],
    )]);
    assert_eq!(out, "3)  x\n4)  y\n");

    let out = render_blocks(vec![ordered(
        9,
        ListNumberDelim::Period,
        vec![vec![plain("x")], vec![plain("y")]],
    )]);
    assert_eq!(out, "9.  x\n10. y\n");
}

#[test]
fn ordered_list_numbering_must_fit_i64() {
    let result = render_with(
        vec![ordered(
            i64::MAX,
            ListNumberDelim::Period,
            vec![vec![plain("x")], vec![plain("y")]],
        )],
        &RenderOptions::default(),
    );
    assert!(matches!(result, Err(FormatError::UnsupportedFeature(_))));

    let out = render_blocks(vec![ordered(
        i64::MAX,
        ListNumberDelim::Period,
        vec![vec![plain("x")]],
    )]);
    assert_eq!(out, "9223372036854775807. x\n");
}

#[test]
fn line_start_text_does_not_open_blocks() {
    assert_eq!(render_blocks(vec![para("# not a heading")]), "\\# not a heading\n");
    assert_eq!(render_blocks(vec![para("1. not a list")]), "1\\. not a list\n");
    assert_eq!(render_blocks(vec![para("- x")]), "\\- x\n");
    assert_eq!(render_blocks(vec![para("> q")]), "\\> q\n");
    assert_eq!(render_blocks(vec![para("a - b # c")]), "a - b # c\n");
}

#[test]
fn soft_break_starts_a_new_line_for_escaping() {
    let out = render_blocks(vec![Block::Para(vec![
        Inline::str("a"),
        Inline::SoftBreak,
        Inline::str("+"),
        Inline::Space,
        Inline::str("b"),
    ])]);
    assert_eq!(out, "a\n\\+ b\n");
}

#[test]
fn list_items_escape_their_own_first_line() {
    let out = render_blocks(vec![Block::BulletList(vec![vec![plain("- x")]])]);
    assert_eq!(out, "-   \\- x\n");
}

#[test]
fn list_after_paragraph_gets_blank_line() {
    let out = render_blocks(vec![para("intro"), Block::BulletList(vec![vec![plain("a")]])]);
    assert_eq!(out, "intro\n\n-   a\n");
}

#[test]
fn code_block_fences() {
    let out = render_blocks(vec![Block::CodeBlock(Attr::default(), "a\n```\nb".into())]);
    assert_eq!(out, "````\na\n```\nb\n````\n");
}

#[test]
fn code_block_attributes_are_unsupported() {
    let result = render_with(
        vec![Block::CodeBlock(Attr::default().with_class("rust"), "x".into())],
        &RenderOptions::default(),
    );
    assert!(matches!(result, Err(FormatError::UnsupportedFeature(_))));
}

#[test]
fn horizontal_rule() {
    assert_eq!(
        render_blocks(vec![para("a"), Block::HorizontalRule, para("b")]),
        "a\n\n---\n\nb\n"
    );
}

#[test]
fn block_quote_is_html() {
    let out = render_blocks(vec![Block::BlockQuote(vec![para("q1"), para("q2")])]);
    assert_eq!(out, "<blockquote markdown=\"1\">\nq1\n\nq2\n</blockquote>\n");
}

#[test]
fn definition_list_with_two_definitions() {
    let out = render_blocks(vec![Block::DefinitionList(vec![(
        words("Term"),
        vec![vec![plain("one")], vec![plain("two")]],
    )])]);
    assert_eq!(
        out,
        "<dl markdown=\"1\">\n<dt markdown=\"1\">Term</dt>\n\
         <dd markdown=\"1\">\none\n</dd>\n<dd markdown=\"1\">\ntwo\n</dd>\n</dl>\n"
    );
}

#[test]
fn div_without_attributes_is_transparent() {
    let out = render_blocks(vec![Block::Div(Attr::default(), vec![para("inside")])]);
    assert_eq!(out, "inside\n");
}

#[test]
fn div_with_attributes_is_html() {
    let attr = Attr::new("box").with_class("note").with_pair("style", "color:red");
    let out = render_blocks(vec![Block::Div(attr, vec![para("inside")])]);
    assert_eq!(
        out,
        "<div markdown=\"1\" id=\"box\" class=\"note\" style=\"color:red\">\ninside\n</div>\n"
    );
}

#[test]
fn figure_with_caption() {
    let out = render_blocks(vec![Block::Figure(
        Attr::default(),
        Caption {
            short: None,
            blocks: vec![plain("A caption")],
        },
        vec![plain("body")],
    )]);
    assert_eq!(
        out,
        "<figure markdown=\"1\">\nbody\n<figcaption markdown=\"1\">A caption</figcaption>\n</figure>\n"
    );
}

#[test]
fn figure_attributes_are_unsupported() {
    let result = render_with(
        vec![Block::Figure(Attr::new("fig"), Caption::default(), vec![])],
        &RenderOptions::default(),
    );
    assert!(matches!(result, Err(FormatError::UnsupportedFeature(_))));
}

#[test]
fn line_block_uses_breaks() {
    let out = render_blocks(vec![Block::LineBlock(vec![words("one"), words("two")])]);
    assert_eq!(out, "one<br>\ntwo\n");
}

#[test]
fn raw_blocks() {
    let out = render_blocks(vec![
        Block::RawBlock(Format::new("html"), "<center>x</center>\n".into()),
        para("after"),
    ]);
    assert_eq!(out, "<center>x</center>\n\nafter\n");

    let result = render_with(
        vec![Block::RawBlock(Format::new("latex"), "\\foo".into())],
        &RenderOptions::default(),
    );
    assert!(matches!(result, Err(FormatError::UnsupportedFeature(_))));
}
