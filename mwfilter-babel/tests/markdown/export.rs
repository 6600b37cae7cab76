//! Rendering of whole fixture documents, checked as snapshots and by
//! re-parsing the output with comrak.

use crate::common::{load_fixture, render_fixture};
use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use insta::assert_snapshot;
use mwfilter_babel::{render, RenderOptions};

fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.footnotes = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

fn collect<'a>(node: &'a AstNode<'a>, out: &mut Vec<NodeValue>) {
    out.push(node.data.borrow().value.clone());
    for child in node.children() {
        collect(child, out);
    }
}

fn nodes_of(markdown: &str) -> Vec<NodeValue> {
    let arena = Arena::new();
    let root = parse_document(&arena, markdown, &comrak_options());
    let mut nodes = Vec::new();
    collect(root, &mut nodes);
    nodes
}

#[test]
fn header_renders_heading_with_rewritten_link() {
    let md = render_fixture("header.json");
    assert_eq!(md, "## BBB [Title](/Page.md)\n");

    let nodes = nodes_of(&md);
    assert!(nodes
        .iter()
        .any(|n| matches!(n, NodeValue::Heading(h) if h.level == 2)));
    assert!(nodes
        .iter()
        .any(|n| matches!(n, NodeValue::Link(link) if link.url == "/Page.md")));
}

#[test]
fn header_link_respects_options() {
    let options = RenderOptions {
        no_abspath: true,
        no_extension: true,
        ..RenderOptions::default()
    };
    let md = render(&load_fixture("header.json"), None, &options).unwrap();
    assert_eq!(md, "## BBB [Title](Page)\n");
}

#[test]
fn kitchensink() {
    let md = render_fixture("kitchensink.json");
    assert_snapshot!(md, @r#"
    # Intro

    Some *emphasis*, **strong** and `code`.

    -   one
        -   nested
    -   [other page](/Other%20page.md)

    1.  first
    2.  second

    ```
    let x = 1;
    ```

    ---

    <dl markdown="1">
    <dt markdown="1">Term</dt>
    <dd markdown="1">
    Definition
    </dd>
    </dl>

    <blockquote markdown="1">
    Quoted
    </blockquote>

    $x^2$ <sup>up</sup><br>[site](https://example.com)
    "#);
}

#[test]
fn kitchensink_structure() {
    let nodes = nodes_of(&render_fixture("kitchensink.json"));
    let count = |pred: fn(&NodeValue) -> bool| nodes.iter().filter(|n| pred(n)).count();

    assert_eq!(count(|n| matches!(n, NodeValue::Heading(_))), 1);
    assert_eq!(count(|n| matches!(n, NodeValue::List(_))), 3);
    assert_eq!(count(|n| matches!(n, NodeValue::Item(_))), 5);
    assert_eq!(count(|n| matches!(n, NodeValue::CodeBlock(_))), 1);
    assert_eq!(count(|n| matches!(n, NodeValue::ThematicBreak)), 1);
    assert_eq!(count(|n| matches!(n, NodeValue::Emph)), 1);
    assert_eq!(count(|n| matches!(n, NodeValue::Strong)), 1);
    assert_eq!(count(|n| matches!(n, NodeValue::HtmlBlock(_))), 2);
}

#[test]
fn footnotes_fixture() {
    let md = render_fixture("footnotes.json");
    assert_eq!(
        md,
        "First[^0] second[^1].\n\n## References\n\n[^0]: One\n\n[^1]: Two <b>bold</b>\n"
    );

    let nodes = nodes_of(&md);
    let references = nodes
        .iter()
        .filter(|n| matches!(n, NodeValue::FootnoteReference(_)))
        .count();
    let definitions = nodes
        .iter()
        .filter(|n| matches!(n, NodeValue::FootnoteDefinition(_)))
        .count();
    assert_eq!((references, definitions), (2, 2));
}
