//! Wikilink rewriting
//!
//! Fixed cases pin the documented outputs; the property tests cover the
//! rewriting rules over generated page names.

use mwfilter_babel::ast::Target;
use mwfilter_babel::common::links::wikilink_to_path;
use mwfilter_babel::LinkError;
use proptest::prelude::*;

fn link(url: &str) -> Result<String, LinkError> {
    Target::wikilink(url).as_output_link(false, false)
}

#[test]
fn documented_examples() {
    assert_eq!(link("Page").unwrap(), "/Page.md");
    assert_eq!(link("Page#Sec").unwrap(), "/Page.md#Sec");
    assert_eq!(link("/page").unwrap(), "/page.md");
    assert_eq!(link("#Sec").unwrap(), "#Sec");
}

#[test]
fn page_names_are_percent_encoded() {
    assert_eq!(link("main page").unwrap(), "/Main%20page.md");
    assert_eq!(link("Help:Contents").unwrap(), "/Help%3AContents.md");
    assert_eq!(link("Dir/sub_page-1.x~").unwrap(), "/Dir/sub_page-1.x~.md");
    assert_eq!(link("위키").unwrap(), "/%EC%9C%84%ED%82%A4.md");
}

#[test]
fn empty_anchor_is_dropped() {
    assert_eq!(link("Page#").unwrap(), "/Page.md");
}

#[test]
fn degenerate_urls_are_errors() {
    assert_eq!(link("///"), Err(LinkError::SlashesOnly("///".into())));
    assert_eq!(link("/#Sec"), Err(LinkError::EmptyPageName("/#Sec".into())));
}

#[test]
fn flags_combine() {
    let target = Target::wikilink("page#A");
    assert_eq!(target.as_output_link(true, false).unwrap(), "/Page#A");
    assert_eq!(target.as_output_link(false, true).unwrap(), "Page.md#A");
    assert_eq!(target.as_output_link(true, true).unwrap(), "Page#A");
}

fn page_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,12}"
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

proptest! {
    #[test]
    fn bare_names_are_capitalized(name in page_name()) {
        let out = wikilink_to_path(&name, false, false).unwrap();
        prop_assert_eq!(out, format!("/{}.md", capitalized(&name)));
    }

    #[test]
    fn leading_slash_keeps_case(name in page_name(), slashes in 1usize..4) {
        let url = format!("{}{}", "/".repeat(slashes), name);
        let out = wikilink_to_path(&url, false, false).unwrap();
        prop_assert_eq!(out, format!("/{name}.md"));
    }

    #[test]
    fn fragments_pass_through(anchor in "[A-Za-z0-9_]{0,10}") {
        let url = format!("#{anchor}");
        prop_assert_eq!(wikilink_to_path(&url, false, false).unwrap(), url.clone());
        prop_assert_eq!(wikilink_to_path(&url, true, true).unwrap(), url);
    }

    #[test]
    fn anchors_are_preserved(name in page_name(), anchor in "[A-Za-z0-9_]{1,10}") {
        let out = wikilink_to_path(&format!("{name}#{anchor}"), false, false).unwrap();
        let expected_suffix = format!(".md#{anchor}");
        prop_assert!(out.ends_with(&expected_suffix));
    }

    #[test]
    fn flags_control_prefix_and_extension(
        name in page_name(),
        no_extension in any::<bool>(),
        no_abspath in any::<bool>(),
    ) {
        let out = wikilink_to_path(&name, no_extension, no_abspath).unwrap();
        prop_assert_eq!(out.starts_with('/'), !no_abspath);
        prop_assert_eq!(out.ends_with(".md"), !no_extension);
    }

    #[test]
    fn external_links_are_unchanged(
        url in "https://[a-z]{1,10}\\.org/[a-zA-Z0-9/]{0,10}",
        title in "[a-zA-Z ]{0,10}",
    ) {
        prop_assume!(title != "wikilink");
        let target = Target::new(url.clone(), title);
        prop_assert_eq!(target.as_output_link(false, false).unwrap(), url.clone());
        prop_assert_eq!(target.as_output_link(true, true).unwrap(), url);
    }
}
