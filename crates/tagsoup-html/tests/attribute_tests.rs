//! Integration tests for attribute parsing.

use tagsoup_html::tokenizer::{escape_quotes, parse_attributes};
use tagsoup_html::{Event, tokenize};

/// Helper to collect (name, value) pairs
fn pairs(fragment: &str) -> Vec<(String, String)> {
    parse_attributes(fragment)
        .into_iter()
        .map(|attr| (attr.name, attr.value))
        .collect()
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

/// Helper to get the attributes of the first start tag in `html`
fn first_tag_attributes(html: &str) -> Vec<(String, String)> {
    match tokenize(html).unwrap().into_iter().next() {
        Some(Event::Start { attributes, .. }) => attributes
            .into_iter()
            .map(|attr| (attr.name, attr.value))
            .collect(),
        other => panic!("Expected a start tag, got {other:?}"),
    }
}

#[test]
fn test_empty_fragment() {
    assert!(parse_attributes("").is_empty());
    assert!(parse_attributes("   ").is_empty());
}

#[test]
fn test_attribute_name_case_is_kept() {
    assert_eq!(pairs(" onClick=go()"), vec![pair("onClick", "go()")]);
}

#[test]
fn test_fill_attribute_needs_lowercase_name() {
    assert_eq!(pairs(" CHECKED"), vec![pair("CHECKED", "")]);
    assert_eq!(
        first_tag_attributes("<input CHECKED disabled>"),
        vec![pair("CHECKED", ""), pair("disabled", "disabled")]
    );
}

#[test]
fn test_every_fill_attribute_defaults_to_its_name() {
    for &name in tagsoup_html::tables::FILL_ATTRIBUTES.names() {
        assert_eq!(pairs(&format!(" {name}")), vec![pair(name, name)]);
    }
}

#[test]
fn test_empty_single_quotes_on_plain_attribute() {
    assert_eq!(pairs(" alt=''"), vec![pair("alt", "")]);
}

#[test]
fn test_escaped_single_quote() {
    assert_eq!(pairs(r" title='it\'s'"), vec![pair("title", "it's")]);
}

#[test]
fn test_namespaced_attribute() {
    assert_eq!(
        pairs(r#" xml:lang="en" xmlns:svg="http://www.w3.org/2000/svg""#),
        vec![
            pair("xml:lang", "en"),
            pair("xmlns:svg", "http://www.w3.org/2000/svg")
        ]
    );
}

#[test]
fn test_unquoted_value_with_slash() {
    assert_eq!(pairs(" href=/docs/index.html"), vec![pair("href", "/docs/index.html")]);
}

#[test]
fn test_attributes_through_tokenizer() {
    assert_eq!(
        first_tag_attributes(r#"<option value="1" selected>One</option>"#),
        vec![pair("value", "1"), pair("selected", "selected")]
    );
}

#[test]
fn test_attributes_with_newlines() {
    assert_eq!(
        first_tag_attributes("<a\n  href=\"x\"\n  target=_blank\n>"),
        vec![pair("href", "x"), pair("target", "_blank")]
    );
}

#[test]
fn test_escaped_value_is_safe_between_double_quotes() {
    let attrs = parse_attributes(r#" title='say "hi"'"#);
    assert_eq!(attrs[0].value, r#"say "hi""#);
    assert_eq!(attrs[0].escaped_value, r#"say \"hi\""#);
    assert_eq!(escape_quotes(&attrs[0].value), attrs[0].escaped_value);
}
