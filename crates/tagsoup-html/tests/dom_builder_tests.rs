//! Integration tests for the tree builder.

use tagsoup_common::warning::set_quiet;
use tagsoup_dom::{DomTree, NodeId, NodeType};
use tagsoup_html::{DocumentTarget, html_to_dom, parse_document};

/// Helper to parse HTML into a fresh tree
fn parse(html: &str) -> DomTree {
    set_quiet(true);
    parse_document(html).unwrap()
}

fn tag_names(tree: &DomTree, parent: NodeId) -> Vec<String> {
    tree.children(parent)
        .iter()
        .filter_map(|&id| tree.as_element(id))
        .map(|e| e.tag_name.clone())
        .collect()
}

fn only(tree: &DomTree, tag: &str) -> NodeId {
    let found = tree.elements_by_tag_name(tag);
    assert_eq!(found.len(), 1, "expected exactly one <{tag}>");
    found[0]
}

#[test]
fn test_empty_input_builds_skeleton() {
    let tree = parse("");
    let html = tree.document_element().unwrap();
    assert_eq!(tree.as_element(html).unwrap().tag_name, "html");
    assert_eq!(tag_names(&tree, html), vec!["head", "body"]);
    let head = only(&tree, "head");
    assert_eq!(tag_names(&tree, head), vec!["title"]);
}

#[test]
fn test_content_goes_into_body() {
    let tree = parse("<p>Hello</p>");
    let body = tree.body().unwrap();
    assert_eq!(tag_names(&tree, body), vec!["p"]);
    assert_eq!(tree.text_content(body), "Hello");
}

#[test]
fn test_singletons_are_not_duplicated() {
    let tree = parse("<html><head><title>T</title></head><body><p>x</p></body></html>");
    for tag in ["html", "head", "title", "body"] {
        let _ = only(&tree, tag);
    }
    let title = only(&tree, "title");
    assert_eq!(tree.text_content(title), "T");
    let body = tree.body().unwrap();
    assert_eq!(tag_names(&tree, body), vec!["p"]);
}

#[test]
fn test_link_and_base_go_into_head() {
    let tree = parse(r#"<div><link rel="stylesheet" href="a.css"><base href="/"></div>"#);
    let head = only(&tree, "head");
    assert_eq!(tag_names(&tree, head), vec!["title", "link", "base"]);
    let div = only(&tree, "div");
    assert!(tree.children(div).is_empty());
    let link = tree.as_element(only(&tree, "link")).unwrap();
    assert_eq!(link.get_attribute("href"), Some("a.css"));
}

#[test]
fn test_void_elements_have_no_children() {
    let tree = parse("<p>a<br>b</p>");
    let p = only(&tree, "p");
    assert_eq!(tree.children(p).len(), 3);
    let br = only(&tree, "br");
    assert!(tree.children(br).is_empty());
    assert_eq!(tree.parent(br), Some(p));
}

#[test]
fn test_auto_closed_paragraphs_are_siblings() {
    let tree = parse("<p>A<p>B");
    let body = tree.body().unwrap();
    assert_eq!(tag_names(&tree, body), vec!["p", "p"]);
}

#[test]
fn test_attributes_are_set() {
    let tree = parse(r#"<input id=name type="text" disabled>"#);
    let input = tree.as_element(only(&tree, "input")).unwrap();
    assert_eq!(input.id(), Some("name"));
    assert_eq!(input.get_attribute("type"), Some("text"));
    assert_eq!(input.get_attribute("disabled"), Some("disabled"));
}

#[test]
fn test_duplicate_attribute_keeps_last_value() {
    let tree = parse("<div class=a class=b></div>");
    let div = tree.as_element(only(&tree, "div")).unwrap();
    assert_eq!(div.attrs, vec![("class".to_string(), "b".to_string())]);
}

#[test]
fn test_comments_are_ignored() {
    let tree = parse("<!-- note --><p>x</p>");
    let has_comment = tree
        .descendants(tree.root())
        .any(|id| matches!(tree.get(id).map(|n| &n.node_type), Some(NodeType::Comment(_))));
    assert!(!has_comment);
}

#[test]
fn test_text_after_closing_everything_goes_to_body() {
    let tree = parse("<div>a</div>tail");
    let body = tree.body().unwrap();
    let last = tree.last_child(body).unwrap();
    assert_eq!(tree.as_text(last), Some("tail"));
}

#[test]
fn test_script_text_is_kept() {
    let tree = parse("<script>if (a < b) go();</script>");
    let script = only(&tree, "script");
    assert_eq!(tree.text_content(script), "if (a < b) go();");
}

#[test]
fn test_existing_document_is_reused() {
    let mut tree = parse("<p>first</p>");
    html_to_dom("<p>second</p>", &mut tree).unwrap();
    assert_eq!(only(&tree, "body"), tree.body().unwrap());
    assert_eq!(tree.elements_by_tag_name("p").len(), 2);
    assert_eq!(tree.text_content(tree.body().unwrap()), "firstsecond");
}

#[test]
fn test_parse_error_is_returned() {
    set_quiet(true);
    assert!(parse_document("<p><!--").is_err());
}

#[test]
fn test_print_tree() {
    let tree = parse("<p class=x>a b</p>");
    let expected = "\
Document
  <html>
    <head>
      <title>
    <body>
      <p class=\"x\">
        \"a\u{00B7}b\"
";
    assert_eq!(tree.to_string(), expected);
}

/// A target that records calls instead of building nodes.
#[derive(Default)]
struct Recorder {
    names: Vec<String>,
    edges: Vec<(usize, usize)>,
}

impl DocumentTarget for Recorder {
    type Node = usize;

    fn document_root(&self) -> usize {
        usize::MAX
    }

    fn find_element(&self, tag_name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == tag_name)
    }

    fn create_element(&mut self, tag_name: &str) -> usize {
        self.names.push(tag_name.to_string());
        self.names.len() - 1
    }

    fn set_attribute(&mut self, _element: usize, _name: &str, _value: &str) {}

    fn create_text_node(&mut self, text: &str) -> usize {
        self.names.push(format!("#{text}"));
        self.names.len() - 1
    }

    fn append_child(&mut self, parent: usize, child: usize) {
        self.edges.push((parent, child));
    }
}

#[test]
fn test_custom_target() {
    set_quiet(true);
    let mut recorder = Recorder::default();
    html_to_dom("<em>x</em>", &mut recorder).unwrap();
    assert_eq!(
        recorder.names,
        vec!["html", "head", "title", "body", "em", "#x"]
    );
    // em under body, text under em
    assert!(recorder.edges.contains(&(3, 4)));
    assert!(recorder.edges.contains(&(4, 5)));
    assert!(recorder.edges.contains(&(usize::MAX, 0)));
}
