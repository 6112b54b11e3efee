//! Tree builder.
//!
//! Turns tokenizer events into a document tree. The builder keeps its own
//! stack of open nodes and never duplicates the document skeleton: `html`,
//! `head`, `body` and `title` already exist and are reused when their tags
//! show up, and `link`/`base` always land in `head`. Comments are dropped.

use tagsoup_dom::{DomTree, ElementData, NodeId, NodeType};

use crate::sink::Sink;
use crate::tokenizer::Attribute;
use crate::{ParseResult, parse};

/// A document the tree builder can write into.
pub trait DocumentTarget {
    /// Handle to a node of the document.
    type Node: Copy + Eq;

    /// The document node itself.
    fn document_root(&self) -> Self::Node;

    /// The first element named `tag_name` in tree order.
    fn find_element(&self, tag_name: &str) -> Option<Self::Node>;

    /// Create a detached element.
    fn create_element(&mut self, tag_name: &str) -> Self::Node;

    /// Set an attribute, replacing any existing value for `name`.
    fn set_attribute(&mut self, element: Self::Node, name: &str, value: &str);

    /// Create a detached text node.
    fn create_text_node(&mut self, text: &str) -> Self::Node;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node);
}

impl DocumentTarget for DomTree {
    type Node = NodeId;

    fn document_root(&self) -> NodeId {
        self.root()
    }

    fn find_element(&self, tag_name: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|&id| self.as_element(id).is_some_and(|e| e.tag_name == tag_name))
    }

    fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.alloc(NodeType::Element(ElementData::new(tag_name)))
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        if let Some(data) = self.as_element_mut(element) {
            data.set_attribute(name, value);
        }
    }

    fn create_text_node(&mut self, text: &str) -> NodeId {
        self.alloc(NodeType::Text(text.to_string()))
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        Self::append_child(self, parent, child);
    }
}

/// The elements a document has at most one of.
struct Singletons<N> {
    html: Option<N>,
    head: Option<N>,
    body: Option<N>,
    title: Option<N>,
}

impl<N: Copy> Singletons<N> {
    fn resolve<T: DocumentTarget<Node = N>>(target: &T) -> Self {
        Self {
            html: target.find_element("html"),
            head: target.find_element("head"),
            body: target.find_element("body"),
            title: target.find_element("title"),
        }
    }

    fn get(&self, tag_name: &str) -> Option<N> {
        match tag_name {
            "html" => self.html,
            "head" => self.head,
            "body" => self.body,
            "title" => self.title,
            _ => None,
        }
    }
}

/// A [`Sink`] that builds a tree inside a [`DocumentTarget`].
pub struct DomBuilder<'t, T: DocumentTarget> {
    target: &'t mut T,
    singletons: Singletons<T::Node>,
    /// Parent used when no element is open.
    fallback: T::Node,
    open: Vec<T::Node>,
    current: T::Node,
}

impl<'t, T: DocumentTarget> DomBuilder<'t, T> {
    /// Prepare `target` for building.
    ///
    /// A document without an `html` element first gets the skeleton
    /// `html > (head > title), body`. Content goes into `body`.
    pub fn new(target: &'t mut T) -> Self {
        if target.find_element("html").is_none() {
            populate_skeleton(target);
        }

        let singletons = Singletons::resolve(target);
        let fallback = singletons
            .body
            .or(singletons.html)
            .unwrap_or_else(|| target.document_root());

        Self {
            target,
            singletons,
            fallback,
            open: Vec::new(),
            current: fallback,
        }
    }

    /// Where `link` and `base` elements go, if not under the current parent.
    fn structural_parent(&self, tag_name: &str) -> Option<T::Node> {
        match tag_name {
            "link" | "base" => self.singletons.head,
            _ => None,
        }
    }
}

fn populate_skeleton<T: DocumentTarget>(target: &mut T) {
    let html = target.create_element("html");
    let head = target.create_element("head");
    let title = target.create_element("title");
    target.append_child(head, title);
    target.append_child(html, head);
    let body = target.create_element("body");
    target.append_child(html, body);
    let root = target.document_root();
    target.append_child(root, html);
}

impl<T: DocumentTarget> Sink for DomBuilder<'_, T> {
    fn start(&mut self, name: &str, attributes: Vec<Attribute>, self_closing: bool) {
        if let Some(existing) = self.singletons.get(name) {
            self.current = existing;
            if !self_closing {
                self.open.push(existing);
            }
            return;
        }

        let element = self.target.create_element(name);
        for attr in &attributes {
            self.target.set_attribute(element, &attr.name, &attr.value);
        }

        let parent = self.structural_parent(name).unwrap_or(self.current);
        self.target.append_child(parent, element);

        if !self_closing {
            self.open.push(element);
            self.current = element;
        }
    }

    fn end(&mut self, _name: &str) {
        let _ = self.open.pop();
        self.current = self.open.last().copied().unwrap_or(self.fallback);
    }

    fn chars(&mut self, text: &str) {
        let node = self.target.create_text_node(text);
        self.target.append_child(self.current, node);
    }
}

/// Tokenizes `html` and builds the result into `target`.
///
/// # Errors
///
/// Returns [`crate::ParseError`] when the tokenizer stops making progress.
/// Nodes built before the failure stay in `target`.
pub fn html_to_dom<T: DocumentTarget>(html: &str, target: &mut T) -> ParseResult<()> {
    let _ = parse(html, DomBuilder::new(target))?;
    Ok(())
}

/// Tokenizes `html` into a fresh [`DomTree`].
///
/// # Errors
///
/// Returns [`crate::ParseError`] when the tokenizer stops making progress.
pub fn parse_document(html: &str) -> ParseResult<DomTree> {
    let mut tree = DomTree::new();
    html_to_dom(html, &mut tree)?;
    Ok(tree)
}
