//! DOM tree implementation for the tagsoup parser.
//!
//! This crate provides an arena-based DOM tree structure following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/). It is the default
//! target of the tree builder in `tagsoup-html`.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues.

use std::fmt;

/// Ordered list of attribute name/value pairs for an element.
///
/// Source order is kept so serialized output is stable.
pub type AttributeList = Vec<(String, String)>;

/// A type-safe index into the DOM tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-next-sibling)
    pub next_sibling: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-previous-sibling)
    pub prev_sibling: Option<NodeId>,
}

impl Node {
    const fn detached(node_type: NodeType) -> Self {
        Self {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        }
    }
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

/// Element-specific data.
///
/// NOTE: We only store the local name and attributes. Namespaces and custom
/// element state are out of scope for a tag-soup parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributeList,
}

impl ElementData {
    /// Create element data with no attributes.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: AttributeList::new(),
        }
    }

    /// [§ 4.9 getAttribute](https://dom.spec.whatwg.org/#dom-element-getattribute)
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// [§ 4.9 setAttribute](https://dom.spec.whatwg.org/#dom-element-setattribute)
    ///
    /// "If attribute is non-null, change attribute to value." Otherwise the
    /// attribute is appended.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some((_, existing)) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            value.clone_into(existing);
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }
}

/// Arena-based DOM tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// All nodes live in one vector and refer to each other by [`NodeId`].
/// The Document node is always at index 0.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new DOM tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeType::Document)],
        }
    }

    /// Get the root document node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a mutable reference to a node by its ID.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Get the number of nodes in the tree, detached ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(node_type));
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// "To append a node to a parent, pre-insert node into parent before null."
    ///
    /// Appends `child` as the last child of `parent`. A child that already
    /// has a parent is removed from it first, as pre-insert "adopts" the node.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.parent(child) {
            self.remove_child(old_parent, child);
        }

        let prev_last_child = self.nodes[parent.0].children.last().copied();
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// [§ 4.2.3 Remove](https://dom.spec.whatwg.org/#concept-node-remove)
    ///
    /// Detaches `child` from `parent`, relinking its former siblings.
    /// Does nothing if `child` is not a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(index) = self.nodes[parent.0]
            .children
            .iter()
            .position(|&id| id == child)
        else {
            return;
        };
        let _ = self.nodes[parent.0].children.remove(index);

        let prev = self.nodes[child.0].prev_sibling.take();
        let next = self.nodes[child.0].next_sibling.take();
        if let Some(prev_id) = prev {
            self.nodes[prev_id.0].next_sibling = next;
        }
        if let Some(next_id) = next {
            self.nodes[next_id.0].prev_sibling = prev;
        }
        self.nodes[child.0].parent = None;
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// [§ 4.2.6 Descendant](https://dom.spec.whatwg.org/#concept-tree-descendant)
    ///
    /// Iterate over the descendants of a node in tree order (pre-order),
    /// excluding the node itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> DescendantIterator<'_> {
        DescendantIterator {
            tree: self,
            pending: self.children(id).iter().rev().copied().collect(),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get mutable element data if this node is an element.
    pub fn as_element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(|n| match &mut n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// [§ 4.4 textContent](https://dom.spec.whatwg.org/#dom-node-textcontent)
    ///
    /// Concatenation of the data of all text node descendants, in tree order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|child| self.as_text(child))
            .collect()
    }

    /// [§ 4.5 getElementsByTagName](https://dom.spec.whatwg.org/#dom-document-getelementsbytagname)
    ///
    /// All element descendants of the document with the given local name,
    /// in tree order.
    #[must_use]
    pub fn elements_by_tag_name(&self, tag_name: &str) -> Vec<NodeId> {
        self.descendants(NodeId::ROOT)
            .filter(|&id| self.as_element(id).is_some_and(|e| e.tag_name == tag_name))
            .collect()
    }

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// "The document element of a document is the element whose parent is that
    /// document, if it exists; otherwise null."
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .find(|&&id| self.as_element(id).is_some())
            .copied()
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    ///
    /// "The body element of a document is the first of the html element's children
    /// that is either a body element or a frameset element, or null if there is
    /// no such element."
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;

        self.children(html)
            .iter()
            .find(|&&id| {
                self.as_element(id)
                    .is_some_and(|e| e.tag_name == "body" || e.tag_name == "frameset")
            })
            .copied()
    }

    /// Write an indented outline of the subtree rooted at `id`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_tree(&self, out: &mut impl fmt::Write, id: NodeId, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        let Some(node) = self.get(id) else {
            return Ok(());
        };
        match &node.node_type {
            NodeType::Document => writeln!(out, "{prefix}Document")?,
            NodeType::Element(data) => {
                if data.attrs.is_empty() {
                    writeln!(out, "{prefix}<{}>", data.tag_name)?;
                } else {
                    let attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))?;
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                writeln!(out, "{prefix}\"{display}\"")?;
            }
            NodeType::Comment(data) => writeln!(out, "{prefix}<!-- {data} -->")?,
        }
        for &child_id in &node.children {
            self.write_tree(out, child_id, indent + 1)?;
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DomTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, NodeId::ROOT, 0)
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator over the descendants of a node.
pub struct DescendantIterator<'a> {
    tree: &'a DomTree,
    pending: Vec<NodeId>,
}

impl Iterator for DescendantIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.pending.pop()?;
        self.pending
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
