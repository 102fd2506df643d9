use std::collections::BTreeMap;

use crate::element::Element;
use crate::style::Style;

/// Handle to a node inside a [`Document`].
///
/// Handles are only meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#node-{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    value: String,
    style: Style,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A mounted markup tree.
///
/// Nodes live in an arena and refer to each other by [`NodeId`], which gives
/// cheap parent and sibling lookups in both directions.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Mount an element tree.
    pub fn new(root: Element) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.mount(root, None);
        log::trace!("mounted document with {} nodes", doc.nodes.len());
        doc
    }

    fn mount(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let Element {
            tag,
            id,
            classes,
            attributes,
            text,
            value,
            style,
            children,
        } = element;

        let node_id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            tag,
            id,
            classes,
            attributes,
            text,
            value,
            style,
            parent,
            children: Vec::with_capacity(children.len()),
        });

        for child in children {
            let child_id = self.mount(child, Some(node_id));
            self.nodes[node_id.0].children.push(child_id);
        }

        node_id
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Find the first attached element with the given id, in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants_inclusive(self.root)
            .into_iter()
            .find(|&node| self.node(node).id.as_deref() == Some(id))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.node(node).children
    }

    /// The sibling directly after `node`, if any.
    pub fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.parent(node)?;
        let siblings = self.children(parent);
        let index = siblings.iter().position(|&n| n == node)?;
        siblings.get(index + 1).copied()
    }

    /// Walk from `node` upwards (inclusive) and return the first element
    /// carrying `class`.
    pub fn closest(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.has_class(n, class) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// First descendant of `scope` (exclusive) matching `predicate`, in
    /// document order.
    pub fn query(&self, scope: NodeId, predicate: impl Fn(&Self, NodeId) -> bool) -> Option<NodeId> {
        self.descendants_inclusive(scope)
            .into_iter()
            .skip(1)
            .find(|&node| predicate(self, node))
    }

    /// First descendant of `scope` carrying `class`.
    pub fn query_class(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.query(scope, |doc, node| doc.has_class(node, class))
    }

    fn descendants_inclusive(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![scope];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn tag(&self, node: NodeId) -> &str {
        &self.node(node).tag
    }

    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.node(node).id.as_deref()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).classes.iter().any(|c| c == class)
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.node(node).classes
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node).attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.node(node).attributes.contains_key(name)
    }

    /// Own text followed by the text of every descendant.
    pub fn text_content(&self, node: NodeId) -> String {
        self.descendants_inclusive(node)
            .into_iter()
            .map(|n| self.node(n).text.as_str())
            .collect()
    }

    pub fn value(&self, node: NodeId) -> &str {
        &self.node(node).value
    }

    pub fn style(&self, node: NodeId) -> &Style {
        &self.node(node).style
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        let classes = &mut self.node_mut(node).classes;
        if classes.iter().any(|c| c == class) {
            return false;
        }
        classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        let classes = &mut self.node_mut(node).classes;
        let before = classes.len();
        classes.retain(|c| c != class);
        classes.len() != before
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        self.node_mut(node)
            .attributes
            .insert(name.to_string(), value.into());
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<String> {
        self.node_mut(node).attributes.remove(name)
    }

    /// Replace the node's content with plain text.
    ///
    /// Children are detached. Their handles stay valid but are no longer
    /// reachable from the root.
    pub fn set_text_content(&mut self, node: NodeId, text: impl Into<String>) {
        let detached = std::mem::take(&mut self.node_mut(node).children);
        for child in detached {
            self.node_mut(child).parent = None;
        }
        self.node_mut(node).text = text.into();
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        self.node_mut(node).value = value.into();
    }

    pub fn style_mut(&mut self, node: NodeId) -> &mut Style {
        &mut self.node_mut(node).style
    }
}
