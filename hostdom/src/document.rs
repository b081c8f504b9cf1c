//! Retained element tree.
//!
//! Nodes live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. The tree is headless: it stores structure and string
//! attributes, nothing else. Component upgrades and event routing live a
//! layer above.

use std::collections::HashMap;

use log::trace;

/// Handle to a node in a [`Document`].
///
/// Ids are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Node {
    tag: String,
    attributes: HashMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: String) -> Self {
        Self {
            tag,
            attributes: HashMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// An element tree with string attributes.
///
/// The document always has a root node. Nodes are never freed
/// individually; dropping the document discards the whole tree.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create a document containing only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("#root".to_string())],
            root: NodeId(0),
        }
    }

    /// The root node. Always connected.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let tag = tag.into();
        trace!("create <{}> as {}", tag, id);
        self.nodes.push(Node::new(tag));
        id
    }

    /// Tag name of a node.
    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    /// Parent of a node, if it has one.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// Children of a node, in insertion order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Whether a node is reachable from the root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.in_subtree(node, self.root)
    }

    /// Append `child` as the last child of `parent`, detaching it from its
    /// current parent first.
    ///
    /// Returns false without changing anything when the move is
    /// impossible: the child is the root, or the parent sits inside the
    /// child's own subtree.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> bool {
        if child == self.root || self.in_subtree(parent, child) {
            return false;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        trace!("append {} under {}", child, parent);
        true
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    /// Whether `ancestor` is an ancestor of `node`, or the node itself.
    fn in_subtree(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.nodes[node.0].attributes.insert(name.into(), value.into())
    }

    /// Remove an attribute, returning the removed value.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<String> {
        self.nodes[node.0].attributes.remove(name)
    }

    /// Read an attribute.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0].attributes.get(name).map(String::as_str)
    }

    /// Whether an attribute is present, regardless of its value.
    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.nodes[node.0].attributes.contains_key(name)
    }

    /// Names of all attributes on a node, sorted.
    pub fn attribute_names(&self, node: NodeId) -> Vec<&str> {
        let mut names: Vec<&str> = self.nodes[node.0]
            .attributes
            .keys()
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    /// The node itself followed by its ancestors up to the root.
    pub fn ancestors_inclusive(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.nodes[current.0].parent {
            path.push(parent);
            current = parent;
        }
        path
    }

    /// The subtree rooted at `node`, including `node`, in document order.
    pub fn subtree(&self, node: NodeId) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            nodes.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        nodes
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
