use serde::Serialize;
use std::fmt;

use super::document::Document;
use crate::types::{Position, TextRange};

/// Type tag carried by every node in a document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// Section header such as `*** Test Cases ***`
    Heading,
    /// Grouping node; the document root is a block
    Block,
    /// A content cell on a line
    Line,
    /// Line terminator
    NewLine,
    /// Terminal token: text, separators, comments
    Leaf,
    Other,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Heading => "HEADING",
            NodeKind::Block => "BLOCK",
            NodeKind::Line => "LINE",
            NodeKind::NewLine => "NEW_LINE",
            NodeKind::Leaf => "LEAF",
            NodeKind::Other => "OTHER",
        };
        write!(f, "{name}")
    }
}

/// Index of a node inside its document's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) range: TextRange,
    pub(crate) parent: Option<NodeId>,
    /// Position in the parent's child list
    pub(crate) index: usize,
    pub(crate) children: Vec<NodeId>,
}

/// Borrowed cursor over one node of a [`Document`]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    doc: &'a Document,
    id: NodeId,
    data: &'a NodeData,
}

impl<'a> Node<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId, data: &'a NodeData) -> Self {
        Self { doc, id, data }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.data.kind
    }

    pub fn range(&self) -> TextRange {
        self.data.range
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Source text covered by this node
    pub fn text(&self) -> &'a str {
        self.doc.slice(self.data.range)
    }

    pub fn start_position(&self) -> Position {
        self.doc.position_at(self.data.range.start)
    }

    pub fn has_children(&self) -> bool {
        !self.data.children.is_empty()
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        self.data.parent.and_then(|id| self.doc.node(id))
    }

    pub fn first_child(&self) -> Option<Node<'a>> {
        self.data.children.first().and_then(|&id| self.doc.node(id))
    }

    pub fn children(self) -> impl Iterator<Item = Node<'a>> + 'a {
        let doc = self.doc;
        let data = self.data;
        data.children.iter().filter_map(move |&id| doc.node(id))
    }

    pub fn prev_sibling(&self) -> Option<Node<'a>> {
        let index = self.data.index.checked_sub(1)?;
        let parent = self.parent()?;
        parent.data.children.get(index).and_then(|&id| self.doc.node(id))
    }

    pub fn next_sibling(&self) -> Option<Node<'a>> {
        let parent = self.parent()?;
        parent
            .data
            .children
            .get(self.data.index + 1)
            .and_then(|&id| self.doc.node(id))
    }

    /// Walk backward through preceding siblings, starting with this node
    pub fn self_and_prev_siblings(self) -> impl Iterator<Item = Node<'a>> + 'a {
        std::iter::successors(Some(self), |node| node.prev_sibling())
    }

    /// Walk forward through following siblings, starting with this node
    pub fn self_and_next_siblings(self) -> impl Iterator<Item = Node<'a>> + 'a {
        std::iter::successors(Some(self), |node| node.next_sibling())
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}..{} {:?}",
            self.data.kind,
            self.data.range.start,
            self.data.range.end,
            self.text()
        )
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for Node<'_> {}
