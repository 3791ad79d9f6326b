use std::fmt::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use super::node::{Node, NodeData, NodeId, NodeKind};
use crate::types::{FileKind, Position, TextRange};

/// A parsed suite file: source text plus an arena of typed nodes.
///
/// Node 0 is always the root block covering the whole source.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    path: Option<PathBuf>,
    file_kind: FileKind,
    nodes: Vec<NodeData>,
    line_starts: Vec<usize>,
}

impl Document {
    pub(crate) fn from_parts(
        source: String,
        path: Option<PathBuf>,
        file_kind: FileKind,
        nodes: Vec<NodeData>,
    ) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            path,
            file_kind,
            nodes,
            line_starts,
        }
    }

    pub fn root(&self) -> Node<'_> {
        Node::new(self, NodeId(0), &self.nodes[0])
    }

    /// Look up a node. Ids from another document may not resolve.
    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        self.nodes.get(id.index()).map(|data| Node::new(self, id, data))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn file_kind(&self) -> FileKind {
        self.file_kind
    }

    pub fn is_suite(&self) -> bool {
        self.file_kind == FileKind::Suite
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Source text for a range; out-of-bounds ranges yield an empty string
    pub fn slice(&self, range: TextRange) -> &str {
        self.source.get(Range::from(range)).unwrap_or_default()
    }

    /// Convert a byte offset into a 0-based line and character position
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let character = self
            .source
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0);
        Position::new(line as u32, character as u32)
    }

    /// All nodes in document order, root first
    pub fn descendants(&self) -> impl Iterator<Item = Node<'_>> {
        let mut stack = vec![self.root()];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            let children: Vec<_> = node.children().collect();
            stack.extend(children.into_iter().rev());
            Some(node)
        })
    }

    /// Indented dump of the tree, one node per line
    pub fn dump_tree(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root(), 0, &mut out);
        out
    }

    fn dump_node(&self, node: Node<'_>, depth: usize, out: &mut String) {
        let range = node.range();
        let _ = write!(
            out,
            "{}{}@{}..{}",
            "  ".repeat(depth),
            node.kind(),
            range.start,
            range.end
        );
        if node.has_children() || node.kind() == NodeKind::Block {
            out.push('\n');
        } else {
            let _ = writeln!(out, " {:?}", node.text());
        }
        for child in node.children() {
            self.dump_node(child, depth + 1, out);
        }
    }
}
