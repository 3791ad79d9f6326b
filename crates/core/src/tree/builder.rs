use std::path::PathBuf;

use super::document::Document;
use super::node::{NodeData, NodeId, NodeKind};
use crate::{
    error::{Error, Result},
    types::{FileKind, TextRange},
};

/// Builds a [`Document`] front to back.
///
/// Tokens consume source text from a cursor, so every node's range is a
/// contiguous slice of the source and sibling ranges never overlap.
/// Interior nodes are opened with [`start_node`](Self::start_node) and
/// closed with [`finish_node`](Self::finish_node).
#[derive(Debug)]
pub struct DocumentBuilder {
    source: String,
    path: Option<PathBuf>,
    file_kind: FileKind,
    nodes: Vec<NodeData>,
    open: Vec<NodeId>,
    cursor: usize,
}

impl DocumentBuilder {
    pub fn new(source: impl Into<String>) -> Self {
        let root = NodeData {
            kind: NodeKind::Block,
            range: TextRange::new(0, 0),
            parent: None,
            index: 0,
            children: Vec::new(),
        };
        Self {
            source: source.into(),
            path: None,
            file_kind: FileKind::Suite,
            nodes: vec![root],
            open: vec![NodeId(0)],
            cursor: 0,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_file_kind(mut self, file_kind: FileKind) -> Self {
        self.file_kind = file_kind;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Open an interior node at the cursor
    pub fn start_node(&mut self, kind: NodeKind) -> NodeId {
        let id = self.push(kind, TextRange::new(self.cursor, self.cursor));
        self.open.push(id);
        id
    }

    /// Add a childless node covering the next `len` bytes
    pub fn token(&mut self, kind: NodeKind, len: usize) -> Result<NodeId> {
        let end = self.cursor + len;
        if end > self.source.len() {
            return Err(Error::TreeError(format!(
                "token {}..{} runs past the end of the source ({} bytes)",
                self.cursor,
                end,
                self.source.len()
            )));
        }
        if !self.source.is_char_boundary(end) {
            return Err(Error::TreeError(format!(
                "token end {end} is not on a character boundary"
            )));
        }
        let id = self.push(kind, TextRange::new(self.cursor, end));
        self.cursor = end;
        Ok(id)
    }

    /// Close the innermost open node at the cursor
    pub fn finish_node(&mut self) -> Result<()> {
        if self.open.len() <= 1 {
            return Err(Error::TreeError(
                "finish_node called with no open node".to_string(),
            ));
        }
        if let Some(id) = self.open.pop() {
            self.nodes[id.index()].range.end = self.cursor;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Document> {
        if self.open.len() != 1 {
            return Err(Error::TreeError(format!(
                "{} node(s) left open",
                self.open.len() - 1
            )));
        }
        // Unconsumed trailing text is folded into the root's range so the
        // root always covers the whole source.
        self.nodes[0].range.end = self.source.len();
        Ok(Document::from_parts(
            self.source,
            self.path,
            self.file_kind,
            self.nodes,
        ))
    }

    fn push(&mut self, kind: NodeKind, range: TextRange) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = self.open.last().copied();
        let index = match parent {
            Some(parent) => {
                let siblings = &mut self.nodes[parent.index()].children;
                siblings.push(id);
                siblings.len() - 1
            }
            None => 0,
        };
        self.nodes.push(NodeData {
            kind,
            range,
            parent,
            index,
            children: Vec::new(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_node_covers_its_tokens() {
        let mut builder = DocumentBuilder::new("*** Tasks ***\n");
        let heading = builder.start_node(NodeKind::Heading);
        builder.token(NodeKind::Leaf, 13).unwrap();
        builder.finish_node().unwrap();
        builder.token(NodeKind::NewLine, 1).unwrap();
        let doc = builder.finish().unwrap();

        let heading = doc.node(heading).unwrap();
        assert_eq!(heading.text(), "*** Tasks ***");
        assert_eq!(heading.first_child().map(|c| c.text()), Some("*** Tasks ***"));
        assert_eq!(doc.root().range(), TextRange::new(0, 14));
    }

    #[test]
    fn test_token_past_end_is_rejected() {
        let mut builder = DocumentBuilder::new("ab");
        assert!(matches!(
            builder.token(NodeKind::Leaf, 3),
            Err(Error::TreeError(_))
        ));
    }

    #[test]
    fn test_token_inside_character_is_rejected() {
        let mut builder = DocumentBuilder::new("é");
        assert!(builder.token(NodeKind::Leaf, 1).is_err());
        assert!(builder.token(NodeKind::Leaf, 2).is_ok());
    }

    #[test]
    fn test_unbalanced_nodes_are_rejected() {
        let mut builder = DocumentBuilder::new("x");
        assert!(builder.finish_node().is_err());

        let mut builder = DocumentBuilder::new("x");
        builder.start_node(NodeKind::Line);
        builder.token(NodeKind::Leaf, 1).unwrap();
        assert!(matches!(builder.finish(), Err(Error::TreeError(_))));
    }

    #[test]
    fn test_file_kind_and_path() {
        let doc = DocumentBuilder::new("")
            .with_path("keywords.resource")
            .with_file_kind(FileKind::Resource)
            .finish()
            .unwrap();
        assert_eq!(doc.file_kind(), FileKind::Resource);
        assert!(!doc.is_suite());
        assert_eq!(doc.path().and_then(|p| p.to_str()), Some("keywords.resource"));
    }
}
