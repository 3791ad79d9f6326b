use regex::Regex;
use std::path::Path;
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    tree::{Document, DocumentBuilder, NodeKind},
    types::FileKind,
};

/// Cell separator: two or more spaces, or any run containing a tab
const SEPARATOR_PATTERN: &str = r"[ \t]*(?: {2}|\t)[ \t]*";
const CONTINUATION: &str = "...";
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Shallow structural tokenizer for space separated suite files.
///
/// Only the shape the classifier relies on is recovered. Each physical
/// line becomes a flat run of siblings under the root:
///
/// - a `Heading` for a first cell at column 0 that starts with `*`,
/// - a `Line` (with one `Leaf` child) for every other content cell,
/// - `Leaf` tokens for indentation, separators, comments, `...` and
///   trailing whitespace,
/// - a `NewLine` for the terminator.
///
/// Settings, variables and keyword arguments are left as plain cells.
pub struct SuiteParser {
    separator: Regex,
}

impl SuiteParser {
    pub fn new() -> Result<Self> {
        let separator = Regex::new(SEPARATOR_PATTERN)
            .map_err(|e| Error::ParseError(format!("Failed to compile separator: {e}")))?;
        Ok(Self { separator })
    }

    /// Parse source text as a suite document with no path
    pub fn parse(&self, source: &str) -> Result<Document> {
        self.parse_into(DocumentBuilder::new(source))
    }

    /// Parse source read from `path`, tagging the document with `file_kind`
    pub fn parse_source_at(
        &self,
        source: &str,
        path: &Path,
        file_kind: FileKind,
    ) -> Result<Document> {
        let builder = DocumentBuilder::new(source)
            .with_path(path)
            .with_file_kind(file_kind);
        self.parse_into(builder)
    }

    /// Read and parse a file from disk
    pub fn parse_file(&self, path: &Path, file_kind: FileKind) -> Result<Document> {
        let source = std::fs::read_to_string(path)?;
        self.parse_source_at(&source, path, file_kind)
    }

    fn parse_into(&self, mut builder: DocumentBuilder) -> Result<Document> {
        let source = builder.source().to_string();
        let mut lines = 0usize;

        // a leading byte order mark stays in the tree as a leaf
        let body = match source.strip_prefix(BYTE_ORDER_MARK) {
            Some(rest) => {
                builder.token(NodeKind::Leaf, BYTE_ORDER_MARK.len_utf8())?;
                rest
            }
            None => source.as_str(),
        };

        for raw in body.split_inclusive('\n') {
            let content = raw
                .strip_suffix("\r\n")
                .or_else(|| raw.strip_suffix('\n'))
                .unwrap_or(raw);
            self.tokenize_line(&mut builder, content)?;

            let terminator = raw.len() - content.len();
            if terminator > 0 {
                builder.token(NodeKind::NewLine, terminator)?;
            }
            lines += 1;
        }

        let document = builder.finish()?;
        debug!(
            "Tokenized {} line(s) into {} node(s)",
            lines,
            document.node_count()
        );
        Ok(document)
    }

    fn tokenize_line(&self, builder: &mut DocumentBuilder, content: &str) -> Result<()> {
        let body = content.trim_end_matches([' ', '\t']);
        let trailing = content.len() - body.len();
        let indent = body.len() - body.trim_start_matches([' ', '\t']).len();

        if indent > 0 {
            builder.token(NodeKind::Leaf, indent)?;
        }

        let rest = &body[indent..];
        let mut pos = 0;
        let mut first = indent == 0;
        let mut separators = self.separator.find_iter(rest);

        while pos < rest.len() {
            let next = separators.next();
            let cell_end = next.map(|m| m.start()).unwrap_or(rest.len());
            let cell = &rest[pos..cell_end];

            if cell.starts_with('#') {
                // a comment runs to the end of the line
                builder.token(NodeKind::Leaf, rest.len() - pos)?;
                break;
            }

            self.emit_cell(builder, cell, first)?;
            first = false;

            match next {
                Some(separator) => {
                    builder.token(NodeKind::Leaf, separator.len())?;
                    pos = separator.end();
                }
                None => pos = rest.len(),
            }
        }

        if trailing > 0 {
            builder.token(NodeKind::Leaf, trailing)?;
        }
        Ok(())
    }

    fn emit_cell(&self, builder: &mut DocumentBuilder, cell: &str, first: bool) -> Result<()> {
        if first && cell.starts_with('*') {
            trace!("Heading cell {:?}", cell);
            builder.start_node(NodeKind::Heading);
            builder.token(NodeKind::Leaf, cell.len())?;
            return builder.finish_node();
        }
        if cell == CONTINUATION {
            builder.token(NodeKind::Leaf, cell.len())?;
            return Ok(());
        }
        builder.start_node(NodeKind::Line);
        builder.token(NodeKind::Leaf, cell.len())?;
        builder.finish_node()
    }
}
