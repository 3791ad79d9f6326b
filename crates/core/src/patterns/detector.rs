use tracing::{debug, trace};

use crate::{
    patterns::Classifier,
    tree::{Document, Node, NodeKind},
    types::{RunnableMarker, SectionKind},
};

/// Finds every run marker in a document in one forward pass.
///
/// The current section is carried along each child list and handed down to
/// children, so no node ever walks backward to find its heading.
pub struct RunnableDetector {
    classifier: Classifier,
}

impl Default for RunnableDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RunnableDetector {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
        }
    }

    /// All markers in document order
    pub fn detect(&self, doc: &Document) -> Vec<RunnableMarker> {
        if !doc.is_suite() {
            debug!(
                "Skipping {:?}: {:?} is not a suite",
                doc.path(),
                doc.file_kind()
            );
            return Vec::new();
        }

        let mut markers = Vec::new();
        self.visit(doc.root(), None, &mut markers);
        debug!("Detected {} runnable marker(s)", markers.len());
        markers
    }

    fn visit(&self, node: Node<'_>, scope: Option<SectionKind>, markers: &mut Vec<RunnableMarker>) {
        if let Some(marker) = self.classifier.classify_in_scope(node, scope) {
            trace!("Marker at {:?}: {}", marker.position, marker.label);
            markers.push(marker);
        }

        let mut current = scope;
        for child in node.children() {
            if child.kind() == NodeKind::Heading {
                current = Some(SectionKind::from_heading(child.text()));
            }
            self.visit(child, current, markers);
        }
    }

    /// The marker owning a 0-based line.
    ///
    /// That is the last marker at or above the line, unless a heading
    /// starts a new section in between.
    pub fn detect_at_line(&self, doc: &Document, line: u32) -> Option<RunnableMarker> {
        let heading_lines: Vec<u32> = doc
            .descendants()
            .filter(|node| node.kind() == NodeKind::Heading)
            .map(|node| node.start_position().line)
            .collect();

        self.detect(doc)
            .into_iter()
            .rev()
            .find(|marker| marker.line() <= line)
            .filter(|marker| {
                !heading_lines
                    .iter()
                    .any(|&heading| heading > marker.line() && heading <= line)
            })
    }
}
