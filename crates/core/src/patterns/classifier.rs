use crate::{
    patterns::{CaseNamePattern, Pattern, ScopeResolver, SectionHeadingPattern},
    tree::Node,
    types::{RunnableMarker, SectionKind},
};

/// Decides, for a single node, whether it carries a run marker.
///
/// This is the per-node entry point for editors that ask about one line at
/// a time. It resolves the node's scope by walking backward, so a whole
/// document is better served by [`crate::patterns::RunnableDetector`].
pub struct Classifier {
    patterns: Vec<Box<dyn Pattern>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            patterns: vec![Box::new(SectionHeadingPattern), Box::new(CaseNamePattern)],
        }
    }

    pub fn classify(&self, node: Node<'_>) -> Option<RunnableMarker> {
        self.classify_in_scope(node, ScopeResolver::resolve(node))
    }

    /// Classify with a scope the caller already knows
    pub(crate) fn classify_in_scope(
        &self,
        node: Node<'_>,
        scope: Option<SectionKind>,
    ) -> Option<RunnableMarker> {
        if !Self::is_candidate(node) {
            return None;
        }
        self.patterns
            .iter()
            .find_map(|pattern| pattern.detect(node, scope))
    }

    /// Only non-blank nodes with children in a suite document can anchor a marker
    fn is_candidate(node: Node<'_>) -> bool {
        node.document().is_suite() && node.has_children() && !node.text().trim().is_empty()
    }
}

/// Classify one node with the default patterns
pub fn classify(node: Node<'_>) -> Option<RunnableMarker> {
    Classifier::new().classify(node)
}
