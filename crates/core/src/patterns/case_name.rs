use crate::{
    patterns::Pattern,
    tree::{Node, NodeKind},
    types::{RunnableMarker, SectionKind, TextRange},
};

/// The first cell of a line in a runnable section names a test case or task
pub struct CaseNamePattern;

impl CaseNamePattern {
    /// Source slice from `node` to the end of the last sibling before the
    /// next line break, separators included.
    pub fn case_name<'a>(node: Node<'a>) -> &'a str {
        let end = node
            .self_and_next_siblings()
            .take_while(|sibling| sibling.kind() != NodeKind::NewLine)
            .last()
            .map(|last| last.range().end)
            .unwrap_or(node.range().end);
        node.document()
            .slice(TextRange::new(node.range().start, end))
    }
}

impl Pattern for CaseNamePattern {
    fn detect(&self, node: Node<'_>, scope: Option<SectionKind>) -> Option<RunnableMarker> {
        if node.kind() == NodeKind::Heading {
            return None;
        }
        let section = scope.filter(SectionKind::is_runnable)?;

        // only a node that starts a fresh line can introduce a case
        let prev = node.prev_sibling()?;
        if prev.kind() != NodeKind::NewLine {
            return None;
        }

        let anchor = node.first_child()?;
        Some(RunnableMarker::run_case(
            anchor.range(),
            anchor.start_position(),
            section,
            Self::case_name(node).to_string(),
        ))
    }
}
