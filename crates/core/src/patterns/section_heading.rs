use crate::{
    patterns::Pattern,
    tree::{Node, NodeKind},
    types::{RunnableMarker, SectionKind},
};

/// `*** Test Cases ***` and `*** Tasks ***` headings run the whole file
pub struct SectionHeadingPattern;

impl Pattern for SectionHeadingPattern {
    fn detect(&self, node: Node<'_>, _scope: Option<SectionKind>) -> Option<RunnableMarker> {
        if node.kind() != NodeKind::Heading {
            return None;
        }
        let section = SectionKind::from_heading(node.text());
        if !section.is_runnable() {
            return None;
        }
        let anchor = node.first_child()?;
        Some(RunnableMarker::run_all(
            anchor.range(),
            anchor.start_position(),
            section,
        ))
    }
}
