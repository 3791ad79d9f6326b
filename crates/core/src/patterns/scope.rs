use crate::{
    tree::{Node, NodeKind},
    types::SectionKind,
};

/// Finds the section a node lexically belongs to
pub struct ScopeResolver;

impl ScopeResolver {
    /// Walk backward from `node` through its preceding siblings; the first
    /// heading decides the scope. A child list without a heading inherits the
    /// scope of its parent. `None` means no heading precedes the node.
    pub fn resolve(node: Node<'_>) -> Option<SectionKind> {
        std::iter::successors(Some(node), |current| current.parent()).find_map(|level| {
            level
                .self_and_prev_siblings()
                .find(|sibling| sibling.kind() == NodeKind::Heading)
                .map(|heading| SectionKind::from_heading(heading.text()))
        })
    }
}
