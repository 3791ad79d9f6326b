use crate::{
    tree::Node,
    types::{RunnableMarker, SectionKind},
};

/// Recognizes one shape of runnable line.
///
/// `scope` is the section the node lexically sits in, already resolved by
/// the caller. Patterns only see nodes that passed the classifier's
/// candidate checks.
pub trait Pattern: Send + Sync {
    fn detect(&self, node: Node<'_>, scope: Option<SectionKind>) -> Option<RunnableMarker>;
}
