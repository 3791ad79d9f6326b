//! Read-only document tree handed to the classifier
//!
//! The tree is built once, either by an external parser through
//! [`DocumentBuilder`] or by [`crate::parser::SuiteParser`], and is never
//! mutated afterwards.

pub mod builder;
pub mod document;
pub mod node;

pub use builder::DocumentBuilder;
pub use document::Document;
pub use node::{Node, NodeId, NodeKind};
