//! Turning suite source text into a [`crate::tree::Document`]

pub mod suite_parser;

// Re-export commonly used items
pub use suite_parser::SuiteParser;
