//! robot-runnables - find the lines of a Robot Framework suite that can be run
//!
//! This crate provides functionality to:
//! - Hold a parsed suite document as a read-only tree of typed nodes
//! - Classify nodes into run markers: "run all" on runnable section headings
//!   and "run <name>" on the first line of each test case or task
//! - Merge markers that share a gutter line
//! - Describe the runner invocation for a marker
pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod patterns;
pub mod runner;
pub mod tree;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandBuilder, RunCommand};
pub use config::Config;
pub use parser::SuiteParser;
pub use patterns::{Classifier, RunnableDetector, ScopeResolver, classify, merge_markers};
pub use runner::SuiteRunner;
pub use tree::{Document, DocumentBuilder, Node, NodeId, NodeKind};
