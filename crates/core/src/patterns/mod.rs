//! Recognizing runnable lines in a suite document

pub mod case_name;
pub mod classifier;
pub mod detector;
pub mod merge;
pub mod pattern;
pub mod scope;
pub mod section_heading;

pub use case_name::CaseNamePattern;
pub use classifier::{Classifier, classify};
pub use detector::RunnableDetector;
pub use merge::merge_markers;
pub use pattern::Pattern;
pub use scope::ScopeResolver;
pub use section_heading::SectionHeadingPattern;
