pub mod marker;
pub mod position;
pub mod section_kind;

use crate::impl_case_insensitive_deserialize;
use serde::Serialize;
use std::path::Path;

/// What kind of file a document was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileKind {
    Suite,
    Resource,
    Other,
}

// Implement case-insensitive deserialization
impl_case_insensitive_deserialize!(
    FileKind,
    Suite => "suite",
    Resource => "resource",
    Other => "other"
);

impl FileKind {
    /// Classify a path by extension. `suite_extensions` are matched without the dot.
    pub fn from_path<S: AsRef<str>>(path: &Path, suite_extensions: &[S]) -> Self {
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            return FileKind::Other;
        };
        if suite_extensions
            .iter()
            .any(|ext| ext.as_ref().trim_start_matches('.').eq_ignore_ascii_case(extension))
        {
            FileKind::Suite
        } else if extension.eq_ignore_ascii_case("resource") {
            FileKind::Resource
        } else {
            FileKind::Other
        }
    }
}

// Re-export commonly used types
pub use marker::{GENERIC_RUN_LABEL, MergedMarker, RUN_ALL_LABEL, RunnableMarker};
pub use position::{Position, TextRange};
pub use section_kind::SectionKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_path() {
        let exts = ["robot"];
        assert_eq!(FileKind::from_path(Path::new("suite.robot"), &exts), FileKind::Suite);
        assert_eq!(FileKind::from_path(Path::new("a/b/Login.ROBOT"), &exts), FileKind::Suite);
        assert_eq!(FileKind::from_path(Path::new("common.resource"), &exts), FileKind::Resource);
        assert_eq!(FileKind::from_path(Path::new("notes.txt"), &exts), FileKind::Other);
        assert_eq!(FileKind::from_path(Path::new("Makefile"), &exts), FileKind::Other);
    }

    #[test]
    fn test_file_kind_custom_extensions() {
        let exts = vec![".robot".to_string(), "txt".to_string()];
        assert_eq!(FileKind::from_path(Path::new("legacy.txt"), &exts), FileKind::Suite);
    }
}
