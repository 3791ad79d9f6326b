use serde::Serialize;
use std::fmt;

use crate::impl_case_insensitive_deserialize;

/// Section a heading opens, derived from the heading's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    TestCases,
    Tasks,
    Keywords,
    Settings,
    Variables,
    Other,
}

impl_case_insensitive_deserialize!(
    SectionKind,
    TestCases => "testcases",
    Tasks => "tasks",
    Keywords => "keywords",
    Settings => "settings",
    Variables => "variables",
    Other => "other"
);

impl SectionKind {
    /// Classify raw heading text such as `*** Test Cases ***`.
    ///
    /// Every `*` becomes a space, then the text is lowercased and trimmed.
    /// Inner whitespace is kept as written, so `Test  Cases` is not a match.
    pub fn from_heading(text: &str) -> Self {
        let normalized = normalize_heading(text);
        match normalized.as_str() {
            "test case" | "test cases" => SectionKind::TestCases,
            "task" | "tasks" => SectionKind::Tasks,
            "keywords" => SectionKind::Keywords,
            "setting" | "settings" => SectionKind::Settings,
            "variable" | "variables" => SectionKind::Variables,
            _ => SectionKind::Other,
        }
    }

    /// Whether lines in this section can carry a run marker
    pub fn is_runnable(&self) -> bool {
        matches!(self, SectionKind::TestCases | SectionKind::Tasks)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::TestCases => "Test Cases",
            SectionKind::Tasks => "Tasks",
            SectionKind::Keywords => "Keywords",
            SectionKind::Settings => "Settings",
            SectionKind::Variables => "Variables",
            SectionKind::Other => "Other",
        };
        write!(f, "{name}")
    }
}

pub fn normalize_heading(text: &str) -> String {
    text.replace('*', " ").to_lowercase().trim().to_string()
}
