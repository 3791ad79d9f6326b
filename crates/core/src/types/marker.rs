use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::{Position, TextRange};
use super::section_kind::SectionKind;

pub const RUN_ALL_LABEL: &str = "run all";
pub const GENERIC_RUN_LABEL: &str = "run";

/// A source line that offers a "run" affordance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnableMarker {
    /// Byte range of the anchor token
    pub range: TextRange,
    /// Start of the anchor token
    pub position: Position,
    /// Section the marker was found in, either `TestCases` or `Tasks`
    pub section: SectionKind,
    pub label: String,
    /// `None` runs every case in the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runnable_name: Option<String>,
}

impl RunnableMarker {
    pub fn run_all(range: TextRange, position: Position, section: SectionKind) -> Self {
        Self {
            range,
            position,
            section,
            label: RUN_ALL_LABEL.to_string(),
            runnable_name: None,
        }
    }

    pub fn run_case(
        range: TextRange,
        position: Position,
        section: SectionKind,
        name: String,
    ) -> Self {
        Self {
            range,
            position,
            section,
            label: format!("run {name}"),
            runnable_name: Some(name),
        }
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn is_run_all(&self) -> bool {
        self.runnable_name.is_none()
    }

    /// Markers on the same gutter line share a single slot
    pub fn can_merge_with(&self, other: &RunnableMarker) -> bool {
        self.line() == other.line()
    }
}

impl fmt::Display for RunnableMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {}",
            self.position.line + 1,
            self.position.character + 1,
            self.label
        )
    }
}

/// Every marker that landed on one gutter line, collapsed into one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedMarker {
    pub range: TextRange,
    pub position: Position,
    pub label: String,
    /// Distinct runnable names in first-seen order. `None` stands for run all.
    pub runnable_names: Vec<Option<String>>,
}

impl MergedMarker {
    pub fn from_marker(marker: &RunnableMarker) -> Self {
        Self {
            range: marker.range,
            position: marker.position,
            label: marker.label.clone(),
            runnable_names: vec![marker.runnable_name.clone()],
        }
    }

    /// Fold another marker from the same line into this slot.
    ///
    /// The label falls back to the generic one as soon as two different
    /// names compete for the slot.
    pub fn absorb(&mut self, marker: &RunnableMarker) {
        if self.runnable_names.contains(&marker.runnable_name) {
            return;
        }
        self.runnable_names.push(marker.runnable_name.clone());
        self.label = GENERIC_RUN_LABEL.to_string();
    }

    pub fn is_ambiguous(&self) -> bool {
        self.runnable_names.len() > 1
    }

    /// The single runnable name this slot stands for, if it is unambiguous
    pub fn runnable_name(&self) -> Option<&str> {
        match self.runnable_names.as_slice() {
            [Some(name)] => Some(name.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(line: u32, name: Option<&str>) -> RunnableMarker {
        let range = TextRange::new(0, 1);
        let position = Position::new(line, 0);
        match name {
            Some(name) => {
                RunnableMarker::run_case(range, position, SectionKind::TestCases, name.to_string())
            }
            None => RunnableMarker::run_all(range, position, SectionKind::TestCases),
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(marker(0, None).label, "run all");
        assert_eq!(marker(1, Some("Case One")).label, "run Case One");
    }

    #[test]
    fn test_can_merge_only_on_same_line() {
        assert!(marker(3, Some("A")).can_merge_with(&marker(3, Some("B"))));
        assert!(!marker(3, Some("A")).can_merge_with(&marker(4, Some("A"))));
    }

    #[test]
    fn test_absorb_same_name_keeps_label() {
        let first = marker(2, Some("Case"));
        let mut merged = MergedMarker::from_marker(&first);
        merged.absorb(&first.clone());
        assert_eq!(merged.label, "run Case");
        assert_eq!(merged.runnable_name(), Some("Case"));
        assert!(!merged.is_ambiguous());
    }

    #[test]
    fn test_absorb_distinct_name_generalizes_label() {
        let mut merged = MergedMarker::from_marker(&marker(2, Some("A")));
        merged.absorb(&marker(2, Some("B")));
        assert_eq!(merged.label, "run");
        assert_eq!(
            merged.runnable_names,
            vec![Some("A".to_string()), Some("B".to_string())]
        );
        assert_eq!(merged.runnable_name(), None);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(marker(1, Some("Case One")).to_string(), "2:1 run Case One");
    }
}
