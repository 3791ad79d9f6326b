use robot_runnables_core::{FileKind, MergedMarker, RunnableMarker};
use std::path::Path;

/// Describe a file for display purposes
pub fn describe_file_kind(path: &Path, kind: FileKind) -> String {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    match kind {
        FileKind::Suite => format!("🧪 suite file ({name})"),
        FileKind::Resource => format!("📚 resource file ({name})"),
        FileKind::Other => format!("📄 file ({name})"),
    }
}

/// One-line summary of a marker with a 1-based position
pub fn format_marker(marker: &RunnableMarker) -> String {
    let kind = if marker.is_run_all() {
        format!("all {}", marker.section)
    } else {
        marker.section.to_string()
    };
    format!(
        "line {}: {} ({})",
        marker.position.line + 1,
        marker.label,
        kind
    )
}

pub fn format_merged_marker(marker: &MergedMarker) -> String {
    let mut line = format!("line {}: {}", marker.position.line + 1, marker.label);
    if marker.is_ambiguous() {
        let names: Vec<_> = marker
            .runnable_names
            .iter()
            .map(|name| name.as_deref().unwrap_or("<all>"))
            .collect();
        line.push_str(&format!(" [{}]", names.join(" | ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use robot_runnables_core::{Position, SectionKind, TextRange};
    use std::path::PathBuf;

    #[test]
    fn test_describe_file_kind() {
        assert_eq!(
            describe_file_kind(&PathBuf::from("suites/login.robot"), FileKind::Suite),
            "🧪 suite file (login.robot)"
        );
        assert_eq!(
            describe_file_kind(&PathBuf::from("common.resource"), FileKind::Resource),
            "📚 resource file (common.resource)"
        );
    }

    #[test]
    fn test_format_marker() {
        let range = TextRange::new(0, 4);
        let run_all = RunnableMarker::run_all(range, Position::new(0, 0), SectionKind::Tasks);
        assert_eq!(format_marker(&run_all), "line 1: run all (all Tasks)");

        let case = RunnableMarker::run_case(
            range,
            Position::new(4, 0),
            SectionKind::TestCases,
            "Case".to_string(),
        );
        assert_eq!(format_marker(&case), "line 5: run Case (Test Cases)");
    }

    #[test]
    fn test_format_ambiguous_merged_marker() {
        let range = TextRange::new(0, 1);
        let a = RunnableMarker::run_case(range, Position::new(1, 0), SectionKind::TestCases, "A".to_string());
        let b = RunnableMarker::run_case(range, Position::new(1, 0), SectionKind::TestCases, "B".to_string());
        let mut merged = MergedMarker::from_marker(&a);
        merged.absorb(&b);
        assert_eq!(format_merged_marker(&merged), "line 2: run [A | B]");
    }
}
