//! Human-readable output formatting

use bytesize::ByteSize;

use crate::container::{DeletionEvent, DeletionSummary};
use crate::output::ListReport;

/// One absolute path per line, in scan order.
pub fn format_list(report: &ListReport) -> String {
    report
        .paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Progress line for a single deletion step.
pub fn format_event(event: &DeletionEvent<'_>) -> String {
    match event {
        DeletionEvent::Searching { name } => format!("\nProcessing: {}", name),
        DeletionEvent::Found { path, .. } => {
            format!("Found matching container: {}\nDeleting...", path.display())
        }
        DeletionEvent::Removed { path, bytes, .. } => {
            format!("Deleted: {} ({})", path.display(), ByteSize(*bytes))
        }
        DeletionEvent::Failed { name, reason } => format!("Failed: {}: {}", name, reason),
    }
}

pub fn format_summary(summary: &DeletionSummary) -> String {
    let mut output = format!(
        "\nDeletion finished: {} succeeded",
        summary.success_count
    );

    if summary.failures.is_empty() {
        if summary.success_count > 0 {
            output.push_str(&format!(", {} freed", ByteSize(summary.bytes_freed())));
        }
        return output;
    }

    output.push_str(&format!(", {} failed\n", summary.failures.len()));
    output.push_str("\nFailures:\n");
    for failure in &summary.failures {
        output.push_str(&format!("  {}: {}\n", failure.name, failure.reason));
    }
    output.truncate(output.trim_end().len());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::DeletionFailure;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_list_one_path_per_line() {
        let report = ListReport {
            root: PathBuf::from("/c"),
            paths: vec![PathBuf::from("/c/A/x"), PathBuf::from("/c/B/y")],
        };
        assert_eq!(format_list(&report), "/c/A/x\n/c/B/y");

        let empty = ListReport {
            root: PathBuf::from("/c"),
            paths: vec![],
        };
        assert_eq!(format_list(&empty), "");
    }

    #[test]
    fn test_summary_with_failures() {
        let summary = DeletionSummary {
            success_count: 1,
            failures: vec![DeletionFailure {
                name: "ghost".to_string(),
                reason: "no container found containing file 'ghost'".to_string(),
            }],
            removed: vec![],
        };
        let text = format_summary(&summary);
        assert!(text.contains("1 succeeded, 1 failed"));
        assert!(text.ends_with("  ghost: no container found containing file 'ghost'"));
    }

    #[test]
    fn test_summary_all_succeeded() {
        let summary = DeletionSummary::default();
        assert_eq!(format_summary(&summary), "\nDeletion finished: 0 succeeded");
    }

    #[test]
    fn test_event_lines() {
        let path = Path::new("/c/A");
        let line = format_event(&DeletionEvent::Removed {
            name: "x",
            path,
            bytes: 0,
        });
        assert!(line.starts_with("Deleted: /c/A"));
        assert_eq!(
            format_event(&DeletionEvent::Searching { name: "x" }),
            "\nProcessing: x"
        );
    }
}
