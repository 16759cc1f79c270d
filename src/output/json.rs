//! JSON output formatting

use serde_json::json;

use crate::container::DeletionSummary;
use crate::output::ListReport;

pub fn format_list(report: &ListReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_summary(summary: &DeletionSummary) -> String {
    let value = serde_json::to_value(summary).unwrap_or(json!(null));
    let value = json!({
        "success": summary.is_success(),
        "summary": value,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}
