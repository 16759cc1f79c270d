//! Output formatting

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::container::DeletionSummary;
use crate::output::human;
use crate::output::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Marker entries found by a list-mode run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListReport {
    pub root: PathBuf,
    pub paths: Vec<PathBuf>,
}

pub fn format_list(report: &ListReport, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_list(report),
        OutputFormat::Json => json::format_list(report),
    }
}

pub fn format_summary(summary: &DeletionSummary, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format_summary(summary),
        OutputFormat::Json => json::format_summary(summary),
    }
}
