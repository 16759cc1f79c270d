//! Batch removal of containers by marker entry name

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::locate;
use crate::error::{Result, SweepError};

/// Progress notifications emitted while a batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionEvent<'a> {
    Searching { name: &'a str },
    Found { name: &'a str, path: &'a Path },
    Removed { name: &'a str, path: &'a Path, bytes: u64 },
    Failed { name: &'a str, reason: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionFailure {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedContainer {
    pub name: String,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Aggregate result of [`delete_many`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionSummary {
    pub success_count: usize,
    pub failures: Vec<DeletionFailure>,
    pub removed: Vec<RemovedContainer>,
}

impl DeletionSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn bytes_freed(&self) -> u64 {
        self.removed.iter().map(|r| r.bytes).sum()
    }

    /// Turn a summary with any failure into [`SweepError::PartialFailure`].
    ///
    /// Containers already removed stay removed either way.
    pub fn into_result(self) -> Result<DeletionSummary> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(SweepError::PartialFailure {
                failed: self.failures.len(),
                succeeded: self.success_count,
            })
        }
    }
}

/// Split a whitespace-separated list of names.
pub fn parse_target_names(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Remove the container of every name in `names`, in order.
///
/// Names are trimmed and blank ones ignored. A missing container or a
/// failed removal is recorded against its name and the batch moves on;
/// nothing is rolled back.
pub fn delete_many<S, F>(root: &Path, names: &[S], mut on_event: F) -> DeletionSummary
where
    S: AsRef<str>,
    F: FnMut(DeletionEvent<'_>),
{
    let mut summary = DeletionSummary::default();

    for raw in names {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            continue;
        }

        on_event(DeletionEvent::Searching { name });

        match delete_one(root, name, &mut on_event) {
            Ok(removed) => {
                summary.success_count += 1;
                summary.removed.push(removed);
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::debug!(name, %reason, "deletion failed");
                on_event(DeletionEvent::Failed {
                    name,
                    reason: &reason,
                });
                summary.failures.push(DeletionFailure {
                    name: name.to_string(),
                    reason,
                });
            }
        }
    }

    summary
}

fn delete_one<F>(root: &Path, name: &str, on_event: &mut F) -> Result<RemovedContainer>
where
    F: FnMut(DeletionEvent<'_>),
{
    let container = locate(root, name)?;
    on_event(DeletionEvent::Found {
        name,
        path: &container,
    });

    let bytes = dir_size(&container);
    fs::remove_dir_all(&container).map_err(|source| SweepError::Removal {
        path: container.clone(),
        source,
    })?;

    tracing::info!(name, path = %container.display(), bytes, "removed container");
    on_event(DeletionEvent::Removed {
        name,
        path: &container,
        bytes,
    });

    Ok(RemovedContainer {
        name: name.to_string(),
        path: container,
        bytes,
    })
}

/// Total size of the regular files under `path`, best effort.
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
