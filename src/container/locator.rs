//! One-level container lookup for delete mode

use std::fs;
use std::path::{Path, PathBuf};

use super::{first_entry_name, marker_dir};
use crate::error::{Result, SweepError};

/// Find the direct child of `root` whose marker entry is named `target`.
///
/// Only the first entry of each marker folder is compared, by exact
/// name. Vendor-owned names are not filtered here. The search stops at
/// the first match.
pub fn locate(root: &Path, target: &str) -> Result<PathBuf> {
    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(root = %root.display(), error = %e, "skipping unreadable child");
                continue;
            }
        };

        match entry.file_type() {
            Ok(ft) if ft.is_dir() => {}
            _ => continue,
        }

        let container = entry.path();
        let marker = marker_dir(&container);
        if !marker.exists() {
            continue;
        }

        if first_entry_name(&marker).is_some_and(|name| name == target) {
            tracing::debug!(container = %container.display(), target, "matched container");
            return Ok(container);
        }
    }

    Err(SweepError::ContainerNotFound(target.to_string()))
}
