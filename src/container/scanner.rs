//! Full-tree walk for list mode

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::{inspect, marker_suffix};
use crate::error::{Result, SweepError};

/// Outcome of visiting one interesting point of the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// A marker folder; `entry` is what [`inspect`] reported for it.
    Marker { dir: PathBuf, entry: Option<PathBuf> },
    /// A subtree that could not be read and was left out of the walk.
    Skipped { path: Option<PathBuf>, reason: String },
}

/// Walk `root` and report every marker folder's entry.
///
/// The root is checked up front; after that, unreadable subtrees are
/// skipped and the walk carries on with their siblings.
pub fn scan(root: &Path, include_system: bool) -> Result<ContainerScan> {
    if !root.exists() {
        return Err(SweepError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(SweepError::NotADirectory(root.to_path_buf()));
    }

    // Surface a root we cannot list as a setup failure, not a silent skip.
    std::fs::read_dir(root).map_err(|e| SweepError::Walk(format!("{}: {e}", root.display())))?;

    let walker = WalkDir::new(root).follow_links(false).into_iter();
    Ok(ContainerScan {
        visits: Visits {
            walker,
            suffix: marker_suffix(),
            include_system,
        },
    })
}

/// Lazy iterator over every [`Visit`] of a scan.
pub struct Visits {
    walker: walkdir::IntoIter,
    suffix: String,
    include_system: bool,
}

impl Visits {
    fn is_marker(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir() && normalized(entry.path()).ends_with(&self.suffix)
    }
}

impl Iterator for Visits {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        loop {
            match self.walker.next()? {
                Ok(entry) => {
                    if !self.is_marker(&entry) {
                        continue;
                    }
                    let dir = entry.into_path();
                    let entry = inspect(&dir, self.include_system);
                    return Some(Visit::Marker { dir, entry });
                }
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf);
                    tracing::debug!(path = ?path, error = %e, "skipping unreadable subtree");
                    return Some(Visit::Skipped {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
}

/// Lazy iterator over the marker entry paths found by [`scan`].
pub struct ContainerScan {
    visits: Visits,
}

impl ContainerScan {
    /// Every visit, including empty markers and skipped subtrees.
    pub fn visits(self) -> Visits {
        self.visits
    }
}

impl Iterator for ContainerScan {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            match self.visits.next()? {
                Visit::Marker {
                    entry: Some(path), ..
                } => return Some(path),
                Visit::Marker { entry: None, .. } | Visit::Skipped { .. } => continue,
            }
        }
    }
}

fn normalized(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
