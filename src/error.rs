//! Error types for Sandsweep

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("Containers directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Could not determine the user's home directory")]
    HomeDirUnavailable,

    #[error("Cannot walk containers directory: {0}")]
    Walk(String),

    #[error("no container found containing file '{0}'")]
    ContainerNotFound(String),

    #[error("failed to remove {}: {source}", .path.display())]
    Removal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{failed} of {} deletions failed", .failed + .succeeded)]
    PartialFailure { failed: usize, succeeded: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SweepError {
    /// True for errors that end the whole run before any work is done.
    pub fn is_fatal_setup(&self) -> bool {
        matches!(
            self,
            SweepError::RootNotFound(_)
                | SweepError::NotADirectory(_)
                | SweepError::HomeDirUnavailable
                | SweepError::Walk(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;
