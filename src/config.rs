//! Run configuration resolved from the command line

use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::container::parse_target_names;
use crate::error::{Result, SweepError};
use crate::output::OutputFormat;

/// Containers root relative to the user's home directory.
pub const DEFAULT_ROOT: [&str; 2] = ["Library", "Containers"];

/// Which of the two modes a configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Delete,
}

/// Everything a run needs, passed explicitly to the library.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub include_system: bool,
    /// `Some` switches the run into delete mode.
    pub delete_targets: Option<Vec<String>>,
    pub output_format: OutputFormat,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_system: false,
            delete_targets: None,
            output_format: OutputFormat::Human,
        }
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let root = match &args.root {
            Some(root) => root.clone(),
            None => default_root()?,
        };

        Ok(Self {
            root,
            include_system: args.system,
            // An empty --delete is treated as absent, like an unset flag.
            delete_targets: args
                .delete
                .as_deref()
                .filter(|raw| !raw.is_empty())
                .map(parse_target_names),
            output_format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Human
            },
        })
    }

    /// A delete list of any length, even empty, selects delete mode.
    pub fn mode(&self) -> Mode {
        if self.delete_targets.is_some() {
            Mode::Delete
        } else {
            Mode::List
        }
    }

    /// Fail unless the root exists and is a directory.
    pub fn validate_root(&self) -> Result<&Path> {
        if !self.root.exists() {
            return Err(SweepError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(SweepError::NotADirectory(self.root.clone()));
        }
        Ok(&self.root)
    }
}

/// `~/Library/Containers` for the current user.
pub fn default_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(SweepError::HomeDirUnavailable)?;
    Ok(DEFAULT_ROOT.iter().fold(home, |path, part| path.join(part)))
}
