//! Sandboxed application containers
//!
//! Every direct child of the containers root is one application's
//! container. A container is recognised by the folder at
//! [`MARKER_SUBPATH`] inside it, which is expected to hold exactly one
//! entry naming the application's script bundle.
//!
//! - [`inspect`] reads the marker entry of one folder (list mode)
//! - [`scan`] walks the whole root and yields every marker entry
//! - [`locate`] finds the container whose marker entry has a given name
//! - [`delete_many`] removes the containers for a batch of names

mod deletion;
mod inspector;
mod locator;
mod scanner;

pub use deletion::{
    delete_many, parse_target_names, DeletionEvent, DeletionFailure, DeletionSummary,
    RemovedContainer,
};
pub use inspector::inspect;
pub use locator::locate;
pub use scanner::{scan, ContainerScan, Visit, Visits};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Path segments of the marker folder, relative to a container.
pub const MARKER_SUBPATH: [&str; 3] = ["Data", "Library", "Application Scripts"];

/// Name prefix of entries owned by the operating system vendor.
pub const SYSTEM_PREFIX: &str = "com.apple.";

/// Build the marker folder path beneath a container.
pub fn marker_dir(container: &Path) -> PathBuf {
    MARKER_SUBPATH
        .iter()
        .fold(container.to_path_buf(), |path, segment| path.join(segment))
}

/// The marker subpath as a forward-slash string, used for suffix matching.
pub fn marker_suffix() -> String {
    MARKER_SUBPATH.join("/")
}

/// Whether an entry name carries the reserved vendor prefix.
pub fn is_system_named(name: &str) -> bool {
    name.starts_with(SYSTEM_PREFIX)
}

/// Name of the first entry the OS returns when listing `dir`.
///
/// The listing is not sorted. An empty or unreadable directory yields
/// `None`; only the first entry is ever looked at, however many exist.
pub fn first_entry_name(dir: &Path) -> Option<OsString> {
    let mut entries = fs::read_dir(dir).ok()?;
    match entries.next()? {
        Ok(entry) => Some(entry.file_name()),
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "unreadable first entry");
            None
        }
    }
}
