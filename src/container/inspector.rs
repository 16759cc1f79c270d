//! Marker entry lookup for list mode

use std::path::{Path, PathBuf};

use super::{first_entry_name, is_system_named};

/// Return the full path of the first entry in `dir`, if it should be shown.
///
/// Empty or unreadable folders give `None` without an error, and so do
/// vendor-owned entries unless `include_system` is set.
pub fn inspect(dir: &Path, include_system: bool) -> Option<PathBuf> {
    let name = first_entry_name(dir)?;

    if !include_system && is_system_named(&name.to_string_lossy()) {
        tracing::debug!(dir = %dir.display(), entry = ?name, "skipping system entry");
        return None;
    }

    Some(dir.join(name))
}
