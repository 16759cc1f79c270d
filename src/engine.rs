//! Mode dispatch for a single run

use crate::config::Config;
use crate::container::{delete_many, scan, DeletionEvent, DeletionSummary};
use crate::error::Result;
use crate::output::ListReport;

/// Collect every visible marker entry under the configured root.
pub fn list_containers(config: &Config) -> Result<ListReport> {
    let root = config.validate_root()?;
    let paths = scan(root, config.include_system)?.collect();
    Ok(ListReport {
        root: root.to_path_buf(),
        paths,
    })
}

/// Delete the containers named by `config.delete_targets`.
///
/// Only a bad root is returned as `Err`; per-name failures are in the
/// summary.
pub fn delete_containers<F>(config: &Config, on_event: F) -> Result<DeletionSummary>
where
    F: FnMut(DeletionEvent<'_>),
{
    let root = config.validate_root()?;
    let targets = config.delete_targets.as_deref().unwrap_or_default();
    Ok(delete_many(root, targets, on_event))
}
