//! Sandsweep - find and remove sandboxed application containers
//!
//! Each application sandbox on macOS lives in its own folder under
//! `~/Library/Containers`, and most hold a single entry in
//! `Data/Library/Application Scripts` named after the application's
//! bundle identifier. Sandsweep lists those entries, or deletes whole
//! containers by entry name.
//!
//! # Example
//!
//! ```no_run
//! use sandsweep::{list_containers, Config, OutputFormat, format_list};
//!
//! let config = Config::new("/Users/me/Library/Containers");
//! let report = list_containers(&config).unwrap();
//! println!("{}", format_list(&report, &OutputFormat::Human));
//! ```

pub mod cli;
pub mod config;
pub mod container;
pub mod engine;
pub mod error;
pub mod output;

pub use config::{Config, Mode};
pub use container::{delete_many, inspect, locate, scan, DeletionEvent, DeletionSummary};
pub use engine::{delete_containers, list_containers};
pub use error::{Result, SweepError};
pub use output::{format_list, format_summary, OutputFormat};
