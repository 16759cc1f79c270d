//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sandsweep")]
#[command(author, version, about = "List or remove sandboxed app containers by their Application Scripts entry", long_about = None)]
pub struct Args {
    /// Names of Application Scripts entries whose containers should be
    /// deleted, separated by spaces
    #[arg(long, value_name = "NAMES")]
    pub delete: Option<String>,

    /// Also list entries starting with com.apple.
    #[arg(long)]
    pub system: bool,

    /// Containers directory (defaults to ~/Library/Containers)
    #[arg(long, env = "SANDSWEEP_ROOT", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
