use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// cache-audit - Find disk space held by caches, build artifacts and IDE data.
///
/// Measures well-known cache locations and searches for large node_modules
/// and build output directories. Nothing is ever deleted.
#[derive(Parser, Debug)]
#[command(name = "cache-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root for the node_modules and build directory searches [default: home]
    #[arg(short, long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Only check the known cache locations
    #[arg(long)]
    pub no_sweeps: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output and non-essential logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
