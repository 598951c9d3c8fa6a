//! CLI argument parsing for paperrec
//!
//! Global flags: --data, --config, --format, --quiet, --verbose

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use output::parse_format;

/// Paperrec - recommend related research papers by abstract similarity
#[derive(Parser, Debug)]
#[command(name = "paperrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// CSV file with `titles` and `abstracts` columns (overrides config)
    #[arg(long, global = true, env = "PAPERREC_DATA")]
    pub data: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. "debug" or "paperrec_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick articles interactively (default)
    Interactive,

    /// Recommend similar and dissimilar articles for one article
    Recommend {
        /// Article number, starting from 1
        #[arg(allow_hyphen_values = true)]
        number: String,
    },

    /// Show one article
    Show {
        /// Article number, starting from 1
        #[arg(allow_hyphen_values = true)]
        number: String,
    },

    /// List every article number and title
    List,

    /// Print the effective configuration as TOML
    Config,
}
