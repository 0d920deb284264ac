//! CLI argument parsing for wayfarer
//!
//! Uses clap with global flags: --graph, --config, --format, --quiet,
//! --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for wayfarer commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Wayfarer - road-network route finding CLI
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the road map record file (overrides the config file)
    #[arg(long, short = 'g', global = true)]
    pub graph: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two coordinate pairs
    Route {
        /// Origin as LAT,LON in raw degrees
        from: String,

        /// Destination as LAT,LON in raw degrees
        to: String,
    },

    /// Serve route requests over stdin/stdout, one request per line
    Serve,

    /// Show road map statistics
    Info,

    /// Generate a random graph and print its edges as E records
    Random {
        /// Number of vertices
        n: usize,

        /// Number of directed edges
        m: usize,
    },
}
