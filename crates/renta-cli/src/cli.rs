//! CLI definition using clap

use clap::{Parser, Subcommand};
use renta_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "renta")]
#[command(version)]
#[command(about = "Vehicle rental desk - console demo")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Store directory override (not persisted)
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive rental session
    Run {
        /// Ignore any existing snapshot and start from the seed fleet
        #[arg(long)]
        fresh: bool,
    },

    /// List the vehicle fleet
    Vehicles,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the snapshot store directory
        #[arg(long)]
        set_store_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Inspect, export, or import the snapshot
    Snapshot {
        /// Write the current snapshot to a file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Replace the current snapshot with one from a file
        #[arg(long)]
        import: Option<PathBuf>,
    },
}
