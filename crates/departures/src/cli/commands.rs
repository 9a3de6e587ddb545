//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Board listing arguments.
#[derive(Debug, Args)]
pub struct BoardCommand {
    /// Output the board as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Airfare arguments.
#[derive(Debug, Args)]
pub struct FareCommand {
    /// Number of checked bags for the whole party
    #[arg(long, default_value = "0")]
    pub bags: u32,

    /// Flight distance in miles
    #[arg(short, long)]
    pub distance: u32,

    /// Number of travelers
    #[arg(short, long, default_value = "1")]
    pub travelers: u32,

    /// Locale for the amount (e.g. en-US, de-DE); overrides configuration
    #[arg(short, long)]
    pub locale: Option<String>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
