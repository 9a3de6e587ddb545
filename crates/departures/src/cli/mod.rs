//! Command-line interface for departures.
//!
//! This module provides the CLI structure for the `departures` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{BoardCommand, ConfigCommand, FareCommand};

/// departures - An airport departures board
///
/// Lists departing flights, alerts passengers about their flights and
/// computes airfares.
#[derive(Debug, Parser)]
#[command(name = "departures")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Board file (JSON); the sample JFK board is used when omitted
    #[arg(short, long, global = true, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every departure on the board
    Board(BoardCommand),

    /// Send each passenger an alert about their flight
    Alert,

    /// Calculate the total airfare for a party
    Fare(FareCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
