//! `departures` - CLI for the departures board
//!
//! This binary lists departures, alerts passengers and computes airfares
//! for a board loaded from a JSON file or the built-in sample board.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::debug;

use departures::cli::{BoardCommand, Cli, Command, ConfigCommand, FareCommand};
use departures::{
    airfare_message, init_logging, sample_board, write_departures, Config, CurrencyFormat,
    DepartureBoard,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Board(ref board_cmd) => handle_board(&config, cli.board.as_deref(), board_cmd),
        Command::Alert => handle_alert(&config, cli.board.as_deref()),
        Command::Fare(ref fare_cmd) => handle_fare(&config, fare_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

/// Load the board named on the command line, or the sample board.
fn load_board(path: Option<&Path>) -> anyhow::Result<DepartureBoard> {
    match path {
        Some(path) => Ok(DepartureBoard::from_path(path)?),
        None => {
            debug!("No board file given, using the sample board");
            Ok(sample_board(Local::now().naive_local()))
        }
    }
}

fn handle_board(config: &Config, path: Option<&Path>, cmd: &BoardCommand) -> anyhow::Result<()> {
    let board = load_board(path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cmd.json {
        serde_json::to_writer_pretty(&mut out, &board)?;
        writeln!(out)?;
    } else {
        write_departures(&board, &mut out, &config.time_format()?)?;
    }
    Ok(())
}

fn handle_alert(config: &Config, path: Option<&Path>) -> anyhow::Result<()> {
    let board = load_board(path)?;
    debug!(
        airport = board.airport().code(),
        flights = board.len(),
        "Alerting passengers"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    board.write_alerts(&mut out, &config.time_format()?)?;
    Ok(())
}

fn handle_fare(config: &Config, cmd: &FareCommand) -> anyhow::Result<()> {
    let currency = match &cmd.locale {
        Some(locale) => CurrencyFormat::for_locale(locale)?,
        None => config.currency_format()?,
    };

    let airfare = config.pricing.airfare(cmd.bags, cmd.distance, cmd.travelers);
    debug!(
        bags = cmd.bags,
        distance = cmd.distance,
        travelers = cmd.travelers,
        airfare,
        "Calculated airfare"
    );

    println!("{}", airfare_message(airfare, &currency));
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Display]");
                println!("  Time format:        {}", config.display.time_format);
                println!();
                println!("[Pricing]");
                println!("  Bag price:          {}", config.pricing.bag_price);
                println!("  Mile price:         {}", config.pricing.mile_price);
                println!();
                println!("[Currency]");
                println!(
                    "  Locale:             {}",
                    config.currency.locale.as_deref().unwrap_or("(from environment)")
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
