//! `departures` - An airport departures board
//!
//! This library models the flights departing one airport: their status,
//! times and terminals. It renders the board as text, builds passenger
//! alerts and computes airfares.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod airport;
pub mod board;
pub mod cli;
pub mod config;
pub mod currency;
pub mod error;
pub mod fare;
pub mod flight;
pub mod format;
pub mod logging;
pub mod sample;
pub mod status;

pub use airport::Airport;
pub use board::DepartureBoard;
pub use config::Config;
pub use currency::CurrencyFormat;
pub use error::{Error, Result};
pub use fare::{airfare_message, calculate_airfare, FarePricing};
pub use flight::Flight;
pub use format::{print_departures, write_departures, TimeFormat};
pub use logging::init_logging;
pub use sample::sample_board;
pub use status::FlightStatus;
