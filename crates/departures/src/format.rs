//! Text rendering for the departures board.
//!
//! The board listing leaves unknown values blank, so a row reads
//! `Departure:  Arrival: ...` rather than showing a placeholder. Passenger
//! alerts (see [`DepartureBoard::alerts`]) use "TBD" instead.

use std::fmt;
use std::io::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use tracing::trace;

use crate::board::DepartureBoard;
use crate::error::{Error, Result};
use crate::flight::Flight;

/// Default time-of-day pattern: short, no date component (`6:30 AM`).
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

/// A validated strftime pattern for rendering times of day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat {
    pattern: String,
}

impl TimeFormat {
    /// Parse and validate a strftime pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigValidation`] if the pattern is empty, contains
    /// a specifier chrono does not understand, or needs a time zone (`%z`,
    /// `%Z`), which a wall-clock time does not carry.
    pub fn parse(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(Error::config_validation("time_format must not be empty"));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(Error::config_validation(format!(
                "invalid time format: {pattern}"
            )));
        }
        let mut rendered = String::new();
        let sample = NaiveDateTime::default();
        if fmt::write(&mut rendered, format_args!("{}", sample.format(&pattern))).is_err() {
            return Err(Error::config_validation(format!(
                "time format needs a time zone: {pattern}"
            )));
        }
        Ok(Self { pattern })
    }

    /// The underlying strftime pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render the time-of-day portion of `time`.
    #[must_use]
    pub fn format(&self, time: NaiveDateTime) -> String {
        time.format(&self.pattern).to_string()
    }

    /// Render `time`, or `fallback` when it is unknown.
    #[must_use]
    pub fn format_or(&self, time: Option<NaiveDateTime>, fallback: &str) -> String {
        time.map_or_else(|| fallback.to_string(), |t| self.format(t))
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

/// Render one row of the departures listing.
#[must_use]
pub fn departure_line(flight: &Flight, time_format: &TimeFormat) -> String {
    format!(
        "Destination: {} Airline: {} Flight: {} Departure: {} Arrival: {} Terminal: {} Status: {}",
        flight.destination(),
        flight.airline(),
        flight.flight_number(),
        time_format.format_or(flight.departure(), ""),
        time_format.format_or(flight.arrival(), ""),
        flight.terminal().unwrap_or_default(),
        flight.status().label(),
    )
}

/// Write every departure on the board, one line per flight, in board order.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_departures<W: Write>(
    board: &DepartureBoard,
    out: &mut W,
    time_format: &TimeFormat,
) -> Result<()> {
    for flight in board.departures() {
        trace!(flight = flight.flight_number(), "Rendering departure");
        writeln!(out, "{}", departure_line(flight, time_format))?;
    }
    Ok(())
}

/// Print the board's departures to stdout with the default time format.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_departures(board: &DepartureBoard) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_departures(board, &mut out, &TimeFormat::default())
}
