//! The departures board and passenger alerts.

use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::airport::Airport;
use crate::error::{Error, Result};
use crate::flight::Flight;
use crate::format::TimeFormat;
use crate::status::FlightStatus;

/// Placeholder used in alerts for a value that is not known yet.
pub const TBD: &str = "TBD";

/// Extra line for any flight without a terminal, whatever its status.
pub const NO_TERMINAL_ALERT: &str = "Your flight has not been assigned a terminal. \
     Please see the nearest information desk for more details.";

/// Departing flights for a single airport.
///
/// The airport is fixed at construction. Flights keep the order they were
/// added in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureBoard {
    airport: Airport,
    #[serde(default)]
    departures: Vec<Flight>,
}

impl DepartureBoard {
    /// Create a board for `airport` with an initial list of departures.
    #[must_use]
    pub fn new(airport: Airport, departures: Vec<Flight>) -> Self {
        Self {
            airport,
            departures,
        }
    }

    /// Load a board from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoardRead`] if the file cannot be read and
    /// [`Error::BoardParse`] if it is not a valid board.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading board from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|source| Error::BoardRead {
            path: path.to_path_buf(),
            source,
        })?;
        let board: Self = serde_json::from_str(&contents).map_err(|source| Error::BoardParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(
            airport = board.airport.code(),
            flights = board.len(),
            "Loaded board"
        );
        Ok(board)
    }

    /// The airport this board belongs to.
    #[must_use]
    pub fn airport(&self) -> &Airport {
        &self.airport
    }

    /// Departures in board order.
    #[must_use]
    pub fn departures(&self) -> &[Flight] {
        &self.departures
    }

    /// Mutable access to the departures list.
    pub fn departures_mut(&mut self) -> &mut Vec<Flight> {
        &mut self.departures
    }

    /// Append a flight to the end of the board.
    pub fn add_flight(&mut self, flight: Flight) {
        debug!(
            airport = self.airport.code(),
            flight = flight.flight_number(),
            "Adding flight to board"
        );
        self.departures.push(flight);
    }

    /// Number of flights on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    /// Check if the board has no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    /// Build the passenger alert lines for every flight, in board order.
    ///
    /// Cancelled, scheduled and boarding flights get a status message; other
    /// statuses get none. Any flight without a terminal additionally gets
    /// [`NO_TERMINAL_ALERT`].
    #[must_use]
    pub fn alerts(&self, time_format: &TimeFormat) -> Vec<String> {
        let mut lines = Vec::new();
        for flight in &self.departures {
            let terminal = flight.terminal().unwrap_or(TBD);
            match flight.status() {
                FlightStatus::Cancelled => lines.push(format!(
                    "We're sorry. Your flight to {} was cancelled. Here is a $500 voucher.",
                    flight.destination()
                )),
                FlightStatus::Scheduled => lines.push(format!(
                    "Your flight to {} is scheduled to depart at {} from terminal: {terminal}.",
                    flight.destination(),
                    time_format.format_or(flight.departure(), TBD),
                )),
                FlightStatus::Boarding => lines.push(format!(
                    "Your flight is boarding. Please head to terminal: {terminal} immediately. \
                     The doors are closing soon."
                )),
                FlightStatus::OnTime | FlightStatus::Landed | FlightStatus::Delayed => {}
            }
            if flight.terminal().is_none() {
                lines.push(NO_TERMINAL_ALERT.to_string());
            }
        }
        debug!(
            airport = self.airport.code(),
            count = lines.len(),
            "Built passenger alerts"
        );
        lines
    }

    /// Write passenger alerts to `out`, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_alerts<W: Write>(&self, out: &mut W, time_format: &TimeFormat) -> Result<()> {
        for line in self.alerts(time_format) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Alert every passenger on the board via stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn alert_passengers(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_alerts(&mut out, &TimeFormat::default())
    }
}
