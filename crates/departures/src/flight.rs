//! Flight records.
//!
//! A flight's departure time, arrival time and terminal may all be unknown.
//! That is ordinary board state (a cancelled flight has no departure time,
//! a gate may not be assigned yet), so those fields are `Option`s and every
//! consumer decides how to render their absence.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::status::FlightStatus;

/// A single departing flight.
///
/// Times are wall-clock times local to the departure airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    airline: String,
    destination: String,
    flight_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    departure: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arrival: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    terminal: Option<String>,
    status: FlightStatus,
}

impl Flight {
    /// Create a flight with no times and no terminal assigned.
    #[must_use]
    pub fn new(
        airline: impl Into<String>,
        destination: impl Into<String>,
        flight_number: impl Into<String>,
        status: FlightStatus,
    ) -> Self {
        Self {
            airline: airline.into(),
            destination: destination.into(),
            flight_number: flight_number.into(),
            departure: None,
            arrival: None,
            terminal: None,
            status,
        }
    }

    /// Set the departure time.
    #[must_use]
    pub fn with_departure(mut self, departure: Option<NaiveDateTime>) -> Self {
        self.departure = departure;
        self
    }

    /// Set the arrival time.
    #[must_use]
    pub fn with_arrival(mut self, arrival: Option<NaiveDateTime>) -> Self {
        self.arrival = arrival;
        self
    }

    /// Set the departure terminal.
    #[must_use]
    pub fn with_terminal(mut self, terminal: Option<impl Into<String>>) -> Self {
        self.terminal = terminal.map(Into::into);
        self
    }

    /// Operating airline.
    #[must_use]
    pub fn airline(&self) -> &str {
        &self.airline
    }

    /// Destination city.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Flight number, e.g. `DL567S`.
    #[must_use]
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Scheduled departure, if known.
    #[must_use]
    pub fn departure(&self) -> Option<NaiveDateTime> {
        self.departure
    }

    /// Scheduled arrival, if known.
    #[must_use]
    pub fn arrival(&self) -> Option<NaiveDateTime> {
        self.arrival
    }

    /// Departure terminal, if one has been assigned.
    #[must_use]
    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> FlightStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 8, 20)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_new_flight_has_no_optional_fields() {
        let flight = Flight::new("KLM", "Amsterdam", "KL646", FlightStatus::Cancelled);

        assert_eq!(flight.airline(), "KLM");
        assert_eq!(flight.destination(), "Amsterdam");
        assert_eq!(flight.flight_number(), "KL646");
        assert!(flight.departure().is_none());
        assert!(flight.arrival().is_none());
        assert!(flight.terminal().is_none());
        assert_eq!(flight.status(), FlightStatus::Cancelled);
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let flight = Flight::new("Delta", "Boston", "DL567S", FlightStatus::Scheduled)
            .with_departure(Some(at(5, 10)))
            .with_arrival(Some(at(6, 30)))
            .with_terminal(Some("2"));

        assert_eq!(flight.departure(), Some(at(5, 10)));
        assert_eq!(flight.arrival(), Some(at(6, 30)));
        assert_eq!(flight.terminal(), Some("2"));
    }

    #[test]
    fn test_with_terminal_none_clears() {
        let flight = Flight::new("American", "Los Angeles", "AA302", FlightStatus::Scheduled)
            .with_terminal(Some("8"))
            .with_terminal(None::<String>);

        assert!(flight.terminal().is_none());
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{
            "airline": "KLM",
            "destination": "Amsterdam",
            "flight_number": "KL646",
            "terminal": null,
            "status": "cancelled"
        }"#;
        let flight: Flight = serde_json::from_str(json).unwrap();

        assert!(flight.departure().is_none());
        assert!(flight.arrival().is_none());
        assert!(flight.terminal().is_none());
        assert_eq!(flight.status(), FlightStatus::Cancelled);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let flight = Flight::new("KLM", "Amsterdam", "KL646", FlightStatus::Cancelled);
        let json = serde_json::to_string(&flight).unwrap();

        assert!(!json.contains("departure"));
        assert!(!json.contains("terminal"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_deserialize_times() {
        let json = r#"{
            "airline": "Delta",
            "destination": "Boston",
            "flight_number": "DL567S",
            "departure": "2020-08-20T05:10:00",
            "status": "boarding"
        }"#;
        let flight: Flight = serde_json::from_str(json).unwrap();

        assert_eq!(flight.departure(), Some(at(5, 10)));
        assert_eq!(flight.status(), FlightStatus::Boarding);
    }
}
