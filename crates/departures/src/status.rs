//! Flight status as shown on the departures board.

use serde::{Deserialize, Serialize};

/// The status of a departing flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightStatus {
    /// Scheduled to depart, not yet boarding.
    Scheduled,
    /// Expected to depart at the published time.
    OnTime,
    /// Arrived at the destination.
    Landed,
    /// Departure pushed back.
    Delayed,
    /// Will not fly.
    Cancelled,
    /// Passengers are boarding.
    Boarding,
}

impl FlightStatus {
    /// Every status, in board order.
    pub const ALL: [Self; 6] = [
        Self::Scheduled,
        Self::OnTime,
        Self::Landed,
        Self::Delayed,
        Self::Cancelled,
        Self::Boarding,
    ];

    /// The human-readable label printed on the board.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::OnTime => "On Time",
            Self::Landed => "Landed",
            Self::Delayed => "Delayed",
            Self::Cancelled => "Cancelled",
            Self::Boarding => "Boarding",
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
