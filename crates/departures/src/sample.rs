//! The demonstration board used when no board file is given.

use chrono::{NaiveDate, NaiveDateTime};

use crate::airport::Airport;
use crate::board::DepartureBoard;
use crate::flight::Flight;
use crate::status::FlightStatus;

/// JFK, the airport of the demonstration board.
#[must_use]
pub fn jfk() -> Airport {
    Airport::new(
        "John F. Kennedy International Airport",
        "JFK",
        "New York",
        6,
    )
}

/// Fixed arrival time shared by the scheduled sample flights.
fn sample_arrival() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2020, 8, 20).and_then(|date| date.and_hms_opt(6, 30, 0))
}

/// Build the demonstration board, departing at `now`.
///
/// The board starts with one flight and has two more appended: a scheduled
/// flight with no terminal yet and a cancelled flight with no times.
#[must_use]
pub fn sample_board(now: NaiveDateTime) -> DepartureBoard {
    let boston = Flight::new("Delta", "Boston", "DL567S", FlightStatus::Scheduled)
        .with_departure(Some(now))
        .with_arrival(sample_arrival())
        .with_terminal(Some("2"));

    let los_angeles = Flight::new("American", "Los Angeles", "AA302", FlightStatus::Scheduled)
        .with_departure(Some(now))
        .with_arrival(sample_arrival())
        .with_terminal(None::<String>);

    let amsterdam = Flight::new("KLM", "Amsterdam", "KL646", FlightStatus::Cancelled)
        .with_terminal(Some("3"));

    let mut board = DepartureBoard::new(jfk(), vec![boston]);
    board.add_flight(los_angeles);
    board.add_flight(amsterdam);
    board
}
