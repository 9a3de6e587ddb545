//! Airport records.

use serde::{Deserialize, Serialize};

/// An airport a departures board belongs to.
///
/// Immutable once constructed; two airports are the same airport when all
/// fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airport {
    name: String,
    code: String,
    city: String,
    terminals: u32,
}

impl Airport {
    /// Create a new airport.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        city: impl Into<String>,
        terminals: u32,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            city: city.into(),
            terminals,
        }
    }

    /// Full airport name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// IATA code, e.g. `JFK`.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// City served by the airport.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Number of passenger terminals.
    #[must_use]
    pub fn terminals(&self) -> u32 {
        self.terminals
    }
}

impl std::fmt::Display for Airport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}
