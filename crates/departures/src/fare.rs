//! Airfare calculation.

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyFormat;

/// Default price per checked bag.
pub const BAG_PRICE: f64 = 25.0;

/// Default price per mile, per traveler.
pub const MILE_PRICE: f64 = 0.10;

/// Per-unit prices used to compute an airfare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FarePricing {
    /// Flat price per checked bag (not multiplied by travelers).
    pub bag_price: f64,
    /// Price per mile, charged for every traveler.
    pub mile_price: f64,
}

impl Default for FarePricing {
    fn default() -> Self {
        Self {
            bag_price: BAG_PRICE,
            mile_price: MILE_PRICE,
        }
    }
}

impl FarePricing {
    /// Total fare: the ticket cost scales with the number of travelers, the
    /// bag cost does not.
    #[must_use]
    pub fn airfare(&self, checked_bags: u32, distance: u32, travelers: u32) -> f64 {
        let ticket_cost = f64::from(distance) * self.mile_price * f64::from(travelers);
        let bag_cost = f64::from(checked_bags) * self.bag_price;
        ticket_cost + bag_cost
    }
}

/// Total airfare at the default prices.
#[must_use]
pub fn calculate_airfare(checked_bags: u32, distance: u32, travelers: u32) -> f64 {
    FarePricing::default().airfare(checked_bags, distance, travelers)
}

/// The line reported to the passenger for a computed fare.
#[must_use]
pub fn airfare_message(airfare: f64, currency: &CurrencyFormat) -> String {
    format!("Total airfare for this flight is {}", currency.format(airfare))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zero_fare_for_any_travelers() {
        for travelers in [0, 1, 3, 250] {
            assert!(approx_eq(calculate_airfare(0, 0, travelers), 0.0));
        }
    }

    #[test]
    fn test_two_bags_two_thousand_miles_three_travelers() {
        // 2 * 25 + 2000 * 0.10 * 3
        assert!(approx_eq(calculate_airfare(2, 2000, 3), 650.0));
    }

    #[test]
    fn test_bag_cost_is_not_per_traveler() {
        let one = calculate_airfare(4, 0, 1);
        let many = calculate_airfare(4, 0, 10);
        assert!(approx_eq(one, 100.0));
        assert!(approx_eq(one, many));
    }

    #[test]
    fn test_ticket_cost_scales_with_travelers() {
        assert!(approx_eq(calculate_airfare(0, 1000, 1), 100.0));
        assert!(approx_eq(calculate_airfare(0, 1000, 4), 400.0));
    }

    #[test]
    fn test_large_party() {
        // 6 * 25 + 2500 * 0.10 * 13
        assert!(approx_eq(calculate_airfare(6, 2500, 13), 3400.0));
    }

    #[test]
    fn test_custom_pricing() {
        let pricing = FarePricing {
            bag_price: 30.0,
            mile_price: 0.25,
        };
        assert!(approx_eq(pricing.airfare(1, 400, 2), 230.0));
    }

    #[test]
    fn test_pricing_deserialize_partial() {
        let pricing: FarePricing = serde_json::from_str(r#"{"bag_price": 40.0}"#).unwrap();
        assert!(approx_eq(pricing.bag_price, 40.0));
        assert!(approx_eq(pricing.mile_price, MILE_PRICE));
    }

    #[test]
    fn test_airfare_message_default_currency() {
        let airfare = calculate_airfare(2, 2000, 3);
        let message = airfare_message(airfare, &CurrencyFormat::default());
        assert_eq!(message, "Total airfare for this flight is $650.00");
    }

    #[test]
    fn test_airfare_message_localized() {
        let currency = CurrencyFormat::for_locale("de-DE").unwrap();
        let message = airfare_message(calculate_airfare(0, 12_345, 1), &currency);
        assert_eq!(message, "Total airfare for this flight is 1.234,50\u{a0}€");
    }
}
