//! Locale-aware currency formatting.
//!
//! Only a handful of locales are known. Each one fixes the currency symbol,
//! where it goes, the digit grouping separator and the decimal separator.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Locale used when nothing else is configured or detected.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Environment variables consulted for the current locale, in order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// `$1.00`
    Prefix,
    /// `1,00 €`
    Suffix,
}

/// How to render a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Currency symbol, e.g. `$`.
    pub symbol: String,
    /// Placement of the symbol.
    pub symbol_position: SymbolPosition,
    /// Separator between groups of three integer digits.
    pub grouping_separator: String,
    /// Separator between the integer and fractional parts.
    pub decimal_separator: String,
    /// Digits after the decimal separator.
    pub fraction_digits: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::prefix("$", ",", ".", 2)
    }
}

impl CurrencyFormat {
    fn prefix(symbol: &str, grouping: &str, decimal: &str, fraction_digits: usize) -> Self {
        Self {
            symbol: symbol.to_string(),
            symbol_position: SymbolPosition::Prefix,
            grouping_separator: grouping.to_string(),
            decimal_separator: decimal.to_string(),
            fraction_digits,
        }
    }

    fn suffix(symbol: &str, grouping: &str, decimal: &str, fraction_digits: usize) -> Self {
        Self {
            symbol_position: SymbolPosition::Suffix,
            ..Self::prefix(symbol, grouping, decimal, fraction_digits)
        }
    }

    /// Look up a locale preset.
    ///
    /// Accepts `en-US`, `en_US` and POSIX forms such as `de_DE.UTF-8`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocale`] if no preset matches.
    pub fn for_locale(locale: &str) -> Result<Self> {
        let tag = normalize_locale(locale);
        let format = match tag.as_str() {
            "en-US" => Self::default(),
            "en-GB" => Self::prefix("£", ",", ".", 2),
            "de-DE" => Self::suffix("€", ".", ",", 2),
            "fr-FR" => Self::suffix("€", "\u{202f}", ",", 2),
            "ja-JP" => Self::prefix("¥", ",", ".", 0),
            _ => {
                return Err(Error::UnknownLocale {
                    locale: locale.to_string(),
                })
            }
        };
        debug!(locale = %tag, "Resolved currency format");
        Ok(format)
    }

    /// Resolve the currency format from the process environment.
    ///
    /// Falls back to [`DEFAULT_LOCALE`] when no known locale is set.
    #[must_use]
    pub fn from_env() -> Self {
        let values = LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok());
        Self::from_locale_values(values)
    }

    /// Pick the first known locale from candidate values.
    ///
    /// Empty values are skipped. A `C` or `POSIX` value ends the search with
    /// the default format, so a set `LC_ALL=C` still overrides `LANG`.
    fn from_locale_values(values: impl IntoIterator<Item = String>) -> Self {
        for value in values {
            if value.is_empty() {
                continue;
            }
            if value == "C" || value == "POSIX" {
                debug!(locale = %value, "Portable locale set, using default currency format");
                return Self::default();
            }
            match Self::for_locale(&value) {
                Ok(format) => return format,
                Err(_) => warn!(locale = %value, "Ignoring unknown locale"),
            }
        }
        debug!(locale = DEFAULT_LOCALE, "No known locale in environment");
        Self::default()
    }

    /// Format `amount` for display.
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        let fixed = format!("{:.*}", self.fraction_digits, amount.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut number = group_digits(integer, &self.grouping_separator);
        if let Some(fraction) = fraction {
            number.push_str(&self.decimal_separator);
            number.push_str(fraction);
        }

        let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        let sign = if amount.is_sign_negative() && !is_zero {
            "-"
        } else {
            ""
        };

        match self.symbol_position {
            SymbolPosition::Prefix => format!("{sign}{}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{number}\u{a0}{}", self.symbol),
        }
    }
}

/// Turn `de_DE.UTF-8@euro` into `de-DE`.
fn normalize_locale(locale: &str) -> String {
    let base = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");
    match base.split_once('-') {
        Some((language, region)) => {
            format!("{}-{}", language.to_lowercase(), region.to_uppercase())
        }
        None => base.to_lowercase(),
    }
}

/// Insert `separator` between groups of three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_us_dollars() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(650.0), "$650.00");
        assert_eq!(format.format(3400.0), "$3,400.00");
        assert_eq!(format.format(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_small_amounts() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(0.0), "$0.00");
        assert_eq!(format.format(0.5), "$0.50");
        assert_eq!(format.format(999.999), "$1,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        let format = CurrencyFormat::default();
        assert_eq!(format.format(-1250.0), "-$1,250.00");
        assert_eq!(format.format(-0.0), "$0.00");
        assert_eq!(format.format(-0.001), "$0.00");
    }

    #[test]
    fn test_locale_presets() {
        let gb = CurrencyFormat::for_locale("en-GB").unwrap();
        assert_eq!(gb.format(1234.5), "£1,234.50");

        let de = CurrencyFormat::for_locale("de-DE").unwrap();
        assert_eq!(de.format(1234.5), "1.234,50\u{a0}€");

        let fr = CurrencyFormat::for_locale("fr-FR").unwrap();
        assert_eq!(fr.format(1234.5), "1\u{202f}234,50\u{a0}€");

        let jp = CurrencyFormat::for_locale("ja-JP").unwrap();
        assert_eq!(jp.format(1234.6), "¥1,235");
    }

    #[test]
    fn test_posix_locale_names() {
        assert_eq!(
            CurrencyFormat::for_locale("de_DE.UTF-8").unwrap(),
            CurrencyFormat::for_locale("de-DE").unwrap()
        );
        assert_eq!(
            CurrencyFormat::for_locale("en_us").unwrap(),
            CurrencyFormat::default()
        );
    }

    #[test]
    fn test_unknown_locale() {
        let err = CurrencyFormat::for_locale("xx-YY").unwrap_err();
        assert!(matches!(err, Error::UnknownLocale { .. }));
        assert!(err.to_string().contains("xx-YY"));
    }

    #[test]
    fn test_from_locale_values_skips_unknown() {
        let format = CurrencyFormat::from_locale_values(vec![
            String::new(),
            "tlh_QO.UTF-8".to_string(),
            "en_GB.UTF-8".to_string(),
        ]);
        assert_eq!(format.symbol, "£");
    }

    #[test]
    fn test_from_locale_values_c_locale_wins() {
        for portable in ["C", "POSIX"] {
            let format = CurrencyFormat::from_locale_values(vec![
                portable.to_string(),
                "de_DE.UTF-8".to_string(),
                "en_GB.UTF-8".to_string(),
            ]);
            assert_eq!(format, CurrencyFormat::default());
        }
    }

    #[test]
    fn test_from_locale_values_falls_back() {
        let format = CurrencyFormat::from_locale_values(Vec::new());
        assert_eq!(format, CurrencyFormat::default());
    }

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("de_DE.UTF-8@euro"), "de-DE");
        assert_eq!(normalize_locale("EN-us"), "en-US");
        assert_eq!(normalize_locale("fr"), "fr");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("0", ","), "0");
        assert_eq!(group_digits("123", ","), "123");
        assert_eq!(group_digits("1234", ","), "1,234");
        assert_eq!(group_digits("1234567", "."), "1.234.567");
    }
}
