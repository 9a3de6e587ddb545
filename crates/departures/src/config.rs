//! Configuration management for departures.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::currency::CurrencyFormat;
use crate::error::{Error, Result};
use crate::fare::FarePricing;
use crate::format::{TimeFormat, DEFAULT_TIME_FORMAT};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "departures";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "DEPARTURES_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `DEPARTURES_`, nested keys
///    separated by `__`, e.g. `DEPARTURES_PRICING__BAG_PRICE=30`)
/// 2. TOML config file at `~/.config/departures/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Board display configuration.
    pub display: DisplayConfig,
    /// Airfare prices.
    pub pricing: FarePricing,
    /// Currency configuration.
    pub currency: CurrencyConfig,
}

/// Display-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// strftime pattern for departure and arrival times.
    pub time_format: String,
}

/// Currency-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Locale used to format amounts (e.g. `en-US`).
    /// Detected from `LC_ALL`, `LC_MONETARY` or `LANG` when unset.
    pub locale: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        debug!("Loading configuration from {}", config_file.display());

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        TimeFormat::parse(self.display.time_format.as_str())?;

        for (name, price) in [
            ("bag_price", self.pricing.bag_price),
            ("mile_price", self.pricing.mile_price),
        ] {
            if !price.is_finite() || price < 0.0 {
                return Err(Error::config_validation(format!(
                    "{name} must be a non-negative number, got {price}"
                )));
            }
        }

        if let Some(locale) = &self.currency.locale {
            CurrencyFormat::for_locale(locale)?;
        }

        Ok(())
    }

    /// Get the configured time format.
    ///
    /// # Errors
    ///
    /// Returns an error if `display.time_format` is not a valid pattern.
    pub fn time_format(&self) -> Result<TimeFormat> {
        TimeFormat::parse(self.display.time_format.as_str())
    }

    /// Get the currency format, detecting the locale when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if `currency.locale` names an unknown locale.
    pub fn currency_format(&self) -> Result<CurrencyFormat> {
        match &self.currency.locale {
            Some(locale) => CurrencyFormat::for_locale(locale),
            None => Ok(CurrencyFormat::from_env()),
        }
    }
}
