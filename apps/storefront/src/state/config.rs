//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VINTAGE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::env;
use std::path::PathBuf;

use serde::Serialize;
use vintage_core::{Money, TaxRate, DEFAULT_TAX_ESTIMATE_BPS};

/// Largest decimal count `format_currency` renders (10^20 overflows u64).
pub const MAX_CURRENCY_DECIMALS: u8 = 19;

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (header and page titles)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Estimated tax rate for the order summary, in basis points
    pub tax_estimate_bps: u32,

    /// Product catalog file; the embedded seed is used when unset
    #[serde(skip)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Defaults suitable for development: INR, 8% tax estimate, seed catalog.
    fn default() -> Self {
        ConfigState {
            store_name: "Vintage Storefront".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            tax_estimate_bps: DEFAULT_TAX_ESTIMATE_BPS,
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VINTAGE_STORE_NAME`: Override store name
    /// - `VINTAGE_CURRENCY_CODE`: Three-letter currency code (e.g. "USD")
    /// - `VINTAGE_CURRENCY_SYMBOL`: Display symbol (e.g. "$")
    /// - `VINTAGE_TAX_ESTIMATE`: Tax estimate percentage (e.g. "8.25")
    /// - `VINTAGE_CATALOG_PATH`: JSON product file to serve instead of the seed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("VINTAGE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(code) = lookup("VINTAGE_CURRENCY_CODE") {
            let code = code.trim().to_ascii_uppercase();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::InvalidValue("VINTAGE_CURRENCY_CODE".to_string()));
            }
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("VINTAGE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(rate) = lookup("VINTAGE_TAX_ESTIMATE") {
            let pct: f64 = rate
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("VINTAGE_TAX_ESTIMATE".to_string()))?;
            if !(0.0..=100.0).contains(&pct) {
                return Err(ConfigError::InvalidValue("VINTAGE_TAX_ESTIMATE".to_string()));
            }
            config.tax_estimate_bps = TaxRate::from_percentage(pct).bps();
        }

        if let Some(path) = lookup("VINTAGE_CATALOG_PATH") {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue("VINTAGE_CATALOG_PATH".to_string()));
            }
            config.catalog_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// The tax estimate as a rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_estimate_bps)
    }

    /// Formats an amount in minor units as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use vintage_storefront::state::ConfigState;
    /// use vintage_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(26700)), "₹267.00");
    /// ```
    ///
    /// Decimals above [`MAX_CURRENCY_DECIMALS`] are treated as the maximum.
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let divisor = 10_u64.pow(u32::from(decimals));
        let magnitude = cents.unsigned_abs();
        let whole = magnitude / divisor;
        let frac = magnitude % divisor;

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
