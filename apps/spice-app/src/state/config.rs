//! # Configuration State
//!
//! Read-only settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SPICE_*`)
//! 2. Defaults (this file)
//!
//! The restaurant profile an admin edits (name, logo, contact) is data, not
//! configuration, and lives in the settings collection instead.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use spice_core::TaxRate;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

const DB_FILE_NAME: &str = "spice.db";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("Could not create data directory: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the header until the settings collection says otherwise.
    pub store_name: String,

    /// ISO 4217
    pub currency_code: String,

    pub currency_symbol: String,

    pub currency_decimals: u8,

    /// e.g. 500 = 5%
    pub tax_rate_bps: u32,

    /// Explicit store file. `None` means the platform data directory.
    #[serde(skip)]
    pub db_path: Option<PathBuf>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Spice & Soul".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            tax_rate_bps: spice_core::GST_RATE.bps(),
            db_path: None,
        }
    }
}

impl ConfigState {
    /// Defaults overridden by the process environment.
    ///
    /// ## Environment Variables
    /// - `SPICE_STORE_NAME`
    /// - `SPICE_CURRENCY_SYMBOL`
    /// - `SPICE_TAX_RATE`: percent, e.g. `"5"` or `"12.5"`
    /// - `SPICE_DB_PATH`: store file location
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("SPICE_STORE_NAME") {
            config.store_name = name;
        }

        if let Some(symbol) = lookup("SPICE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("SPICE_TAX_RATE") {
            match raw.trim().parse::<f64>() {
                Ok(pct) if pct.is_finite() && (0.0..=100.0).contains(&pct) => {
                    config.tax_rate_bps = TaxRate::from_percentage(pct).bps();
                }
                _ => warn!(value = %raw, "Ignoring invalid SPICE_TAX_RATE"),
            }
        }

        if let Some(path) = lookup("SPICE_DB_PATH") {
            config.db_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Resolves the store file.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.spiceandsoul.spice/spice.db`
    /// - **Windows**: `%APPDATA%\spiceandsoul\spice\data\spice.db`
    /// - **Linux**: `~/.local/share/spice/spice.db`
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("com", "spiceandsoul", "spice").ok_or(ConfigError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DB_FILE_NAME))
    }

    /// Formats minor units with the configured symbol.
    ///
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(62_790), "₹627.90");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();

        if self.currency_decimals == 0 {
            return format!("{sign}{}{cents}", self.currency_symbol);
        }

        // Past 10^19 the divisor exceeds any u64 amount.
        let (major, minor) = match 10_u64.checked_pow(u32::from(self.currency_decimals)) {
            Some(divisor) => (cents / divisor, cents % divisor),
            None => (0, cents),
        };
        format!(
            "{sign}{}{major}.{minor:0width$}",
            self.currency_symbol,
            width = usize::from(self.currency_decimals)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(62_790), "₹627.90");
        assert_eq!(config.format_currency(5), "₹0.05");
        assert_eq!(config.format_currency(0), "₹0.00");
        assert_eq!(config.format_currency(-5_980), "-₹59.80");
    }

    #[test]
    fn test_format_currency_no_decimals() {
        let config = ConfigState {
            currency_decimals: 0,
            currency_symbol: "¥".to_string(),
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(1200), "¥1200");
    }

    #[test]
    fn test_format_currency_many_decimals() {
        let config = ConfigState {
            currency_decimals: 25,
            ..ConfigState::default()
        };
        assert_eq!(
            config.format_currency(62_790),
            format!("₹0.{:0>25}", 62_790)
        );
        assert_eq!(
            config.format_currency(i64::MIN),
            format!("-₹0.{:0>25}", i64::MIN.unsigned_abs())
        );

        let nineteen = ConfigState {
            currency_decimals: 19,
            ..ConfigState::default()
        };
        assert_eq!(nineteen.format_currency(i64::MAX), "₹0.9223372036854775807");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("SPICE_STORE_NAME", "Spice & Soul Indiranagar"),
            ("SPICE_TAX_RATE", "12.5"),
            ("SPICE_DB_PATH", "/tmp/spice-test.db"),
        ]));

        assert_eq!(config.store_name, "Spice & Soul Indiranagar");
        assert_eq!(config.tax_rate(), TaxRate::from_bps(1250));
        assert_eq!(
            config.database_path().unwrap(),
            PathBuf::from("/tmp/spice-test.db")
        );
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_invalid_tax_rate_keeps_default() {
        let config = ConfigState::from_lookup(lookup_from(&[("SPICE_TAX_RATE", "lots")]));
        assert_eq!(config.tax_rate(), spice_core::GST_RATE);

        let config = ConfigState::from_lookup(lookup_from(&[("SPICE_TAX_RATE", "-3")]));
        assert_eq!(config.tax_rate(), spice_core::GST_RATE);
    }

    #[test]
    fn test_db_path_not_serialized() {
        let config = ConfigState {
            db_path: Some(PathBuf::from("/secret/spice.db")),
            ..ConfigState::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("taxRateBps"));
    }
}
