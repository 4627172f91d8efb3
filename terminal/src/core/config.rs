//! # Terminal Configuration
//!
//! Session settings for the trading page and the start route, loaded once at startup.
//!
//! ## Sources (later wins)
//!
//! 1. Built-in defaults (`BTC/USDT`, 10 000 quote, 0.5 base, start at `/`)
//! 2. JSON file at `./ascend-config.json` (path overridable with `ASCEND_CONFIG`)
//! 3. Environment overrides:
//!    - `ASCEND_TRADING_SYMBOL`
//!    - `ASCEND_QUOTE_BALANCE`
//!    - `ASCEND_BASE_BALANCE`
//!    - `ASCEND_START_PATH`
//!
//! A missing file is not an error. Any other problem (unreadable file, malformed JSON,
//! invalid values) is logged and the defaults are used instead.

use serde::{Deserialize, Serialize};
use shared::utils::TradingPair;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::error::{AppError, Result};

/// Default config file name, resolved against the working directory
pub const DEFAULT_CONFIG_FILE: &str = "ascend-config.json";

/// Terminal session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Pair traded on the trading page, `BASE/QUOTE`
    pub trading_symbol: String,
    /// Quote balance the buy slider works against
    pub available_quote_balance: f64,
    /// Base balance the sell slider works against
    pub available_base_balance: f64,
    /// Route opened at startup
    pub start_path: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            trading_symbol: "BTC/USDT".to_string(),
            available_quote_balance: 10_000.0,
            available_base_balance: 0.5,
            start_path: "/".to_string(),
        }
    }
}

impl TerminalConfig {
    /// Config file path: `ASCEND_CONFIG` or [`DEFAULT_CONFIG_FILE`]
    pub fn config_path() -> PathBuf {
        std::env::var("ASCEND_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from a JSON file; a missing file yields the defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: TerminalConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `ASCEND_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable numbers are skipped with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(symbol) = lookup("ASCEND_TRADING_SYMBOL") {
            self.trading_symbol = symbol;
        }
        if let Some(raw) = lookup("ASCEND_QUOTE_BALANCE") {
            match raw.trim().parse::<f64>() {
                Ok(value) => self.available_quote_balance = value,
                Err(_) => warn!(value = %raw, "Ignoring non-numeric ASCEND_QUOTE_BALANCE"),
            }
        }
        if let Some(raw) = lookup("ASCEND_BASE_BALANCE") {
            match raw.trim().parse::<f64>() {
                Ok(value) => self.available_base_balance = value,
                Err(_) => warn!(value = %raw, "Ignoring non-numeric ASCEND_BASE_BALANCE"),
            }
        }
        if let Some(path) = lookup("ASCEND_START_PATH") {
            self.start_path = path;
        }
    }

    /// Check that the symbol is a pair and the balances are usable
    pub fn validate(&self) -> Result<()> {
        self.trading_pair()?;

        for (name, value) in [
            ("available_quote_balance", self.available_quote_balance),
            ("available_base_balance", self.available_base_balance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Config(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }

        if !self.start_path.starts_with('/') {
            return Err(AppError::Config(format!(
                "start_path must begin with '/' (got '{}')",
                self.start_path
            )));
        }

        Ok(())
    }

    /// Parsed trading pair
    pub fn trading_pair(&self) -> Result<TradingPair> {
        self.trading_symbol
            .parse()
            .map_err(|e: shared::utils::ParsePairError| AppError::Config(e.to_string()))
    }

    /// File, then environment, then validation. Falls back to defaults on any error.
    pub fn load() -> Self {
        let path = Self::config_path();
        let mut config = match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load config file, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides();

        if let Err(e) = config.validate() {
            warn!(error = %e, "Invalid configuration, using defaults");
            return Self::default();
        }

        info!(
            path = %path.display(),
            symbol = %config.trading_symbol,
            quote_balance = config.available_quote_balance,
            base_balance = config.available_base_balance,
            start_path = %config.start_path,
            "Configuration loaded"
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("ascend-config-{}", uuid::Uuid::new_v4()))
            .join(DEFAULT_CONFIG_FILE)
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = TerminalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.trading_pair().unwrap(), TradingPair::new("BTC", "USDT"));
        assert_eq!(config.available_quote_balance, 10_000.0);
        assert_eq!(config.available_base_balance, 0.5);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = TerminalConfig::load_from_file(&temp_path()).unwrap();
        assert_eq!(config, TerminalConfig::default());
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let path = temp_path();
        let config = TerminalConfig {
            trading_symbol: "ETH/USDT".to_string(),
            available_quote_balance: 2500.0,
            ..TerminalConfig::default()
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(TerminalConfig::load_from_file(&path).unwrap(), config);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"available_base_balance": 2.0}"#).unwrap();
        let config = TerminalConfig::load_from_file(&path).unwrap();
        assert_eq!(config.available_base_balance, 2.0);
        assert_eq!(config.trading_symbol, "BTC/USDT");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(TerminalConfig::load_from_file(&path), Err(AppError::Config(_))));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ASCEND_TRADING_SYMBOL", "SOL/USDT"),
            ("ASCEND_QUOTE_BALANCE", "500"),
            ("ASCEND_BASE_BALANCE", "not-a-number"),
            ("ASCEND_START_PATH", "/markets"),
        ]
        .into_iter()
        .collect();

        let mut config = TerminalConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.trading_symbol, "SOL/USDT");
        assert_eq!(config.available_quote_balance, 500.0);
        assert_eq!(config.available_base_balance, 0.5);
        assert_eq!(config.start_path, "/markets");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_symbol = TerminalConfig {
            trading_symbol: "BTCUSDT".to_string(),
            ..TerminalConfig::default()
        };
        assert!(bad_symbol.validate().is_err());

        let negative = TerminalConfig {
            available_quote_balance: -1.0,
            ..TerminalConfig::default()
        };
        assert!(negative.validate().is_err());

        let infinite = TerminalConfig {
            available_base_balance: f64::INFINITY,
            ..TerminalConfig::default()
        };
        assert!(infinite.validate().is_err());

        let relative_path = TerminalConfig {
            start_path: "markets".to_string(),
            ..TerminalConfig::default()
        };
        assert!(relative_path.validate().is_err());
    }
}
