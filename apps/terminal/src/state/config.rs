//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup. The selected currency changes at
//! runtime, but that lives on the store; `currency` here is only the one the
//! session opens with.

use serde::{Deserialize, Serialize};
use std::env;
use storefront_core::{CoreError, Currency, SelectionRange};
use thiserror::Error;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency the session starts in
    pub currency: Currency,

    /// Stock a random selection instead of the full catalog
    pub random_storefront: bool,

    /// How many products a random storefront shows
    pub selection: SelectionRange,

    /// Fixed seed for a reproducible random storefront
    pub seed: Option<u64>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "The Adventurer's Emporium"
    /// - Currency: USD ($)
    /// - Random storefront of 8 to 16 products, fresh every run
    fn default() -> Self {
        ConfigState {
            store_name: "The Adventurer's Emporium".to_string(),
            currency: Currency::Usd,
            random_storefront: true,
            selection: SelectionRange::default(),
            seed: None,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY`: `USD`, `EUR` or `YEN`
    /// - `STOREFRONT_RANDOM`: `true`/`false`, random storefront on or off
    /// - `STOREFRONT_MIN_PRODUCTS`, `STOREFRONT_MAX_PRODUCTS`: selection bounds
    /// - `STOREFRONT_SEED`: u64 seed for a reproducible storefront
    pub fn from_env() -> Result<Self, ConfigError> {
        ConfigState::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup` instead of the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConfigState::default();

        let store_name = match lookup("STOREFRONT_STORE_NAME") {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => defaults.store_name,
        };

        let currency = match lookup("STOREFRONT_CURRENCY") {
            Some(code) => Currency::from_code(&code)
                .ok_or_else(|| ConfigError::invalid("STOREFRONT_CURRENCY", code))?,
            None => defaults.currency,
        };

        let random_storefront = match lookup("STOREFRONT_RANDOM") {
            Some(flag) => parse_flag(&flag)
                .ok_or_else(|| ConfigError::invalid("STOREFRONT_RANDOM", flag))?,
            None => defaults.random_storefront,
        };

        let min = parse_var(&lookup, "STOREFRONT_MIN_PRODUCTS")?
            .unwrap_or(defaults.selection.min());
        let max = parse_var(&lookup, "STOREFRONT_MAX_PRODUCTS")?
            .unwrap_or(defaults.selection.max());
        let selection = SelectionRange::new(min, max)?;

        let seed = parse_var(&lookup, "STOREFRONT_SEED")?;

        Ok(ConfigState {
            store_name,
            currency,
            random_storefront,
            selection,
            seed,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::invalid(key, raw)),
        None => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid product range: {0}")]
    Range(#[from] CoreError),
}

impl ConfigError {
    fn invalid(key: &'static str, value: String) -> Self {
        ConfigError::InvalidValue { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConfigState, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.store_name, "The Adventurer's Emporium");
        assert_eq!(config.selection.min(), 8);
        assert_eq!(config.selection.max(), 16);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STOREFRONT_STORE_NAME", "  Goblin Market "),
            ("STOREFRONT_CURRENCY", "yen"),
            ("STOREFRONT_RANDOM", "off"),
            ("STOREFRONT_MIN_PRODUCTS", "2"),
            ("STOREFRONT_MAX_PRODUCTS", "4"),
            ("STOREFRONT_SEED", "1234"),
        ])
        .unwrap();

        assert_eq!(config.store_name, "Goblin Market");
        assert_eq!(config.currency, Currency::Yen);
        assert!(!config.random_storefront);
        assert_eq!(config.selection, SelectionRange::new(2, 4).unwrap());
        assert_eq!(config.seed, Some(1234));
    }

    #[test]
    fn test_unknown_currency_is_an_error() {
        let err = load(&[("STOREFRONT_CURRENCY", "GOLD")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "STOREFRONT_CURRENCY", .. }
        ));
    }

    #[test]
    fn test_bad_numbers_are_errors() {
        assert!(load(&[("STOREFRONT_SEED", "lucky")]).is_err());
        assert!(load(&[("STOREFRONT_MIN_PRODUCTS", "-1")]).is_err());
        assert!(load(&[("STOREFRONT_RANDOM", "maybe")]).is_err());
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let err = load(&[
            ("STOREFRONT_MIN_PRODUCTS", "10"),
            ("STOREFRONT_MAX_PRODUCTS", "3"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Range(_)));
    }
}
