//! # Currency Module
//!
//! The fixed exchange-rate table and the converter that turns reference
//! (USD) base prices into display prices.
//!
//! ## Rate Table
//! ```text
//! ┌────────────┬──────────────┬────────┐
//! │  Currency  │  Rate (USD)  │ Symbol │
//! ├────────────┼──────────────┼────────┤
//! │  USD       │  1.0         │   $    │  ◄── reference currency
//! │  EUR       │  0.930021    │   €    │
//! │  YEN       │  154.9235    │   ¥    │
//! └────────────┴──────────────┴────────┘
//!   Rates as of May 7, 2024.
//! ```
//!
//! ## Why Micros?
//! Rates are stored as integer millionths (930021 = 0.930021), the same way
//! tax rates are stored as basis points elsewhere: conversion stays in integer
//! arithmetic and is rounded exactly once.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Exchange Rate
// =============================================================================

/// Multiplier against the reference currency, in millionths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate(u64);

impl ExchangeRate {
    /// Number of micros in 1.0.
    pub const SCALE: u64 = 1_000_000;

    /// Creates a rate from millionths.
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        ExchangeRate(micros)
    }

    /// Returns the rate in millionths.
    #[inline]
    pub const fn micros(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// Currency
// =============================================================================

/// A currency the storefront can display prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar, the reference currency for base prices.
    #[default]
    Usd,
    /// Euro.
    Eur,
    /// Japanese yen.
    Yen,
}

impl Currency {
    /// Every currency in the rate table, in picker order.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Yen];

    /// The currency base prices are expressed in.
    pub const REFERENCE: Currency = Currency::Usd;

    /// Looks up a currency code (case-insensitive).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::currency::Currency;
    ///
    /// assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
    /// assert_eq!(Currency::from_code("GBP"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Currency> {
        let code = code.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Resolves a code, falling back to the reference currency when unknown.
    pub fn resolve(code: &str) -> Currency {
        Currency::from_code(code).unwrap_or(Currency::REFERENCE)
    }

    /// ISO-style code shown in the currency picker.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Yen => "YEN",
        }
    }

    /// Symbol used when rendering prices.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Yen => "¥",
        }
    }

    /// Rate against the reference currency.
    pub const fn rate(&self) -> ExchangeRate {
        match self {
            Currency::Usd => ExchangeRate::from_micros(1_000_000),
            Currency::Eur => ExchangeRate::from_micros(930_021),
            Currency::Yen => ExchangeRate::from_micros(154_923_500),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// Converter
// =============================================================================

/// Holds the selected currency and converts base prices into it.
///
/// Exactly one currency is selected at any time; it starts as the reference
/// currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyConverter {
    selected: Currency,
}

impl CurrencyConverter {
    /// Creates a converter with `currency` selected.
    pub const fn new(currency: Currency) -> Self {
        CurrencyConverter { selected: currency }
    }

    /// The currently selected currency.
    #[inline]
    pub const fn selected(&self) -> Currency {
        self.selected
    }

    /// Selects a currency by code. Unknown codes select the reference
    /// currency. Returns the currency actually selected.
    pub fn select(&mut self, code: &str) -> Currency {
        self.selected = Currency::resolve(code);
        self.selected
    }

    /// `round2(base × rate[selected])`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::currency::{Currency, CurrencyConverter};
    /// use storefront_core::money::Money;
    ///
    /// let mut converter = CurrencyConverter::default();
    /// assert_eq!(converter.convert(Money::from_cents(320)).cents(), 320);
    ///
    /// converter.select("EUR");
    /// // 3.20 × 0.930021 = 2.9760672 → 2.98
    /// assert_eq!(converter.convert(Money::from_cents(320)).cents(), 298);
    /// ```
    #[inline]
    pub fn convert(&self, base: Money) -> Money {
        base.convert(self.selected.rate())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::Usd));
        assert_eq!(Currency::from_code(" yen "), Some(Currency::Yen));
        assert_eq!(Currency::from_code("Eur"), Some(Currency::Eur));
        assert_eq!(Currency::from_code(""), None);
        assert_eq!(Currency::from_code("JPY"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_reference() {
        assert_eq!(Currency::resolve("GBP"), Currency::Usd);
        assert_eq!(Currency::resolve("YEN"), Currency::Yen);
    }

    #[test]
    fn test_rates() {
        assert_eq!(Currency::Usd.rate().micros(), ExchangeRate::SCALE);
        assert_eq!(Currency::Eur.rate().micros(), 930_021);
        assert_eq!(Currency::Yen.rate().micros(), 154_923_500);
    }

    #[test]
    fn test_select_unknown_code_reverts_to_usd() {
        let mut converter = CurrencyConverter::new(Currency::Yen);
        assert_eq!(converter.select("XYZ"), Currency::Usd);
        assert_eq!(converter.selected(), Currency::Usd);
    }

    #[test]
    fn test_convert_uses_selected_rate() {
        let mut converter = CurrencyConverter::default();
        let base = Money::from_cents(115); // orange

        assert_eq!(converter.convert(base).cents(), 115);

        converter.select("YEN");
        // 1.15 × 154.9235 = 178.162025 → 178.16
        assert_eq!(converter.convert(base).cents(), 17816);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Currency::Eur).unwrap();
        assert_eq!(json, "\"EUR\"");
        let parsed: Currency = serde_json::from_str("\"YEN\"").unwrap();
        assert_eq!(parsed, Currency::Yen);
    }
}
