//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floating point:                                                   │
//! │    0.1 + 0.2 = 0.30000000000000004                                     │
//! │    round2(price × rate) depends on how the float happened to land      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Integer Rates                           │
//! │    50 cents × 930021 µ = 46_501_050 / 1_000_000 = 46.50105 → 47 cents  │
//! │    Exact, then rounded once, half away from zero                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let doubled = price.multiply_quantity(2); // 21.98
//! let total = price + Money::from_cents(500);
//!
//! assert_eq!(doubled.cents(), 2198);
//! assert_eq!(total.to_string(), "15.99");
//!
//! // Tendered amounts arrive as text from the view
//! let tendered: Money = "12.5".parse().unwrap();
//! assert_eq!(tendered.cents(), 1250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::currency::ExchangeRate;
use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: balances are negative while money is still owed
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Two decimals for every currency**: yen prices are shown to the cent
///   as well, so one representation covers the whole rate table
///
/// ## Where Money is Used
/// ```text
/// Product.base_price ──► convert(rate) ──► Product.price ──► × quantity
///                                                               │
///                                                               ▼
///                              Payment balance ◄── accumulated − cart total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    /// Converts a reference-currency amount with an exchange rate.
    ///
    /// `round2(amount × rate)`, rounded half away from zero to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::currency::Currency;
    /// use storefront_core::money::Money;
    ///
    /// let apple = Money::from_cents(50);
    /// // 0.50 × 0.930021 = 0.4650105 → 0.47
    /// assert_eq!(apple.convert(Currency::Eur.rate()).cents(), 47);
    /// // 0.50 × 154.9235 = 77.46175 → 77.46
    /// assert_eq!(apple.convert(Currency::Yen.rate()).cents(), 7746);
    /// ```
    pub fn convert(&self, rate: ExchangeRate) -> Money {
        // i128: 1e6 scaling on top of i64 cents would overflow i64
        let scaled = self.0 as i128 * rate.micros() as i128;
        let converted = div_round_half_away(scaled, ExchangeRate::SCALE as i128);
        let bound = if converted < 0 { i64::MIN } else { i64::MAX };
        Money(i64::try_from(converted).unwrap_or(bound))
    }

    /// Multiplies money by a cart quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(425);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 1275);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the amount with a currency symbol, e.g. `€0.47` or `-$5.50`.
    pub fn display_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, self.major().abs(), self.minor())
    }
}

/// Integer division rounding half away from zero. `d` must be positive.
fn div_round_half_away(n: i128, d: i128) -> i128 {
    let quotient = n / d;
    let remainder = n % d;
    if remainder.abs() * 2 >= d {
        quotient + n.signum()
    } else {
        quotient
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"12"`, `"12.5"`, `".75"` or `"-3.25"`.
///
/// More than two fraction digits are rounded half away from zero, so
/// `"0.505"` is 51 cents.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("expected digits"));
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("expected a decimal number like 12.50"));
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(100))
                .ok_or_else(|| invalid("amount is too large"))?
        };

        let mut digits = fraction.bytes().map(|b| (b - b'0') as i64);
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().map(|d| d >= 5).unwrap_or(false);

        let cents = whole_cents
            .checked_add(tenths * 10 + hundredths + round_up as i64)
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal amount without a symbol: `10.99`, `-5.50`.
///
/// The symbol depends on the selected currency; see [`Money::display_with`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
