//! # Checkout
//!
//! Cash tendering against the cart total.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart total: 1.00                                                       │
//! │                                                                         │
//! │  pay(0.50) ──► paid 0.50 ──► balance -0.50 ──► Outstanding             │
//! │                                                                         │
//! │  pay(0.75) ──► paid 1.25 ──► balance +0.25 ──► Settled, change 0.25    │
//! │                                   │                                     │
//! │                                   └──► till resets to 0.00             │
//! │                                                                         │
//! │  pay(...)  ──► next sale starts from 0.00                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Policies
//! - The till resets once the balance reaches zero or more, so partial
//!   payments accumulate and a completed sale starts fresh.
//! - A negative tender is ignored: nothing is accumulated and the current
//!   balance is reported.
//! - Amounts are in whatever currency is selected when they are tendered;
//!   changing currency does not rescale the till.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::store::Store;
use crate::validation::validate_tender;

// =============================================================================
// Till
// =============================================================================

/// Running total of cash tendered toward the current cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Till {
    paid: Money,
}

impl Till {
    /// Amount tendered so far for the current sale.
    #[inline]
    pub fn paid(&self) -> Money {
        self.paid
    }

    /// Adds a tender and settles against `total`.
    fn tender(&mut self, amount: Money, total: Money) -> PaymentOutcome {
        let tendered = match validate_tender(amount) {
            Ok(()) => amount,
            Err(_) => Money::zero(),
        };

        self.paid += tendered;
        let total_paid = self.paid;
        let balance = total_paid - total;

        let status = if balance.is_negative() {
            PaymentStatus::Outstanding
        } else {
            self.paid = Money::zero();
            PaymentStatus::Settled
        };

        PaymentOutcome {
            tendered,
            total_paid,
            cart_total: total,
            balance,
            status,
        }
    }
}

// =============================================================================
// Payment Outcome
// =============================================================================

/// Whether the cart has been paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Money is still owed.
    Outstanding,
    /// Paid in full; any positive balance is change due.
    Settled,
}

/// Result of one [`Store::pay`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    /// Amount accepted from this tender (zero when the tender was rejected).
    pub tendered: Money,
    /// Everything tendered toward this sale, including this tender.
    pub total_paid: Money,
    pub cart_total: Money,
    /// `total_paid − cart_total`: negative is still owed, otherwise change.
    pub balance: Money,
    pub status: PaymentStatus,
}

impl PaymentOutcome {
    /// Change to hand back (zero while money is still owed).
    pub fn change_due(&self) -> Money {
        if self.balance.is_negative() {
            Money::zero()
        } else {
            self.balance
        }
    }

    /// Amount still owed (zero once settled).
    pub fn amount_owed(&self) -> Money {
        if self.balance.is_negative() {
            self.balance.abs()
        } else {
            Money::zero()
        }
    }
}

// =============================================================================
// Store Operations
// =============================================================================

impl Store {
    /// Tenders cash toward the cart total.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, PaymentStatus, ProductId, Store};
    ///
    /// let mut store = Store::seeded();
    /// let apple = ProductId::new(100).unwrap();
    /// store.add_to_cart(apple);
    /// store.add_to_cart(apple);
    ///
    /// let first = store.pay(Money::from_cents(50));
    /// assert_eq!(first.balance.cents(), -50);
    /// assert_eq!(first.status, PaymentStatus::Outstanding);
    ///
    /// let second = store.pay(Money::from_cents(50));
    /// assert_eq!(second.balance.cents(), 0);
    /// assert_eq!(second.status, PaymentStatus::Settled);
    /// ```
    pub fn pay(&mut self, amount: Money) -> PaymentOutcome {
        let total = self.cart_total();
        self.till.tender(amount, total)
    }

    /// Amount tendered so far toward the current sale.
    #[inline]
    pub fn amount_paid(&self) -> Money {
        self.till.paid()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn apple() -> ProductId {
        ProductId::new(100).unwrap()
    }

    fn store_with_two_apples() -> Store {
        let mut store = Store::seeded();
        store.add_to_cart(apple());
        store.add_to_cart(apple());
        store
    }

    #[test]
    fn test_partial_payments_accumulate() {
        let mut store = store_with_two_apples();

        let outcome = store.pay(Money::from_cents(30));
        assert_eq!(outcome.balance.cents(), -70);
        assert_eq!(outcome.amount_owed().cents(), 70);
        assert_eq!(store.amount_paid().cents(), 30);

        let outcome = store.pay(Money::from_cents(30));
        assert_eq!(outcome.total_paid.cents(), 60);
        assert_eq!(outcome.balance.cents(), -40);
    }

    #[test]
    fn test_exact_payment_settles_and_resets() {
        let mut store = store_with_two_apples();
        let outcome = store.pay(Money::from_cents(100));

        assert_eq!(outcome.balance, Money::zero());
        assert_eq!(outcome.status, PaymentStatus::Settled);
        assert!(outcome.change_due().is_zero());
        assert!(store.amount_paid().is_zero());
    }

    #[test]
    fn test_overpayment_returns_change() {
        let mut store = store_with_two_apples();
        store.pay(Money::from_cents(50));
        let outcome = store.pay(Money::from_cents(500));

        assert_eq!(outcome.total_paid.cents(), 550);
        assert_eq!(outcome.balance.cents(), 450);
        assert_eq!(outcome.change_due().cents(), 450);
        assert!(outcome.amount_owed().is_zero());

        // Next sale starts fresh
        let next = store.pay(Money::from_cents(10));
        assert_eq!(next.total_paid.cents(), 10);
        assert_eq!(next.balance.cents(), -90);
    }

    #[test]
    fn test_negative_tender_is_ignored() {
        let mut store = store_with_two_apples();
        store.pay(Money::from_cents(40));

        let outcome = store.pay(Money::from_cents(-500));
        assert!(outcome.tendered.is_zero());
        assert_eq!(outcome.total_paid.cents(), 40);
        assert_eq!(outcome.balance.cents(), -60);
    }

    #[test]
    fn test_paying_for_empty_cart() {
        let mut store = Store::seeded();
        let outcome = store.pay(Money::zero());
        assert_eq!(outcome.status, PaymentStatus::Settled);
        assert!(outcome.balance.is_zero());
    }

    #[test]
    fn test_outcome_serializes_status() {
        let mut store = store_with_two_apples();
        let json = serde_json::to_value(store.pay(Money::from_cents(25))).unwrap();
        assert_eq!(json["status"], "outstanding");
        assert_eq!(json["balance"], -75);
    }
}
