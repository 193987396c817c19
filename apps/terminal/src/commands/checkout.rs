//! # Checkout Commands

use std::str::FromStr;

use storefront_core::{Money, PaymentOutcome, PaymentStatus};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::StoreState;

/// Tenders cash toward the cart total.
///
/// `amount` is decimal text in the selected currency (`"12"`, `"0.50"`).
/// Text that is not a number is an error; a negative amount is accepted by
/// the parser but ignored by the till.
pub fn pay(state: &mut StoreState, amount: &str) -> Result<PaymentOutcome, ApiError> {
    debug!(amount = %amount, "pay command");

    let amount = Money::from_str(amount)?;
    if amount.is_negative() {
        warn!(amount = %amount, "Negative tender ignored");
    }

    let outcome = state.store_mut().pay(amount);
    match outcome.status {
        PaymentStatus::Settled => info!(
            total = %outcome.cart_total,
            paid = %outcome.total_paid,
            change = %outcome.change_due(),
            "Payment settled"
        ),
        PaymentStatus::Outstanding => debug!(
            paid = %outcome.total_paid,
            owed = %outcome.amount_owed(),
            "Payment outstanding"
        ),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::{ProductId, Store};

    fn two_apples() -> StoreState {
        let mut store = Store::seeded();
        let apple = ProductId::new(100).unwrap();
        store.add_to_cart(apple);
        store.add_to_cart(apple);
        StoreState::new(store)
    }

    #[test]
    fn test_pay_in_halves() {
        let mut state = two_apples();

        let first = pay(&mut state, "0.50").unwrap();
        assert_eq!(first.balance.cents(), -50);
        assert_eq!(first.status, PaymentStatus::Outstanding);

        let second = pay(&mut state, ".5").unwrap();
        assert_eq!(second.balance.cents(), 0);
        assert_eq!(second.status, PaymentStatus::Settled);
    }

    #[test]
    fn test_pay_rejects_garbage() {
        let mut state = two_apples();
        let err = pay(&mut state, "lots").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.store().amount_paid().is_zero());
    }

    #[test]
    fn test_negative_tender_changes_nothing() {
        let mut state = two_apples();
        pay(&mut state, "0.25").unwrap();

        let outcome = pay(&mut state, "-3").unwrap();
        assert!(outcome.tendered.is_zero());
        assert_eq!(outcome.total_paid.cents(), 25);
    }
}
