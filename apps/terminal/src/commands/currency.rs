//! # Currency Commands

use storefront_core::Currency;
use tracing::{debug, info, warn};

use crate::state::StoreState;

/// Selects the display currency and reprices the catalog.
///
/// Unknown codes fall back to the reference currency, matching the store.
pub fn set_currency(state: &mut StoreState, code: &str) -> Currency {
    debug!(code = %code, "set_currency command");

    if Currency::from_code(code).is_none() {
        warn!(code = %code, fallback = %Currency::REFERENCE, "Unknown currency code");
    }

    let selected = state.store_mut().set_currency(code);
    info!(currency = %selected, "Currency selected");
    selected
}

/// Every currency the picker offers, with the selected one flagged.
pub fn list_currencies(state: &StoreState) -> Vec<(Currency, bool)> {
    let selected = state.store().currency();
    Currency::ALL
        .into_iter()
        .map(|currency| (currency, currency == selected))
        .collect()
}
