//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Tender  │────►│ Settled  │       │
//! │  │  Cart    │     │          │     │  (pay)   │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                                │
//! │                   add / inc                                             │
//! │                   dec / remove                                          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                      empty ────────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown product ids are not errors: the store ignores them, the command
//! logs a warning and the cart is redrawn unchanged.

use serde::{Deserialize, Serialize};
use storefront_core::{CartLine, CartTotals, ProductId, Store};
use tracing::{debug, warn};

use crate::state::StoreState;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Store> for CartResponse {
    fn from(store: &Store) -> Self {
        CartResponse {
            items: store.cart_lines(),
            totals: store.cart_totals(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(state: &StoreState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(state.store())
}

/// Adds one unit of a product to the cart.
pub fn add_to_cart(state: &mut StoreState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "add_to_cart command");

    if !state.store_mut().add_to_cart(product_id) {
        warn!(product_id = %product_id, "add_to_cart ignored unknown product");
    }
    get_cart(state)
}

/// Raises the quantity of a product by one.
pub fn increase_quantity(state: &mut StoreState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "increase_quantity command");

    if !state.store_mut().increase_quantity(product_id) {
        warn!(product_id = %product_id, "increase_quantity ignored unknown product");
    }
    get_cart(state)
}

/// Lowers the quantity of a product by one; the product leaves the cart at
/// zero.
pub fn decrease_quantity(state: &mut StoreState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "decrease_quantity command");

    if !state.store_mut().decrease_quantity(product_id) {
        warn!(product_id = %product_id, "decrease_quantity had nothing to remove");
    }
    get_cart(state)
}

/// Removes a product from the cart regardless of quantity.
pub fn remove_from_cart(state: &mut StoreState, product_id: ProductId) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    if !state.store_mut().remove_from_cart(product_id) {
        warn!(product_id = %product_id, "remove_from_cart had nothing to remove");
    }
    get_cart(state)
}

/// Removes every product from the cart.
pub fn empty_cart(state: &mut StoreState) -> CartResponse {
    debug!("empty_cart command");

    let removed = state.store_mut().empty_cart();
    debug!(removed, "Cart emptied");
    get_cart(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> StoreState {
        StoreState::new(Store::seeded())
    }

    fn id(raw: u32) -> ProductId {
        ProductId::new(raw).unwrap()
    }

    #[test]
    fn test_add_and_increase() {
        let mut state = state();
        add_to_cart(&mut state, id(100));
        let cart = increase_quantity(&mut state, id(100));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.totals.total.cents(), 100);
    }

    #[test]
    fn test_unknown_product_leaves_cart_alone() {
        let mut state = state();
        add_to_cart(&mut state, id(200));
        let before = get_cart(&state);

        assert_eq!(add_to_cart(&mut state, id(150)), before);
        assert_eq!(remove_from_cart(&mut state, id(150)), before);
    }

    #[test]
    fn test_decrease_and_remove() {
        let mut state = state();
        add_to_cart(&mut state, id(100));
        add_to_cart(&mut state, id(100));
        add_to_cart(&mut state, id(600));

        let cart = decrease_quantity(&mut state, id(100));
        assert_eq!(cart.items[0].quantity, 1);

        let cart = remove_from_cart(&mut state, id(600));
        assert_eq!(cart.totals.item_count, 1);
    }

    #[test]
    fn test_empty_cart() {
        let mut state = state();
        add_to_cart(&mut state, id(100));
        add_to_cart(&mut state, id(200));

        let cart = empty_cart(&mut state);
        assert!(cart.items.is_empty());
        assert!(cart.totals.total.is_zero());
    }

    #[test]
    fn test_cart_response_shape() {
        let mut state = state();
        let json = serde_json::to_value(add_to_cart(&mut state, id(100))).unwrap();

        assert_eq!(json["items"][0]["productId"], 100);
        assert_eq!(json["totals"]["itemCount"], 1);
    }
}
