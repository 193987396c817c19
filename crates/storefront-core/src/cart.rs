//! # Cart Operations
//!
//! Cart mutations and totals, as methods on [`Store`].
//!
//! ## Cart Invariants
//! - A product is in the cart set **iff** its quantity is greater than zero
//! - The cart set has no duplicates and keeps insertion order
//! - Quantity is never negative
//! - An unknown product id is never an error: the operation does nothing
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View Action            Store Method             Effect                 │
//! │  ───────────            ────────────             ──────                 │
//! │                                                                         │
//! │  Click product ────────► add_to_cart() ─────────► qty += 1, join cart  │
//! │  Click "+" ────────────► increase_quantity() ───► qty += 1             │
//! │  Click "-" ────────────► decrease_quantity() ───► qty -= 1, leave at 0 │
//! │  Click "remove" ───────► remove_from_cart() ────► qty = 0, leave cart  │
//! │  Click "Empty Cart" ───► empty_cart() ──────────► all of the above     │
//! │                                                                         │
//! │  Redraw ───────────────► cart_lines(), cart_total() (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation returns `true` when it changed the cart, which the view can
//! use for feedback. It is never needed for correctness.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::store::Store;
use crate::types::{Product, ProductId};

/// One row of the cart as the view draws it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Display price in the selected currency.
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price × quantity`.
    pub line_total: Money,
}

/// Cart summary for the checkout panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products in the cart.
    pub item_count: usize,
    /// Sum of all quantities.
    pub total_quantity: u32,
    pub total: Money,
}

impl Store {
    /// Adds one unit of a product to the cart.
    ///
    /// The product joins the cart set the first time; later calls only raise
    /// its quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{ProductId, Store};
    ///
    /// let mut store = Store::seeded();
    /// let apple = ProductId::new(100).unwrap();
    ///
    /// store.add_to_cart(apple);
    /// store.add_to_cart(apple);
    ///
    /// assert_eq!(store.cart_lines().len(), 1);
    /// assert_eq!(store.cart_total().to_string(), "1.00");
    /// ```
    pub fn add_to_cart(&mut self, id: ProductId) -> bool {
        let Some(product) = self.product_mut(id) else {
            return false;
        };
        product.quantity = product.quantity.saturating_add(1);

        if !self.cart.contains(&id) {
            self.cart.push(id);
        }
        true
    }

    /// Raises a product's quantity by one.
    ///
    /// A product with quantity zero joins the cart, so raising the quantity
    /// never leaves a positive quantity outside the cart set.
    pub fn increase_quantity(&mut self, id: ProductId) -> bool {
        self.add_to_cart(id)
    }

    /// Lowers a product's quantity by one, removing it from the cart when the
    /// quantity reaches zero.
    ///
    /// Does nothing for unknown products or products already at zero.
    pub fn decrease_quantity(&mut self, id: ProductId) -> bool {
        let Some(product) = self.product_mut(id) else {
            return false;
        };
        if product.quantity == 0 {
            return false;
        }

        product.quantity -= 1;
        if product.quantity == 0 {
            self.cart.retain(|&entry| entry != id);
        }
        true
    }

    /// Sets a product's quantity to zero and drops it from the cart set.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        let Some(product) = self.product_mut(id) else {
            return false;
        };
        let had_quantity = product.quantity > 0;
        product.quantity = 0;

        let before = self.cart.len();
        self.cart.retain(|&entry| entry != id);
        had_quantity || self.cart.len() != before
    }

    /// Removes every cart entry. Returns how many entries were removed.
    pub fn empty_cart(&mut self) -> usize {
        let mut removed = 0;
        // Back to front so removals never shift an index still to be visited
        for index in (0..self.cart.len()).rev() {
            let id = self.cart[index];
            if self.remove_from_cart(id) {
                removed += 1;
            }
        }
        removed
    }

    /// Sum of `price × quantity` over the cart, to the cent.
    ///
    /// Prices are already rounded to the cent when derived, so the sum is
    /// exact. An empty cart totals zero.
    pub fn cart_total(&self) -> Money {
        self.cart_products().map(|p| p.line_total()).sum()
    }

    /// Cart rows in cart order.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart_products()
            .map(|p| CartLine {
                product_id: p.product_id,
                name: p.name.clone(),
                unit_price: p.price,
                quantity: p.quantity,
                line_total: p.line_total(),
            })
            .collect()
    }

    /// Summary of the cart for the checkout panel.
    pub fn cart_totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.cart.len(),
            total_quantity: self
                .cart_products()
                .fold(0, |total, p| total.saturating_add(p.quantity)),
            total: self.cart_total(),
        }
    }

    /// Whether the cart has no entries.
    #[inline]
    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Product ids in the cart, in insertion order.
    #[inline]
    pub fn cart_ids(&self) -> &[ProductId] {
        &self.cart
    }

    fn cart_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.cart.iter().filter_map(move |&id| self.product(id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
