//! # Store
//!
//! The explicit state object that every storefront operation works on.
//!
//! ## What the Store Owns
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Store                                        │
//! │                                                                         │
//! │  products: Vec<Product>   ◄── catalog, display order, never shrinks    │
//! │  cart:     Vec<ProductId> ◄── insertion order, no duplicates           │
//! │  converter                ◄── selected currency                        │
//! │  till                     ◄── running payment accumulator              │
//! │  next_id                  ◄── memoized suggestion for the admin form   │
//! │                                                                         │
//! │  cart.rs / checkout.rs / admin.rs add their operations as further      │
//! │  `impl Store` blocks.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Control Flow
//! The view calls exactly one mutating method per user action, then re-reads
//! [`Store::products`], [`Store::cart_lines`] and [`Store::cart_total`] to
//! redraw. The store never renders and never calls back.

use rand::Rng;
use std::collections::HashSet;

use crate::catalog;
use crate::checkout::Till;
use crate::currency::{Currency, CurrencyConverter};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::selection::{select_random_products, SelectionRange};
use crate::types::{Product, ProductId};

/// Catalog, cart, selected currency and payment state for one session.
#[derive(Debug, Clone)]
pub struct Store {
    pub(crate) products: Vec<Product>,
    pub(crate) cart: Vec<ProductId>,
    pub(crate) converter: CurrencyConverter,
    pub(crate) till: Till,
    pub(crate) next_id: Option<ProductId>,
}

impl Store {
    /// Creates a store from catalog rows.
    ///
    /// Rows are normalized on the way in: quantities start at zero, prices
    /// are derived from the base price in the reference currency, and a row
    /// whose id was already seen is dropped.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        let mut seen = HashSet::new();
        let products = products
            .into_iter()
            .filter(|p| seen.insert(p.product_id))
            .map(|mut p| {
                p.quantity = 0;
                p.price = p.base_price;
                p
            })
            .collect();

        Store {
            products,
            cart: Vec::new(),
            converter: CurrencyConverter::default(),
            till: Till::default(),
            next_id: None,
        }
    }

    /// A store stocked with the full seed catalog.
    pub fn seeded() -> Self {
        Store::new(catalog::seed_products())
    }

    /// A store stocked with a random selection of the seed catalog.
    ///
    /// ## Example
    /// ```rust
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use storefront_core::{SelectionRange, Store};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let range = SelectionRange::new(5, 10).unwrap();
    /// let store = Store::random_storefront(range, &mut rng);
    ///
    /// assert!((5..=10).contains(&store.products().len()));
    /// ```
    pub fn random_storefront<R: Rng + ?Sized>(range: SelectionRange, rng: &mut R) -> Self {
        let catalog = catalog::seed_products();
        Store::new(select_random_products(&catalog, range, rng))
    }

    // =========================================================================
    // Catalog reads
    // =========================================================================

    /// Every catalog product, in display order.
    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == id)
    }

    /// Looks up a product by id, failing with [`CoreError::ProductNotFound`].
    pub fn require_product(&self, id: ProductId) -> CoreResult<&Product> {
        self.product(id)
            .ok_or(CoreError::ProductNotFound(id.get()))
    }

    pub(crate) fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.product_id == id)
    }

    /// Whether the catalog has a product with this id.
    #[inline]
    pub fn contains(&self, id: ProductId) -> bool {
        self.product(id).is_some()
    }

    // =========================================================================
    // Currency
    // =========================================================================

    /// The currency display prices are in.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.converter.selected()
    }

    /// Selects a currency by code and reprices the whole catalog.
    ///
    /// Unknown codes select the reference currency. Every product is
    /// repriced, not just the ones in the cart. Returns the currency actually
    /// selected.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Currency, Store};
    ///
    /// let mut store = Store::seeded();
    /// assert_eq!(store.set_currency("EUR"), Currency::Eur);
    /// assert_eq!(store.products()[0].price.cents(), 47); // Apple, 0.50 USD
    ///
    /// assert_eq!(store.set_currency("DOUBLOONS"), Currency::Usd);
    /// assert_eq!(store.products()[0].price.cents(), 50);
    /// ```
    pub fn set_currency(&mut self, code: &str) -> Currency {
        let selected = self.converter.select(code);
        let converter = self.converter;
        for product in &mut self.products {
            product.price = converter.convert(product.base_price);
        }
        selected
    }

    /// Converts a reference-currency amount to the selected currency.
    #[inline]
    pub fn convert(&self, base: Money) -> Money {
        self.converter.convert(base)
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(Vec::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
