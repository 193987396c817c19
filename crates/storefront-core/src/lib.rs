//! # storefront-core: Pure Business Logic for the Storefront
//!
//! Catalog, cart, currency conversion, checkout and product admin, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 View / Controller (apps/terminal)               │   │
//! │  │    draw products ──► draw cart ──► draw checkout               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ one call per user action               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ ┌────────┐  │   │
//! │  │   │  store  │ │  cart   │ │ currency │ │checkout │ │ admin  │  │   │
//! │  │   │ catalog │ │ totals  │ │ converter│ │  till   │ │ next id│  │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └─────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, ProductKind)
//! - [`money`] - Money type with integer arithmetic
//! - [`currency`] - Rate table and converter
//! - [`store`] - The state object every operation runs on
//! - [`cart`] - Cart mutations and totals
//! - [`checkout`] - Cash tendering and balance
//! - [`admin`] - New products and id suggestions
//! - [`selection`] - Random storefront sampling
//! - [`catalog`] - Built-in seed catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: every operation is a method on [`Store`]; no globals
//! 2. **No I/O**: rendering, input and logging belong to the caller
//! 3. **Integer Money**: cents and micro-unit rates, rounded once, half away
//!    from zero
//! 4. **Degrade, Don't Fail**: unknown ids and currencies are no-ops
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Money, ProductId, Store};
//!
//! let mut store = Store::seeded();
//! let apple = ProductId::new(100).unwrap();
//!
//! store.add_to_cart(apple);
//! store.add_to_cart(apple);
//! assert_eq!(store.cart_total(), Money::from_cents(100));
//!
//! assert_eq!(store.pay(Money::from_cents(50)).balance.cents(), -50);
//! assert_eq!(store.pay(Money::from_cents(50)).balance.cents(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod currency;
pub mod error;
pub mod money;
pub mod selection;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use admin::NewProduct;
pub use cart::{CartLine, CartTotals};
pub use checkout::{PaymentOutcome, PaymentStatus};
pub use currency::{Currency, CurrencyConverter, ExchangeRate};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use selection::SelectionRange;
pub use store::Store;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Spacing between suggested product ids.
pub const PRODUCT_ID_INTERVAL: u32 = 100;

/// Longest product name the admin form accepts.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Longest image path the admin form accepts.
pub const MAX_IMAGE_PATH_LEN: usize = 500;

/// Highest base price (USD) the admin form accepts: 1,000,000.00. Converted
/// at the yen rate it is still far inside the range of `Money`.
pub const MAX_BASE_PRICE: Money = Money::from_cents(100_000_000);

/// Default lower bound for a random storefront.
pub const DEFAULT_MIN_PRODUCTS: usize = 8;

/// Default upper bound for a random storefront.
pub const DEFAULT_MAX_PRODUCTS: usize = 16;
