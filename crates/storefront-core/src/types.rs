//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   ProductId     │   │  ProductKind    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product_id     │   │  u32, > 0       │   │  Arms           │       │
//! │  │  name           │   │  100, 200, ...  │   │  Consumable     │       │
//! │  │  base_price USD │   └─────────────────┘   │  Food           │       │
//! │  │  price (shown)  │                         │  Magic          │       │
//! │  │  quantity       │                         │  Utility        │       │
//! │  │  image, kind    │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quantity Lives on the Product
//! The cart is a list of product ids; the quantity of each cart entry is
//! stored on the product itself. A product is in the cart exactly when its
//! quantity is greater than zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Unique positive product identifier.
///
/// Deserializing goes through [`ProductId::new`], so `0` is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "u32")]
pub struct ProductId(pub(crate) u32);

impl ProductId {
    /// Creates an id from a raw number. Returns `None` for zero.
    #[inline]
    pub const fn new(id: u32) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(ProductId(id))
        }
    }

    /// Creates an id from untrusted input (a form field, a command argument).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::ProductId;
    ///
    /// assert!(ProductId::from_raw(4400).is_some());
    /// assert!(ProductId::from_raw(0).is_none());
    /// assert!(ProductId::from_raw(-100).is_none());
    /// assert!(ProductId::from_raw(i64::MAX).is_none());
    /// ```
    pub fn from_raw(id: i64) -> Option<Self> {
        u32::try_from(id).ok().and_then(ProductId::new)
    }

    /// Returns the raw number.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ProductId {
    type Error = ValidationError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        ProductId::new(id).ok_or_else(|| ValidationError::MustBePositive {
            field: "product id".to_string(),
        })
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// Shelf category of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    Arms,
    Consumable,
    Food,
    Magic,
    #[default]
    Utility,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub product_id: ProductId,

    /// Display name.
    pub name: String,

    /// Price in the reference currency (USD).
    pub base_price: Money,

    /// `base_price` converted to the selected currency.
    pub price: Money,

    /// Quantity in the cart; zero when not in the cart.
    pub quantity: u32,

    /// Image resource path.
    pub image: String,

    /// Shelf category.
    pub kind: ProductKind,
}

impl Product {
    /// Creates a product with quantity zero, priced in the reference currency.
    ///
    /// Callers that already have a non-reference currency selected must
    /// reprice it (the store does this on insertion).
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        base_price: Money,
        image: impl Into<String>,
        kind: ProductKind,
    ) -> Self {
        Product {
            product_id,
            name: name.into(),
            base_price,
            price: base_price,
            quantity: 0,
            image: image.into(),
            kind,
        }
    }

    /// Display price × cart quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    /// Whether the product currently has a cart entry.
    #[inline]
    pub fn in_cart(&self) -> bool {
        self.quantity > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
