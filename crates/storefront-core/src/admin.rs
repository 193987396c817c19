//! # Product Admin
//!
//! Adding products to the live catalog and suggesting ids for new ones.
//!
//! ## New Product Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Form opens ──► next_available_product_id() ──► prefilled id (4400)    │
//! │                                                                         │
//! │  Submit ──► add_product(NewProduct)                                    │
//! │               │                                                         │
//! │               ├── name / image present?                                │
//! │               ├── price ≥ 0?                                           │
//! │               ├── id > 0 and not in catalog?                           │
//! │               │                                                         │
//! │               ├── no  ──► false (catalog untouched)                    │
//! │               └── yes ──► append, quantity 0, price via converter      │
//! │                           ──► true                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::store::Store;
use crate::types::{Product, ProductId, ProductKind};
use crate::validation::{
    validate_base_price, validate_image_path, validate_product_id, validate_product_name,
    ValidationResult,
};
use crate::PRODUCT_ID_INTERVAL;

/// A new-product form submission.
///
/// Fields hold what the user typed; nothing is trusted until
/// [`Store::try_add_product`] validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: i64,
    pub name: String,
    pub image: String,
    /// Price in the reference currency.
    pub base_price: Money,
    #[serde(default)]
    pub kind: ProductKind,
}

impl Store {
    /// True iff `id` is a positive integer not already in the catalog.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Store;
    ///
    /// let store = Store::seeded();
    /// assert!(store.is_product_id_unique(4400));
    /// assert!(!store.is_product_id_unique(100));
    /// assert!(!store.is_product_id_unique(0));
    /// assert!(!store.is_product_id_unique(-4400));
    /// ```
    pub fn is_product_id_unique(&self, id: i64) -> bool {
        ProductId::from_raw(id).is_some_and(|id| !self.contains(id))
    }

    /// Validates and appends a new product. Returns `false` on any invalid
    /// field; the catalog is unchanged in that case.
    pub fn add_product(&mut self, new: NewProduct) -> bool {
        self.try_add_product(new).is_ok()
    }

    /// Like [`Store::add_product`], reporting which rule failed.
    ///
    /// The new product starts with quantity zero and its display price is
    /// derived from the base price through the selected currency.
    pub fn try_add_product(&mut self, new: NewProduct) -> ValidationResult<ProductId> {
        let name = validate_product_name(&new.name)?;
        let image = validate_image_path(&new.image)?;
        validate_base_price(new.base_price)?;
        let id = validate_product_id(new.id)?;

        if self.contains(id) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: id.to_string(),
            });
        }

        let mut product = Product::new(id, name, new.base_price, image, new.kind);
        product.price = self.convert(product.base_price);
        self.products.push(product);

        // A consumed suggestion must not be handed out again
        if self.next_id == Some(id) {
            self.next_id = None;
        }

        Ok(id)
    }

    /// Suggests an id for the next product: the largest id in the catalog
    /// rounded up to the next multiple of 100.
    ///
    /// The suggestion is computed once and reused until a product is added
    /// under it.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Store;
    ///
    /// let mut store = Store::seeded(); // ids 100..=4300
    /// assert_eq!(store.next_available_product_id().get(), 4400);
    ///
    /// let mut empty = Store::default();
    /// assert_eq!(empty.next_available_product_id().get(), 100);
    /// ```
    pub fn next_available_product_id(&mut self) -> ProductId {
        if let Some(id) = self.next_id {
            return id;
        }

        let id = self.compute_next_id();
        self.next_id = Some(id);
        id
    }

    fn compute_next_id(&self) -> ProductId {
        let max = self
            .products
            .iter()
            .map(|p| p.product_id.get())
            .max()
            .unwrap_or(0) as u64;
        let interval = PRODUCT_ID_INTERVAL as u64;
        let next = (max / interval + 1) * interval;

        u32::try_from(next)
            .ok()
            .and_then(ProductId::new)
            .unwrap_or_else(|| self.first_free_id())
    }

    /// Lowest unused id. Only reached when the rounded-up id would not fit.
    fn first_free_id(&self) -> ProductId {
        // n products cannot occupy every id in 1..=n+1
        let mut candidate = 1;
        while self.contains(ProductId(candidate)) {
            candidate += 1;
        }
        ProductId(candidate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;

    fn crown(id: i64) -> NewProduct {
        NewProduct {
            id,
            name: "Crown".to_string(),
            image: "/images/products/crown.webp".to_string(),
            base_price: Money::from_cents(9000),
            kind: ProductKind::Magic,
        }
    }

    #[test]
    fn test_add_product_appends_with_zero_quantity() {
        let mut store = Store::seeded();
        assert!(store.add_product(crown(4400)));

        assert_eq!(store.products().len(), 44);
        let crown = store.products().last().unwrap();
        assert_eq!(crown.product_id.get(), 4400);
        assert_eq!(crown.quantity, 0);
        assert_eq!(crown.price.cents(), 9000);
    }

    #[test]
    fn test_add_product_duplicate_id_is_rejected() {
        let mut store = Store::seeded();
        let before = store.products().to_vec();

        assert!(!store.add_product(crown(100)));
        assert_eq!(store.products(), before.as_slice());

        assert!(matches!(
            store.try_add_product(crown(100)),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_add_product_rejects_invalid_fields() {
        let mut store = Store::seeded();

        assert!(!store.add_product(crown(0)));
        assert!(!store.add_product(crown(-7)));

        let mut unnamed = crown(4500);
        unnamed.name = "  ".to_string();
        assert!(!store.add_product(unnamed));

        let mut no_image = crown(4500);
        no_image.image = String::new();
        assert!(!store.add_product(no_image));

        let mut negative = crown(4500);
        negative.base_price = Money::from_cents(-1);
        assert!(!store.add_product(negative));

        assert_eq!(store.products().len(), 43);
    }

    #[test]
    fn test_add_product_rejects_price_above_cap() {
        let mut store = Store::seeded();
        store.set_currency("YEN");

        let mut gilded = crown(4500);
        gilded.base_price = Money::from_cents(50_000_000_000_000_000);
        assert_eq!(
            store.try_add_product(gilded),
            Err(ValidationError::TooLarge {
                field: "price".to_string(),
                max: crate::MAX_BASE_PRICE,
            })
        );
        assert_eq!(store.products().len(), 43);

        let mut priciest = crown(4500);
        priciest.base_price = crate::MAX_BASE_PRICE;
        assert!(store.add_product(priciest));
        // 1,000,000.00 × 154.9235
        assert_eq!(store.products().last().unwrap().price.cents(), 15_492_350_000);
    }

    #[test]
    fn test_new_product_price_uses_selected_currency() {
        let mut store = Store::seeded();
        store.set_currency("EUR");
        store.add_product(crown(4400));

        let crown = store.products().last().unwrap();
        // 90.00 × 0.930021 = 83.70189 → 83.70
        assert_eq!(crown.price.cents(), 8370);
        assert_eq!(
            crown.price,
            crown.base_price.convert(Currency::Eur.rate())
        );
    }

    #[test]
    fn test_is_product_id_unique() {
        let mut store = Store::seeded();
        assert!(store.is_product_id_unique(1));
        assert!(!store.is_product_id_unique(4300));
        store.add_product(crown(1));
        assert!(!store.is_product_id_unique(1));
    }

    #[test]
    fn test_next_id_rounds_up_to_interval() {
        let mut store = Store::seeded();
        store.add_product(crown(4350));
        assert_eq!(store.next_available_product_id().get(), 4400);
    }

    #[test]
    fn test_next_id_is_memoized() {
        let mut store = Store::seeded();
        assert_eq!(store.next_available_product_id().get(), 4400);

        // A larger id that does not consume the suggestion leaves it alone
        store.add_product(crown(9001));
        assert_eq!(store.next_available_product_id().get(), 4400);
    }

    #[test]
    fn test_next_id_advances_when_consumed() {
        let mut store = Store::seeded();
        let suggested = store.next_available_product_id();
        assert!(store.add_product(crown(suggested.get() as i64)));

        let next = store.next_available_product_id();
        assert_eq!(next.get(), 4500);
        assert!(store.is_product_id_unique(next.get() as i64));
    }
}
