//! # Product Commands
//!
//! Catalog browsing and the new-product form.
//!
//! ## New Product Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  new-id ──► next_product_id() ──► "Next free id: 4400"                 │
//! │                                                                         │
//! │  new 4400 90 crown Crown                                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Parse price ("90" → 90.00)                                 │    │
//! │  │  2. Expand a bare image stem ("crown" →                        │    │
//! │  │     "/images/products/crown.webp")                             │    │
//! │  │  3. Store::try_add_product validates and appends               │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Product list redraws with the new entry                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use storefront_core::catalog::product_image_path;
use storefront_core::{Money, NewProduct, Product, ProductId, ProductKind};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::StoreState;

/// Raw new-product form fields as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProductArgs {
    pub id: String,
    pub price: String,
    pub image: String,
    pub name: String,
}

/// Lists every product on the shelf, in display order.
pub fn list_products(state: &StoreState) -> Vec<Product> {
    debug!("list_products command");
    state.store().products().to_vec()
}

/// Gets a single product by id.
pub fn get_product(state: &StoreState, product_id: ProductId) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");

    let product = state.store().require_product(product_id)?;
    Ok(product.clone())
}

/// Suggests the id to prefill in the new-product form.
pub fn next_product_id(state: &mut StoreState) -> ProductId {
    let id = state.store_mut().next_available_product_id();
    debug!(product_id = %id, "next_product_id command");
    id
}

/// Validates the form and appends the product to the catalog.
///
/// ## Returns
/// The product as stocked, priced in the selected currency.
pub fn add_product(state: &mut StoreState, args: NewProductArgs) -> Result<Product, ApiError> {
    debug!(id = %args.id, name = %args.name, "add_product command");

    let id: i64 = args.id.trim().parse().map_err(|_| {
        ApiError::validation(format!("product id must be a whole number, got '{}'", args.id))
    })?;
    let base_price = Money::from_str(&args.price).map_err(|e| {
        warn!(price = %args.price, "Rejected new product price");
        ApiError::from(e)
    })?;

    let new = NewProduct {
        id,
        name: args.name,
        image: expand_image(&args.image),
        base_price,
        kind: ProductKind::default(),
    };

    let product_id = state.store_mut().try_add_product(new).map_err(|e| {
        warn!(id, error = %e, "Rejected new product");
        ApiError::from(e)
    })?;

    let product = state.store().require_product(product_id)?.clone();
    info!(product_id = %product_id, name = %product.name, "Product added");
    Ok(product)
}

/// A bare file stem becomes a path in the catalog image folder; anything that
/// already looks like a path is kept as typed.
fn expand_image(image: &str) -> String {
    let image = image.trim();
    if image.is_empty() || image.contains('/') || image.contains('.') {
        image.to_string()
    } else {
        product_image_path(image, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_core::Store;

    fn state() -> StoreState {
        StoreState::new(Store::seeded())
    }

    fn crown(id: &str, price: &str) -> NewProductArgs {
        NewProductArgs {
            id: id.to_string(),
            price: price.to_string(),
            image: "crown".to_string(),
            name: "Golden Crown".to_string(),
        }
    }

    #[test]
    fn test_get_product() {
        let state = state();
        assert_eq!(get_product(&state, ProductId::new(200).unwrap()).unwrap().name, "Axe");

        let err = get_product(&state, ProductId::new(201).unwrap()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_product_from_form() {
        let mut state = state();
        let next = next_product_id(&mut state);
        assert_eq!(next.get(), 4400);

        let product = add_product(&mut state, crown("4400", "90")).unwrap();
        assert_eq!(product.product_id, next);
        assert_eq!(product.image, "/images/products/crown.webp");
        assert_eq!(product.price.cents(), 9000);
        assert_eq!(list_products(&state).len(), 44);

        assert_eq!(next_product_id(&mut state).get(), 4500);
    }

    #[test]
    fn test_add_product_rejections() {
        let mut state = state();

        let duplicate = add_product(&mut state, crown("100", "90")).unwrap_err();
        assert_eq!(duplicate.code, ErrorCode::ValidationError);
        assert!(duplicate.message.contains("already exists"));

        assert!(add_product(&mut state, crown("abc", "90")).is_err());
        assert!(add_product(&mut state, crown("4400", "ninety")).is_err());
        let negative = add_product(&mut state, crown("4400", "-1")).unwrap_err();
        assert_eq!(negative.message, "price must not be negative");

        assert_eq!(list_products(&state).len(), 43);
    }

    #[test]
    fn test_add_product_rejects_oversized_price() {
        let mut state = state();

        let err = add_product(&mut state, crown("4400", "500000000000000")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must be at most 1000000.00");
        assert_eq!(list_products(&state).len(), 43);

        state.store_mut().set_currency("YEN");
        let product = add_product(&mut state, crown("4400", "1000000")).unwrap();
        assert_eq!(product.price.cents(), 15_492_350_000);
    }

    #[test]
    fn test_expand_image() {
        assert_eq!(expand_image("rope"), "/images/products/rope.webp");
        assert_eq!(expand_image("rope.png"), "rope.png");
        assert_eq!(expand_image("/img/rope.jpg"), "/img/rope.jpg");
    }
}
