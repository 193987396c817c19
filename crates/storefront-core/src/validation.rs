//! # Validation Module
//!
//! Input validation for the new-product form and tendered amounts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View (terminal command parser)                               │
//! │  ├── Tokenizing, number parsing                                        │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, lengths                                          │
//! │  └── Positive ids, non-negative prices                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Id uniqueness against the live catalog                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_product_id, validate_product_name};
//!
//! assert!(validate_product_name("Magic Ring").is_ok());
//! assert_eq!(validate_product_id(4400).unwrap().get(), 4400);
//! assert!(validate_product_id(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ProductId;
use crate::{MAX_BASE_PRICE, MAX_IMAGE_PATH_LEN, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    validate_text("name", name, MAX_PRODUCT_NAME_LEN)
}

/// Validates an image resource path.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 500 characters
///
/// ## Returns
/// The trimmed path.
pub fn validate_image_path(image: &str) -> ValidationResult<String> {
    validate_text("image", image, MAX_IMAGE_PATH_LEN)
}

fn validate_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a raw product id.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must fit the id type
pub fn validate_product_id(id: i64) -> ValidationResult<ProductId> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "product id".to_string(),
        });
    }

    ProductId::from_raw(id).ok_or_else(|| ValidationError::OutOfRange {
        field: "product id".to_string(),
        min: 1,
        max: u32::MAX as i64,
    })
}

/// Validates a base price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most [`MAX_BASE_PRICE`]
///
/// ## Example
/// ```rust
/// use storefront_core::money::Money;
/// use storefront_core::validation::validate_base_price;
///
/// assert!(validate_base_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_base_price(Money::zero()).is_ok());
/// assert!(validate_base_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_base_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }
    if price > MAX_BASE_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_BASE_PRICE,
        });
    }

    Ok(())
}

/// Validates a tendered amount. Zero is allowed; it re-reports the balance.
pub fn validate_tender(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("  Tiara ").unwrap(), "Tiara");
        assert!(validate_product_name("Hoodlum's Cap").is_ok());

        assert!(matches!(
            validate_product_name("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_name(&"A".repeat(300)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }

    #[test]
    fn test_validate_image_path() {
        assert!(validate_image_path("/images/products/tiara.webp").is_ok());
        assert!(validate_image_path("").is_err());
        assert!(validate_image_path(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_validate_product_id() {
        assert_eq!(validate_product_id(1).unwrap().get(), 1);
        assert_eq!(validate_product_id(4400).unwrap().get(), 4400);

        assert!(matches!(
            validate_product_id(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_product_id(-5).is_err());
        assert!(matches!(
            validate_product_id(u32::MAX as i64 + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(Money::zero()).is_ok());
        assert!(validate_base_price(Money::from_cents(25000)).is_ok());
        assert!(validate_base_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_base_price_bounds() {
        assert!(validate_base_price(MAX_BASE_PRICE).is_ok());
        assert_eq!(
            validate_base_price(MAX_BASE_PRICE + Money::from_cents(1)),
            Err(ValidationError::TooLarge {
                field: "price".to_string(),
                max: MAX_BASE_PRICE,
            })
        );
        assert_eq!(
            validate_base_price(Money::from_cents(i64::MAX)).unwrap_err().to_string(),
            "price must be at most 1000000.00"
        );
        assert_eq!(
            validate_base_price(Money::from_cents(-1)),
            Err(ValidationError::MustNotBeNegative {
                field: "price".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_tender() {
        assert!(validate_tender(Money::zero()).is_ok());
        assert!(validate_tender(Money::from_cents(50)).is_ok());
        assert!(validate_tender(Money::from_cents(-50)).is_err());
    }
}
