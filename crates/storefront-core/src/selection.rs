//! # Random Storefront Selection
//!
//! Picks a random subset of the catalog so each session opens on a different
//! shelf.
//!
//! ## Sampling
//! ```text
//! catalog (43) ──► count ∈ [min, min(max, 43)] ──► sample without replacement
//!                                                    │
//!                                                    ▼
//!                                        selected rows, catalog order
//! ```
//!
//! The random source is always passed in. Production code hands over an
//! entropy-seeded rng, tests hand over `StdRng::seed_from_u64(..)`.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::{DEFAULT_MAX_PRODUCTS, DEFAULT_MIN_PRODUCTS};

/// Inclusive bounds on how many products a random storefront shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    min: usize,
    max: usize,
}

impl SelectionRange {
    /// Creates a range. Fails when `min > max`.
    pub fn new(min: usize, max: usize) -> CoreResult<Self> {
        if min > max {
            return Err(CoreError::InvalidSelectionRange { min, max });
        }
        Ok(SelectionRange { min, max })
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Default for SelectionRange {
    fn default() -> Self {
        SelectionRange {
            min: DEFAULT_MIN_PRODUCTS,
            max: DEFAULT_MAX_PRODUCTS,
        }
    }
}

/// Draws a random number of products within `range`, without replacement.
///
/// Both bounds are clamped to the catalog size. The selected products keep
/// their catalog order.
///
/// ## Example
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use storefront_core::catalog::seed_products;
/// use storefront_core::selection::{select_random_products, SelectionRange};
///
/// let catalog = seed_products();
/// let mut rng = StdRng::seed_from_u64(1);
/// let picked = select_random_products(&catalog, SelectionRange::new(4, 4).unwrap(), &mut rng);
///
/// assert_eq!(picked.len(), 4);
/// ```
pub fn select_random_products<R: Rng + ?Sized>(
    catalog: &[Product],
    range: SelectionRange,
    rng: &mut R,
) -> Vec<Product> {
    if catalog.is_empty() {
        return Vec::new();
    }

    let max = range.max.min(catalog.len());
    let min = range.min.min(max);
    let count = rng.gen_range(min..=max);

    let mut picked = index::sample(rng, catalog.len(), count).into_vec();
    picked.sort_unstable();
    picked.into_iter().map(|i| catalog[i].clone()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_products;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(SelectionRange::new(3, 3).is_ok());
        assert!(matches!(
            SelectionRange::new(5, 2),
            Err(CoreError::InvalidSelectionRange { min: 5, max: 2 })
        ));
    }

    #[test]
    fn test_count_within_range_and_distinct() {
        let catalog = seed_products();
        let range = SelectionRange::new(5, 12).unwrap();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_random_products(&catalog, range, &mut rng);

            assert!((5..=12).contains(&picked.len()), "seed {seed}");
            let ids: HashSet<_> = picked.iter().map(|p| p.product_id).collect();
            assert_eq!(ids.len(), picked.len());
        }
    }

    #[test]
    fn test_selection_keeps_catalog_order() {
        let catalog = seed_products();
        let mut rng = StdRng::seed_from_u64(9);
        let picked = select_random_products(&catalog, SelectionRange::new(10, 10).unwrap(), &mut rng);

        assert!(picked.windows(2).all(|w| w[0].product_id < w[1].product_id));
    }

    #[test]
    fn test_range_clamped_to_catalog_size() {
        let catalog: Vec<Product> = seed_products().into_iter().take(3).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let picked = select_random_products(&catalog, SelectionRange::new(10, 20).unwrap(), &mut rng);

        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_same_seed_same_storefront() {
        let catalog = seed_products();
        let range = SelectionRange::default();

        let a = select_random_products(&catalog, range, &mut StdRng::seed_from_u64(77));
        let b = select_random_products(&catalog, range, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_catalog() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_random_products(&[], SelectionRange::default(), &mut rng).is_empty());
    }
}
