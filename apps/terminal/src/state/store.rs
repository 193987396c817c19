//! # Store State
//!
//! Owns the session's [`Store`]. Commands borrow it for exactly one
//! operation each.
//!
//! ## Stocking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigState                                                            │
//! │     │                                                                   │
//! │     ├── random_storefront = false ──► Store::seeded()  (43 products)   │
//! │     │                                                                   │
//! │     └── random_storefront = true                                       │
//! │            │                                                            │
//! │            ├── seed = Some(n) ──► StdRng::seed_from_u64(n)             │
//! │            └── seed = None    ──► StdRng::from_entropy()               │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │            Store::random_storefront(selection, rng)                    │
//! │                                                                         │
//! │  then: set_currency(config.currency)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use storefront_core::Store;

use super::ConfigState;

/// The live store for one terminal session.
#[derive(Debug)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    /// Wraps an already-stocked store.
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Stocks a store as the configuration asks.
    pub fn open(config: &ConfigState) -> Self {
        let mut store = if config.random_storefront {
            let mut rng = storefront_rng(config.seed);
            Store::random_storefront(config.selection, &mut rng)
        } else {
            Store::seeded()
        };
        store.set_currency(config.currency.code());

        StoreState { store }
    }

    /// Read access for rendering.
    #[inline]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Write access for a single command.
    #[inline]
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }
}

fn storefront_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Currency, SelectionRange};

    #[test]
    fn test_open_full_catalog() {
        let config = ConfigState {
            random_storefront: false,
            ..ConfigState::default()
        };
        let state = StoreState::open(&config);
        assert_eq!(state.store().products().len(), 43);
    }

    #[test]
    fn test_open_seeded_random_is_reproducible() {
        let config = ConfigState {
            selection: SelectionRange::new(4, 9).unwrap(),
            seed: Some(2024),
            ..ConfigState::default()
        };

        let a = StoreState::open(&config);
        let b = StoreState::open(&config);
        assert!((4..=9).contains(&a.store().products().len()));
        assert_eq!(a.store().products(), b.store().products());
    }

    #[test]
    fn test_open_applies_currency() {
        let config = ConfigState {
            currency: Currency::Eur,
            random_storefront: false,
            ..ConfigState::default()
        };
        let state = StoreState::open(&config);

        assert_eq!(state.store().currency(), Currency::Eur);
        let apple = &state.store().products()[0];
        assert_eq!(apple.price.cents(), 47);
    }
}
