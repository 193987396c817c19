//! # State Module
//!
//! Application state for the terminal storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Command loop (lib.rs)                      │   │
//! │  │  let config = ConfigState::from_env()?;                         │   │
//! │  │  let mut store = StoreState::open(&config);                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                          │
//! │               ▼                             ▼                           │
//! │  ┌──────────────────────┐      ┌──────────────────────┐                │
//! │  │     StoreState       │      │     ConfigState      │                │
//! │  │                      │      │                      │                │
//! │  │  Store (catalog,     │      │  store_name          │                │
//! │  │  cart, currency,     │      │  currency            │                │
//! │  │  till, next id)      │      │  selection, seed     │                │
//! │  └──────────────────────┘      └──────────────────────┘                │
//! │                                                                         │
//! │  Single-threaded: commands take `&mut StoreState`, no locks.           │
//! │  ConfigState is read-only after startup.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{ConfigError, ConfigState};
pub use store::StoreState;
