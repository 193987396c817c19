//! # Config Commands
//!
//! Reading configuration and exporting a full storefront snapshot.

use serde::Serialize;
use storefront_core::{Currency, Money, Product};
use tracing::debug;

use super::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

/// Everything a scripted or browser view needs to draw the storefront.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSnapshot {
    pub store_name: String,
    pub currency: Currency,
    pub currency_symbol: &'static str,
    pub products: Vec<Product>,
    pub cart: CartResponse,
    pub amount_paid: Money,
}

/// Gets the current application configuration.
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Captures the storefront as the view would draw it.
pub fn snapshot(config: &ConfigState, state: &StoreState) -> StorefrontSnapshot {
    let store = state.store();
    StorefrontSnapshot {
        store_name: config.store_name.clone(),
        currency: store.currency(),
        currency_symbol: store.currency().symbol(),
        products: store.products().to_vec(),
        cart: CartResponse::from(store),
        amount_paid: store.amount_paid(),
    }
}

/// Serializes [`snapshot`] as pretty JSON.
pub fn snapshot_json(config: &ConfigState, state: &StoreState) -> Result<String, ApiError> {
    debug!("snapshot command");
    Ok(serde_json::to_string_pretty(&snapshot(config, state))?)
}
