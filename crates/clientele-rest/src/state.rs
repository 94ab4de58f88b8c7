//! Application state for Axum handlers.

use clientele_core::StoreHealth;
use clientele_service::CustomerService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<dyn CustomerService>,
    pub store_health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(customer_service: Arc<dyn CustomerService>, store_health: Arc<dyn StoreHealth>) -> Self {
        Self {
            customer_service,
            store_health,
        }
    }
}
