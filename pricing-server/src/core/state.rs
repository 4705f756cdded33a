//! Server state
//!
//! Shared references to the services every handler needs. All fields are
//! behind `Arc`, so cloning the state is shallow and cheap - axum clones it
//! per request.

use std::sync::Arc;

use crate::catalog::{CatalogClient, CatalogSource};
use crate::core::Config;
use crate::pricing::{DynamicPricingCalculator, OrderTotalCalculator};

/// Shared server state
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | catalog | menu/inventory fact source (HTTP + TTL cache) |
/// | dynamic_pricing | per-item adjustment calculator |
/// | order_totals | order total calculator (owns the promo resolver) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub catalog: Arc<dyn CatalogSource>,
    pub dynamic_pricing: Arc<DynamicPricingCalculator>,
    pub order_totals: Arc<OrderTotalCalculator>,
}

impl ServerState {
    /// Build the production state: HTTP catalog client, calculators from
    /// the configured pricing knobs
    pub fn initialize(config: &Config) -> Self {
        let catalog = Arc::new(CatalogClient::new(config));
        Self::with_catalog(config.clone(), catalog)
    }

    /// Build state around an arbitrary catalog source
    ///
    /// Integration tests use this to run the full router against a canned
    /// catalog.
    pub fn with_catalog(config: Config, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            dynamic_pricing: Arc::new(DynamicPricingCalculator::new()),
            order_totals: Arc::new(OrderTotalCalculator::new(config.pricing.clone())),
            catalog,
            config: Arc::new(config),
        }
    }
}
