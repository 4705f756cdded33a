//! Restaurant Pricing Server
//!
//! Dynamic pricing microservice for a restaurant ordering platform. The
//! decision logic lives in [`pricing`] as three pure, stateless
//! components; everything else is plumbing around them.
//!
//! # Module structure
//!
//! ```text
//! pricing-server/src/
//! ├── core/     # configuration, state, HTTP server
//! ├── api/      # routes and handlers
//! ├── catalog/  # content-store client + TTL cache
//! ├── pricing/  # the pricing decision core
//! └── utils/    # errors, logging
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod pricing;
pub mod utils;

// Re-export the public surface
pub use catalog::{CatalogClient, CatalogSource};
pub use core::{Config, PricingConfig, Server, ServerState};
pub use pricing::{DynamicPricingCalculator, OrderTotalCalculator, PromoCodeResolver};
pub use utils::{AppError, AppResult};
pub use utils::logger::init_logger;
