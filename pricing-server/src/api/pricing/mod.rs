//! Pricing API module
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /pricing/dynamic | POST | per-item adjusted prices |
//! | /pricing/calculate | POST | full order totals |
//! | /pricing/promo/{code} | GET | promo code validation |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/pricing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/dynamic", post(handler::dynamic_pricing))
        .route("/calculate", post(handler::calculate_order))
        .route("/promo/{code}", get(handler::validate_promo))
}
