//! Health check route
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |

use axum::{Json, Router, routing::get};
use chrono::Utc;
use serde::Serialize;

use crate::core::ServerState;

/// Health check route - public, no state needed
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// Server time, RFC 3339
    timestamp: String,
}

/// Basic health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "pricing-service",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}
