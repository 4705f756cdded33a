//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check, public
//! - [`pricing`] - dynamic pricing, order calculation, promo validation

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod health;
pub mod pricing;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Pricing API - the service's reason to exist
        .merge(pricing::router())
        // Health API - public route
        .merge(health::router())
}

/// Build the fully configured application: routes, middleware, state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - the ordering frontends call this cross-origin
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        // Request ID - generate and propagate x-request-id
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .with_state(state)
}
