//! Unified error handling
//!
//! The pricing core itself never raises domain errors - unknown items,
//! unknown promo codes and missing inventory rows are all modeled as
//! omissions. Everything in this enum originates in the plumbing around
//! the core: the catalog service, request deserialization, startup.
//!
//! # Error code scheme
//!
//! | Prefix | Category | Example |
//! |--------|----------|---------|
//! | E0xxx | request errors | E0002 validation failed |
//! | E5xxx | upstream errors | E5001 catalog unavailable |
//! | E9xxx | system errors | E9001 internal error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// API error/response envelope
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code (E0000 means success)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Request errors (4xx) ==========
    #[error("Resource not found: {0}")]
    /// Unknown route or resource (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// Malformed request payload (400)
    Validation(String),

    // ========== Upstream errors (5xx) ==========
    #[error("Upstream service error: {0}")]
    /// Catalog service unreachable or returned garbage (502)
    Upstream(String),

    // ========== System errors (5xx) ==========
    #[error("Internal server error: {0}")]
    /// Anything else (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.clone()),

            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.clone()),

            // Upstream failures carry the causing message so callers can
            // tell a dead catalog from a dead cache.
            AppError::Upstream(msg) => {
                error!(target: "catalog", error = %msg, "Upstream service error");
                (
                    StatusCode::BAD_GATEWAY,
                    "E5001",
                    format!("Pricing calculation failed: {}", msg),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message,
            data: None,
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Upstream(e.to_string())
    }
}
