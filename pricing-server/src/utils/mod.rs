//! Utility module - shared error types and logging
//!
//! # Contents
//!
//! - [`AppError`] - application error enum
//! - [`AppResponse`] - API error/response envelope
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
