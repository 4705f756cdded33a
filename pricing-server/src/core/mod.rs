//! Core module - server configuration, state and startup
//!
//! # Module structure
//!
//! - [`Config`] - server configuration
//! - [`PricingConfig`] - the knobs threaded into the calculators
//! - [`ServerState`] - shared service references
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, PricingConfig};
pub use server::Server;
pub use state::ServerState;
