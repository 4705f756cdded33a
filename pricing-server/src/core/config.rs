//! Server configuration
//!
//! Everything is environment-sourced with a default, loaded once at
//! startup. The pricing knobs live in their own struct so the calculators
//! receive an explicit configuration value instead of reading process-wide
//! state - rule sets stay swappable and testable in isolation.

use crate::pricing::{PromoCodeDefinition, PromoKind};

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8001 | HTTP service port |
/// | CATALOG_URL | http://localhost:8055 | content store base URL |
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | default tracing filter |
/// | LOG_DIR | (unset) | daily-rolling log file directory |
/// | MENU_CACHE_TTL_SECS | 300 | menu data cache lifetime |
/// | INVENTORY_CACHE_TTL_SECS | 60 | inventory cache lifetime |
/// | TAX_RATE | 0.0875 | sales tax rate |
/// | DELIVERY_FEE | 3.99 | base delivery fee |
/// | FREE_DELIVERY_MINIMUM | 25.00 | free-delivery threshold |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Base URL of the external content store
    pub catalog_url: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
    /// Menu data cache lifetime (seconds)
    pub menu_cache_ttl_secs: u64,
    /// Inventory cache lifetime (seconds) - shorter, inventory moves fast
    pub inventory_cache_ttl_secs: u64,
    /// Knobs consumed by the pricing core
    pub pricing: PricingConfig,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            http_port: env_parsed("HTTP_PORT", 8001),
            catalog_url: std::env::var("CATALOG_URL")
                .unwrap_or_else(|_| "http://localhost:8055".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            menu_cache_ttl_secs: env_parsed("MENU_CACHE_TTL_SECS", 300),
            inventory_cache_ttl_secs: env_parsed("INVENTORY_CACHE_TTL_SECS", 60),
            pricing: PricingConfig::from_env(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Knobs consumed by the pricing calculators
///
/// Threaded into [`OrderTotalCalculator`] at construction; the calculators
/// never read the environment themselves.
///
/// [`OrderTotalCalculator`]: crate::pricing::OrderTotalCalculator
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Sales tax rate applied to the discounted subtotal
    pub tax_rate: f64,
    /// Fee charged on delivery orders below the free-delivery threshold
    pub base_delivery_fee: f64,
    /// Subtotal at or above which the delivery fee is waived
    pub free_delivery_minimum: f64,
    /// The static promo code table
    pub promo_codes: Vec<PromoCodeDefinition>,
}

impl PricingConfig {
    pub fn from_env() -> Self {
        Self {
            tax_rate: env_parsed("TAX_RATE", 0.0875),
            base_delivery_fee: env_parsed("DELIVERY_FEE", 3.99),
            free_delivery_minimum: env_parsed("FREE_DELIVERY_MINIMUM", 25.00),
            promo_codes: builtin_promo_codes(),
        }
    }
}

impl Default for PricingConfig {
    /// The documented defaults, without touching the environment.
    /// Tests rely on this being deterministic.
    fn default() -> Self {
        Self {
            tax_rate: 0.0875,
            base_delivery_fee: 3.99,
            free_delivery_minimum: 25.00,
            promo_codes: builtin_promo_codes(),
        }
    }
}

/// The builtin promotional codes - a fixed rule set, not a database
pub fn builtin_promo_codes() -> Vec<PromoCodeDefinition> {
    vec![
        PromoCodeDefinition {
            code: "WELCOME10".into(),
            kind: PromoKind::Percentage,
            value: 0.10,
            minimum_order: 15.00,
        },
        PromoCodeDefinition {
            code: "SAVE5".into(),
            kind: PromoKind::Fixed,
            value: 5.00,
            minimum_order: 20.00,
        },
        PromoCodeDefinition {
            code: "FREESHIP".into(),
            kind: PromoKind::FreeDelivery,
            value: 3.99,
            minimum_order: 0.00,
        },
    ]
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pricing_config() {
        let config = PricingConfig::default();

        assert_eq!(config.tax_rate, 0.0875);
        assert_eq!(config.base_delivery_fee, 3.99);
        assert_eq!(config.free_delivery_minimum, 25.00);
        assert_eq!(config.promo_codes.len(), 3);
    }

    #[test]
    fn test_builtin_table_codes() {
        let codes = builtin_promo_codes();
        let names: Vec<&str> = codes.iter().map(|c| c.code.as_str()).collect();

        assert_eq!(names, ["WELCOME10", "SAVE5", "FREESHIP"]);
    }
}
