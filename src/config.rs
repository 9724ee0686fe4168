//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Checkout pricing parameters used by the cart summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Flat shipping fee charged on any non-empty cart
    pub shipping_fee: Decimal,
    /// Tax rate applied to the subtotal (0.08 = 8%)
    pub tax_rate: Decimal,
    /// Subtotal advertised as the free-shipping threshold
    pub free_shipping_threshold: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_fee: Decimal::new(599, 2),
            tax_rate: Decimal::new(8, 2),
            free_shipping_threshold: Decimal::new(75, 0),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Directory holding the durable key-value files
    pub storage_dir: PathBuf,
    /// Artificial latency in milliseconds added to catalog responses
    pub query_latency_ms: u64,
    /// Checkout pricing
    pub pricing: PricingConfig,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STORAGE_DIR` - Durable storage directory (default: ./data)
    /// - `QUERY_LATENCY_MS` - Simulated catalog latency (default: 0)
    /// - `SHIPPING_FEE` - Flat shipping fee (default: 5.99)
    /// - `TAX_RATE` - Tax rate as a fraction (default: 0.08)
    /// - `FREE_SHIPPING_THRESHOLD` - Free shipping banner threshold (default: 75)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            storage_dir: env::var("STORAGE_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            query_latency_ms: env_or("QUERY_LATENCY_MS", defaults.query_latency_ms),
            pricing: PricingConfig {
                shipping_fee: env_or("SHIPPING_FEE", defaults.pricing.shipping_fee),
                tax_rate: env_or("TAX_RATE", defaults.pricing.tax_rate),
                free_shipping_threshold: env_or(
                    "FREE_SHIPPING_THRESHOLD",
                    defaults.pricing.free_shipping_threshold,
                ),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            storage_dir: PathBuf::from("./data"),
            query_latency_ms: 0,
            pricing: PricingConfig::default(),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
