//! Checkout Summary Module
//!
//! Presentation-side totals derived from a cart subtotal. Nothing here is
//! stored; it is recomputed whenever a consumer asks.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::config::PricingConfig;

// == Checkout Summary ==
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub item_count: u64,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    /// Amount still needed to reach the advertised free-shipping threshold.
    /// Informational only; shipping is not waived.
    pub free_shipping_remaining: Decimal,
}

impl CheckoutSummary {
    /// Computes shipping, tax and total for a cart.
    ///
    /// Shipping is the flat fee for any non-zero subtotal; tax is rounded to
    /// cents, midpoint away from zero.
    pub fn compute(item_count: u64, subtotal: Decimal, pricing: &PricingConfig) -> Self {
        let shipping = if subtotal > Decimal::ZERO {
            pricing.shipping_fee
        } else {
            Decimal::ZERO
        };
        let tax = (subtotal * pricing.tax_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let free_shipping_remaining =
            (pricing.free_shipping_threshold - subtotal).max(Decimal::ZERO);

        Self {
            item_count,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
            free_shipping_remaining,
        }
    }
}
