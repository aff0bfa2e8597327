//! Order summary shown on the cart page.

use crate::cart::Cart;
use crate::config::PricingConfig;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Subtotal, shipping, tax and grand total for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping charge (zero means free).
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub total: Money,
    /// Distinct lines.
    pub line_count: usize,
    /// Units across all lines.
    pub unit_count: i64,
}

impl OrderSummary {
    /// Price a cart.
    ///
    /// Tax is rounded once, to the cent, on the exact subtotal. An empty cart
    /// is not charged shipping.
    pub fn for_cart(cart: &Cart, pricing: &PricingConfig) -> Self {
        let currency = cart.currency();
        let subtotal = cart.total();
        let shipping = if cart.is_empty() {
            Money::zero(currency)
        } else {
            pricing.shipping(currency)
        };
        let tax = subtotal.basis_points(pricing.tax_rate_bps);
        let total = subtotal.saturating_add(&shipping).saturating_add(&tax);

        Self {
            subtotal,
            shipping,
            tax,
            total,
            line_count: cart.line_count(),
            unit_count: cart.unit_count(),
        }
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Shipping as displayed ("Free" or an amount).
    pub fn shipping_label(&self) -> String {
        if self.has_free_shipping() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }
}
