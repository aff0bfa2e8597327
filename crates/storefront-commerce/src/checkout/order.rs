//! Simulated checkout and order confirmations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::{CartStore, OrderSummary};
use crate::config::{CheckoutConfig, PricingConfig};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;

/// A line as it was when the order was placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

/// Receipt for a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Generated order id.
    pub id: OrderId,
    /// Ordered lines, in cart order.
    pub lines: Vec<OrderLine>,
    /// Pricing at the time of the order.
    pub summary: OrderSummary,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

/// Turns the cart into an order.
///
/// No payment is taken; the processing delay stands in for one.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    pricing: PricingConfig,
    config: CheckoutConfig,
}

impl Checkout {
    pub fn new(pricing: PricingConfig, config: CheckoutConfig) -> Self {
        Self { pricing, config }
    }

    /// Price the cart as it stands without placing an order.
    pub fn summarize(&self, store: &CartStore) -> OrderSummary {
        OrderSummary::for_cart(store.cart(), &self.pricing)
    }

    /// Place an order for everything in the cart, then clear it.
    ///
    /// The order is priced before the processing delay, so the confirmation
    /// reflects the cart at the moment checkout started.
    pub async fn place_order(
        &self,
        store: &mut CartStore,
    ) -> Result<OrderConfirmation, CommerceError> {
        if store.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let summary = self.summarize(store);
        let lines = store
            .items()
            .iter()
            .map(|item| OrderLine {
                product_id: item.product_id,
                name: item.name.clone(),
                unit_price: item.unit_price,
                quantity: item.quantity,
                line_total: item.line_total(),
            })
            .collect();

        let delay = self.config.processing_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let confirmation = OrderConfirmation {
            id: OrderId::generate(),
            lines,
            summary,
            placed_at: Utc::now(),
        };
        store.clear();

        info!(
            order_id = %confirmation.id,
            lines = confirmation.lines.len(),
            total = %confirmation.summary.total,
            "Order placed"
        );
        Ok(confirmation)
    }
}
