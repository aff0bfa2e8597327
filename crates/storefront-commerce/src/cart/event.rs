//! Cart change notifications.

use crate::ids::ProductId;
use serde::Serialize;

/// A completed change to the cart, delivered to store subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// Units were added; `quantity` is the line's new quantity.
    ItemAdded {
        product_id: ProductId,
        added: i64,
        quantity: i64,
    },
    /// A line's quantity was set to a new positive value.
    QuantityUpdated {
        product_id: ProductId,
        previous: i64,
        quantity: i64,
    },
    /// A line was removed; `quantity` is what it held.
    ItemRemoved { product_id: ProductId, quantity: i64 },
    /// Every line was removed.
    Cleared { lines: usize },
}

impl CartEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "item_added",
            CartEvent::QuantityUpdated { .. } => "quantity_updated",
            CartEvent::ItemRemoved { .. } => "item_removed",
            CartEvent::Cleared { .. } => "cleared",
        }
    }

    /// The product this event concerns, if it concerns a single one.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartEvent::ItemAdded { product_id, .. }
            | CartEvent::QuantityUpdated { product_id, .. }
            | CartEvent::ItemRemoved { product_id, .. } => Some(*product_id),
            CartEvent::Cleared { .. } => None,
        }
    }
}
