//! Checkout module.
//!
//! Places a simulated order from the cart store.

mod order;

pub use order::{Checkout, OrderConfirmation, OrderLine};
