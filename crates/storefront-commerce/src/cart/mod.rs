//! Shopping cart module.
//!
//! Contains the cart contents, the store that owns and publishes them, and
//! the order summary derived from them.

mod cart;
mod event;
mod store;
mod summary;

pub use cart::{Cart, LineItem};
pub use event::CartEvent;
pub use store::CartStore;
pub use summary::OrderSummary;
