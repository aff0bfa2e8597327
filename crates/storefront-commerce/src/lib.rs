//! Cart store and storefront domain for the storefront demo.
//!
//! - **Cart**: the session's cart contents, the observable [`CartStore`] that
//!   owns them, and the derived order summary
//! - **Catalog**: products, categories and a mock catalog with simulated latency
//! - **Checkout**: turns the cart into an order confirmation
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let lamp = Product::new(
//!     ProductId::new(1),
//!     "Desk Lamp",
//!     Money::new(1000, Currency::USD),
//! );
//!
//! let mut store = CartStore::new(Currency::USD);
//! store.subscribe(|_event, cart| println!("{} items", cart.line_count()));
//!
//! store.add_item(&lamp, 2).unwrap();
//! store.add_one(&lamp).unwrap();
//!
//! assert_eq!(store.quantity_of(lamp.id), 3);
//! assert_eq!(store.total().display(), "$30.00");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use cart::CartStore;
pub use config::StorefrontConfig;
pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{
        CatalogConfig, CheckoutConfig, PricingConfig, StoreConfig, StorefrontConfig,
    };
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{Cart, CartEvent, CartStore, LineItem, OrderSummary};

    // Catalog
    pub use crate::catalog::{Category, MockCatalog, Product, ProductCatalog, StockStatus};

    // Checkout
    pub use crate::checkout::{Checkout, OrderConfirmation, OrderLine};
}
