//! Product catalog module.
//!
//! Contains product and category types and the mock catalog service that
//! listing and detail views read from.

mod category;
mod fixtures;
mod product;
mod service;

pub use category::Category;
pub use product::{Product, StockStatus, LOW_STOCK_THRESHOLD};
pub use service::{MockCatalog, ProductCatalog};
