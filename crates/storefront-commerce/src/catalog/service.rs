//! Product catalog service.

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{fixtures, Category, Product};
use crate::config::CatalogConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Read-only source of products and categories.
///
/// Listing and detail views go through this trait; the cart never does.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// All products, in catalog order.
    async fn products(&self) -> Result<Vec<Product>, CommerceError>;

    /// A single product by id.
    async fn product(&self, id: ProductId) -> Result<Product, CommerceError>;

    /// Products flagged as featured.
    async fn featured(&self) -> Result<Vec<Product>, CommerceError>;

    /// Products in a category, matched by name or slug, ignoring case.
    ///
    /// Fails with `CategoryNotFound` if no category has that name or slug.
    async fn by_category(&self, category: &str) -> Result<Vec<Product>, CommerceError>;

    /// All categories.
    async fn categories(&self) -> Result<Vec<Category>, CommerceError>;

    /// Case-insensitive search over name, description and tags.
    async fn search(&self, query: &str) -> Result<Vec<Product>, CommerceError>;
}

/// In-memory catalog that answers after a simulated network delay.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    config: CatalogConfig,
}

impl MockCatalog {
    /// Catalog seeded with the demo storefront's products.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_data(fixtures::products(), fixtures::categories(), config)
    }

    /// Catalog over caller-supplied data.
    pub fn with_data(products: Vec<Product>, categories: Vec<Category>, config: CatalogConfig) -> Self {
        Self {
            products,
            categories,
            config,
        }
    }

    async fn list_delay(&self) {
        let latency = self.config.list_latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    async fn lookup_delay(&self) {
        let latency = self.config.lookup_latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }

    fn filtered(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.products.iter().filter(|p| keep(p)).cloned().collect()
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

#[async_trait]
impl ProductCatalog for MockCatalog {
    async fn products(&self) -> Result<Vec<Product>, CommerceError> {
        self.list_delay().await;
        Ok(self.products.clone())
    }

    async fn product(&self, id: ProductId) -> Result<Product, CommerceError> {
        self.lookup_delay().await;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    async fn featured(&self) -> Result<Vec<Product>, CommerceError> {
        self.list_delay().await;
        Ok(self.filtered(|p| p.featured))
    }

    async fn by_category(&self, category: &str) -> Result<Vec<Product>, CommerceError> {
        self.list_delay().await;
        let slug = category.to_lowercase();
        let known = self
            .categories
            .iter()
            .any(|c| c.id.as_str() == slug || c.name.to_lowercase() == slug);
        if !known {
            return Err(CommerceError::CategoryNotFound(category.to_string()));
        }

        let products =
            self.filtered(|p| p.in_category(category) || Category::slugify(&p.category) == slug);
        debug!(category, matched = products.len(), "Filtered catalog by category");
        Ok(products)
    }

    async fn categories(&self) -> Result<Vec<Category>, CommerceError> {
        self.list_delay().await;
        Ok(self.categories.clone())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, CommerceError> {
        self.list_delay().await;
        let products = self.filtered(|p| p.matches_query(query));
        debug!(query, matched = products.len(), "Searched catalog");
        Ok(products)
    }
}
