//! Storefront configuration.
//!
//! Every section has defaults matching the demo storefront: USD prices, free
//! shipping, 10% tax, half a second of simulated catalog latency and a two
//! second checkout.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Top-level storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Cart store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Order summary pricing.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Mock catalog behaviour.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Simulated checkout behaviour.
    #[serde(default)]
    pub checkout: CheckoutConfig,
}

impl StorefrontConfig {
    /// Check values that serde cannot express as types.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.pricing.validate()
    }
}

/// Cart store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Currency every cart line must be priced in.
    #[serde(default)]
    pub currency: Currency,
}

/// Pricing rules applied when summarising an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tax rate in basis points (1000 = 10%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,

    /// Flat shipping charge in the smallest currency unit (0 = free).
    #[serde(default)]
    pub shipping_cents: i64,
}

fn default_tax_rate_bps() -> u32 {
    1000
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate_bps: default_tax_rate_bps(),
            shipping_cents: 0,
        }
    }
}

impl PricingConfig {
    /// Flat shipping charge in the given currency.
    pub fn shipping(&self, currency: Currency) -> Money {
        Money::new(self.shipping_cents, currency)
    }

    /// Check the tax rate and shipping charge are in range.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.tax_rate_bps > 10_000 {
            return Err(CommerceError::Config(format!(
                "tax_rate_bps must be at most 10000, got {}",
                self.tax_rate_bps
            )));
        }
        if self.shipping_cents < 0 {
            return Err(CommerceError::Config(format!(
                "shipping_cents must not be negative, got {}",
                self.shipping_cents
            )));
        }
        Ok(())
    }
}

/// Simulated catalog latency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Delay before list queries answer, in milliseconds.
    #[serde(default = "default_list_latency_ms")]
    pub list_latency_ms: u64,

    /// Delay before single-product lookups answer, in milliseconds.
    #[serde(default = "default_lookup_latency_ms")]
    pub lookup_latency_ms: u64,
}

fn default_list_latency_ms() -> u64 {
    500
}

fn default_lookup_latency_ms() -> u64 {
    400
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            list_latency_ms: default_list_latency_ms(),
            lookup_latency_ms: default_lookup_latency_ms(),
        }
    }
}

impl CatalogConfig {
    /// No simulated latency at all.
    pub fn instant() -> Self {
        Self {
            list_latency_ms: 0,
            lookup_latency_ms: 0,
        }
    }

    pub fn list_latency(&self) -> Duration {
        Duration::from_millis(self.list_latency_ms)
    }

    pub fn lookup_latency(&self) -> Duration {
        Duration::from_millis(self.lookup_latency_ms)
    }
}

/// Simulated checkout processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Delay before an order is confirmed, in milliseconds.
    #[serde(default = "default_processing_ms")]
    pub processing_ms: u64,
}

fn default_processing_ms() -> u64 {
    2000
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_ms: default_processing_ms(),
        }
    }
}

impl CheckoutConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_ms)
    }
}
