//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_commerce::catalog::MockCatalog;
use storefront_commerce::checkout::Checkout;
use storefront_commerce::{CartStore, StorefrontConfig};
use tracing::debug;

use crate::config;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if not defaults.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading the config file if one is given or can be found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => config::discover(&cwd),
        };
        let config = match &config_path {
            Some(path) => config::load(path)?,
            None => StorefrontConfig::default(),
        };
        debug!(path = ?config_path, "Loaded storefront config");

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    pub fn catalog(&self) -> MockCatalog {
        MockCatalog::new(self.config.catalog.clone())
    }

    /// A fresh, empty cart store for this session.
    pub fn cart_store(&self) -> CartStore {
        CartStore::from_config(&self.config.store)
    }

    pub fn checkout(&self) -> Checkout {
        Checkout::new(self.config.pricing.clone(), self.config.checkout.clone())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
