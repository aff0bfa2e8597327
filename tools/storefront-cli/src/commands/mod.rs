//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod product;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only products in this category (name or slug).
    #[arg(long)]
    pub category: Option<String>,

    /// Only products whose name, description or tags match.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only featured products.
    #[arg(short, long)]
    pub featured: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: u64,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Read session commands from a file instead of prompting.
    #[arg(short, long)]
    pub script: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Output path.
        #[arg(default_value = "storefront.toml")]
        path: String,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
