//! Product listing.

use anyhow::Result;
use storefront_commerce::catalog::{Product, ProductCatalog};

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{format_rating, stock_badge, truncate};

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let spinner = ctx.output.spinner("Loading products...");

    let products = match (&args.category, &args.search) {
        (Some(category), _) => catalog.by_category(category).await,
        (None, Some(query)) => catalog.search(query).await,
        (None, None) if args.featured => catalog.featured().await,
        (None, None) => catalog.products().await,
    };
    spinner.finish_and_clear();
    let mut products = products?;

    // The catalog answers one filter per call; narrow the rest locally.
    if args.category.is_some() {
        if let Some(query) = &args.search {
            products.retain(|p| p.matches_query(query));
        }
    }
    if args.featured {
        products.retain(|p| p.featured);
    }

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    ctx.output.header(&format!("Products ({})", products.len()));
    print_table(&products, ctx);
    Ok(())
}

pub(crate) fn print_table(products: &[Product], ctx: &Context) {
    let widths = [4, 30, 10, 12, 12, 20];
    ctx.output.table_row(
        &["ID", "NAME", "PRICE", "CATEGORY", "RATING", "STOCK"],
        &widths,
    );
    for product in products {
        let id = product.id.to_string();
        let name = truncate(&product.name, 30);
        let price = product.price.display();
        let rating = format_rating(product.rating);
        let stock = stock_badge(product.stock_status());
        ctx.output.table_row(
            &[
                id.as_str(),
                name.as_str(),
                price.as_str(),
                product.category.as_str(),
                rating.as_str(),
                stock.as_str(),
            ],
            &widths,
        );
    }
}
