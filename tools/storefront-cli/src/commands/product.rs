//! Product detail view.

use anyhow::Result;
use storefront_commerce::catalog::ProductCatalog;
use storefront_commerce::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{format_rating, stock_badge};

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let spinner = ctx.output.spinner("Loading product...");
    let product = catalog.product(ProductId::new(args.id)).await;
    spinner.finish_and_clear();
    let product = product?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    println!("  {}\n", product.description);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Rating", &format_rating(product.rating));
    ctx.output.kv(
        "Availability",
        &format!("{} ({} available)", stock_badge(product.stock_status()), product.stock),
    );
    if !product.tags.is_empty() {
        ctx.output.kv("Tags", &product.tags.join(", "));
    }
    ctx.output.kv("Image", &product.image);
    Ok(())
}
