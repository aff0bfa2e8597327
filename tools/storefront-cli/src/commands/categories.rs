//! Category listing.

use anyhow::Result;
use storefront_commerce::catalog::ProductCatalog;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();
    let spinner = ctx.output.spinner("Loading categories...");
    let categories = catalog.categories().await;
    spinner.finish_and_clear();
    let categories = categories?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header(&format!("Categories ({})", categories.len()));
    let widths = [14, 14, 50];
    ctx.output.table_row(&["SLUG", "NAME", "DESCRIPTION"], &widths);
    for category in &categories {
        ctx.output.table_row(
            &[
                category.id.as_str(),
                category.name.as_str(),
                category.description.as_str(),
            ],
            &widths,
        );
    }
    Ok(())
}
