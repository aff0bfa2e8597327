//! Interactive shopping session.
//!
//! One cart store lives for the whole session. A subscriber stands in for the
//! navigation badge and reports the line count after every change.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context as _, Result};
use dialoguer::Input;
use storefront_commerce::catalog::{MockCatalog, ProductCatalog};
use storefront_commerce::checkout::Checkout;
use storefront_commerce::{CartStore, ProductId};
use tracing::warn;

use super::products::print_table;
use super::ShopArgs;
use crate::context::Context;
use crate::output::{truncate, Output};

const HELP: &str = "\
  list                 show the catalog
  show <id>            product details
  add <id> [qty]       add to cart (default 1)
  remove <id>          remove from cart
  qty <id> <n>         set quantity (n < 1 removes)
  cart                 review cart and order summary
  clear                empty the cart
  checkout             place the order
  help                 this message
  quit                 leave the store";

/// A command typed during a shopping session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    List,
    Show(ProductId),
    Add { id: ProductId, quantity: i64 },
    Remove(ProductId),
    Quantity { id: ProductId, quantity: i64 },
    Cart,
    Clear,
    Checkout,
    Help,
    Quit,
}

impl FromStr for ShopCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| anyhow!("empty command"))?
            .to_lowercase();
        let args: Vec<&str> = parts.collect();

        let id_arg = |index: usize| -> Result<ProductId> {
            let raw = args
                .get(index)
                .ok_or_else(|| anyhow!("`{}` needs a product id", verb))?;
            raw.parse::<ProductId>()
                .with_context(|| format!("invalid product id: {}", raw))
        };
        let quantity_arg = |index: usize| -> Result<Option<i64>> {
            args.get(index)
                .map(|raw| {
                    raw.parse::<i64>()
                        .with_context(|| format!("invalid quantity: {}", raw))
                })
                .transpose()
        };

        let command = match verb.as_str() {
            "list" | "ls" => ShopCommand::List,
            "show" => ShopCommand::Show(id_arg(0)?),
            "add" => ShopCommand::Add {
                id: id_arg(0)?,
                quantity: quantity_arg(1)?.unwrap_or(1),
            },
            "remove" | "rm" => ShopCommand::Remove(id_arg(0)?),
            "qty" | "quantity" => ShopCommand::Quantity {
                id: id_arg(0)?,
                quantity: quantity_arg(1)?
                    .ok_or_else(|| anyhow!("`qty` needs a quantity"))?,
            },
            "cart" => ShopCommand::Cart,
            "clear" => ShopCommand::Clear,
            "checkout" => ShopCommand::Checkout,
            "help" | "?" => ShopCommand::Help,
            "quit" | "exit" => ShopCommand::Quit,
            other => bail!("unknown command `{}` (try `help`)", other),
        };
        Ok(command)
    }
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut session = Session::new(ctx);

    match args.script {
        Some(path) => {
            let path = ctx.resolve_path(&path);
            let script = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script: {}", path.display()))?;
            for line in script.lines().map(str::trim) {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                ctx.output.debug(&format!("> {}", line));
                if !session.handle_line(line).await? {
                    break;
                }
            }
        }
        None => {
            ctx.output.info("Welcome to the store. Type `help` for commands.");
            loop {
                let line = Input::<String>::new()
                    .with_prompt("shop")
                    .allow_empty(true)
                    .interact_text()
                    .context("Failed to read command")?;
                if line.trim().is_empty() {
                    continue;
                }
                if !session.handle_line(&line).await? {
                    break;
                }
            }
        }
    }

    if !session.store.is_empty() {
        ctx.output.warn(&format!(
            "Leaving with {} item(s) in the cart; carts are not saved.",
            session.store.line_count()
        ));
    }
    Ok(())
}

struct Session<'a> {
    ctx: &'a Context,
    catalog: MockCatalog,
    checkout: Checkout,
    store: CartStore,
}

impl<'a> Session<'a> {
    fn new(ctx: &'a Context) -> Self {
        Self::with_catalog(ctx, ctx.catalog())
    }

    fn with_catalog(ctx: &'a Context, catalog: MockCatalog) -> Self {
        let mut store = ctx.cart_store();
        let badge = ctx.output.clone();
        store.subscribe(move |event, cart| {
            if badge.is_json() {
                badge.json(&serde_json::json!({
                    "event": event,
                    "lines": cart.line_count(),
                    "total": cart.total(),
                }));
            } else {
                badge.info(&format!(
                    "Cart: {} item(s), {}",
                    cart.line_count(),
                    cart.total()
                ));
            }
        });

        Self {
            ctx,
            catalog,
            checkout: ctx.checkout(),
            store,
        }
    }

    fn output(&self) -> &Output {
        &self.ctx.output
    }

    /// Handle one line of input. Returns false when the session should end.
    ///
    /// Bad input and rejected cart operations are reported and the session
    /// continues.
    async fn handle_line(&mut self, line: &str) -> Result<bool> {
        let command = match line.parse::<ShopCommand>() {
            Ok(command) => command,
            Err(e) => {
                self.output().error(&format!("{:#}", e));
                return Ok(true);
            }
        };

        if let Err(e) = self.execute(command.clone()).await {
            self.output().error(&format!("{:#}", e));
        }
        Ok(command != ShopCommand::Quit)
    }

    async fn execute(&mut self, command: ShopCommand) -> Result<()> {
        match command {
            ShopCommand::List => {
                let products = self.catalog.products().await?;
                if self.output().is_json() {
                    self.output().json(&products);
                } else {
                    print_table(&products, self.ctx);
                }
            }
            ShopCommand::Show(id) => {
                let product = self.catalog.product(id).await?;
                if self.output().is_json() {
                    self.output().json(&product);
                } else {
                    self.output().header(&product.name);
                    self.output().kv("Price", &product.price.display());
                    self.output()
                        .kv("Availability", product.stock_status().display_name());
                    self.output().kv("In cart", &self.store.quantity_of(id).to_string());
                }
            }
            ShopCommand::Add { id, quantity } => {
                let product = self.catalog.product(id).await?;
                if !product.is_in_stock() {
                    warn!(product_id = %id, "Refused add for out-of-stock product");
                    bail!("{} is out of stock", product.name);
                }
                let wanted = self.store.quantity_of(id).saturating_add(quantity);
                if wanted > i64::from(product.stock) {
                    self.output().warn(&format!(
                        "Only {} of {} available; the order may be delayed.",
                        product.stock, product.name
                    ));
                }
                self.store.add_item(&product, quantity)?;
                self.output()
                    .success(&format!("Added {} x {}", quantity, product.name));
            }
            ShopCommand::Remove(id) => {
                if !self.store.remove_item(id) {
                    self.output().info(&format!("Product {} is not in the cart", id));
                }
            }
            ShopCommand::Quantity { id, quantity } => {
                if !self.store.contains(id) {
                    self.output().info(&format!("Product {} is not in the cart", id));
                } else {
                    self.store.update_quantity(id, quantity);
                }
            }
            ShopCommand::Cart => self.print_cart(),
            ShopCommand::Clear => {
                if !self.store.clear() {
                    self.output().info("Your cart is already empty");
                }
            }
            ShopCommand::Checkout => {
                let spinner = self.output().spinner("Processing...");
                let result = self.checkout.place_order(&mut self.store).await;
                spinner.finish_and_clear();
                let confirmation = result?;

                if self.output().is_json() {
                    self.output().json(&confirmation);
                } else {
                    self.output().success(&format!(
                        "Order {} placed: {}",
                        confirmation.id, confirmation.summary.total
                    ));
                }
            }
            ShopCommand::Help => {
                if !self.output().is_json() {
                    println!("{}", HELP);
                }
            }
            ShopCommand::Quit => {}
        }
        Ok(())
    }

    fn print_cart(&self) {
        let summary = self.checkout.summarize(&self.store);
        let output = self.output();

        if output.is_json() {
            output.json(&serde_json::json!({
                "items": self.store.items(),
                "summary": summary,
            }));
            return;
        }

        if self.store.is_empty() {
            output.info("Your cart is empty");
            return;
        }

        output.header(&format!("Your cart ({} item(s))", summary.line_count));
        let widths = [4, 30, 10, 5, 10];
        output.table_row(&["ID", "NAME", "EACH", "QTY", "TOTAL"], &widths);
        for item in self.store.items() {
            let id = item.product_id.to_string();
            let name = truncate(&item.name, 30);
            let each = item.unit_price.display();
            let quantity = item.quantity.to_string();
            let total = item.line_total().display();
            output.table_row(
                &[
                    id.as_str(),
                    name.as_str(),
                    each.as_str(),
                    quantity.as_str(),
                    total.as_str(),
                ],
                &widths,
            );
        }

        println!();
        output.kv("Subtotal", &summary.subtotal.display());
        output.kv("Shipping", &summary.shipping_label());
        output.kv("Tax", &summary.tax.display());
        output.kv("Total", &summary.total.display());
    }
}
