//! Configuration commands.

use anyhow::{bail, Result};
use storefront_commerce::StorefrontConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(ConfigCommand::Show) | None => show(ctx),
        Some(ConfigCommand::Init { path, force }) => init(&path, force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Storefront configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("Source", &path.display().to_string()),
        None => ctx.output.kv("Source", "built-in defaults"),
    }
    println!();
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}

fn init(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(path);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    config::save(&StorefrontConfig::default(), &path)?;
    ctx.output
        .success(&format!("Wrote default configuration to {}", path.display()));
    Ok(())
}
