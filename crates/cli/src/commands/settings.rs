//! Inspect and change CLI preferences

use anyhow::{Context, Result};

use crate::commands::CommandContext;
use crate::config::Config;
use crate::output::{colors, ConfigReport};

/// Print the resolved configuration
pub fn show(ctx: &CommandContext) -> Result<()> {
    let report = ConfigReport {
        config_file: Config::config_file()?.display().to_string(),
        cli: ctx.config.clone(),
        app: ctx.app_config.clone(),
    };
    ctx.emit(&report)
}

pub fn get(ctx: &CommandContext, key: &str) -> Result<()> {
    let value = ctx
        .config
        .get(key)
        .with_context(|| format!("Unknown configuration key: {}", key))?;
    println!("{}", value);
    Ok(())
}

/// Persist a value; environment overrides in effect now are not saved
pub fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_saved()?;
    config.set(key, value)?;
    println!("{} {} = {}", colors::success("Saved"), key, value);
    Ok(())
}

pub fn reset() -> Result<()> {
    Config::default().save()?;
    println!("{}", colors::success("Configuration reset to defaults"));
    Ok(())
}
