//
//  reporte-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the `[api]` section of the config file. Keys are
//! validated on `set`; an empty `base_url` clears the override.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, CONFIG_KEYS};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print one value
    Get { key: String },

    /// Set one value
    Set { key: String, value: String },

    /// Print all values and the resolved base URL
    #[command(visible_alias = "ls")]
    List,

    /// Print the config file location
    Path,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get { key } => get(key, global),
            ConfigSubcommand::Set { key, value } => set(key, value, global),
            ConfigSubcommand::List => list(global),
            ConfigSubcommand::Path => path(global),
        }
    }
}

fn get(key: &str, global: &GlobalOptions) -> Result<()> {
    if !CONFIG_KEYS.contains(&key) {
        anyhow::bail!(
            "Unknown config key: {} (valid keys: {})",
            key,
            CONFIG_KEYS.join(", ")
        );
    }

    let value = Config::load()?.get(key);
    if global.json {
        let result = serde_json::json!({ "key": key, "value": value });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(v) = value {
        println!("{}", v);
    }
    Ok(())
}

fn set(key: &str, value: &str, global: &GlobalOptions) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    if global.json {
        let result = serde_json::json!({
            "success": true,
            "key": key,
            "value": config.get(key),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} Set {} = {}",
            style("✓").green(),
            style(key).cyan(),
            config.get(key).unwrap_or_default()
        );
    }
    Ok(())
}

fn list(global: &GlobalOptions) -> Result<()> {
    let ctx = global.context()?;
    let config = Config::load()?;

    if global.json {
        let result = serde_json::json!({
            "api": config.api,
            "resolved_base_url": ctx.base_url,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", style("API Configuration").bold());
    println!("{}", "-".repeat(50));
    for key in CONFIG_KEYS {
        match config.get(key) {
            Some(v) => println!("{}: {}", style(key).cyan(), v),
            None => println!("{}: {}", style(key).cyan(), style("(not set)").dim()),
        }
    }
    println!();
    println!("{}: {}", style("resolved base URL").bold(), ctx.base_url);
    Ok(())
}

fn path(global: &GlobalOptions) -> Result<()> {
    let path = Config::config_path()?;
    if global.json {
        let result = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", path.display());
    }
    Ok(())
}
