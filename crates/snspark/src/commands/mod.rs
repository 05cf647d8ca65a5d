//! Command implementations

pub mod config;
pub mod render;
pub mod selftest;
pub mod send;

use anyhow::{Context, Result};
use snspark_core::{relay_config_path, RelayConfig, ENV_SPARK_TOKEN};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Resolve the relay config: explicit file, then environment, then the
/// default config file. Falls back to defaults when nothing is configured.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig> {
    if let Some(path) = path {
        return RelayConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    if std::env::var_os(ENV_SPARK_TOKEN).is_some() {
        return RelayConfig::from_env().context("Failed to load config from environment");
    }

    let default_path = relay_config_path();
    if default_path.exists() {
        return RelayConfig::load()
            .with_context(|| format!("Failed to load config from {}", default_path.display()));
    }

    debug!("No relay configuration found, using defaults");
    Ok(RelayConfig::default())
}

/// Read an SNS batch from a file, or stdin when `input` is "-"
pub fn read_batch(input: &str) -> Result<serde_json::Value> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
    };

    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", input))
}
