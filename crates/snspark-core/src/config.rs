//! Relay configuration
//!
//! The relay is configured once at startup, either from the process
//! environment (the way it runs under Lambda) or from a TOML file, and the
//! resulting [`RelayConfig`] is passed by reference into the pipeline.

use crate::constants::*;
use crate::error::{Error, Result};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Topic name to Webex room id
pub type ChannelMap = HashMap<String, String>;

/// Get the default relay config path
pub fn relay_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SNSPARK_DIR)
        .join(CONFIG_FILE)
}

/// Relay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Webex bot access token (without the "Bearer " prefix)
    #[serde(default)]
    pub spark_token: String,

    /// Webex messages endpoint, host and path without scheme
    #[serde(default = "default_spark_endpoint")]
    pub spark_endpoint: String,

    /// Room used when the topic has no entry in the channel map
    #[serde(default)]
    pub default_channel: String,

    /// Label used for unknown event sources
    #[serde(default = "default_event_type")]
    pub default_event_type: String,

    /// Icon used when no icon matches a non-alerts topic
    #[serde(default = "default_unicode_icon")]
    pub default_icon: String,

    #[serde(default)]
    pub channel_map: ChannelMap,
}

fn default_spark_endpoint() -> String {
    DEFAULT_SPARK_ENDPOINT.to_string()
}

fn default_event_type() -> String {
    DEFAULT_EVENT_TYPE.to_string()
}

fn default_unicode_icon() -> String {
    DEFAULT_UNICODE_ICON.to_string()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            spark_token: String::new(),
            spark_endpoint: default_spark_endpoint(),
            default_channel: String::new(),
            default_event_type: default_event_type(),
            default_icon: default_unicode_icon(),
            channel_map: ChannelMap::new(),
        }
    }
}

impl RelayConfig {
    /// Build config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    ///
    /// `SPARK_TOKEN` is required. `CHANNEL_MAP` is a base64-encoded JSON object
    /// mapping topic names to room ids. Every other variable falls back to its
    /// default when unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let spark_token = var(ENV_SPARK_TOKEN)
            .ok_or_else(|| Error::config(format!("{} is not set", ENV_SPARK_TOKEN)))?;

        let channel_map = match var(ENV_CHANNEL_MAP) {
            Some(encoded) => decode_channel_map(&encoded)?,
            None => ChannelMap::new(),
        };

        let config = Self {
            spark_token,
            spark_endpoint: var(ENV_SPARK_API).unwrap_or_else(default_spark_endpoint),
            default_channel: var(ENV_DEFAULT_CHANNEL).unwrap_or_default(),
            default_event_type: var(ENV_DEFAULT_EVENT_TYPE).unwrap_or_else(default_event_type),
            default_icon: var(ENV_DEFAULT_UNICODE_ICON).unwrap_or_else(default_unicode_icon),
            channel_map,
        };

        debug!(
            "Loaded relay config from environment ({} channel mappings)",
            config.channel_map.len()
        );
        Ok(config)
    }

    /// Load config from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&relay_config_path())
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: RelayConfig = toml::from_str(&content)?;

        debug!("Loaded relay config from {:?}", path);
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, &content)?;

        // Owner-only, the file holds the bot token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)) {
                tracing::warn!("Failed to set config file permissions: {}", e);
            }
        }

        info!("Saved relay config to {:?}", path);
        Ok(())
    }

    /// Check that delivery can be attempted with this config
    pub fn validate(&self) -> Result<()> {
        if self.spark_token.trim().is_empty() {
            return Err(Error::config("spark_token is empty"));
        }
        if self.spark_endpoint.trim().is_empty() {
            return Err(Error::config("spark_endpoint is empty"));
        }
        if self.spark_endpoint.contains("://") {
            return Err(Error::config(format!(
                "spark_endpoint must not include a scheme: {}",
                self.spark_endpoint
            )));
        }
        Ok(())
    }

    /// Full HTTPS URL of the messages endpoint
    pub fn webhook_url(&self) -> String {
        format!("https://{}", self.spark_endpoint)
    }
}

/// Decode a base64-encoded JSON channel map
pub fn decode_channel_map(encoded: &str) -> Result<ChannelMap> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
    let map: ChannelMap = serde_json::from_slice(&bytes).map_err(|e| {
        Error::config(format!(
            "{} is not a JSON object of strings: {}",
            ENV_CHANNEL_MAP, e
        ))
    })?;
    Ok(map)
}

/// Encode a channel map the way `CHANNEL_MAP` expects it
pub fn encode_channel_map(map: &ChannelMap) -> Result<String> {
    let json = serde_json::to_vec(map)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(json))
}
