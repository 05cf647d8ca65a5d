//! Relay configuration command

use anyhow::{Context, Result};
use snspark_core::config::{decode_channel_map, encode_channel_map};
use snspark_core::{relay_config_path, ChannelMap, RelayConfig};
use std::path::{Path, PathBuf};

use super::load_config;
use crate::cli::{ConfigArgs, ConfigCommand};
use crate::output::{is_json_mode, print_info, print_json, print_success};

pub fn execute(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(config_path),
        ConfigCommand::Init {
            token,
            default_channel,
            mappings,
        } => init(config_path, token, default_channel, mappings),
        ConfigCommand::EncodeChannels { file } => encode_channels(&file),
    }
}

/// Tokens this short are hidden entirely
const MASK_MIN_CHARS: usize = 16;

fn mask(token: &str) -> String {
    if token.is_empty() {
        return "(not set)".to_string();
    }
    let chars = token.chars().count();
    if chars < MASK_MIN_CHARS {
        return "*".repeat(8);
    }
    let head = token.char_indices().nth(8).map_or(token.len(), |(i, _)| i);
    let tail = token
        .char_indices()
        .nth(chars - 4)
        .map_or(token.len(), |(i, _)| i);
    format!("{}...{}", &token[..head], &token[tail..])
}

fn show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    if is_json_mode() {
        let masked = RelayConfig {
            spark_token: mask(&config.spark_token),
            ..config
        };
        print_json(&masked);
        return Ok(());
    }

    println!();
    println!("Relay Configuration");
    println!("{}", "=".repeat(40));
    println!("Token: {}", mask(&config.spark_token));
    println!("Endpoint: {}", config.webhook_url());
    println!(
        "Default channel: {}",
        if config.default_channel.is_empty() {
            "(not set)"
        } else {
            config.default_channel.as_str()
        }
    );
    println!("Default event type: {}", config.default_event_type);
    println!("Default icon: {}", config.default_icon);

    println!();
    if config.channel_map.is_empty() {
        println!("Channels: none (everything goes to the default channel)");
    } else {
        println!("Channels:");
        let mut topics: Vec<_> = config.channel_map.iter().collect();
        topics.sort();
        for (topic, room) in topics {
            println!("  {} -> {}", topic, room);
        }
    }

    if let Err(e) = config.validate() {
        println!();
        print_info(&format!("Not ready for delivery: {}", e));
    }

    Ok(())
}

fn init(
    config_path: Option<&Path>,
    token: String,
    default_channel: String,
    mappings: Vec<(String, String)>,
) -> Result<()> {
    let path: PathBuf = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(relay_config_path);

    let config = RelayConfig {
        spark_token: token,
        default_channel,
        channel_map: mappings.into_iter().collect(),
        ..Default::default()
    };
    config.validate()?;
    config.save_to(&path)?;

    print_success("Relay configured successfully");
    print_info(&format!("Config saved to: {}", path.display()));
    Ok(())
}

fn encode_channels(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let map: ChannelMap = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON object of strings", file.display()))?;

    let encoded = encode_channel_map(&map)?;
    // Sanity check the value the relay will decode
    decode_channel_map(&encoded)?;

    println!("{}", encoded);
    Ok(())
}
