//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snspark")]
#[command(version, about = "Relay AWS SNS notifications to Webex rooms")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Relay config file (default: environment, then ~/.snspark/relay.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an SNS batch without sending it
    Render {
        /// SNS batch JSON file, or "-" for stdin
        input: String,
    },

    /// Render an SNS batch and post it to Webex
    Send {
        /// SNS batch JSON file, or "-" for stdin
        input: String,
    },

    /// Run the bundled example notifications through the relay
    Selftest {
        /// Print the rendered messages instead of posting them
        #[arg(long)]
        dry_run: bool,
    },

    /// Inspect or write relay configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration
    Show,

    /// Write a relay config file
    Init {
        /// Webex bot access token
        #[arg(long)]
        token: String,

        /// Room used for unmapped topics
        #[arg(long)]
        default_channel: String,

        /// Topic to room mapping (TOPIC=ROOM_ID, repeatable)
        #[arg(long = "map", value_parser = parse_mapping)]
        mappings: Vec<(String, String)>,
    },

    /// Base64-encode a JSON channel map file for the CHANNEL_MAP variable
    EncodeChannels {
        /// JSON object mapping topic names to room ids
        file: PathBuf,
    },
}

fn parse_mapping(s: &str) -> Result<(String, String), String> {
    let (topic, room) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid TOPIC=ROOM_ID: no `=` found in `{}`", s))?;
    if topic.is_empty() || room.is_empty() {
        return Err(format!("invalid TOPIC=ROOM_ID: `{}`", s));
    }
    Ok((topic.to_string(), room.to_string()))
}
