//! snspark Core - Shared configuration, error handling and SNS envelope types

pub mod config;
pub mod constants;
pub mod envelope;
pub mod error;
pub mod topic;

pub use config::{relay_config_path, ChannelMap, RelayConfig};
pub use constants::*;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use topic::TopicArn;
