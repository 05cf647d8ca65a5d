//! Error types for snspark

use std::path::PathBuf;

/// snspark error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed SNS batch: {0}")]
    MalformedBatch(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown alarm state: {0}")]
    UnknownState(String),

    #[error("Template substitution failed: {0}")]
    TemplateSubstitution(String),

    #[error("Identifier link has no SourceId: {0:?}")]
    MissingSourceId(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Base64 decode error: {0}")]
    Base64Error(#[from] base64::DecodeError),
}

/// Result type alias for snspark
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedBatch(msg.into())
    }

    pub fn missing<S: Into<String>>(field: S) -> Self {
        Error::MissingField(field.into())
    }
}
