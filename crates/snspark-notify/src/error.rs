//! Error types for the relay

/// Relay error type
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error(transparent)]
    Translate(#[from] snspark_core::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Webex API returned {status}: {body}")]
    Delivery { status: u16, body: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Notifier not configured")]
    NotConfigured,
}

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, NotifyError>;

impl NotifyError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        NotifyError::ConfigError(msg.into())
    }

    pub fn delivery<S: Into<String>>(status: u16, body: S) -> Self {
        NotifyError::Delivery {
            status,
            body: body.into(),
        }
    }
}
