//! Webex (formerly Cisco Spark) messages backend

use crate::error::{NotifyError, Result};
use crate::Notifier;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use snspark_core::{RelayConfig, DEFAULT_DELIVERY_TIMEOUT_SECS};
use std::time::Duration;
use tracing::{debug, error, info};

/// Request body for POST /v1/messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkMessage {
    pub markdown: String,
    #[serde(rename = "roomId")]
    pub room_id: String,
}

/// Webex messages backend
pub struct SparkNotifier {
    token: String,
    endpoint: String,
    client: reqwest::Client,
}

impl SparkNotifier {
    /// Create a new Webex notifier for `endpoint` (host and path, no scheme)
    pub fn new(token: String, endpoint: String) -> Self {
        Self::with_client(token, endpoint, reqwest::Client::new())
    }

    /// Create with a custom HTTP client (useful for testing)
    pub fn with_client(token: String, endpoint: String, client: reqwest::Client) -> Self {
        Self {
            token,
            endpoint,
            client,
        }
    }

    pub fn from_config(config: &RelayConfig) -> Self {
        Self::new(config.spark_token.clone(), config.spark_endpoint.clone())
    }

    fn api_url(&self) -> String {
        format!("https://{}", self.endpoint)
    }

    async fn post_message(&self, message: &SparkMessage) -> Result<u16> {
        if !self.is_configured() {
            return Err(NotifyError::NotConfigured);
        }

        debug!("Posting Webex message to room {}", message.room_id);

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.token)
            .timeout(Duration::from_secs(DEFAULT_DELIVERY_TIMEOUT_SECS))
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Webex message delivered ({})", status);
            Ok(status.as_u16())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!("Webex API error {}: {}", status, body);
            Err(NotifyError::delivery(status.as_u16(), body))
        }
    }
}

#[async_trait]
impl Notifier for SparkNotifier {
    async fn send(&self, message: &SparkMessage) -> Result<u16> {
        self.post_message(message).await
    }

    fn is_configured(&self) -> bool {
        !self.token.is_empty() && !self.endpoint.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> SparkMessage {
        SparkMessage {
            markdown: "hello".to_string(),
            room_id: "room".to_string(),
        }
    }

    #[test]
    fn test_notifier_not_configured_empty_token() {
        let notifier =
            SparkNotifier::new(String::new(), "api.ciscospark.com/v1/messages".to_string());
        assert!(!notifier.is_configured());
    }

    #[test]
    fn test_notifier_configured() {
        let config = RelayConfig {
            spark_token: "token".to_string(),
            ..Default::default()
        };
        let notifier = SparkNotifier::from_config(&config);
        assert!(notifier.is_configured());
        assert_eq!(notifier.api_url(), "https://api.ciscospark.com/v1/messages");
    }

    #[test]
    fn test_message_wire_format() {
        let json = serde_json::to_value(message()).unwrap();
        assert_eq!(json, serde_json::json!({ "markdown": "hello", "roomId": "room" }));
    }

    #[tokio::test]
    async fn test_send_not_configured() {
        let notifier = SparkNotifier::new(String::new(), String::new());
        let result = notifier.send(&message()).await;
        assert!(matches!(result, Err(NotifyError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_send_unreachable_endpoint_is_http_error() {
        let notifier =
            SparkNotifier::new("token".to_string(), "127.0.0.1:1/v1/messages".to_string());
        let result = notifier.send(&message()).await;
        assert!(matches!(result, Err(NotifyError::HttpError(_))));
    }
}
