//! snspark relay
//!
//! Turns the first record of an SNS batch into a Webex message:
//! - classify the message body (CloudWatch alarm, AutoScaling activity,
//!   ElastiCache snapshot, RDS event)
//! - extract the fields that kind needs
//! - pick an icon and label, render the message
//! - route it to a room by topic name
//! - post it to the Webex messages API

pub mod channel;
mod error;
pub mod event;
pub mod identifier;
#[cfg(test)]
pub mod mock;
pub mod presentation;
pub mod render;
mod spark;

pub use channel::resolve_channel;
pub use error::{NotifyError, Result};
pub use event::{classify, EventKind, Notification};
pub use presentation::Presentation;
pub use spark::{SparkMessage, SparkNotifier};

use async_trait::async_trait;
use serde_json::Value;
use snspark_core::{Envelope, RelayConfig, TopicArn};
use tracing::{debug, info, warn};

/// Trait for message delivery backends
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a rendered message, returning the HTTP status code
    async fn send(&self, message: &SparkMessage) -> Result<u16>;

    /// Check if the notifier is configured and ready
    fn is_configured(&self) -> bool;
}

/// Result of running the pipeline over one batch
#[derive(Debug, Clone)]
pub struct Translation {
    pub kind: EventKind,
    pub topic: TopicArn,
    pub message: SparkMessage,
}

/// What happened to a translated message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Posted, with the response status code
    Sent(u16),
    /// Nothing to post (unclassified notification)
    Skipped,
}

/// Run the pipeline over an SNS batch without delivering anything
pub fn translate(batch: &Value, config: &RelayConfig) -> snspark_core::Result<Translation> {
    let envelope = Envelope::from_batch(batch)?;
    translate_envelope(&envelope, config)
}

/// Run the pipeline over an already unwrapped envelope
pub fn translate_envelope(
    envelope: &Envelope,
    config: &RelayConfig,
) -> snspark_core::Result<Translation> {
    let topic = &envelope.topic;
    debug!(
        topic = topic.topic_name(),
        region = topic.region(),
        environment = topic.environment(),
        severity = topic.severity_category(),
        "Translating notification: {}",
        envelope.headline()
    );

    let notification = Notification::from_envelope(envelope)?;
    let presentation = Presentation::resolve(&notification, topic, config);
    let markdown = render::render(&notification, &presentation);
    let room_id = resolve_channel(
        topic.topic_name(),
        &config.channel_map,
        &config.default_channel,
    );

    debug!("Classified as {} for room {}", notification.kind(), room_id);

    Ok(Translation {
        kind: notification.kind(),
        topic: topic.clone(),
        message: SparkMessage {
            markdown,
            room_id: room_id.to_string(),
        },
    })
}

/// Pairs the relay configuration with a delivery backend
pub struct Relay {
    config: RelayConfig,
    notifier: Box<dyn Notifier>,
}

impl Relay {
    /// Create a relay posting to the Webex API described by `config`
    pub fn new(config: RelayConfig) -> Self {
        let notifier = Box::new(SparkNotifier::from_config(&config));
        Self { config, notifier }
    }

    /// Create a relay with a custom delivery backend
    pub fn with_notifier(config: RelayConfig, notifier: Box<dyn Notifier>) -> Self {
        Self { config, notifier }
    }

    pub fn is_configured(&self) -> bool {
        self.notifier.is_configured()
    }

    pub fn translate(&self, batch: &Value) -> Result<Translation> {
        Ok(translate(batch, &self.config)?)
    }

    /// Translate a batch and deliver the result
    pub async fn handle(&self, batch: &Value) -> Result<Dispatch> {
        let translation = self.translate(batch)?;
        self.dispatch(&translation).await
    }

    /// Deliver an already translated message
    pub async fn dispatch(&self, translation: &Translation) -> Result<Dispatch> {
        if translation.message.markdown.is_empty() {
            warn!(
                "Unclassified notification on topic {}, nothing to send",
                translation.topic.topic_name()
            );
            return Ok(Dispatch::Skipped);
        }

        if translation.message.room_id.is_empty() {
            return Err(NotifyError::config(format!(
                "No room for topic '{}' and no default channel configured",
                translation.topic.topic_name()
            )));
        }

        let status = self.notifier.send(&translation.message).await?;
        info!(
            "Delivered {} notification from {} ({})",
            translation.kind,
            translation.topic.topic_name(),
            status
        );
        Ok(Dispatch::Sent(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockNotifier;
    use serde_json::json;

    fn config() -> RelayConfig {
        let mut config = RelayConfig {
            spark_token: "token".to_string(),
            default_channel: "room-default".to_string(),
            ..Default::default()
        };
        config
            .channel_map
            .insert("production-notices".to_string(), "room-events".to_string());
        config
    }

    fn batch(topic: &str, subject: &str, message: Value) -> Value {
        json!({
            "Records": [{
                "Sns": {
                    "TopicArn": format!("arn:aws:sns:us-east-1:123456789012:{}", topic),
                    "Subject": subject,
                    "Message": message.to_string(),
                }
            }]
        })
    }

    fn alarm_message() -> Value {
        json!({
            "AlarmName": "cpu-high",
            "AlarmDescription": null,
            "NewStateValue": "OK",
            "OldStateValue": "ALARM",
            "NewStateReason": "Threshold Crossed",
            "Trigger": { "Namespace": "AWS/EC2", "MetricName": "CPUUtilization" }
        })
    }

    #[test]
    fn test_translate_alarm() {
        let translation =
            translate(&batch("production-notices", "OK: cpu-high", alarm_message()), &config())
                .unwrap();

        assert_eq!(translation.kind, EventKind::Alarm);
        assert_eq!(translation.message.room_id, "room-events");
        let markdown = &translation.message.markdown;
        assert!(markdown.starts_with("<h2>\u{2705} AWS CloudWatch</h2>"));
        assert!(markdown.contains("class=\"primary\""));
        assert!(markdown.contains("cpu-high"));
        assert!(markdown.contains("'ALARM' --> OK"));
    }

    #[test]
    fn test_translate_unclassified_still_routes() {
        let translation =
            translate(&batch("staging-notices", "hello", json!({ "foo": 1 })), &config()).unwrap();
        assert_eq!(translation.kind, EventKind::Unclassified);
        assert_eq!(translation.message.markdown, "");
        assert_eq!(translation.message.room_id, "room-default");
    }

    #[test]
    fn test_translate_propagates_extraction_errors() {
        let mut message = alarm_message();
        message["NewStateValue"] = json!("PENDING");
        let err = translate(&batch("production-alerts", "x", message), &config()).unwrap_err();
        assert!(matches!(err, snspark_core::Error::UnknownState(_)));
    }

    #[tokio::test]
    async fn test_handle_sends_message() {
        let mock = MockNotifier::new();
        let sent = mock.recorder();
        let relay = Relay::with_notifier(config(), Box::new(mock));

        let dispatch = relay
            .handle(&batch("production-notices", "OK: cpu-high", alarm_message()))
            .await
            .unwrap();

        assert_eq!(dispatch, Dispatch::Sent(200));
        let sent = sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].room_id, "room-events");
    }

    #[tokio::test]
    async fn test_handle_skips_unclassified() {
        let mock = MockNotifier::new();
        let sent = mock.recorder();
        let relay = Relay::with_notifier(config(), Box::new(mock));

        let dispatch = relay
            .handle(&batch("production-notices", "hello", json!({})))
            .await
            .unwrap();

        assert_eq!(dispatch, Dispatch::Skipped);
        assert!(sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_handle_requires_a_room() {
        let config = RelayConfig {
            spark_token: "token".to_string(),
            ..Default::default()
        };
        let relay = Relay::with_notifier(config, Box::new(MockNotifier::new()));

        let err = relay
            .handle(&batch("unmapped-notices", "OK", alarm_message()))
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_handle_surfaces_delivery_errors() {
        let relay = Relay::with_notifier(config(), Box::new(MockNotifier::failing(401)));

        let err = relay
            .handle(&batch("production-notices", "OK", alarm_message()))
            .await
            .unwrap_err();
        assert!(matches!(err, NotifyError::Delivery { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_handle_malformed_batch() {
        let relay = Relay::with_notifier(config(), Box::new(MockNotifier::new()));
        let err = relay.handle(&json!({ "Records": [] })).await.unwrap_err();
        assert!(matches!(
            err,
            NotifyError::Translate(snspark_core::Error::MalformedBatch(_))
        ));
    }
}
