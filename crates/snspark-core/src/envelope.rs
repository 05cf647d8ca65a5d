//! SNS batch unwrapping
//!
//! Only `Records[0].Sns` is ever read; any further records in the batch are
//! ignored.

use crate::error::{Error, Result};
use crate::topic::TopicArn;
use serde_json::Value;
use tracing::debug;

/// The first notification of an SNS batch
#[derive(Debug, Clone)]
pub struct Envelope {
    pub topic: TopicArn,
    pub subject: Option<String>,
    /// Raw `Message` text as delivered by SNS
    pub raw_message: String,
    /// `Message` parsed as JSON
    pub body: Value,
}

impl Envelope {
    /// Unwrap the first record of an SNS batch
    pub fn from_batch(batch: &Value) -> Result<Self> {
        let records = batch
            .get("Records")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::malformed("missing Records array"))?;

        let sns = records
            .first()
            .ok_or_else(|| Error::malformed("Records array is empty"))?
            .get("Sns")
            .ok_or_else(|| Error::malformed("record has no Sns object"))?;

        let topic_arn = sns
            .get("TopicArn")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::malformed("Sns.TopicArn is missing"))?;

        let raw_message = sns
            .get("Message")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::malformed("Sns.Message is missing"))?;

        // The key must be present, but SNS sends null when no subject was set
        let subject = match sns.get("Subject") {
            None => return Err(Error::malformed("Sns.Subject is missing")),
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::String(_)) | Some(Value::Null) => None,
            Some(other) => {
                return Err(Error::malformed(format!(
                    "Sns.Subject is not a string: {}",
                    other
                )))
            }
        };

        debug!("SNS message: {}", raw_message);

        let body: Value = serde_json::from_str(raw_message)
            .map_err(|e| Error::malformed(format!("Sns.Message is not JSON: {}", e)))?;

        Ok(Self {
            topic: TopicArn::parse(topic_arn),
            subject,
            raw_message: raw_message.to_string(),
            body,
        })
    }

    /// Parse and unwrap a batch from its JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let batch: Value = serde_json::from_str(text)
            .map_err(|e| Error::malformed(format!("batch is not JSON: {}", e)))?;
        Self::from_batch(&batch)
    }

    /// The subject line, or the raw message when no subject was set
    pub fn headline(&self) -> &str {
        self.subject.as_deref().unwrap_or(&self.raw_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn batch(subject: Value, message: &str) -> Value {
        json!({
            "Records": [{
                "Sns": {
                    "TopicArn": "arn:aws:sns:us-east-1:123456789012:production-notices",
                    "Subject": subject,
                    "Message": message,
                }
            }]
        })
    }

    #[test]
    fn test_unwrap_first_record() {
        let envelope =
            Envelope::from_batch(&batch(json!("RDS Notification Message"), r#"{"a":1}"#)).unwrap();
        assert_eq!(envelope.topic.topic_name(), "production-notices");
        assert_eq!(envelope.subject.as_deref(), Some("RDS Notification Message"));
        assert_eq!(envelope.body["a"], 1);
        assert_eq!(envelope.headline(), "RDS Notification Message");
    }

    #[test]
    fn test_only_first_record_is_read() {
        let mut value = batch(json!("first"), "{}");
        let second = json!({ "Sns": { "TopicArn": "x", "Subject": "second", "Message": "{}" } });
        value["Records"].as_array_mut().unwrap().push(second);

        let envelope = Envelope::from_batch(&value).unwrap();
        assert_eq!(envelope.subject.as_deref(), Some("first"));
    }

    #[test]
    fn test_null_subject_falls_back_to_message() {
        let envelope = Envelope::from_batch(&batch(Value::Null, r#"{"b":2}"#)).unwrap();
        assert!(envelope.subject.is_none());
        assert_eq!(envelope.headline(), r#"{"b":2}"#);
    }

    #[test]
    fn test_empty_records_is_malformed() {
        let err = Envelope::from_batch(&json!({ "Records": [] })).unwrap_err();
        assert!(matches!(err, Error::MalformedBatch(_)));

        let err = Envelope::from_batch(&json!({})).unwrap_err();
        assert!(matches!(err, Error::MalformedBatch(_)));
    }

    #[test]
    fn test_missing_subject_key_is_malformed() {
        let value = json!({
            "Records": [{ "Sns": { "TopicArn": "arn:aws:sns:r:a:t", "Message": "{}" } }]
        });
        let err = Envelope::from_batch(&value).unwrap_err();
        assert!(matches!(err, Error::MalformedBatch(_)));
    }

    #[test]
    fn test_non_json_message_is_malformed() {
        let err = Envelope::from_batch(&batch(json!("s"), "not json")).unwrap_err();
        assert!(matches!(err, Error::MalformedBatch(_)));
    }

    #[test]
    fn test_from_json_text() {
        let err = Envelope::from_json("[").unwrap_err();
        assert!(matches!(err, Error::MalformedBatch(_)));
    }
}
