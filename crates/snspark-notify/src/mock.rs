//! Mock implementations for testing

use crate::error::{NotifyError, Result};
use crate::spark::SparkMessage;
use crate::Notifier;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A mock notifier that records every message it is asked to send
#[derive(Default)]
pub struct MockNotifier {
    messages: Arc<Mutex<Vec<SparkMessage>>>,
    call_count: AtomicUsize,
    /// Status returned for failed sends, `None` means succeed with 200
    fail_with: Option<u16>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock notifier whose every send is rejected with `status`
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn messages(&self) -> Vec<SparkMessage> {
        self.messages.lock().await.clone()
    }

    /// Handle to the recorded messages that outlives the boxed notifier
    pub fn recorder(&self) -> Arc<Mutex<Vec<SparkMessage>>> {
        Arc::clone(&self.messages)
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, message: &SparkMessage) -> Result<u16> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.fail_with {
            return Err(NotifyError::delivery(status, "Mock failure"));
        }

        self.messages.lock().await.push(message.clone());
        Ok(200)
    }

    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> SparkMessage {
        SparkMessage {
            markdown: text.to_string(),
            room_id: "room".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_notifier_records_messages() {
        let notifier = MockNotifier::new();
        assert_eq!(notifier.send(&message("one")).await.unwrap(), 200);
        assert_eq!(notifier.send(&message("two")).await.unwrap(), 200);

        assert_eq!(notifier.call_count(), 2);
        let messages = notifier.messages().await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].markdown, "two");
    }

    #[tokio::test]
    async fn test_mock_notifier_fails_when_configured() {
        let notifier = MockNotifier::failing(503);
        let result = notifier.send(&message("x")).await;
        assert!(matches!(result, Err(NotifyError::Delivery { status: 503, .. })));
        assert_eq!(notifier.call_count(), 1);
        assert!(notifier.messages().await.is_empty());
    }
}
