//! Lambda invocation handler

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use snspark_notify::{Dispatch, Relay};
use tracing::{error, info};

/// Relay one SNS batch. Returns the Webex response status, or `None` when
/// there was nothing to send.
pub async fn handle(relay: &Relay, event: LambdaEvent<Value>) -> Result<Option<u16>, Error> {
    let (batch, context) = event.into_parts();
    info!(request_id = %context.request_id, "Handling SNS batch");

    match relay.handle(&batch).await {
        Ok(Dispatch::Sent(status)) => Ok(Some(status)),
        Ok(Dispatch::Skipped) => Ok(None),
        Err(e) => {
            error!(request_id = %context.request_id, "Relay failed: {}", e);
            Err(e.into())
        }
    }
}
