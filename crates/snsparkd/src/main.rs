//! snspark Lambda host - relays SNS-triggered invocations to Webex

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use snspark_core::RelayConfig;
use snspark_notify::Relay;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch Logs stamps every line already
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "snsparkd=info,snspark_notify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_ansi(false))
        .init();

    let config = RelayConfig::from_env()?;
    config.validate()?;
    info!(
        "snspark relay starting ({} channel mappings)",
        config.channel_map.len()
    );

    let relay = Relay::new(config);
    let relay = &relay;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler::handle(relay, event).await
    }))
    .await
}
