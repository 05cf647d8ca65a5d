//! Constants and default values for snspark

/// Default snspark home directory name
pub const SNSPARK_DIR: &str = ".snspark";

/// Default relay config file name
pub const CONFIG_FILE: &str = "relay.toml";

/// Default Webex messages endpoint (host and path, no scheme)
pub const DEFAULT_SPARK_ENDPOINT: &str = "api.ciscospark.com/v1/messages";

/// Label used when the event source has no descriptive alias
pub const DEFAULT_EVENT_TYPE: &str = "SNS Event";

/// Icon used when no icon matches and the topic is not an alerts topic
pub const DEFAULT_UNICODE_ICON: &str = "\u{2139}\u{FE0F}";

/// Environment variable names
pub const ENV_SPARK_TOKEN: &str = "SPARK_TOKEN";
pub const ENV_CHANNEL_MAP: &str = "CHANNEL_MAP";
pub const ENV_DEFAULT_CHANNEL: &str = "DEFAULT_CHANNEL";
pub const ENV_DEFAULT_EVENT_TYPE: &str = "DEFAULT_EVENT_TYPE";
pub const ENV_DEFAULT_UNICODE_ICON: &str = "DEFAULT_UNICODE_ICON";
pub const ENV_SPARK_API: &str = "SPARK_API";

/// Default HTTP timeout for webhook delivery in seconds
pub const DEFAULT_DELIVERY_TIMEOUT_SECS: u64 = 10;
