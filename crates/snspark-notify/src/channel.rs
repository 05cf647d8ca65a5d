//! Topic to room routing

use snspark_core::ChannelMap;

/// Room for `topic_name`, or `default_channel` when the topic is not mapped
///
/// Routing only looks at the topic name; the event kind and region play no
/// part.
pub fn resolve_channel<'a>(
    topic_name: &str,
    channel_map: &'a ChannelMap,
    default_channel: &'a str,
) -> &'a str {
    channel_map
        .get(topic_name)
        .map(String::as_str)
        .unwrap_or(default_channel)
}
