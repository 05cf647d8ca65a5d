//! Icon and label lookups
//!
//! Both lookups are total: unknown combinations fall back to configured
//! defaults instead of failing.

use crate::event::Notification;
use snspark_core::{RelayConfig, TopicArn};

const ICON_SCALE: &str = "\u{2696}\u{FE0F}";
const ICON_OK: &str = "\u{2705}";
const ICON_ALARM: &str = "\u{2757}";
const ICON_INSUFFICIENT_DATA: &str = "\u{2753}";
const ICON_STOPWATCH: &str = "\u{23F1}\u{FE0F}";
const ICON_REGISTERED: &str = "\u{00AE}\u{FE0F}";
const ICON_FIRE: &str = "\u{1F525}";

/// Map (event source, topic severity, condition) to an icon
///
/// `condition` is the lowercased alarm state, or `"default"`. Misses on an
/// alerts topic get the fire icon, everything else gets `default_icon`.
pub fn event_icon<'a>(
    source: &str,
    severity: &str,
    condition: &str,
    default_icon: &'a str,
) -> &'a str {
    match (source, severity, condition) {
        ("autoscaling", "notices", "default") => ICON_SCALE,
        ("cloudwatch", "notices" | "alerts", "ok") => ICON_OK,
        ("cloudwatch", "notices" | "alerts", "alarm") => ICON_ALARM,
        ("cloudwatch", "notices" | "alerts", "insufficient_data") => ICON_INSUFFICIENT_DATA,
        ("elasticache", "notices", "default") => ICON_STOPWATCH,
        ("rds", "notices", "default") => ICON_REGISTERED,
        (_, "alerts", _) => ICON_FIRE,
        _ => default_icon,
    }
}

/// Map an event source to its descriptive service name
pub fn event_label<'a>(source: &str, default_label: &'a str) -> &'a str {
    match source {
        "cloudwatch" => "AWS CloudWatch",
        "autoscaling" => "AWS AutoScaling",
        "elasticache" => "AWS ElastiCache",
        "rds" => "AWS RDS",
        _ => default_label,
    }
}

/// Icon and label for one notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation<'a> {
    pub icon: &'a str,
    pub label: &'a str,
}

impl<'a> Presentation<'a> {
    pub fn resolve(
        notification: &Notification,
        topic: &TopicArn,
        config: &'a RelayConfig,
    ) -> Self {
        let source = notification.kind().source();
        Self {
            icon: event_icon(
                source,
                topic.severity_category(),
                notification.condition(),
                &config.default_icon,
            ),
            label: event_label(source, &config.default_event_type),
        }
    }
}
