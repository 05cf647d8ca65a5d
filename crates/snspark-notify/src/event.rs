//! Event classification and field extraction
//!
//! An SNS message body is classified into one [`EventKind`] by an ordered
//! list of shape checks, then the fields that kind needs are pulled out into
//! a typed [`Notification`].

use crate::identifier::IdentifierLink;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use snspark_core::{Envelope, Error, Result};

/// Condition used for every kind that carries no alarm state
pub const DEFAULT_CONDITION: &str = "default";

static CAPACITY_CHANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"capacity from (\w+ to \w+)").expect("Invalid capacity change regex")
});

/// Closed set of notification shapes the relay understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Alarm,
    AutoscalingActivity,
    CacheSnapshot,
    DatabaseNotification,
    Unclassified,
}

impl EventKind {
    /// Event source category used for icon and label lookups
    pub fn source(&self) -> &'static str {
        match self {
            EventKind::Alarm => "cloudwatch",
            EventKind::AutoscalingActivity => "autoscaling",
            EventKind::CacheSnapshot => "elasticache",
            EventKind::DatabaseNotification => "rds",
            EventKind::Unclassified => "other",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Alarm => "alarm",
            EventKind::AutoscalingActivity => "autoscaling_activity",
            EventKind::CacheSnapshot => "cache_snapshot",
            EventKind::DatabaseNotification => "database_notification",
            EventKind::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type ShapeCheck = fn(&Value, Option<&str>) -> bool;

/// Checked in order, first match wins. A body carrying both `AlarmName` and
/// `Cause` is an alarm.
const SHAPE_CHECKS: &[(ShapeCheck, EventKind)] = &[
    (is_alarm, EventKind::Alarm),
    (is_autoscaling_activity, EventKind::AutoscalingActivity),
    (is_cache_snapshot, EventKind::CacheSnapshot),
    (is_database_notification, EventKind::DatabaseNotification),
];

fn is_alarm(body: &Value, _subject: Option<&str>) -> bool {
    has_key(body, "AlarmName")
}

fn is_autoscaling_activity(body: &Value, _subject: Option<&str>) -> bool {
    has_key(body, "Cause")
}

fn is_cache_snapshot(body: &Value, _subject: Option<&str>) -> bool {
    has_key(body, "ElastiCache:SnapshotComplete")
}

fn is_database_notification(_body: &Value, subject: Option<&str>) -> bool {
    subject.is_some_and(|s| s.starts_with("RDS"))
}

fn has_key(body: &Value, key: &str) -> bool {
    body.as_object().is_some_and(|obj| obj.contains_key(key))
}

/// Classify a message body. Never fails.
pub fn classify(body: &Value, subject: Option<&str>) -> EventKind {
    SHAPE_CHECKS
        .iter()
        .find(|(check, _)| check(body, subject))
        .map(|(_, kind)| *kind)
        .unwrap_or(EventKind::Unclassified)
}

/// CloudWatch alarm state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    Ok,
    InsufficientData,
    Alarm,
}

impl AlarmState {
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "OK" => Ok(AlarmState::Ok),
            "INSUFFICIENT_DATA" => Ok(AlarmState::InsufficientData),
            "ALARM" => Ok(AlarmState::Alarm),
            other => Err(Error::UnknownState(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlarmState::Ok => "OK",
            AlarmState::InsufficientData => "INSUFFICIENT_DATA",
            AlarmState::Alarm => "ALARM",
        }
    }

    /// Blockquote class used by the Webex renderer
    pub fn color_class(&self) -> &'static str {
        match self {
            AlarmState::Ok => "primary",
            AlarmState::InsufficientData => "warning",
            AlarmState::Alarm => "danger",
        }
    }

    /// Lowercased state, as used for icon lookups
    pub fn condition(&self) -> &'static str {
        match self {
            AlarmState::Ok => "ok",
            AlarmState::InsufficientData => "insufficient_data",
            AlarmState::Alarm => "alarm",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlarmEvent {
    pub name: String,
    /// `AlarmDescription` is always sent but is often null
    pub description: Option<String>,
    pub new_state: AlarmState,
    pub old_state: String,
    pub reason: String,
    pub namespace: String,
    pub metric_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScalingActivity {
    pub event: String,
    pub cause: String,
    /// e.g. "capacity from 1 to 0"
    pub transition: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CacheSnapshot {
    pub name: &'static str,
    pub reason: &'static str,
}

impl Default for CacheSnapshot {
    fn default() -> Self {
        Self {
            name: "ElastiCache Snapshot",
            reason: "Snapshot Complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseEvent {
    pub source: String,
    pub message: String,
    pub identifier: IdentifierLink,
}

/// A classified notification with its extracted fields
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Alarm(AlarmEvent),
    AutoscalingActivity(ScalingActivity),
    CacheSnapshot(CacheSnapshot),
    DatabaseNotification(DatabaseEvent),
    Unclassified,
}

impl Notification {
    /// Classify the envelope body and extract its fields
    pub fn from_envelope(envelope: &Envelope) -> Result<Self> {
        let kind = classify(&envelope.body, envelope.subject.as_deref());
        Self::extract(kind, &envelope.body)
    }

    /// Extract the fields required by `kind` from `body`
    pub fn extract(kind: EventKind, body: &Value) -> Result<Self> {
        match kind {
            EventKind::Alarm => Ok(Notification::Alarm(AlarmEvent {
                name: str_field(body, "AlarmName")?.to_string(),
                description: nullable_str_field(body, "AlarmDescription")?,
                new_state: AlarmState::parse(str_field(body, "NewStateValue")?)?,
                old_state: str_field(body, "OldStateValue")?.to_string(),
                reason: str_field(body, "NewStateReason")?.to_string(),
                namespace: nested_str_field(body, "Trigger", "Namespace")?.to_string(),
                metric_name: nested_str_field(body, "Trigger", "MetricName")?.to_string(),
            })),
            EventKind::AutoscalingActivity => {
                let cause = str_field(body, "Cause")?;
                Ok(Notification::AutoscalingActivity(ScalingActivity {
                    event: str_field(body, "Event")?.to_string(),
                    transition: capacity_change(cause),
                    cause: cause.to_string(),
                }))
            }
            EventKind::CacheSnapshot => Ok(Notification::CacheSnapshot(CacheSnapshot::default())),
            EventKind::DatabaseNotification => {
                let identifier = IdentifierLink::parse(str_field(body, "Identifier Link")?)?;
                Ok(Notification::DatabaseNotification(DatabaseEvent {
                    source: str_field(body, "Event Source")?.to_string(),
                    message: str_field(body, "Event Message")?.to_string(),
                    identifier,
                }))
            }
            EventKind::Unclassified => Ok(Notification::Unclassified),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Notification::Alarm(_) => EventKind::Alarm,
            Notification::AutoscalingActivity(_) => EventKind::AutoscalingActivity,
            Notification::CacheSnapshot(_) => EventKind::CacheSnapshot,
            Notification::DatabaseNotification(_) => EventKind::DatabaseNotification,
            Notification::Unclassified => EventKind::Unclassified,
        }
    }

    /// Lowercased condition for icon lookup
    pub fn condition(&self) -> &'static str {
        match self {
            Notification::Alarm(alarm) => alarm.new_state.condition(),
            _ => DEFAULT_CONDITION,
        }
    }
}

/// Find the "capacity from X to Y" phrase in an AutoScaling cause
pub fn capacity_change(cause: &str) -> Option<String> {
    CAPACITY_CHANGE_REGEX
        .find(cause)
        .map(|m| m.as_str().to_string())
}

fn str_field<'a>(body: &'a Value, key: &str) -> Result<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::missing(key))
}

fn nullable_str_field(body: &Value, key: &str) -> Result<Option<String>> {
    match body.get(key) {
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        _ => Err(Error::missing(key)),
    }
}

fn nested_str_field<'a>(body: &'a Value, parent: &str, key: &str) -> Result<&'a str> {
    body.get(parent)
        .and_then(|p| p.get(key))
        .and_then(Value::as_str)
        .ok_or_else(|| Error::missing(format!("{}.{}", parent, key)))
}
