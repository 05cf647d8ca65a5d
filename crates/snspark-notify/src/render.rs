//! Webex message rendering
//!
//! Each notification kind has its own renderer. Every renderer produces a
//! small HTML block which is then flattened to a single line.

use crate::event::{AlarmEvent, CacheSnapshot, DatabaseEvent, Notification, ScalingActivity};
use crate::presentation::Presentation;

/// Shown where a value is legitimately absent
const NOT_AVAILABLE: &str = "N/A";

/// Render a notification into a single-line Webex markdown message
///
/// Unclassified notifications render to an empty string.
pub fn render(notification: &Notification, presentation: &Presentation<'_>) -> String {
    let lines = match notification {
        Notification::Alarm(alarm) => alarm_lines(alarm, presentation),
        Notification::AutoscalingActivity(activity) => scaling_lines(activity, presentation),
        Notification::CacheSnapshot(snapshot) => snapshot_lines(snapshot, presentation),
        Notification::DatabaseNotification(db) => database_lines(db, presentation),
        Notification::Unclassified => return String::new(),
    };
    flatten(&lines.join("\n"))
}

/// Newlines become spaces, carriage returns are dropped
pub fn flatten(text: &str) -> String {
    text.replace('\n', " ").replace('\r', "")
}

fn header(presentation: &Presentation<'_>, color_class: &str) -> Vec<String> {
    vec![
        format!("<h2>{} {}</h2>", presentation.icon, presentation.label),
        "<hr/>".to_string(),
        format!("<blockquote class=\"{}\">", color_class),
    ]
}

fn item(label: &str, value: &str) -> String {
    format!("<li><b>{}</b> {}</li>", label, value)
}

fn alarm_lines(alarm: &AlarmEvent, presentation: &Presentation<'_>) -> Vec<String> {
    let state = alarm.new_state.as_str();
    let mut lines = header(presentation, alarm.new_state.color_class());
    lines.extend([
        item("Name:", &alarm.name),
        item("Description:", alarm.description.as_deref().unwrap_or(NOT_AVAILABLE)),
        item("Status:", state),
        item("Trigger:", &alarm.reason),
        item("Transition:", &format!("'{}' --> {}", alarm.old_state, state)),
        item(
            "Namespace:",
            &format!("{} - {}", alarm.namespace, alarm.metric_name),
        ),
        "</blockquote>".to_string(),
    ]);
    lines
}

/// Name / Status / Reason block shared by the non-alarm kinds
fn summary_lines(
    presentation: &Presentation<'_>,
    name: &str,
    status: Option<&str>,
    reason: &str,
) -> Vec<String> {
    let mut lines = header(presentation, "primary");
    lines.push(item("Name", name));
    if let Some(status) = status {
        lines.push(item("Status", status));
    }
    lines.push(item("Reason", reason));
    lines.push("</blockquote>".to_string());
    lines
}

fn scaling_lines(activity: &ScalingActivity, presentation: &Presentation<'_>) -> Vec<String> {
    summary_lines(
        presentation,
        &activity.event,
        activity.transition.as_deref(),
        &activity.cause,
    )
}

fn snapshot_lines(snapshot: &CacheSnapshot, presentation: &Presentation<'_>) -> Vec<String> {
    summary_lines(presentation, snapshot.name, None, snapshot.reason)
}

fn database_lines(db: &DatabaseEvent, presentation: &Presentation<'_>) -> Vec<String> {
    let name = format!(
        "<a href=\"{}\">{} '{}'</a>",
        db.identifier.link, db.source, db.identifier.title
    );
    summary_lines(presentation, &name, Some(NOT_AVAILABLE), &db.message)
}
