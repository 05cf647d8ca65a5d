//! Terminal output formatting

use colored::Colorize;
use serde::Serialize;
use snspark_notify::{Dispatch, Translation};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

/// JSON-friendly view of one relayed notification
#[derive(Serialize)]
pub struct TranslationJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub kind: String,
    pub topic: &'a str,
    pub payload: &'a snspark_notify::SparkMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl<'a> TranslationJson<'a> {
    pub fn new(
        name: Option<&'a str>,
        translation: &'a Translation,
        dispatch: Option<Dispatch>,
    ) -> Self {
        Self {
            name,
            kind: translation.kind.to_string(),
            topic: translation.topic.topic_name(),
            payload: &translation.message,
            status: match dispatch {
                Some(Dispatch::Sent(status)) => Some(status),
                _ => None,
            },
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Human-readable rendering of a translated notification
pub fn print_translation(translation: &Translation) {
    println!("{} {}", "kind:".bold(), translation.kind);
    println!("{} {}", "topic:".bold(), translation.topic.topic_name());
    let room = if translation.message.room_id.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        translation.message.room_id.clone()
    };
    println!("{} {}", "room:".bold(), room);
    if translation.message.markdown.is_empty() {
        println!("{} {}", "markdown:".bold(), "(empty)".dimmed());
    } else {
        println!("{} {}", "markdown:".bold(), translation.message.markdown);
    }
}

pub fn print_dispatch(name: &str, dispatch: Dispatch) {
    match dispatch {
        Dispatch::Sent(status) => print_success(&format!("{}: {}", name, status)),
        Dispatch::Skipped => print_info(&format!("{}: skipped (nothing to send)", name)),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}
