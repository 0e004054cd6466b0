//! Single-line rendering of log events.

use chrono::{DateTime, Local};
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Level};

/// A log event as shown in the live viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Wall-clock time the event was observed.
    pub timestamp: DateTime<Local>,
    /// Event severity.
    pub level: Level,
    /// The event's message.
    pub message: String,
    /// Remaining fields in declaration order.
    pub attributes: Vec<(String, String)>,
}

impl LogRecord {
    /// Creates a record with no attributes.
    #[must_use]
    pub fn new(timestamp: DateTime<Local>, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Captures a `tracing` event observed at `timestamp`.
    #[must_use]
    pub fn from_event(event: &Event<'_>, timestamp: DateTime<Local>) -> Self {
        let mut visitor = FieldCollector::default();
        event.record(&mut visitor);

        Self {
            timestamp,
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            attributes: visitor.fields,
        }
    }

    /// Formats the record as `HH:MM:SS [LEVEL] message key=value ...`.
    #[must_use]
    pub fn to_line(&self) -> String {
        let mut line = format!(
            "{} [{}] {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.message
        );
        for (key, value) in &self.attributes {
            let _ = write!(line, " {key}={value}");
        }
        line
    }
}

#[derive(Default)]
struct FieldCollector {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, value.to_string());
    }
}
