//! System log entries — append-only records owned by the registry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, now};

/// A unique identifier for a [`LogEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId(uuid::Uuid);

impl Default for LogId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl LogId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// One append-only system log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogId,
    pub message: String,
    pub kind: LogKind,
    pub timestamp: Timestamp,
}

impl LogEntry {
    /// Create an entry stamped with the current time.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            id: LogId::new(),
            message: message.into(),
            kind,
            timestamp: now(),
        }
    }
}
