//! CloudWatch Logs Data Types
//!
//! Data structures for stream listings, event queries and their results.

#![warn(clippy::all, rust_2018_idioms)]

use serde::{Deserialize, Serialize};

/// Number of events pulled from a stream for a single analysis
pub const RECENT_EVENT_LIMIT: i32 = 50;

/// A log group identifier as accepted by `logGroupIdentifier`: a name or an ARN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogGroupIdentifier {
    display: String,
    api: String,
}

impl LogGroupIdentifier {
    /// Validate a caller-supplied identifier.
    ///
    /// Blank input is rejected. ARNs copied from `DescribeLogGroups` end in
    /// `:*`, which the service refuses in `logGroupIdentifier`, so one
    /// trailing `:*` is dropped for API calls while [`Self::as_str`] keeps the
    /// caller's spelling.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let display = raw.trim();
        if display.is_empty() {
            return Err(crate::InsightsError::InvalidArgument(
                "log group identifier must not be empty".to_string(),
            ));
        }

        let api = display.strip_suffix(":*").unwrap_or(display);
        if api.is_empty() {
            return Err(crate::InsightsError::InvalidArgument(format!(
                "log group identifier '{}' names no log group",
                display
            )));
        }

        Ok(Self {
            display: display.to_string(),
            api: api.to_string(),
        })
    }

    /// The identifier as the caller wrote it
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// The identifier sent to CloudWatch Logs
    pub fn api_identifier(&self) -> &str {
        &self.api
    }
}

impl std::fmt::Display for LogGroupIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display)
    }
}

/// A log stream as listed by `DescribeLogStreams`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogStream {
    /// Stream name within the group
    pub name: String,
    /// Timestamp of the newest event in the stream (Unix milliseconds)
    pub last_event_timestamp: Option<i64>,
}

impl LogStream {
    pub fn new(name: impl Into<String>, last_event_timestamp: Option<i64>) -> Self {
        Self {
            name: name.into(),
            last_event_timestamp,
        }
    }
}

/// Query options for `GetLogEvents`
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOptions {
    /// Maximum number of events to return
    pub limit: Option<i32>,
    /// Read from the oldest event instead of the newest
    pub start_from_head: bool,
}

impl QueryOptions {
    /// Create new QueryOptions with default values
    pub fn new() -> Self {
        Self {
            limit: Some(RECENT_EVENT_LIMIT),
            start_from_head: false,
        }
    }

    /// Set limit
    pub fn with_limit(mut self, limit: i32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set start from head
    pub fn with_start_from_head(mut self, start_from_head: bool) -> Self {
        self.start_from_head = start_from_head;
        self
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a `GetLogEvents` call (first page only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogQueryResult {
    /// Log events in the order the service returned them
    pub events: Vec<LogEvent>,
    /// Forward token reported by the service; never followed
    pub next_token: Option<String>,
}

impl LogQueryResult {
    pub fn new(events: Vec<LogEvent>, next_token: Option<String>) -> Self {
        Self { events, next_token }
    }
}

/// A single log event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Event timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Log message content
    pub message: String,
}

impl LogEvent {
    pub fn new(timestamp: i64, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// `[timestamp] message`
    pub fn render(&self) -> String {
        format!("[{}] {}", self.timestamp, self.message)
    }
}
