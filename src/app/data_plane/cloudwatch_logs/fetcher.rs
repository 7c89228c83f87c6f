//! Pulls the latest events of a stream and renders them for the prompt.

#![warn(clippy::all, rust_2018_idioms)]

use crate::app::error::{InsightsError, Result};

use super::client::LogSource;
use super::types::{LogEvent, LogGroupIdentifier, QueryOptions, RECENT_EVENT_LIMIT};

/// Fetch up to [`RECENT_EVENT_LIMIT`] of the newest events in `log_stream`
/// and render them as newline separated `[timestamp] message` lines.
///
/// Only the first page is read. Lines keep the order the service returned.
pub async fn fetch_recent_events(
    source: &dyn LogSource,
    log_group: &LogGroupIdentifier,
    log_stream: &str,
) -> Result<String> {
    let options = QueryOptions::new()
        .with_limit(RECENT_EVENT_LIMIT)
        .with_start_from_head(false);

    let result = source.get_log_events(log_group, log_stream, options).await?;

    if result.events.is_empty() {
        return Err(InsightsError::EmptyResult {
            log_group: log_group.to_string(),
            log_stream: log_stream.to_string(),
        });
    }

    if result.next_token.is_some() {
        trace_debug!("Ignoring further pages of {}/{}", log_group, log_stream);
    }

    Ok(render_events(&result.events))
}

pub fn render_events(events: &[LogEvent]) -> String {
    events
        .iter()
        .map(LogEvent::render)
        .collect::<Vec<_>>()
        .join("\n")
}
