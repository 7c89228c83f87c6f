//! Locates the most recently active stream of a log group.

#![warn(clippy::all, rust_2018_idioms)]

use crate::app::error::{InsightsError, Result};

use super::client::LogSource;
use super::types::{LogGroupIdentifier, LogStream};

/// Only the newest stream is ever analysed
const STREAM_LOOKUP_LIMIT: i32 = 1;

/// Find the name of the stream with the most recent event in `log_group`.
pub async fn find_most_recent_stream(
    source: &dyn LogSource,
    log_group: &LogGroupIdentifier,
) -> Result<String> {
    let streams = source
        .describe_latest_streams(log_group, STREAM_LOOKUP_LIMIT)
        .await?;

    trace_debug!("{} returned {} stream(s)", log_group, streams.len());

    pick_most_recent(streams)
        .map(|stream| stream.name)
        .ok_or_else(|| InsightsError::NotFound {
            log_group: log_group.to_string(),
        })
}

/// The stream with the greatest last-event timestamp.
///
/// Streams that never received an event rank lowest; on a tie the stream
/// listed first wins, so the service's own ordering is respected.
pub fn pick_most_recent(streams: Vec<LogStream>) -> Option<LogStream> {
    streams.into_iter().reduce(|best, candidate| {
        if candidate.last_event_timestamp > best.last_event_timestamp {
            candidate
        } else {
            best
        }
    })
}
