//! CloudWatch Logs Client Wrapper
//!
//! The [`LogSource`] trait is the seam between the pipeline and CloudWatch
//! Logs; [`CloudWatchLogsClient`] is its SDK-backed implementation.

#![warn(clippy::all, rust_2018_idioms)]

use async_trait::async_trait;
use aws_sdk_cloudwatchlogs as cloudwatchlogs;
use aws_sdk_cloudwatchlogs::types::OrderBy;

use crate::app::error::{InsightsError, Result};

use super::types::{LogEvent, LogGroupIdentifier, LogQueryResult, LogStream, QueryOptions};

/// Read access to log streams and their events
#[async_trait]
pub trait LogSource: Send + Sync {
    /// List streams of a group, newest last-event-time first, at most `limit`
    async fn describe_latest_streams(
        &self,
        log_group: &LogGroupIdentifier,
        limit: i32,
    ) -> Result<Vec<LogStream>>;

    /// Fetch one page of events from a stream
    async fn get_log_events(
        &self,
        log_group: &LogGroupIdentifier,
        log_stream: &str,
        options: QueryOptions,
    ) -> Result<LogQueryResult>;
}

/// CloudWatch Logs client wrapper
#[derive(Clone, Debug)]
pub struct CloudWatchLogsClient {
    client: cloudwatchlogs::Client,
}

impl CloudWatchLogsClient {
    /// Wrap an already configured SDK client
    pub fn new(client: cloudwatchlogs::Client) -> Self {
        Self { client }
    }

    /// Build the SDK client from a shared AWS config
    pub fn from_conf(aws_config: &aws_config::SdkConfig) -> Self {
        trace_debug!(
            "Creating CloudWatch Logs client for region {:?}",
            aws_config.region()
        );
        Self::new(cloudwatchlogs::Client::new(aws_config))
    }
}

#[async_trait]
impl LogSource for CloudWatchLogsClient {
    async fn describe_latest_streams(
        &self,
        log_group: &LogGroupIdentifier,
        limit: i32,
    ) -> Result<Vec<LogStream>> {
        trace_debug!(
            "DescribeLogStreams group={} order_by=LastEventTime descending=true limit={}",
            log_group.api_identifier(),
            limit
        );

        let response = self
            .client
            .describe_log_streams()
            .log_group_identifier(log_group.api_identifier())
            .order_by(OrderBy::LastEventTime)
            .descending(true)
            .limit(limit)
            .send()
            .await
            .map_err(|e| InsightsError::transport("DescribeLogStreams", e))?;

        let streams = response
            .log_streams
            .unwrap_or_default()
            .into_iter()
            .filter_map(|stream| {
                stream
                    .log_stream_name
                    .map(|name| LogStream::new(name, stream.last_event_timestamp))
            })
            .collect();

        Ok(streams)
    }

    async fn get_log_events(
        &self,
        log_group: &LogGroupIdentifier,
        log_stream: &str,
        options: QueryOptions,
    ) -> Result<LogQueryResult> {
        trace_debug!(
            "GetLogEvents group={} stream={} options={:?}",
            log_group.api_identifier(),
            log_stream,
            options
        );

        let mut request = self
            .client
            .get_log_events()
            .log_group_identifier(log_group.api_identifier())
            .log_stream_name(log_stream)
            .start_from_head(options.start_from_head);

        if let Some(limit) = options.limit {
            request = request.limit(limit);
        }

        let response = request
            .send()
            .await
            .map_err(|e| InsightsError::transport("GetLogEvents", e))?;

        let events = response
            .events
            .unwrap_or_default()
            .into_iter()
            .map(|event| {
                LogEvent::new(
                    event.timestamp.unwrap_or(0),
                    event.message.unwrap_or_default(),
                )
            })
            .collect();

        Ok(LogQueryResult::new(events, response.next_forward_token))
    }
}
