//! CloudWatch Logs Integration Module
//!
//! Finds the newest stream of a log group and renders its latest events as
//! prompt-ready text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cwai::app::data_plane::cloudwatch_logs::{
//!     fetch_recent_events, find_most_recent_stream, CloudWatchLogsClient, LogGroupIdentifier,
//! };
//!
//! # async fn example(aws_config: aws_config::SdkConfig) -> cwai::Result<()> {
//! let client = CloudWatchLogsClient::from_conf(&aws_config);
//! let group = LogGroupIdentifier::parse("/aws/lambda/my-function")?;
//!
//! let stream = find_most_recent_stream(&client, &group).await?;
//! let text = fetch_recent_events(&client, &group, &stream).await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod client;
pub mod fetcher;
pub mod locator;
pub mod types;

// Re-export commonly used types
pub use client::{CloudWatchLogsClient, LogSource};
pub use fetcher::{fetch_recent_events, render_events};
pub use locator::{find_most_recent_stream, pick_most_recent};
pub use types::{
    LogEvent, LogGroupIdentifier, LogQueryResult, LogStream, QueryOptions, RECENT_EVENT_LIMIT,
};
