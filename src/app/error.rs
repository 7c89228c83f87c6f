//! Error taxonomy for the insights pipeline.

#![warn(clippy::all, rust_2018_idioms)]

use std::path::PathBuf;
use thiserror::Error;

/// Boxed underlying failure carried by [`InsightsError::Transport`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, InsightsError>;

#[derive(Error, Debug)]
pub enum InsightsError {
    /// The log group has no streams at all
    #[error("no log streams found for the given log group identifier: {log_group}")]
    NotFound { log_group: String },

    /// The stream exists but the fetched window holds no events
    #[error("unable to pull any events from the log {log_group}/{log_stream}")]
    EmptyResult {
        log_group: String,
        log_stream: String,
    },

    /// The model answered with something other than `{ "content": [ ... ] }`
    #[error("malformed model response: {reason}")]
    MalformedResponse { reason: String },

    /// Any SDK, network or service failure, passed through untouched
    #[error("{operation} request failed")]
    Transport {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to load config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl InsightsError {
    pub fn transport<E>(operation: &'static str, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport {
            operation,
            source: source.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Short machine-friendly name of the error kind, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::EmptyResult { .. } => "empty_result",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::Transport { .. } => "transport",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Config { .. } => "config",
        }
    }
}
