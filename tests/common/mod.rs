//! In-memory stand-ins for CloudWatch Logs and Bedrock.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use cwai::app::bedrock_client::ModelInvoker;
use cwai::app::data_plane::cloudwatch_logs::{
    LogEvent, LogGroupIdentifier, LogQueryResult, LogSource, LogStream, QueryOptions,
};
use cwai::{InsightsError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum LogCall {
    DescribeLogStreams { group: String, limit: i32 },
    GetLogEvents {
        group: String,
        stream: String,
        options: QueryOptions,
    },
}

#[derive(Default)]
pub struct FakeLogSource {
    pub streams: Vec<LogStream>,
    pub events: Vec<LogEvent>,
    pub next_token: Option<String>,
    pub fail_with: Option<&'static str>,
    pub calls: Mutex<Vec<LogCall>>,
}

impl FakeLogSource {
    pub fn with_stream(name: &str, events: Vec<LogEvent>) -> Self {
        Self {
            streams: vec![LogStream::new(name, events.last().map(|e| e.timestamp))],
            events,
            ..Default::default()
        }
    }

    pub fn empty_group() -> Self {
        Self::default()
    }

    pub fn failing(operation: &'static str) -> Self {
        Self {
            fail_with: Some(operation),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<LogCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogSource for FakeLogSource {
    async fn describe_latest_streams(
        &self,
        log_group: &LogGroupIdentifier,
        limit: i32,
    ) -> Result<Vec<LogStream>> {
        self.calls.lock().unwrap().push(LogCall::DescribeLogStreams {
            group: log_group.api_identifier().to_string(),
            limit,
        });
        if self.fail_with == Some("DescribeLogStreams") {
            return Err(InsightsError::transport(
                "DescribeLogStreams",
                "AccessDeniedException: not authorized",
            ));
        }
        Ok(self.streams.clone())
    }

    async fn get_log_events(
        &self,
        log_group: &LogGroupIdentifier,
        log_stream: &str,
        options: QueryOptions,
    ) -> Result<LogQueryResult> {
        self.calls.lock().unwrap().push(LogCall::GetLogEvents {
            group: log_group.api_identifier().to_string(),
            stream: log_stream.to_string(),
            options,
        });
        if self.fail_with == Some("GetLogEvents") {
            return Err(InsightsError::transport(
                "GetLogEvents",
                "ThrottlingException: rate exceeded",
            ));
        }
        Ok(LogQueryResult::new(
            self.events.clone(),
            self.next_token.clone(),
        ))
    }
}

pub struct FakeModel {
    pub response: Vec<u8>,
    pub fail: bool,
    pub requests: Mutex<Vec<(String, Vec<u8>)>>,
}

impl FakeModel {
    pub fn answering(body: &str) -> Self {
        Self {
            response: body.as_bytes().to_vec(),
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self::answering(&serde_json::json!({ "content": [{ "text": text }] }).to_string())
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::answering("")
        }
    }

    pub fn requests(&self) -> Vec<(String, Vec<u8>)> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request body decoded as JSON
    pub fn only_request_json(&self) -> serde_json::Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one model call");
        serde_json::from_slice(&requests[0].1).unwrap()
    }
}

#[async_trait]
impl ModelInvoker for FakeModel {
    async fn invoke_model(&self, model_id: &str, payload: Vec<u8>) -> Result<Vec<u8>> {
        self.requests
            .lock()
            .unwrap()
            .push((model_id.to_string(), payload));
        if self.fail {
            return Err(InsightsError::transport(
                "InvokeModel",
                "ServiceQuotaExceededException",
            ));
        }
        Ok(self.response.clone())
    }
}

pub fn group(raw: &str) -> LogGroupIdentifier {
    LogGroupIdentifier::parse(raw).unwrap()
}
