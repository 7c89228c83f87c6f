//! The insights pipeline: locate the newest stream, fetch its events, ask
//! the model, extract the answer.
//!
//! Every stage awaits a single call before the next one starts. Nothing is
//! retried and nothing is cached between runs.

#![warn(clippy::all, rust_2018_idioms)]

use crate::app::bedrock_client::{extract_text, InferenceRequest, ModelInvoker, INSIGHTS_MODEL_ID};
use crate::app::data_plane::cloudwatch_logs::{
    fetch_recent_events, find_most_recent_stream, LogGroupIdentifier, LogSource,
};
use crate::app::error::Result;

/// Pipeline over injected service handles
pub struct InsightsPipeline<'a> {
    logs: &'a dyn LogSource,
    model: &'a dyn ModelInvoker,
    model_id: &'static str,
}

impl<'a> InsightsPipeline<'a> {
    pub fn new(logs: &'a dyn LogSource, model: &'a dyn ModelInvoker) -> Self {
        Self {
            logs,
            model,
            model_id: INSIGHTS_MODEL_ID,
        }
    }

    /// Name of the most recently active stream in `log_group`
    pub async fn locate(&self, log_group: &LogGroupIdentifier) -> Result<String> {
        let stream = find_most_recent_stream(self.logs, log_group).await?;
        trace_info!("Identified log stream {} in {}", stream, log_group);
        Ok(stream)
    }

    /// Fetch the stream's recent events and return the model's analysis
    pub async fn analyze(&self, log_group: &LogGroupIdentifier, log_stream: &str) -> Result<String> {
        let rendered = fetch_recent_events(self.logs, log_group, log_stream).await?;
        trace_info!(
            "Fetched {} line(s) from {}/{}",
            rendered.lines().count(),
            log_group,
            log_stream
        );

        self.summarize(&rendered).await
    }

    /// Build the request for `rendered`, invoke the model and extract its text
    pub async fn summarize(&self, rendered: &str) -> Result<String> {
        let request = InferenceRequest::for_log_text(rendered);
        let body = self
            .model
            .invoke_model(self.model_id, request.to_payload())
            .await?;

        let analysis = extract_text(&body)?;
        trace_info!("Model returned an analysis of {} bytes", analysis.len());
        Ok(analysis)
    }
}
