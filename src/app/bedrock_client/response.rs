//! Response parsing for the Anthropic messages schema on Bedrock.

#![warn(clippy::all, rust_2018_idioms)]

use serde::Deserialize;

use crate::app::error::{InsightsError, Result};

/// The parts of an `InvokeModel` response body that cwai reads
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

impl MessagesResponse {
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| InsightsError::malformed(e.to_string()))
    }
}

/// Pull the generated text out of a raw response body.
///
/// A first content block without `text` yields an empty string rather than
/// an error. Bodies that are not JSON, lack `content`, or carry an empty
/// `content` list are [`InsightsError::MalformedResponse`].
pub fn extract_text(body: &[u8]) -> Result<String> {
    let response = MessagesResponse::parse(body)?;

    if let Some(usage) = response.usage {
        trace_debug!(
            "Model usage: input_tokens={} output_tokens={} stop_reason={:?}",
            usage.input_tokens,
            usage.output_tokens,
            response.stop_reason
        );
    }

    let first = response
        .content
        .into_iter()
        .next()
        .ok_or_else(|| InsightsError::malformed("response contained no content blocks"))?;

    match first.text {
        Some(text) => Ok(text),
        None => {
            trace_warn!("First content block has no text, returning an empty analysis");
            Ok(String::new())
        }
    }
}
