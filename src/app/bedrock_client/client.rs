//! Bedrock runtime client used for model invocation.

#![warn(clippy::all, rust_2018_idioms)]

use async_trait::async_trait;
use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::Client as BedrockRuntimeClient;

use crate::app::error::{InsightsError, Result};

/// The one model cwai talks to
pub const INSIGHTS_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Submits a raw JSON payload to a model and returns the raw response body
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke_model(&self, model_id: &str, payload: Vec<u8>) -> Result<Vec<u8>>;
}

/// Bedrock API client for single-shot model invocation
#[derive(Debug, Clone)]
pub struct BedrockApiClient {
    bedrock_runtime_client: BedrockRuntimeClient,
}

impl BedrockApiClient {
    pub fn new(bedrock_runtime_client: BedrockRuntimeClient) -> Self {
        Self {
            bedrock_runtime_client,
        }
    }

    /// Build the runtime client from a shared AWS config
    pub fn from_conf(aws_config: &aws_config::SdkConfig) -> Self {
        trace_debug!(
            "Creating Bedrock runtime client for region {:?}",
            aws_config.region()
        );
        Self::new(BedrockRuntimeClient::new(aws_config))
    }
}

#[async_trait]
impl ModelInvoker for BedrockApiClient {
    async fn invoke_model(&self, model_id: &str, payload: Vec<u8>) -> Result<Vec<u8>> {
        trace_info!(
            "Invoking model {} with a {} byte payload",
            model_id,
            payload.len()
        );

        let output = self
            .bedrock_runtime_client
            .invoke_model()
            .model_id(model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(payload))
            .send()
            .await
            .map_err(|e| {
                match &e {
                    SdkError::ServiceError(ctx) => {
                        trace_error!(
                            "InvokeModel service error (HTTP {}): {:?}",
                            ctx.raw().status(),
                            ctx.err()
                        );
                    }
                    SdkError::TimeoutError(err) => {
                        trace_error!("InvokeModel timed out: {:?}", err);
                    }
                    SdkError::DispatchFailure(err) => {
                        trace_error!("InvokeModel dispatch failure: {:?}", err);
                    }
                    _ => {
                        trace_error!("InvokeModel failed: {:?}", e);
                    }
                }
                InsightsError::transport("InvokeModel", e)
            })?;

        let body = output.body.into_inner();
        trace_debug!("Model returned {} bytes", body.len());
        Ok(body)
    }
}
