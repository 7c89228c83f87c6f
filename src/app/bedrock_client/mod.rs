//! Bedrock model invocation: request building, the invoke call and
//! response extraction, kept as three separate steps.

pub mod client;
pub mod request;
pub mod response;

pub use client::{BedrockApiClient, ModelInvoker, INSIGHTS_MODEL_ID};
pub use request::{ChatMessage, InferenceRequest};
pub use response::{extract_text, MessagesResponse};
