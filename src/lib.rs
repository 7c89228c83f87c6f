//! cwai - CloudWatch Logs insights with generative AI
//!
//! cwai locates the most recently active stream in a CloudWatch log group,
//! pulls its latest events and asks a Bedrock-hosted model for a plain-text
//! summary of what happened.
//!
//! # Architecture Overview
//!
//! The crate is a short sequential pipeline:
//!
//! - **Data plane** ([`app::data_plane::cloudwatch_logs`]): stream lookup and
//!   event retrieval behind the [`app::data_plane::cloudwatch_logs::LogSource`] trait
//! - **Model invocation** ([`app::bedrock_client`]): request building, the
//!   [`app::bedrock_client::ModelInvoker`] trait and response extraction
//! - **Pipeline** ([`app::insights`]): composes both halves over injected clients
//! - **Command surface** ([`app::cli`]): the `about` and `inspect` commands
//!
//! Service handles are always passed in, never constructed globally, so every
//! stage can be exercised with in-memory fakes.
//!
//! # Getting Started
//!
//! ```text
//! cwai inspect /aws/lambda/my-function
//! cwai --region eu-west-1 inspect arn:aws:logs:eu-west-1:123456789012:log-group:/ecs/api
//! ```

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;

pub use app::error::{InsightsError, Result};
