//! Core application modules for cwai.
//!
//! # Module Organization
//!
//! ## AWS Integration
//! - [`data_plane`] - CloudWatch Logs stream lookup and event retrieval
//! - [`bedrock_client`] - Bedrock request payloads, model invocation and response parsing
//!
//! ## Pipeline and Commands
//! - [`insights`] - the locate → fetch → prompt → invoke → extract pipeline
//! - [`cli`] - command line definition and command execution
//!
//! ## Infrastructure
//! - [`config`] - optional config file plus command line overrides
//! - [`error`] - the error taxonomy shared by every stage

pub mod bedrock_client;
pub mod cli;
pub mod config;
pub mod data_plane;
pub mod error;
pub mod insights;
