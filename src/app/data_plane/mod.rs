//! Data Plane Services Module
//!
//! AWS data plane integrations: services whose data is read, as opposed to
//! resources that are discovered or managed.
//!
//! ## Available Services
//!
//! - **CloudWatch Logs**: newest stream lookup and recent event retrieval

pub mod cloudwatch_logs;

pub use cloudwatch_logs::{CloudWatchLogsClient, LogSource};
