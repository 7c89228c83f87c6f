#![warn(clippy::all, rust_2018_idioms)]

/// Tracing macros that prefix every message with its `[file:line]` origin.
/// The log file is the only place diagnostics go; stdout is reserved for
/// command output.
#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}] {}", file!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        tracing::info!("[{}:{}] {}", file!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!("[{}:{}] {}", file!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)*) => {
        tracing::error!("[{}:{}] {}", file!(), line!(), format!($($arg)*));
    };
}

/*
Log level guidelines:

DEBUG: request parameters, SDK client construction, payload sizes
INFO:  one line per pipeline stage (stream found, events fetched, model answered)
WARN:  lenient fallbacks (a response with no text in its first content block)
ERROR: the failure that ends a command, logged once at the command boundary

Example output:
  [src/app/insights.rs:58] Identified log stream 2024/05/01/[$LATEST]abc in /aws/lambda/fn
*/
