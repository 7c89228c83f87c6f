#![warn(clippy::all, rust_2018_idioms)]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;

use cwai::app::cli::{self, Cli};
use cwai::app::config::{AppConfig, APP_NAME};

/// Environment variable that replaces the configured tracing filter
const LOG_ENV_VAR: &str = "CWAI_LOG";

fn log_dir() -> Option<PathBuf> {
    AppConfig::project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}

fn init_logging(config: &AppConfig, verbose: bool) {
    let Some(log_dir) = log_dir() else {
        return;
    };
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {:?}: {}", log_dir, e);
        return;
    }

    let log_path = log_dir.join(format!("{}.log", APP_NAME));
    let file = match std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return;
        }
    };

    // Owner read/write only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                eprintln!("[SECURITY] Failed to set log file permissions: {}", e);
            }
        }
    }

    let directives = match std::env::var(LOG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => value,
        _ if verbose => format!("{},cwai=debug", config.log_filter()),
        _ => config.log_filter().to_string(),
    };

    let filter = match tracing_subscriber::EnvFilter::builder().parse(&directives) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Ignoring invalid log filter '{}': {}", directives, e);
            tracing_subscriber::EnvFilter::new(cwai::app::config::DEFAULT_LOG_FILTER)
        }
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false), // No ANSI colors in file
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }

    // Bridge log crate records from dependencies into tracing
    let _ = tracing_log::LogTracer::init();

    tracing::info!("Logging initialized to: {:?} (filter: {})", log_path, directives);
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "cwai crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        eprintln!("\n{}", crash_msg);

        if let Some(log_dir) = log_dir() {
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
                eprintln!("Crash log written to: {:?}", crash_log_path);
            }
        }
    }));
}

fn main() -> anyhow::Result<()> {
    setup_panic_handler();

    let args = Cli::parse();
    let config = args.app_config(AppConfig::load_default()?);

    init_logging(&config, args.verbose);
    tracing::info!("cwai {} starting: {:?}", env!("CARGO_PKG_VERSION"), args.command);

    // Every stage awaits the previous one, a single thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = runtime.block_on(cli::execute(&args.command, &config, &mut out));

    if let Err(e) = &result {
        tracing::error!("Command failed: {:#}", e);
    }
    result
}
