//! Command line surface: `about` and `inspect`.

#![warn(clippy::all, rust_2018_idioms)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::io::Write;

use crate::app::bedrock_client::BedrockApiClient;
use crate::app::config::AppConfig;
use crate::app::data_plane::cloudwatch_logs::{CloudWatchLogsClient, LogGroupIdentifier};
use crate::app::insights::InsightsPipeline;

pub const ABOUT_TEXT: &str = "insights for cloudwatch logs with gen ai";

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("CWAI_GIT_COMMIT"),
    ")"
);

#[derive(Parser, Debug, Clone)]
#[command(name = "cwai", version, long_version = LONG_VERSION, about = ABOUT_TEXT, long_about = None)]
pub struct Cli {
    /// AWS region to use instead of the ambient configuration
    #[arg(long, global = true, value_name = "REGION")]
    pub region: Option<String>,

    /// Named AWS profile to use instead of the ambient configuration
    #[arg(long, global = true, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Write debug level diagnostics to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print what cwai does
    About,
    /// Summarize the most recent stream of a log group
    Inspect {
        /// Log group name or ARN
        #[arg(value_name = "LOG_GROUP_ID", value_parser = LogGroupIdentifier::parse)]
        log_group: LogGroupIdentifier,
    },
}

impl Cli {
    pub fn app_config(&self, base: AppConfig) -> AppConfig {
        base.with_overrides(self.region.clone(), self.profile.clone())
    }
}

pub fn run_about<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", ABOUT_TEXT)?;
    Ok(())
}

/// Run the pipeline for `log_group` and print the notice and the analysis.
pub async fn run_inspect<W: Write>(
    pipeline: &InsightsPipeline<'_>,
    log_group: &LogGroupIdentifier,
    out: &mut W,
) -> Result<()> {
    let stream = pipeline.locate(log_group).await?;

    let notice = format!("Identified log: {}/{}", log_group, stream);
    writeln!(out, "{}\n", style(notice).magenta().bold())?;
    out.flush()?;

    let analysis = pipeline.analyze(log_group, &stream).await?;
    writeln!(out, "{}", analysis)?;
    Ok(())
}

/// Execute `command` against real AWS clients built from `config`.
pub async fn execute<W: Write>(command: &Command, config: &AppConfig, out: &mut W) -> Result<()> {
    match command {
        Command::About => run_about(out),
        Command::Inspect { log_group } => {
            trace_info!("Inspecting log group {}", log_group);

            let aws_config = config.load_aws_config().await;
            let logs = CloudWatchLogsClient::from_conf(&aws_config);
            let model = BedrockApiClient::from_conf(&aws_config);
            let pipeline = InsightsPipeline::new(&logs, &model);

            run_inspect(&pipeline, log_group, out)
                .await
                .with_context(|| format!("inspect {} failed", log_group))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_about() {
        let cli = Cli::try_parse_from(["cwai", "about"]).unwrap();
        assert_eq!(cli.command, Command::About);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_inspect_with_global_flags() {
        let cli = Cli::try_parse_from([
            "cwai",
            "inspect",
            "/aws/lambda/fn",
            "--region",
            "eu-west-1",
            "-v",
        ])
        .unwrap();

        match &cli.command {
            Command::Inspect { log_group } => assert_eq!(log_group.as_str(), "/aws/lambda/fn"),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_inspect_requires_log_group() {
        assert!(Cli::try_parse_from(["cwai", "inspect"]).is_err());
    }

    #[test]
    fn test_parse_inspect_rejects_blank_log_group() {
        assert!(Cli::try_parse_from(["cwai", "inspect", "  "]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from(["cwai", "--profile", "ops", "about"]).unwrap();
        let config = cli.app_config(AppConfig {
            region: Some("us-west-2".to_string()),
            profile: Some("default".to_string()),
            log_filter: None,
        });

        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert_eq!(config.profile.as_deref(), Some("ops"));
    }

    #[test]
    fn test_run_about() {
        let mut out = Vec::new();
        run_about(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "insights for cloudwatch logs with gen ai\n"
        );
    }
}
