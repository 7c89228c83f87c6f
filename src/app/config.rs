//! Configuration: an optional `config.toml` in the platform config directory,
//! overridden per invocation by command line flags.
//!
//! ```toml
//! region = "eu-west-1"
//! profile = "observability"
//! log_filter = "cwai=debug"
//! ```

#![warn(clippy::all, rust_2018_idioms)]

use aws_config::BehaviorVersion;
use aws_types::region::Region;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::app::error::{InsightsError, Result};

pub const APP_NAME: &str = "cwai";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Filter used when neither `CWAI_LOG` nor the config file names one
pub const DEFAULT_LOG_FILTER: &str =
    "cwai=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,aws_smithy_runtime_api=warn,hyper=warn";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// AWS region; falls back to the ambient provider chain
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
    /// tracing filter directives for the log file
    pub log_filter: Option<String>,
}

impl AppConfig {
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "", APP_NAME)
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| InsightsError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| InsightsError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load the file from the platform config directory, if there is one
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_optional(path),
            None => Ok(Self::default()),
        }
    }

    /// Command line values win over file values
    pub fn with_overrides(mut self, region: Option<String>, profile: Option<String>) -> Self {
        if region.is_some() {
            self.region = region;
        }
        if profile.is_some() {
            self.profile = profile;
        }
        self
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Resolve the shared SDK configuration from the ambient provider chain
    pub async fn load_aws_config(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &self.region {
            trace_debug!("Using region override: {}", region);
            loader = loader.region(Region::new(region.clone()));
        }

        if let Some(profile) = &self.profile {
            trace_debug!("Using profile override: {}", profile);
            loader = loader.profile_name(profile);
        }

        loader.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.region.is_none());
        assert!(config.profile.is_none());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "region = \"eu-west-1\"\nlog_filter = \"cwai=debug\"").unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert!(config.profile.is_none());
        assert_eq!(config.log_filter(), "cwai=debug");
    }

    #[test]
    fn test_load_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(
            AppConfig::load_from_file(file.path()).unwrap(),
            AppConfig::default()
        );
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "regoin = \"typo\"").unwrap();

        let err = AppConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, InsightsError::Config { .. }));
    }

    #[test]
    fn test_load_optional_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_optional(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig {
            region: Some("us-east-1".to_string()),
            profile: Some("file-profile".to_string()),
            log_filter: None,
        }
        .with_overrides(Some("ap-southeast-2".to_string()), None);

        assert_eq!(config.region.as_deref(), Some("ap-southeast-2"));
        assert_eq!(config.profile.as_deref(), Some("file-profile"));
    }
}
