// src/core/config_manager.rs
//! Client configuration: optional jobboard.yaml per environment, then env overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILE: &str = "jobboard.yaml";
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_PATH: &str = "/tmp/jobboard.log";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub api_url: String,
    /// Per-request timeout. Unset means requests never time out.
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub log_path: PathBuf,
    pub filter: String,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: FileSection,
    #[serde(default)]
    production: FileSection,
}

#[derive(Debug, Default, Deserialize)]
struct FileSection {
    api_url: Option<String>,
    timeout_seconds: Option<u64>,
    log_path: Option<PathBuf>,
    log_filter: Option<String>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            service: ServiceConfig {
                api_url: DEFAULT_API_URL.to_string(),
                timeout_seconds: None,
            },
            logging: LoggingConfig {
                log_path: PathBuf::from(DEFAULT_LOG_PATH),
                filter: DEFAULT_LOG_FILTER.to_string(),
            },
        }
    }
}

impl ConfigManager {
    /// Load configuration from `jobboard.yaml` in the working directory, if present,
    /// and the process environment.
    pub fn load() -> Result<Self> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        let mut config = Self::load_from(Path::new(CONFIG_FILE), &environment)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults overlaid with the section of `path` matching `environment`.
    /// A missing file is not an error.
    pub fn load_from(path: &Path, environment: &str) -> Result<Self> {
        let mut config = Self {
            environment: environment.to_string(),
            ..Self::default()
        };

        if !path.exists() {
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        config.apply_file(&content)?;
        info!(
            "Loaded configuration for environment {} from {}",
            environment,
            path.display()
        );
        Ok(config)
    }

    fn apply_file(&mut self, content: &str) -> Result<()> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse configuration file")?;

        let section = match self.environment.as_str() {
            "production" => file.production,
            _ => file.local,
        };

        if let Some(api_url) = section.api_url {
            self.service.api_url = api_url;
        }
        if section.timeout_seconds.is_some() {
            self.service.timeout_seconds = section.timeout_seconds;
        }
        if let Some(log_path) = section.log_path {
            self.logging.log_path = log_path;
        }
        if let Some(filter) = section.log_filter {
            self.logging.filter = filter;
        }
        Ok(())
    }

    /// Apply `JOBBOARD_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup("JOBBOARD_API_URL") {
            self.service.api_url = api_url;
        }
        if let Some(log_path) = lookup("JOBBOARD_LOG_PATH") {
            self.logging.log_path = PathBuf::from(log_path);
        }
        if let Some(filter) = lookup("JOBBOARD_LOG") {
            self.logging.filter = filter;
        }
        if let Some(secs) = lookup("JOBBOARD_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("JOBBOARD_TIMEOUT_SECS must be a number of seconds"))?;
            self.service.timeout_seconds = Some(secs);
        }
        Ok(())
    }
}
