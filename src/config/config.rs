// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the food REST API (e.g., "http://localhost:3333")
    pub api_base_url: String,

    /// Optional bearer token for the food API
    pub api_key: Option<String>,

    /// Per-request timeout in seconds; the HTTP client's default when unset
    pub request_timeout_secs: Option<u64>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit logs as JSON lines instead of the human-readable format
    pub log_json: bool,
}

impl Config {
    /// Load configuration from TOML file with environment variable overrides
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`], reading variables through `var` instead of
    /// the process environment.
    pub fn load_with<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = var("FOODS_CONFIG").unwrap_or_else(|| "config.toml".to_string());

        let mut config: Config = if Path::new(&config_path).exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str(&contents)?
        } else {
            Config::default()
        };

        if let Some(val) = var("FOODS_API_URL") {
            config.api_base_url = val;
        }
        if let Some(val) = var("FOODS_API_KEY") {
            config.api_key = Some(val);
        }
        if let Some(val) = var("FOODS_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = Some(val.parse()?);
        }
        if let Some(val) = var("FOODS_LOG_LEVEL") {
            config.log_level = val;
        }
        if let Some(val) = var("FOODS_LOG_JSON") {
            config.log_json = val.parse()?;
        }

        crate::utils::validate_base_url(&config.api_base_url)?;

        Ok(config)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from("http://localhost:3333"),
            api_key: None,
            request_timeout_secs: None,
            log_level: String::from("info"),
            log_json: false,
        }
    }
}
