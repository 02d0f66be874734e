//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Secrets (API key, webhook URL) are referenced by env-var name in
//! the config and resolved once at startup via `std::env::var` —
//! absence of either is fatal before the scan loop starts.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub agent: AgentConfig,
    pub provider: ProviderConfig,
    pub alerts: AlertsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    /// Fixed period slept between the end of one cycle and the start
    /// of the next.
    pub scan_interval_secs: u64,
    /// Ordered, immutable for the process lifetime. Order defines scan
    /// order and the extremal-selection tie-break.
    pub watchlist: Vec<String>,
    pub exchange: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    pub api_key_env: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AlertsConfig {
    pub webhook_url_env: String,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.agent.watchlist.is_empty() {
            bail!("watchlist must not be empty");
        }
        Ok(())
    }

    /// Resolve an environment variable name to its value.
    /// Useful for loading secrets referenced in the config.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}

/// Secrets resolved once at startup and immutable for the process
/// lifetime.
#[derive(Debug)]
pub struct Secrets {
    pub api_key: String,
    pub webhook_url: String,
}

impl Secrets {
    pub fn resolve(cfg: &AppConfig) -> Result<Self> {
        Ok(Self {
            api_key: AppConfig::resolve_env(&cfg.provider.api_key_env)?,
            webhook_url: AppConfig::resolve_env(&cfg.alerts.webhook_url_env)?,
        })
    }
}
