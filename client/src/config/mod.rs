//! Configuration for the API client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FP__)
//!
//! The base origin is resolved once per client instantiation, not per-call.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Fallback origin used when no API base is configured (local development)
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base origin of the backend API (scheme + host + port).
    /// Falls back to [`DEFAULT_API_BASE`] when unset or empty.
    #[serde(default)]
    pub api_base: Option<String>,
}

impl ClientConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FP__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{env}.toml");

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&ClientConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FP__ prefix)
            // e.g., FP__API_BASE=https://api.example.com
            .add_source(config::Environment::with_prefix("FP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Resolve the base origin, falling back to the local default.
    ///
    /// The fallback is logged so a missing `api_base` in a deployed
    /// environment is observable rather than silent. A trailing slash is
    /// trimmed so paths can be appended directly.
    pub fn resolved_api_base(&self) -> String {
        match self.api_base.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
            _ => {
                warn!(
                    default = DEFAULT_API_BASE,
                    "api_base not configured, falling back to local default"
                );
                DEFAULT_API_BASE.to_string()
            }
        }
    }
}
