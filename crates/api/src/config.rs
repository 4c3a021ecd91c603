//! Client configuration
//!
//! Use the builder pattern to configure a client:
//!
//! ```
//! use tensorwire_api::ClientConfig;
//!
//! let config = ClientConfig::new()
//!     .base_url("http://localhost:8787")
//!     .timeout_ms(5_000);
//! assert_eq!(config.run_path, "/run");
//! ```
//!
//! The same settings load from JSON (missing keys take their defaults) or
//! from `TENSORWIRE_*` environment variables.

use crate::error::{DispatchError, DispatchResult};
use serde::{Deserialize, Serialize};

/// Relative path inference requests are posted to
pub const DEFAULT_RUN_PATH: &str = "/run";

/// Environment variable holding the base URL
pub const ENV_BASE_URL: &str = "TENSORWIRE_BASE_URL";
/// Environment variable holding the run path
pub const ENV_RUN_PATH: &str = "TENSORWIRE_RUN_PATH";
/// Environment variable holding the timeout in milliseconds
pub const ENV_TIMEOUT_MS: &str = "TENSORWIRE_TIMEOUT_MS";

/// Settings for an inference client and its transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Path requests are posted to
    pub run_path: String,
    /// Base URL of the inference service, used by network transports
    pub base_url: Option<String>,
    /// Per-call timeout in milliseconds, used by network transports
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the run path
    pub fn run_path(mut self, path: impl Into<String>) -> Self {
        self.run_path = path.into();
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the timeout
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout_ms = Some(ms);
        self
    }

    /// Load from JSON text
    pub fn from_json(text: &str) -> DispatchResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| DispatchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `TENSORWIRE_*` environment variables
    pub fn from_env() -> DispatchResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DispatchResult<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = Some(url);
        }
        if let Some(path) = lookup(ENV_RUN_PATH) {
            config.run_path = path;
        }
        if let Some(ms) = lookup(ENV_TIMEOUT_MS) {
            let ms = ms.parse::<u64>().map_err(|e| {
                DispatchError::Config(format!("{}={:?}: {}", ENV_TIMEOUT_MS, ms, e))
            })?;
            config.timeout_ms = Some(ms);
        }
        config.validate()?;
        Ok(config)
    }

    /// Check that the run path is absolute
    pub fn validate(&self) -> DispatchResult<()> {
        if !self.run_path.starts_with('/') {
            return Err(DispatchError::Config(format!(
                "run path must start with '/': {:?}",
                self.run_path
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            run_path: DEFAULT_RUN_PATH.to_string(),
            base_url: None,
            timeout_ms: None,
        }
    }
}
