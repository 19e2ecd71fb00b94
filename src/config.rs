//! Runner configuration.
//!
//! The expected-message policy can be loaded from a TOML file so it can
//! track a platform revision without recompiling. Runtime settings come
//! from `CAPCHECK_*` environment variables; missing or invalid values
//! fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `CAPCHECK_LOG_LEVEL` | info | Log filter directive |
//! | `CAPCHECK_LOG_FORMAT` | json | `json` or `pretty` |
//! | `CAPCHECK_POLICY_PATH` | (none) | TOML policy file path |

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::telemetry::{LogConfig, LogFormat};

/// Default substring for blocked-API messages.
pub const DEFAULT_UNAVAILABLE_MARKER: &str = "is not available in packaged apps";

/// Default exact message for the synchronous network request probe.
pub const DEFAULT_SYNC_XHR_MESSAGE: &str = "INVALID_ACCESS_ERR: DOM Exception 15";

/// Errors loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read policy file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid policy file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Policy field {0} must not be empty")]
    EmptyField(&'static str),
}

/// Expected-message patterns for the probed platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RestrictionPolicy {
    /// Substring every blocked-API message must contain.
    #[serde(default = "default_unavailable_marker")]
    pub unavailable_marker: String,
    /// Exact message for the synchronous XHR rejection.
    #[serde(default = "default_sync_xhr_message")]
    pub sync_xhr_message: String,
}

fn default_unavailable_marker() -> String {
    DEFAULT_UNAVAILABLE_MARKER.to_string()
}

fn default_sync_xhr_message() -> String {
    DEFAULT_SYNC_XHR_MESSAGE.to_string()
}

impl Default for RestrictionPolicy {
    fn default() -> Self {
        Self {
            unavailable_marker: default_unavailable_marker(),
            sync_xhr_message: default_sync_xhr_message(),
        }
    }
}

impl RestrictionPolicy {
    /// Parse a policy from TOML text. Omitted fields take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let policy: Self = toml::from_str(text)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Load a policy from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.unavailable_marker.is_empty() {
            return Err(ConfigError::EmptyField("unavailable_marker"));
        }
        if self.sync_xhr_message.is_empty() {
            return Err(ConfigError::EmptyField("sync_xhr_message"));
        }
        Ok(())
    }
}

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub log: LogConfig,
    pub policy_path: Option<PathBuf>,
}

/// Read a string env var, `None` when unset or empty.
fn read_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => Some(val),
        _ => None,
    }
}

/// Load runner configuration from the environment.
pub fn load() -> EnvConfig {
    let level = read_var("CAPCHECK_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
    let format = match read_var("CAPCHECK_LOG_FORMAT").as_deref() {
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::Json,
    };
    let policy_path = read_var("CAPCHECK_POLICY_PATH").map(PathBuf::from);

    EnvConfig {
        log: LogConfig { format, level },
        policy_path,
    }
}
