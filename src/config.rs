//! Service configuration parsed from environment variables.

use std::path::PathBuf;

use crate::error::ErrorCode;
use crate::services::manager::{BaselinePolicy, UnknownPolicy};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BOARD_BASELINE_POLICY: {0}")]
    InvalidPolicy(#[from] UnknownPolicy),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPort(_) => "E_CONFIG_PORT",
            Self::InvalidPolicy(_) => "E_CONFIG_POLICY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub baseline_policy: BaselinePolicy,
    pub default_attendant: Option<String>,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BOARD_SEED_PATH`: JSON seed file; built-in demo data when absent
    /// - `BOARD_BASELINE_POLICY`: `snapshot` (default) or `tracking`
    /// - `BOARD_DEFAULT_ATTENDANT`: attendant selected at start-up
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` or `InvalidPolicy` for values that do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let baseline_policy = env_non_empty("BOARD_BASELINE_POLICY")
            .map(|raw| raw.parse::<BaselinePolicy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            port,
            seed_path: env_non_empty("BOARD_SEED_PATH").map(PathBuf::from),
            baseline_policy,
            default_attendant: env_non_empty("BOARD_DEFAULT_ATTENDANT"),
        })
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
