//! Portal configuration resolved from build-time environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! A CSR bundle has no process environment at runtime, so values are baked in
//! by `option_env!` when Trunk compiles the crate:
//!
//! - `VETCARE_API_BASE`: backend origin, default `http://localhost:8000`
//! - `VETCARE_LOG_LEVEL`: console log level, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::sync::OnceLock;

use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown log level `{0}`")]
    UnknownLogLevel(String),
    #[error("api base must start with http:// or https://, got `{0}`")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_base: String,
    pub log_level: log::Level,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl PortalConfig {
    /// Build config from raw optional values. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the log level is not a `log::Level` name or
    /// the API base is not an http(s) URL.
    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let api_base = match api_base.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => parse_api_base(raw)?,
            None => DEFAULT_API_BASE.to_owned(),
        };
        let log_level = match log_level.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<log::Level>()
                .map_err(|_| ConfigError::UnknownLogLevel(raw.to_owned()))?,
            None => DEFAULT_LOG_LEVEL,
        };
        Ok(Self { api_base, log_level })
    }

    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Same as [`PortalConfig::from_values`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("VETCARE_API_BASE"), option_env!("VETCARE_LOG_LEVEL"))
    }

    /// Process-wide config, falling back to defaults when the build values are invalid.
    pub fn current() -> &'static Self {
        static CONFIG: OnceLock<PortalConfig> = OnceLock::new();
        CONFIG.get_or_init(|| Self::from_build_env().unwrap_or_default())
    }
}

fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidApiBase(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

/// Backend origin used by every API call.
pub fn api_base() -> &'static str {
    &PortalConfig::current().api_base
}
