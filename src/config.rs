//! Navigation gate configuration.
//!
//! DESIGN
//! ======
//! Defaults match the deployed route table, so `GateConfig::default()` is what
//! the app runs with. A JSON override may replace any subset of fields.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

/// Errors from loading a configuration override.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed gate config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be an absolute path, got {value:?}")]
    InvalidPath { field: &'static str, value: String },
}

/// Paths, storage key, and recheck timing used by the navigation gate.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// `localStorage` key holding the session token.
    pub token_key: String,
    pub login_path: String,
    pub register_path: String,
    /// Where authenticated users land when they open an auth page.
    pub home_path: String,
    /// Query parameter carrying the originally requested destination.
    pub redirect_param: String,
    #[serde(rename = "recheck_delay_ms", with = "millis")]
    pub recheck_delay: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            token_key: "token".to_owned(),
            login_path: "/login".to_owned(),
            register_path: "/register".to_owned(),
            home_path: "/data-management".to_owned(),
            redirect_param: "redirect".to_owned(),
            recheck_delay: Duration::from_millis(100),
        }
    }
}

impl GateConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidPath`] when a path field is not absolute.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("login_path", &self.login_path),
            ("register_path", &self.register_path),
            ("home_path", &self.home_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::InvalidPath { field, value: value.clone() });
            }
        }
        Ok(())
    }

    /// Whether `path` is the login or registration view.
    pub fn is_auth_page(&self, path: &str) -> bool {
        path == self.login_path || path == self.register_path
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
