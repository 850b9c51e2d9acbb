//! Strategy configuration
//!
//! [`StrategyConfig`] selects the strategy a rollout runs with and carries
//! its stop condition and timeout. Loadable from YAML, TOML or JSON.

use crate::strategy::StrategyType;
use crate::until::UntilCondition;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default rollout timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Rollout strategy configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyConfig {
    /// Strategy to run
    #[serde(default)]
    pub strategy: StrategyType,

    /// Optional early stop condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<UntilCondition>,

    /// Rollout timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl StrategyConfig {
    /// Create configuration for a strategy with defaults
    #[inline]
    #[must_use]
    pub fn new(strategy: StrategyType) -> Self {
        Self {
            strategy,
            until: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// With stop condition
    #[inline]
    #[must_use]
    pub fn with_until(mut self, until: UntilCondition) -> Self {
        self.until = Some(until);
        self
    }

    /// With timeout in seconds
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Rollout timeout
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid or fails validation
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str::<Self>(yaml)?.validated()
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid or fails validation
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(toml)?.validated()
    }

    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid or fails validation
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(json)?.validated()
    }

    /// Check semantic constraints
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroTimeout`] if `timeout_secs` is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        tracing::debug!(
            strategy = %self.strategy,
            until = ?self.until.map(|u| u.to_string()),
            timeout_secs = self.timeout_secs,
            "loaded strategy config"
        );
        Ok(self)
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::new(StrategyType::default())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// YAML parse failure
    #[error("invalid yaml: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// TOML parse failure
    #[error("invalid toml: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// JSON parse failure
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Timeout must be positive
    #[error("timeoutSecs must be greater than zero")]
    ZeroTimeout,
}
