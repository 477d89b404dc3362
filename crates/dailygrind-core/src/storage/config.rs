//! TOML-based workspace configuration.
//!
//! Stores run preferences including:
//! - Contribution count range per run
//! - Pacing delays between contribution events
//! - File layout of the generated artifacts
//!
//! Configuration is stored at `<workspace root>/dailygrind.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Run-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Minimum number of contribution events per run.
    #[serde(default = "default_contributions_min")]
    pub contributions_min: u32,
    /// Maximum number of contribution events per run.
    #[serde(default = "default_contributions_max")]
    pub contributions_max: u32,
    /// Fixed RNG seed for reproducible runs (optional).
    /// If unset, each run draws from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Pacing configuration for delays between contribution events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_pacing_min_ms")]
    pub min_ms: u64,
    #[serde(default = "default_pacing_max_ms")]
    pub max_ms: u64,
}

/// File layout of the generated artifacts, relative to the workspace
/// root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_stats_file")]
    pub stats_file: String,
    #[serde(default = "default_streak_file")]
    pub streak_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_status_file")]
    pub status_file: String,
    #[serde(default = "default_daily_dir")]
    pub daily_dir: String,
}

/// Workspace configuration.
///
/// Serialized to/from TOML at `<workspace root>/dailygrind.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

// Default functions
fn default_contributions_min() -> u32 {
    20
}
fn default_contributions_max() -> u32 {
    25
}
fn default_true() -> bool {
    true
}
fn default_pacing_min_ms() -> u64 {
    1000
}
fn default_pacing_max_ms() -> u64 {
    3000
}
fn default_stats_file() -> String {
    "contribution_data.json".into()
}
fn default_streak_file() -> String {
    "streak_stats.json".into()
}
fn default_log_file() -> String {
    "contribution_log.md".into()
}
fn default_status_file() -> String {
    "README.md".into()
}
fn default_daily_dir() -> String {
    "daily_contributions".into()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            contributions_min: default_contributions_min(),
            contributions_max: default_contributions_max(),
            seed: None,
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_ms: default_pacing_min_ms(),
            max_ms: default_pacing_max_ms(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            stats_file: default_stats_file(),
            streak_file: default_streak_file(),
            log_file: default_log_file(),
            status_file: default_status_file(),
            daily_dir: default_daily_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run: RunConfig::default(),
            pacing: PacingConfig::default(),
            files: FilesConfig::default(),
        }
    }
}

impl Config {
    /// Configuration file name inside the workspace root.
    pub const FILE_NAME: &'static str = "dailygrind.toml";

    fn path(root: &Path) -> PathBuf {
        root.join(Self::FILE_NAME)
    }

    /// Load from the workspace root, or return defaults when no
    /// configuration file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(root);
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to the workspace root.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self, root: &Path) -> Result<(), ConfigError> {
        let path = Self::path(root);
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Check that the configured ranges are well-formed.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending key when a minimum exceeds
    /// its maximum.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.contributions_min > self.run.contributions_max {
            return Err(ConfigError::InvalidValue {
                key: "run.contributions_min".into(),
                message: format!(
                    "minimum {} exceeds maximum {}",
                    self.run.contributions_min, self.run.contributions_max
                ),
            });
        }
        if self.pacing.min_ms > self.pacing.max_ms {
            return Err(ConfigError::InvalidValue {
                key: "pacing.min_ms".into(),
                message: format!(
                    "minimum {} exceeds maximum {}",
                    self.pacing.min_ms, self.pacing.max_ms
                ),
            });
        }
        Ok(())
    }

    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let mut current = root;
        for part in key.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        let new_value = match current {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse().map_err(|_| {
                ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected a boolean, got '{value}'"),
                }
            })?),
            serde_json::Value::Number(_) => {
                let n: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected a number, got '{value}'"),
                })?;
                serde_json::Value::Number(n.into())
            }
            serde_json::Value::String(_) => serde_json::Value::String(value.to_string()),
            serde_json::Value::Null => {
                // Only `run.seed` is nullable; it holds a number
                let n: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected a number, got '{value}'"),
                })?;
                serde_json::Value::Number(n.into())
            }
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "key does not hold a scalar value".into(),
                })
            }
        };
        *current = new_value;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed as the key's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(())
    }
}
