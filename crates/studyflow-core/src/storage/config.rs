//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Planner defaults (start hour, break length)
//! - Hosted backend connection settings
//!
//! Configuration is stored at `~/.config/studyflow/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::planner::GeneratorConfig;

/// Planner-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Hour the first study block is labeled with.
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    /// Break block length in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// Hosted backend connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Whether plans, suggestions, and sessions are mirrored remotely.
    #[serde(default)]
    pub enabled: bool,
    /// Backend project base URL.
    #[serde(default)]
    pub base_url: String,
    /// API key, sent as both `apikey` and bearer token.
    #[serde(default)]
    pub api_key: String,
    /// User row identifier for all records.
    #[serde(default)]
    pub user_id: String,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studyflow/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerSettings,
    #[serde(default)]
    pub backend: BackendConfig,
}

fn default_start_hour() -> u32 {
    9
}
fn default_break_minutes() -> u32 {
    10
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            start_hour: default_start_hour(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: String::new(),
            api_key: String::new(),
            user_id: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planner: PlannerSettings::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn path() -> Result<PathBuf, std::io::Error> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Load the configuration from disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/studyflow/config.toml"),
            message: e.to_string(),
        })?;
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save the configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("~/.config/studyflow/config.toml"),
            message: e.to_string(),
        })?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Generator configuration derived from the planner section.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            start_hour: self.planner.start_hour,
            break_minutes: self.planner.break_minutes,
            ..GeneratorConfig::default()
        }
    }

    /// Read a value by dotted path, e.g. `planner.start_hour`.
    pub fn get(&self, key: &str) -> Result<serde_json::Value, ConfigError> {
        let root = serde_json::to_value(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::value_by_path(&root, key)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }

    /// Set a value by dotted path from its string form. The new value
    /// must match the type of the existing one.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut root =
            serde_json::to_value(&*self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Self::set_by_path(&mut root, key, value)?;
        *self = serde_json::from_value(root).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    fn value_by_path<'a>(root: &'a serde_json::Value, key: &str) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let parts: Vec<&str> = key.split('.').collect();
        let (leaf, intermediates) = match parts.split_last() {
            Some(split) => split,
            None => return Err(ConfigError::UnknownKey(key.to_string())),
        };

        let mut current = root;
        for part in intermediates {
            let obj = current
                .as_object_mut()
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            current = obj
                .get_mut(*part)
                .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        }

        let obj = current
            .as_object_mut()
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
        let existing = obj
            .get(*leaf)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        let new_value = match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })?,
            ),
            serde_json::Value::Number(_) => {
                let n = value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
                serde_json::Value::Number(n.into())
            }
            serde_json::Value::String(_) => serde_json::Value::String(value.to_string()),
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "only scalar values can be set".to_string(),
                })
            }
        };
        obj.insert(leaf.to_string(), new_value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_planner() {
        let config = Config::default();
        assert_eq!(config.planner.start_hour, 9);
        assert_eq!(config.planner.break_minutes, 10);
        assert!(!config.backend.enabled);
    }

    #[test]
    fn empty_toml_fills_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.planner.start_hour, 9);
        assert_eq!(config.planner.break_minutes, 10);
    }

    #[test]
    fn toml_round_trip() {
        let mut config = Config::default();
        config.backend.enabled = true;
        config.backend.base_url = "https://example.supabase.co".to_string();
        config.planner.start_hour = 8;

        let raw = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&raw).unwrap();
        assert_eq!(decoded.planner.start_hour, 8);
        assert!(decoded.backend.enabled);
        assert_eq!(decoded.backend.base_url, "https://example.supabase.co");
    }

    #[test]
    fn get_by_dotted_path() {
        let config = Config::default();
        assert_eq!(config.get("planner.start_hour").unwrap(), 9);
        assert_eq!(config.get("backend.enabled").unwrap(), false);
        assert!(config.get("planner.missing").is_err());
        assert!(config.get("").is_err());
    }

    #[test]
    fn set_by_dotted_path_keeps_types() {
        let mut config = Config::default();
        config.set("planner.start_hour", "8").unwrap();
        assert_eq!(config.planner.start_hour, 8);

        config.set("backend.enabled", "true").unwrap();
        assert!(config.backend.enabled);

        config.set("backend.base_url", "https://x.test").unwrap();
        assert_eq!(config.backend.base_url, "https://x.test");

        assert!(config.set("planner.start_hour", "nine").is_err());
        assert!(config.set("planner.unknown", "1").is_err());
    }

    #[test]
    fn generator_config_uses_planner_section() {
        let mut config = Config::default();
        config.planner.start_hour = 7;
        let generator = config.generator_config();
        assert_eq!(generator.start_hour, 7);
        assert_eq!(generator.break_minutes, 10);
        assert_eq!(generator.break_recommendations.len(), 3);
    }
}
