//! # Configuration
//!
//! CLI settings live in `config.json` inside the data directory, next to the
//! stored users. A missing file means "all defaults".
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default-language` | `en` | Language used until one is picked with `userdir lang` |
//! | `default-theme` | `light` | Theme used until one is picked with `userdir theme` |

use crate::error::{Result, UserdirError};
use crate::model::{Language, Theme};
use crate::store::PreferenceDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: [&str; 2] = ["default-language", "default-theme"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserdirConfig {
    #[serde(default)]
    pub default_language: Language,

    #[serde(default)]
    pub default_theme: Theme,
}

impl UserdirConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(UserdirError::Io)?;
        let config: UserdirConfig =
            serde_json::from_str(&content).map_err(UserdirError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(UserdirError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(UserdirError::Serialization)?;
        fs::write(config_path, content).map_err(UserdirError::Io)?;
        Ok(())
    }

    pub fn preference_defaults(&self) -> PreferenceDefaults {
        PreferenceDefaults {
            language: self.default_language,
            theme: self.default_theme,
        }
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-language" => Ok(self.default_language.to_string()),
            "default-theme" => Ok(self.default_theme.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-language" => {
                self.default_language = value.parse().map_err(UserdirError::Api)?;
            }
            "default-theme" => {
                self.default_theme = value.parse().map_err(UserdirError::Api)?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> UserdirError {
    UserdirError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserdirConfig::default();
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.default_theme, Theme::Light);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = UserdirConfig::load(dir.path()).unwrap();
        assert_eq!(config, UserdirConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = UserdirConfig::default();
        config.set("default-theme", "dark").unwrap();
        config.save(&nested).unwrap();

        let loaded = UserdirConfig::load(&nested).unwrap();
        assert_eq!(loaded.default_theme, Theme::Dark);
        assert_eq!(loaded.default_language, Language::En);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"default_language":"ru"}"#).unwrap();

        let loaded = UserdirConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_language, Language::Ru);
        assert_eq!(loaded.default_theme, Theme::Light);
    }

    #[test]
    fn test_set_rejects_unknown_values() {
        let mut config = UserdirConfig::default();
        assert!(config.set("default-language", "fr").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, UserdirConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = UserdirConfig::default();
        assert_eq!(config.get("default-language").unwrap(), "en");
        assert_eq!(config.get("default-theme").unwrap(), "light");
        assert!(config.get("nope").is_err());
    }
}
