use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_TIME_FORMAT: &str = "%d %b %Y, %H:%M";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const KEYS: [&str; 2] = ["time_format", "log_level"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub time_format: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = get_config_file_path()?;

        if !config_path.exists() {
            return Err(ConfigError::ConfigNotFound);
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::ReadError(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(ConfigError::ConfigNotFound) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        validate_time_format(&config.time_format)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = get_config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let content =
            toml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(&config_path, content).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str, ConfigError> {
        match key {
            "time_format" => Ok(&self.time_format),
            "log_level" => Ok(&self.log_level),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), ConfigError> {
        match key {
            "time_format" => {
                validate_time_format(&value)?;
                self.time_format = value;
            }
            "log_level" => {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: key.to_string(),
                        reason: "log level cannot be empty".to_string(),
                    });
                }
                self.log_level = value;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn validate_time_format(format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidValue {
            key: "time_format".to_string(),
            reason: format!("'{}' is not a valid strftime format", format),
        });
    }
    Ok(())
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    Ok(config_dir.join("reserve").join("config.toml"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found. Run 'reserve config set <key> <value>' to create one.")]
    ConfigNotFound,
    #[error("Could not find config directory")]
    ConfigDirNotFound,
    #[error("Unknown configuration key '{0}'. Supported keys: time_format, log_level.")]
    UnknownKey(String),
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
    #[error("Failed to parse config file: {0}")]
    ParseError(String),
    #[error("Failed to serialize config: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = Config::from_toml("log_level = \"debug\"\n").unwrap();
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
        assert_eq!(config.log_level, "debug");

        let empty = Config::from_toml("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_invalid_time_format_in_file_is_rejected() {
        let result = Config::from_toml("time_format = \"%Q\"\n");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = Config::from_toml("time_format = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();
        config.set("time_format", "%H:%M".to_string()).unwrap();
        config.set("log_level", "reserve=debug".to_string()).unwrap();

        assert_eq!(config.get("time_format").unwrap(), "%H:%M");
        assert_eq!(config.get("log_level").unwrap(), "reserve=debug");
    }

    #[test]
    fn test_set_rejects_bad_values_and_keys() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("time_format", "%Q".to_string()),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("log_level", "  ".to_string()),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("file_path", "x".to_string()),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(config.get("file_path"), Err(ConfigError::UnknownKey(_))));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.set("time_format", "%Y-%m-%d, %H:%M".to_string()).unwrap();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
