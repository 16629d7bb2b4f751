//! Configuration management for headwater.
//!
//! Configuration is read from `~/.config/headwater/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::FeedSettings;
use crate::fetcher::RelayConfig;

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedSettings,
    pub relay: RelayConfig,
    pub storage: StorageConfig,
}

/// Where saved topics are persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database path (default: `<data dir>/headwater/headwater.db`)
    pub path: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured path, or the default under the platform data directory.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(data_dir.join("headwater").join("headwater.db"))
    }
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`.
    ///
    /// If the file doesn't exist, creates a default one with comments.
    /// Missing fields use default values; an invalid file is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::create_default_config(path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/headwater/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("headwater").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        r##"# headwater configuration

[feed]
# Language code: en, es, fr, de, it, ja, ko, pt, ru, zh
language = "en"
# Region code: US, UK, CA, AU, IN, FR, DE, JP, BR, MX, IT, ES, NL, RU, ZA
region = "US"

[relay]
# Relay used for feed previews. The feed URL is passed in the `param` query parameter.
endpoint = "https://api.allorigins.win/raw"
param = "url"

# Request timeout in seconds
timeout_secs = 15

# user_agent = "headwater"

[storage]
# SQLite database holding saved topics
# path = "/home/me/.local/share/headwater/headwater.db"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Language, Region};

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[feed]
language = "pt"

[relay]
timeout_secs = 30
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.feed.language, Language::Portuguese);
        assert_eq!(config.feed.region, Region::UnitedStates);
        assert_eq!(config.relay.timeout_secs, 30);
        assert_eq!(config.relay.param, "url");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[feed]\nlanguage = \"klingon\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_storage_path_override() {
        let storage = StorageConfig {
            path: Some(PathBuf::from("/tmp/topics.db")),
        };
        assert_eq!(
            storage.database_path().unwrap(),
            PathBuf::from("/tmp/topics.db")
        );
    }
}
