use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BookzError, Result};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for bookz, stored in the data directory as config.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookzConfig {
    /// Where the catalog file lives. None means `<data_dir>/library.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_file: Option<PathBuf>,
}

impl BookzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookzError::Io)?;
        let config: BookzConfig =
            serde_json::from_str(&content).map_err(BookzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookzError::Serialization)?;
        fs::write(config_path, content).map_err(BookzError::Io)?;
        Ok(())
    }

    /// String form of a config key. None for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "library-file" => Some(
                self.library_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
            _ => None,
        }
    }

    /// Sets a config key from its string form. An empty value clears the
    /// key back to its default.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "library-file" => {
                self.library_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BookzConfig::default();
        assert_eq!(config.library_file, None);
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = TempDir::new().unwrap();
        let config = BookzConfig::load(dir.path()).unwrap();
        assert_eq!(config, BookzConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();

        let mut config = BookzConfig::default();
        config.set("library-file", "/tmp/books.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BookzConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.library_file, Some(PathBuf::from("/tmp/books.json")));
    }

    #[test]
    fn test_save_creates_the_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deeper");

        BookzConfig::default().save(&nested).unwrap();
        assert!(nested.join("config.json").exists());
    }

    #[test]
    fn test_get_unset_key_shows_default() {
        let config = BookzConfig::default();
        assert_eq!(config.get("library-file"), Some("(default)".to_string()));
    }

    #[test]
    fn test_get_unknown_key() {
        let config = BookzConfig::default();
        assert_eq!(config.get("no-such-key"), None);
    }

    #[test]
    fn test_set_unknown_key_fails() {
        let mut config = BookzConfig::default();
        assert!(config.set("no-such-key", "value").is_err());
    }

    #[test]
    fn test_set_empty_value_clears_the_key() {
        let mut config = BookzConfig::default();
        config.set("library-file", "/tmp/books.json").unwrap();
        config.set("library-file", "").unwrap();
        assert_eq!(config.library_file, None);
    }
}
