//! User preferences stored in `config.json` under the app data directory.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::paths::{self, ensure_dir};

const TMP_SUFFIX: &str = "tmp";
const DEFAULT_UNDO_WINDOW_SECS: u64 = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the ledger state file. Defaults to the app data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// How long a spend stays undoable.
    #[serde(default = "Config::default_undo_window_secs")]
    pub undo_window_secs: u64,
    #[serde(default = "Config::default_color")]
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            undo_window_secs: Self::default_undo_window_secs(),
            color: Self::default_color(),
        }
    }
}

impl Config {
    pub fn default_undo_window_secs() -> u64 {
        DEFAULT_UNDO_WINDOW_SECS
    }

    pub fn default_color() -> bool {
        true
    }

    pub fn undo_window(&self) -> Duration {
        Duration::from_secs(self.undo_window_secs)
    }

    /// Location of the ledger state file, relative to `base` unless overridden.
    pub fn state_file(&self, base: &Path) -> PathBuf {
        let dir = self.data_dir.as_deref().unwrap_or(base);
        paths::state_file_in(dir)
    }
}

/// Loads and saves [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        let path = paths::config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    tmp.set_extension(format!("json.{}", TMP_SUFFIX));
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.undo_window(), Duration::from_secs(4));
    }

    #[test]
    fn save_and_reload() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            data_dir: Some(temp.path().join("data")),
            undo_window_secs: 10,
            color: false,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert_eq!(
            config.state_file(temp.path()),
            temp.path().join("data").join("state.json")
        );
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "color": false }"#).unwrap();
        let config = manager.load().unwrap();
        assert!(!config.color);
        assert_eq!(config.undo_window_secs, 4);
    }

    #[test]
    fn invalid_json_is_a_serde_error() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "nope").unwrap();
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }
}
