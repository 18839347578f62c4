use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_FILE: &str = "config.json";

/// Result of a lenient load: the config to run with, plus the reason the
/// stored file was ignored, if it was.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub ignored: Option<ConfigError>,
}

/// Reads and writes `config.json` next to the ledger slot.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self::new(base.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Missing or blank files yield the defaults. Unparsable ones are errors.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let data = match fs::read_to_string(&self.config_path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };
        if data.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_json::from_str(&data).map_err(|err| ConfigError::Malformed {
            path: self.config_path.clone(),
            reason: err.to_string(),
        })
    }

    /// Like [`load`](Self::load), but any failure falls back to the defaults.
    /// The file is left untouched so the user can repair it.
    pub fn load_or_default(&self) -> LoadedConfig {
        match self.load() {
            Ok(config) => LoadedConfig {
                config,
                ignored: None,
            },
            Err(err) => LoadedConfig {
                config: Config::default(),
                ignored: Some(err),
            },
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = self.config_path.with_extension("json.tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}
