//! Configuration loading and management

use crate::config::types::{SentenceConnectors, WeekStart};
use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for helpers whose output depends on a convention.
///
/// Every field has a default, so an empty document (`{}`) is a valid configuration and
/// `Config::default()` matches what the helpers use when no configuration is passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sentence: SentenceConnectors,
    #[serde(default)]
    pub week_start: WeekStart,
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        if self.sentence.words_connector.is_empty() {
            return Err(Error::ConfigValidation(
                "sentence.words_connector must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, anything else as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    /// Looks for the first of [`CONFIG_FILENAMES`] inside `config_dir`.
    pub fn load_config<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = config_dir.join(config_file_name);
            if config_file_path.exists() {
                return Self::from_file(config_file_path);
            }
        }

        Err(Error::ConfigNotFound {
            config_dir: config_dir.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }
}
