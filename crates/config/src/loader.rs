use crate::schema::{ConfigError, ValidationResult, validate};
use crate::types::Config;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "sshconfig.json";

/// Error type for settings loading operations.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid settings in {}: {source}", path.display())]
    Config { path: PathBuf, source: ConfigError },
}

/// Returns the settings file path (`<config dir>/sshconfig.json`).
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Loads settings from a string.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or fails schema validation.
pub fn load_from_str(s: &str) -> Result<Config, ConfigError> {
    s.parse()
}

/// Loads settings from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the settings are invalid.
pub fn load_from_path(path: &Path) -> Result<Config, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_str(&contents).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads settings from the default path, or defaults if there is no file.
///
/// # Errors
///
/// Returns an error if the config directory cannot be determined or the
/// file exists but is invalid.
pub fn load() -> Result<Config, LoadError> {
    let path = config_path().ok_or(LoadError::NoConfigDir)?;

    if !path.exists() {
        return Ok(Config::default());
    }

    load_from_path(&path)
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;

        if let ValidationResult::Invalid(errors) = validate(&value) {
            return Err(ConfigError::ValidationFailed(errors));
        }

        Ok(serde_json::from_value(value)?)
    }
}
