//! Resolution of the files the generator reads and writes.

use crate::loader::LoadError;
use crate::types::Config;
use std::path::{Path, PathBuf};

const CSV_FILE_NAME: &str = "sshconfig.csv";

/// The user's home and config directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirs {
    pub home: PathBuf,
    pub config: PathBuf,
}

impl BaseDirs {
    /// Looks both directories up from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if either directory cannot be determined.
    pub fn from_env() -> Result<Self, LoadError> {
        let home = dirs::home_dir().ok_or(LoadError::NoHomeDir)?;
        let config = dirs::config_dir().ok_or(LoadError::NoConfigDir)?;
        Ok(Self { home, config })
    }
}

/// Fully resolved locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Hosts CSV, read and then rewritten in canonical form.
    pub csv: PathBuf,
    /// Generated SSH client config.
    pub ssh_config: PathBuf,
    /// Directory relative identity files are joined onto, if any.
    pub identity_dir: Option<PathBuf>,
}

impl Paths {
    /// Applies the settings on top of the defaults:
    /// `<config>/sshconfig.csv` and `<home>/.ssh/config`.
    pub fn resolve(config: &Config, base: &BaseDirs) -> Self {
        let csv = config.csv.as_deref().map_or_else(
            || base.config.join(CSV_FILE_NAME),
            |path| expand_tilde(path, &base.home),
        );

        let ssh_config = config.ssh_config.as_deref().map_or_else(
            || base.home.join(".ssh").join("config"),
            |path| expand_tilde(path, &base.home),
        );

        let identity_dir = config
            .identity_dir
            .as_deref()
            .map(|path| expand_tilde(path, &base.home));

        Self {
            csv,
            ssh_config,
            identity_dir,
        }
    }
}

/// Expands a leading `~` or `~/` to `home`.
pub fn expand_tilde(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        home.to_path_buf()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}
