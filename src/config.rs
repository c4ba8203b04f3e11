//! Configuration handling
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
    time::Duration,
};

use home::home_dir;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    cli::GhToGiteaCli,
    errors::GhToGiteaError,
    gitea::config::{GiteaConfig, GiteaCredentials},
    github::config::{GithubConfig, GithubCredentials},
};

/// Resolved configuration for one run
#[derive(Clone, Debug)]
pub struct GhToGiteaConfig {
    /// Origin credentials
    pub github: GithubCredentials,

    /// Target credentials
    pub gitea: GiteaCredentials,
}

/// Contents of the config file
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ConfigData {
    /// Github section
    pub github: Option<GithubConfig>,

    /// Gitea section
    pub gitea: Option<GiteaConfig>,
}

impl ConfigData {
    /// Read the config file at `path`
    /// # Errors
    /// Error if the file can't be read or parsed
    pub fn from_path(path: &Path) -> Result<Self, GhToGiteaError> {
        let contents = read_to_string(path).map_err(|e| {
            GhToGiteaError::from(format!("Unable to open {}: {e}", path.display()).as_str())
        })?;
        Ok(toml::from_str(&contents)?)
    }
}

impl GhToGiteaConfig {
    /// Resolve the configuration from the command line, the environment and the config file
    /// # Errors
    /// Error if the config file is invalid or a required value is missing
    pub fn try_new(cli_args: &GhToGiteaCli) -> Result<Self, GhToGiteaError> {
        let config_data = match &cli_args.config {
            Some(path) => ConfigData::from_path(path)?,
            None => match Self::get_config_path() {
                Some(path) if path.exists() => {
                    debug!("Reading config from {}", path.display());
                    ConfigData::from_path(&path)?
                }
                _ => ConfigData::default(),
            },
        };
        Self::resolve(cli_args, &config_data)
    }

    /// Merge command line values (which already include the environment) over the file values
    /// # Errors
    /// Error if a required value is missing or the Gitea URL is invalid
    pub fn resolve(
        cli_args: &GhToGiteaCli,
        config_data: &ConfigData,
    ) -> Result<Self, GhToGiteaError> {
        let timeout = cli_args.timeout.map(Duration::from_secs);
        Ok(GhToGiteaConfig {
            github: GithubConfig::resolve(cli_args, config_data, timeout)?,
            gitea: GiteaConfig::resolve(cli_args, config_data, timeout)?,
        })
    }

    /// Default path of the config file, if the home directory is known
    pub fn get_config_path() -> Option<PathBuf> {
        match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => Some(
                path.join(".config")
                    .join(env!("CARGO_PKG_NAME"))
                    .join("config.toml"),
            ),
            _ => None,
        }
    }
}
