//! Gitea configuration
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::GITEA_API_PATH;
use crate::{cli::GhToGiteaCli, config::ConfigData, config_value, errors::GhToGiteaError};

/// Gitea section of the config file
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct GiteaConfig {
    /// Gitea instance URL
    pub url: Option<String>,

    /// Gitea token
    pub token: Option<String>,
}

/// Resolved Gitea credentials
#[derive(Clone)]
pub struct GiteaCredentials {
    /// Instance URL, without trailing slash or API path
    pub url: String,

    /// Gitea token
    pub token: String,

    /// Request timeout
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for GiteaCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GiteaCredentials")
            .field("url", &self.url)
            .field("token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Strip trailing slashes and a trailing API path from an instance URL
/// # Errors
/// Error if the result is not a valid URL
pub(crate) fn normalize_url(raw: &str) -> Result<String, GhToGiteaError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let trimmed = trimmed
        .strip_suffix(GITEA_API_PATH)
        .unwrap_or(trimmed)
        .trim_end_matches('/');
    url::Url::parse(trimmed)?;
    Ok(trimmed.to_string())
}

impl GiteaConfig {
    /// Resolve the Gitea credentials
    /// # Errors
    /// Error if the URL or the token is missing, or the URL is invalid
    pub fn resolve(
        cli_args: &GhToGiteaCli,
        config_data: &ConfigData,
        timeout: Option<Duration>,
    ) -> Result<GiteaCredentials, GhToGiteaError> {
        let url = config_value!(cli_args.gt_url, config_data, gitea, url, "--gt-url", "GT_URL");
        let token = config_value!(
            cli_args.gt_access_token,
            config_data,
            gitea,
            token,
            "--gt-access-token",
            "GT_ACCESS_TOKEN"
        );
        Ok(GiteaCredentials {
            url: normalize_url(&url)?,
            token,
            timeout,
        })
    }
}
