//! Github configuration
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::GITHUB_API_URL;
use crate::{cli::GhToGiteaCli, config::ConfigData, config_value, errors::GhToGiteaError};

/// Github section of the config file
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    /// Github username
    pub username: Option<String>,

    /// Github token
    pub token: Option<String>,

    /// Github API URL
    pub api_url: Option<String>,
}

/// Resolved Github credentials
#[derive(Clone)]
pub struct GithubCredentials {
    /// Github username, used as migration username for private repositories
    pub username: String,

    /// Github token
    pub token: String,

    /// Github API URL, without trailing slash
    pub api_url: String,

    /// Request timeout
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for GithubCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubCredentials")
            .field("username", &self.username)
            .field("token", &"***")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl GithubConfig {
    /// Resolve the Github credentials
    /// # Errors
    /// Error if the username or the token is missing
    pub fn resolve(
        cli_args: &GhToGiteaCli,
        config_data: &ConfigData,
        timeout: Option<Duration>,
    ) -> Result<GithubCredentials, GhToGiteaError> {
        let username = config_value!(
            cli_args.gh_user_name,
            config_data,
            github,
            username,
            "--gh-user-name",
            "GH_USERNAME"
        );
        let token = config_value!(
            cli_args.gh_access_token,
            config_data,
            github,
            token,
            "--gh-access-token",
            "GH_ACCESS_TOKEN"
        );
        let api_url = cli_args
            .gh_api_url
            .as_deref()
            .filter(|v| !v.is_empty())
            .or_else(|| {
                config_data
                    .github
                    .as_ref()
                    .and_then(|c| c.api_url.as_deref())
                    .filter(|v| !v.is_empty())
            })
            .unwrap_or(GITHUB_API_URL);
        url::Url::parse(api_url)?;
        Ok(GithubCredentials {
            username,
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}
