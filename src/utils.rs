//! Utility functions
use std::time::Duration;

use log::info;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::{
    config::GhToGiteaConfig,
    errors::GhToGiteaError,
    gitea::platform::GiteaPlatform,
    github::platform::GithubPlatform,
    platform::{OriginPlatform, TargetPlatform},
    sync::{mirror_repos, MirrorOptions, MirrorSummary},
};

/// Field limit of the target for descriptions, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Repository information, as read from the origin
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct Repo {
    /// Name of the repository
    pub name: String,

    /// Description of the repository
    pub description: Option<String>,

    /// URL the mirror clones from
    pub clone_url: String,

    /// Whether the repository is private
    pub private: bool,

    /// Whether the repository is a fork
    pub fork: bool,
}

/// What the orchestrator asks the target to mirror
#[derive(Deserialize, Serialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct MirrorRequest {
    /// Name of the mirror
    pub repo_name: String,

    /// Description, at most [`MAX_DESCRIPTION_LEN`] characters
    pub description: String,

    /// Clone URL on the origin
    pub clone_addr: String,
}

impl MirrorRequest {
    /// Build the request for `repo`, generating a description when the origin has none.
    pub fn from_repo(repo: &Repo) -> Self {
        let description = match repo.description.as_deref() {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => format!("A mirror of {} from {}", repo.name, repo.clone_url),
        };
        Self {
            repo_name: repo.name.clone(),
            description: truncate_chars(&description, MAX_DESCRIPTION_LEN),
            clone_addr: repo.clone_url.clone(),
        }
    }
}

/// Keep the first `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Header value that is kept out of debug output
pub(crate) fn sensitive_header(value: &str) -> Result<HeaderValue, GhToGiteaError> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|_| GhToGiteaError::from("Token contains characters not allowed in a header"))?;
    header.set_sensitive(true);
    Ok(header)
}

/// HTTP client shared by all requests of one platform
pub(crate) fn build_client(
    headers: HeaderMap,
    timeout: Option<Duration>,
) -> Result<reqwest::Client, GhToGiteaError> {
    let mut builder = reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Authenticate to both platforms and mirror
/// # Errors
/// Error if a client can't be built or the origin can't be listed
pub async fn main_sync(
    config: &GhToGiteaConfig,
    options: &MirrorOptions,
) -> Result<MirrorSummary, GhToGiteaError> {
    let source_platform = GithubPlatform::authenticate(&config.github).await?;
    info!(
        "Authenticated to {} as {}",
        source_platform.get_remote_url(),
        source_platform.get_username()
    );
    let destination_platform =
        GiteaPlatform::authenticate(&config.gitea, &config.github).await?;
    info!(
        "Authenticated to {} as {}",
        destination_platform.get_remote_url(),
        destination_platform.get_username()
    );
    mirror_repos(&source_platform, &destination_platform, options).await
}
