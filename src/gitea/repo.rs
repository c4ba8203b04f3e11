//! Gitea payloads
use serde::{Deserialize, Serialize};

use super::GITEA_SERVICE_GITHUB;
use crate::utils::MirrorRequest;

/// Placeholder for secrets in diagnostics
const REDACTED: &str = "***";

/// Authenticated user
#[derive(Deserialize, Debug, Clone)]
pub struct UserGitea {
    /// Login name
    pub login: String,
}

/// Body of `POST /repos/migrate`
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct MigrateRepo {
    /// Name of the new repository
    pub repo_name: String,

    /// Description of the new repository
    pub description: String,

    /// URL to clone from
    pub clone_addr: String,

    /// Source service
    pub service: String,

    /// Also mirror the wiki
    pub wiki: bool,

    /// Origin token
    pub auth_token: String,

    /// Keep the repository as a pull mirror
    pub mirror: bool,

    /// Origin username, private sources only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_username: Option<String>,

    /// Origin token again, private sources only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_password: Option<String>,
}

impl MigrateRepo {
    /// Complete `request` with the fixed mirror fields and the origin credentials
    pub fn new(
        request: MirrorRequest,
        is_private: bool,
        github_username: &str,
        github_token: &str,
    ) -> Self {
        let (auth_username, auth_password) = if is_private {
            (
                Some(github_username.to_string()),
                Some(github_token.to_string()),
            )
        } else {
            (None, None)
        };
        Self {
            repo_name: request.repo_name,
            description: request.description,
            clone_addr: request.clone_addr,
            service: GITEA_SERVICE_GITHUB.to_string(),
            wiki: true,
            auth_token: github_token.to_string(),
            mirror: true,
            auth_username,
            auth_password,
        }
    }

    /// Copy with the secrets replaced, safe to print
    pub fn redacted(&self) -> Self {
        Self {
            auth_token: REDACTED.to_string(),
            auth_password: self.auth_password.as_ref().map(|_| REDACTED.to_string()),
            ..self.clone()
        }
    }
}
