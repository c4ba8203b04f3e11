//! Gitea platform implementation
use log::{error, info, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    StatusCode,
};
use std::{future::Future, pin::Pin};
use urlencoding::encode;

use super::{
    config::GiteaCredentials,
    repo::{MigrateRepo, UserGitea},
    GITEA_API_PATH,
};
use crate::{
    errors::{GhToGiteaError, GhToGiteaErrorKind},
    github::config::GithubCredentials,
    platform::{MirrorOutcome, PlatformType, RepoPresence, TargetPlatform},
    utils::{build_client, sensitive_header, MirrorRequest},
};

/// Gitea platform
#[derive(Debug, Clone)]
pub struct GiteaPlatform {
    /// Login of the authenticated user
    username: String,

    /// Instance URL
    url: String,

    /// Github username, for private migrations
    github_username: String,

    /// Github token, for migrations
    github_token: String,

    /// Reqwest client, carrying the Gitea token
    client: reqwest::Client,
}

impl GiteaPlatform {
    /// Build the session and cache the login of the authenticated user
    /// # Errors
    /// Error if the instance is unreachable or the token is rejected
    pub async fn authenticate(
        credentials: &GiteaCredentials,
        github: &GithubCredentials,
    ) -> Result<Self, GhToGiteaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            sensitive_header(&format!("token {}", credentials.token))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = build_client(headers, credentials.timeout)?;

        let url = format!("{}{GITEA_API_PATH}/user", credentials.url);
        let response = client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(GhToGiteaError::new(GhToGiteaErrorKind::Authentication)
                .with_platform(PlatformType::Gitea)
                .with_text(&format!("{status}: {text}")));
        }
        let user: UserGitea = response.json().await?;
        Ok(Self {
            username: user.login,
            url: credentials.url.clone(),
            github_username: github.username.clone(),
            github_token: github.token.clone(),
            client,
        })
    }

    /// URL of an API path
    fn api(&self, path: &str) -> String {
        format!("{}{GITEA_API_PATH}{path}", self.url)
    }
}

impl TargetPlatform for GiteaPlatform {
    fn get_remote_url(&self) -> &str {
        &self.url
    }

    fn get_username(&self) -> &str {
        &self.username
    }

    fn repository_exists(
        &self,
        repo_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<RepoPresence, GhToGiteaError>> + Send + '_>> {
        let repo_name = repo_name.to_string();
        Box::pin(async move {
            let url = self.api(&format!(
                "/repos/{}/{}",
                encode(&self.username),
                encode(&repo_name)
            ));
            let response = self.client.get(&url).send().await?;
            Ok(RepoPresence::from_status(response.status().as_u16()))
        })
    }

    fn create_mirror(
        &self,
        request: MirrorRequest,
        is_private: bool,
    ) -> Pin<Box<dyn Future<Output = Result<MirrorOutcome, GhToGiteaError>> + Send + '_>> {
        Box::pin(async move {
            let json_body =
                MigrateRepo::new(request, is_private, &self.github_username, &self.github_token);
            let response = self
                .client
                .post(self.api("/repos/migrate"))
                .json(&json_body)
                .send()
                .await?;

            match response.status() {
                StatusCode::CREATED => {
                    info!("Success: Repository {} Created", json_body.repo_name);
                    Ok(MirrorOutcome::Created)
                }
                StatusCode::CONFLICT => {
                    warn!("Warning: Repository {} Already Exists", json_body.repo_name);
                    Ok(MirrorOutcome::AlreadyExists)
                }
                status => {
                    let body = response.text().await?;
                    let request = serde_json::to_string(&json_body.redacted())?;
                    error!("{} {} {}", status.as_u16(), body, request);
                    Ok(MirrorOutcome::UnexpectedFailure {
                        status: status.as_u16(),
                        body,
                        request,
                    })
                }
            }
        })
    }
}
