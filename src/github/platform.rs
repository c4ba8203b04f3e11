//! Github Platform
use super::{GITHUB_API_HEADER, GITHUB_API_VERSION, GITHUB_PER_PAGE};
use crate::{
    errors::{GhToGiteaError, GhToGiteaErrorKind},
    github::{
        config::GithubCredentials,
        repo::{RepoGithub, UserGithub},
    },
    platform::{OriginPlatform, PlatformType, RepoStream},
    utils::{build_client, sensitive_header, Repo},
};
use futures::{stream, TryStreamExt};
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    StatusCode,
};
use std::{future::Future, pin::Pin};
use urlencoding::encode;

/// Github Platform
#[derive(Debug, Clone)]
pub struct GithubPlatform {
    /// Login of the authenticated user
    username: String,

    /// Github API URL
    api_url: String,

    /// Reqwest client, carrying the token
    client: reqwest::Client,
}

impl GithubPlatform {
    /// Build the session and resolve the authenticated user
    /// # Errors
    /// Error if the API is unreachable or the token is rejected
    pub async fn authenticate(credentials: &GithubCredentials) -> Result<Self, GhToGiteaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            sensitive_header(&format!("Bearer {}", credentials.token))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(GITHUB_API_HEADER, HeaderValue::from_static(GITHUB_API_VERSION));
        let client = build_client(headers, credentials.timeout)?;

        let url = format!("{}/user", credentials.api_url);
        let response = client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(GhToGiteaError::new(GhToGiteaErrorKind::Authentication)
                .with_platform(PlatformType::Github)
                .with_text(&format!("{status}: {text}")));
        }
        let user: UserGithub = response.json().await?;
        Ok(Self {
            username: user.login,
            api_url: credentials.api_url.clone(),
            client,
        })
    }

    /// Fetch one page of owned repositories; `None` once the listing is exhausted
    async fn next_page(
        &self,
        page: Option<usize>,
    ) -> Result<Option<(Vec<Repo>, Option<usize>)>, GhToGiteaError> {
        let Some(page) = page else {
            return Ok(None);
        };
        let url = format!("{}/user/repos", self.api_url);
        let per_page = GITHUB_PER_PAGE.to_string();
        let page_str = page.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("type", "owner"),
                ("per_page", per_page.as_str()),
                ("page", page_str.as_str()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            let text = response.text().await?;
            return Err(GhToGiteaError::new(GhToGiteaErrorKind::GetAllRepos)
                .with_platform(PlatformType::Github)
                .with_text(&text));
        }
        let text = response.text().await?;
        let repos: Vec<RepoGithub> = serde_json::from_str(&text)?;
        debug!("Requested github (page {}): {}", page, repos.len());
        if repos.is_empty() {
            return Ok(None);
        }
        let next = if repos.len() < GITHUB_PER_PAGE {
            None
        } else {
            Some(page + 1)
        };
        Ok(Some((repos.into_iter().map(Repo::from).collect(), next)))
    }
}

impl OriginPlatform for GithubPlatform {
    fn get_remote_url(&self) -> &str {
        &self.api_url
    }

    fn get_username(&self) -> &str {
        &self.username
    }

    fn list_owned_repositories(&self) -> RepoStream<'_> {
        let pages = stream::try_unfold(Some(1), move |page| self.next_page(page));
        Box::pin(
            pages
                .map_ok(|repos| stream::iter(repos.into_iter().map(Ok::<Repo, GhToGiteaError>)))
                .try_flatten(),
        )
    }

    fn get_repository(
        &self,
        repo_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Repo, GhToGiteaError>> + Send + '_>> {
        let repo_name = repo_name.to_string();
        Box::pin(async move {
            let url = format!(
                "{}/repos/{}/{}",
                self.api_url,
                encode(&self.username),
                encode(&repo_name)
            );
            let response = self.client.get(&url).send().await?;
            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Err(GhToGiteaError::new(GhToGiteaErrorKind::RepoNotFound)
                    .with_platform(PlatformType::Github)
                    .with_text(&format!("{}/{}", self.username, repo_name)));
            }
            if !status.is_success() {
                let text = response.text().await?;
                return Err(GhToGiteaError::new(GhToGiteaErrorKind::GetRepo)
                    .with_platform(PlatformType::Github)
                    .with_text(&text));
            }
            let repo: RepoGithub = response.json().await?;
            Ok(repo.into())
        })
    }
}
