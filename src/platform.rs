//! Seams between the orchestrator and the hosting platforms
use std::{future::Future, pin::Pin};

use futures::Stream;

use crate::{
    errors::GhToGiteaError,
    utils::{MirrorRequest, Repo},
};

/// Lazy stream of repositories, errors included.
pub type RepoStream<'a> = Pin<Box<dyn Stream<Item = Result<Repo, GhToGiteaError>> + Send + 'a>>;

/// Read-only source of repositories
pub trait OriginPlatform: Sync + Send {
    /// Repositories owned by the authenticated user, fetched page by page as the stream is polled.
    fn list_owned_repositories(&self) -> RepoStream<'_>;

    /// One repository of the authenticated user, by name.
    fn get_repository(
        &self,
        name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Repo, GhToGiteaError>> + Send + '_>>;

    /// Login of the authenticated user.
    fn get_username(&self) -> &str;

    /// Base URL of the API.
    fn get_remote_url(&self) -> &str;
}

/// Writable destination of mirrors
pub trait TargetPlatform: Sync + Send {
    /// Look up `name` in the namespace of the authenticated user.
    fn repository_exists(
        &self,
        name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<RepoPresence, GhToGiteaError>> + Send + '_>>;

    /// Ask the platform to migrate `request.clone_addr` as a mirror.
    fn create_mirror(
        &self,
        request: MirrorRequest,
        is_private: bool,
    ) -> Pin<Box<dyn Future<Output = Result<MirrorOutcome, GhToGiteaError>> + Send + '_>>;

    /// Login of the authenticated user.
    fn get_username(&self) -> &str;

    /// Base URL of the instance.
    fn get_remote_url(&self) -> &str;
}

/// Result of an existence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoPresence {
    /// The lookup answered 200.
    Present,

    /// The lookup answered 404.
    Absent,

    /// Any other status.
    Unknown(u16),
}

impl RepoPresence {
    /// Build from an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => RepoPresence::Present,
            404 => RepoPresence::Absent,
            other => RepoPresence::Unknown(other),
        }
    }

    /// True only for a 200 answer.
    pub fn exists(&self) -> bool {
        matches!(self, RepoPresence::Present)
    }
}

/// Result of a migrate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorOutcome {
    /// 201
    Created,

    /// 409
    AlreadyExists,

    /// Anything else.
    UnexpectedFailure {
        /// HTTP status code
        status: u16,

        /// Response body
        body: String,

        /// Serialized request, secrets redacted
        request: String,
    },
}

/// Supported platforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformType {
    /// Origin
    Github,

    /// Target
    Gitea,
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformType::Github => write!(f, "github"),
            PlatformType::Gitea => write!(f, "gitea"),
        }
    }
}
