//! Error handling for the gh-to-gitea crate.
use std::{error::Error as StdError, fmt};

use crate::platform::PlatformType;

/// Error type for the gh-to-gitea crate.
#[derive(Debug)]
pub struct GhToGiteaError {
    /// Inner error.
    inner: Box<Inner>,
}

impl GhToGiteaError {
    /// Create a new error.
    pub(crate) fn new(kind: GhToGiteaErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                source: None,
                platform: None,
            }),
        }
    }

    /// Create a new error with a textual source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text.to_string())));
        self
    }

    /// Create a new error with a platform.
    pub(crate) fn with_platform(mut self, platform: PlatformType) -> Self {
        self.inner.platform = Some(platform);
        self
    }

    /// Error for a credential that no source provided.
    pub(crate) fn missing_credential(flag: &str, env: &str) -> Self {
        Self::new(GhToGiteaErrorKind::MissingCredential).with_text(&format!(
            "missing required value: pass {flag}, set {env}, or add it to the config file"
        ))
    }

    /// Kind of the error.
    pub fn kind(&self) -> &GhToGiteaErrorKind {
        &self.inner.kind
    }

    /// Platform the error happened on, if any.
    pub fn platform(&self) -> Option<&PlatformType> {
        self.inner.platform.as_ref()
    }

    /// Process exit code for this error: 1 for configuration problems, 2 for API failures.
    pub fn exit_code(&self) -> i32 {
        match self.inner.kind {
            GhToGiteaErrorKind::Config | GhToGiteaErrorKind::MissingCredential => 1,
            _ => 2,
        }
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the gh-to-gitea crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: GhToGiteaErrorKind,

    /// Platform error
    platform: Option<PlatformType>,

    /// Source error.
    source: Option<BoxError>,
}

/// Kind of failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GhToGiteaErrorKind {
    /// Invalid or unreadable configuration.
    Config,

    /// A required credential was not supplied.
    MissingCredential,

    /// Error related to the reqwest crate.
    Reqwest,

    /// Error related to serde.
    Serde,

    /// The platform rejected the token or the user could not be resolved.
    Authentication,

    /// Error related to listing repositories.
    GetAllRepos,

    /// Error related to fetching one repository.
    GetRepo,

    /// The requested repository does not exist.
    RepoNotFound,

    /// The existence check returned an unexpected status.
    RepoExistence,

    /// Error related to the migrate call.
    Mirror,
}

impl fmt::Display for GhToGiteaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.inner.kind)?;
        if let Some(platform) = &self.inner.platform {
            write!(f, " ({platform})")?;
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for GhToGiteaError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl GhToGiteaError {
    /// Wrap a foreign error under the given kind.
    fn from_source(kind: GhToGiteaErrorKind, e: impl Into<BoxError>) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                source: Some(e.into()),
                platform: None,
            }),
        }
    }
}

impl From<reqwest::Error> for GhToGiteaError {
    fn from(e: reqwest::Error) -> Self {
        Self::from_source(GhToGiteaErrorKind::Reqwest, e)
    }
}

impl From<serde_json::Error> for GhToGiteaError {
    fn from(e: serde_json::Error) -> Self {
        Self::from_source(GhToGiteaErrorKind::Serde, e)
    }
}

impl From<toml::de::Error> for GhToGiteaError {
    fn from(e: toml::de::Error) -> Self {
        Self::from_source(GhToGiteaErrorKind::Config, e)
    }
}

impl From<url::ParseError> for GhToGiteaError {
    fn from(e: url::ParseError) -> Self {
        Self::from_source(GhToGiteaErrorKind::Config, e)
    }
}

impl From<std::io::Error> for GhToGiteaError {
    fn from(e: std::io::Error) -> Self {
        Self::from_source(GhToGiteaErrorKind::Config, e)
    }
}

impl From<&str> for GhToGiteaError {
    fn from(text: &str) -> Self {
        Self::new(GhToGiteaErrorKind::Config).with_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_split_config_from_api() {
        assert_eq!(GhToGiteaError::missing_credential("--gt-url", "GT_URL").exit_code(), 1);
        assert_eq!(GhToGiteaError::from("bad").exit_code(), 1);
        let auth = GhToGiteaError::new(GhToGiteaErrorKind::Authentication)
            .with_platform(PlatformType::Gitea);
        assert_eq!(auth.exit_code(), 2);
        assert_eq!(
            GhToGiteaError::new(GhToGiteaErrorKind::RepoNotFound).exit_code(),
            2
        );
    }

    #[test]
    fn display_mentions_platform_and_text() {
        let e = GhToGiteaError::new(GhToGiteaErrorKind::RepoNotFound)
            .with_platform(PlatformType::Github)
            .with_text("nope");
        assert_eq!(e.to_string(), "RepoNotFound (github): nope");
    }

    #[test]
    fn missing_credential_names_flag_and_env() {
        let e = GhToGiteaError::missing_credential("--gh-access-token", "GH_ACCESS_TOKEN");
        assert_eq!(e.kind(), &GhToGiteaErrorKind::MissingCredential);
        let text = e.to_string();
        assert!(text.contains("--gh-access-token"));
        assert!(text.contains("GH_ACCESS_TOKEN"));
    }
}
