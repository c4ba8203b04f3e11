//! Gitea API module, the target side.
pub(crate) mod config;
pub(crate) mod platform;
pub(crate) mod repo;

/// Path of the API below the instance URL
const GITEA_API_PATH: &str = "/api/v1";

/// Service identifier sent to the migrate endpoint for GitHub sources
const GITEA_SERVICE_GITHUB: &str = "github";
