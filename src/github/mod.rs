//! GitHub API module, the origin side.
pub(crate) mod config;
pub(crate) mod platform;
pub(crate) mod repo;

/// Default GitHub API URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub API Header
const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API Version
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Repositories requested per page
const GITHUB_PER_PAGE: usize = 100;
