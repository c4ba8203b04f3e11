//! # gh-to-gitea
//!
//! Mirror the GitHub repositories of a user to a Gitea instance
//!
//! ## Usage
//!
//! ```txt
//! Usage: gh-to-gitea [OPTIONS] [COMMAND]
//!
//! Commands:
//!   mirror   Mirror the repositories from GitHub to Gitea
//!   version  Print the version and exit
//!
//! Options:
//!      --gh-access-token <GH_ACCESS_TOKEN>  Access token for the GitHub API [env: GH_ACCESS_TOKEN]
//!      --gh-user-name <GH_USER_NAME>        Username for the GitHub API [env: GH_USERNAME=]
//!      --gh-api-url <GH_API_URL>            Base URL of the GitHub API [env: GH_API_URL=]
//!      --gt-access-token <GT_ACCESS_TOKEN>  Access token for the Gitea API [env: GT_ACCESS_TOKEN]
//!      --gt-url <GT_URL>                    URL of the Gitea instance (without /api/v1) [env: GT_URL=]
//!      --timeout <TIMEOUT>                  Timeout of each HTTP request, in seconds [env: GH_TO_GITEA_TIMEOUT=]
//!  -c, --config <CONFIG>                    Custom configuration file path
//!      --show-config-path                   Show the current config path
//!  -v, --verbose...                         Verbose mode (-v, -vv, -vvv)
//!  -h, --help                               Print help
//!  -V, --version                            Print version
//! ```
//!
//! `mirror` accepts `--repo <REPO>`, `--strict`, `--jobs <N>` and `--json`.

#![warn(clippy::all, rust_2018_idioms, missing_docs)]
#![deny(
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod cli;
pub mod config;
pub mod errors;
pub(crate) mod macros;
pub mod platform;
pub mod sync;
pub mod utils;
pub(crate) use macros::config_value;

pub mod gitea;
pub mod github;

pub use cli::{gh_to_gitea_main, GhToGiteaCli};
pub use config::GhToGiteaConfig;
pub use errors::{GhToGiteaError, GhToGiteaErrorKind};
pub use gitea::{
    config::{GiteaConfig, GiteaCredentials},
    platform::GiteaPlatform,
    repo::MigrateRepo,
};
pub use github::{
    config::{GithubConfig, GithubCredentials},
    platform::GithubPlatform,
};
pub use platform::{MirrorOutcome, OriginPlatform, PlatformType, RepoPresence, TargetPlatform};
pub use sync::{mirror_repos, MirrorOptions, MirrorSummary, RepoOutcome, RepoReport};
pub use utils::{main_sync, MirrorRequest, Repo};
