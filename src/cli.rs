//! Command line options for the gh-to-gitea tool
use crate::{
    config::GhToGiteaConfig,
    errors::GhToGiteaError,
    sync::MirrorOptions,
    utils::main_sync,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// gh-to-gitea - Mirror GitHub repositories to Gitea
///
/// Mirrors the repositories owned by the authenticated GitHub user into the
/// namespace of the authenticated Gitea user. Forks are never mirrored.
#[derive(Parser, Default, Clone, Debug)]
#[command(name = "gh-to-gitea", version)]
pub struct GhToGiteaCli {
    /// Access token for the GitHub API
    #[arg(long, env = "GH_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub gh_access_token: Option<String>,

    /// Username for the GitHub API
    #[arg(long, env = "GH_USERNAME", global = true)]
    pub gh_user_name: Option<String>,

    /// Base URL of the GitHub API
    #[arg(long, env = "GH_API_URL", global = true)]
    pub gh_api_url: Option<String>,

    /// Access token for the Gitea API
    #[arg(long, env = "GT_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub gt_access_token: Option<String>,

    /// URL of the Gitea instance (without /api/v1)
    #[arg(long, env = "GT_URL", global = true)]
    pub gt_url: Option<String>,

    /// Timeout of each HTTP request, in seconds
    #[arg(long, env = "GH_TO_GITEA_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Custom configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to run (defaults to `mirror`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Mirror the repositories from GitHub to Gitea.
    ///
    /// Optionally mirror a specific repository, useful for debugging or testing.
    Mirror(MirrorArgs),

    /// Print the version and exit
    Version,
}

/// Options of the `mirror` command
#[derive(Args, Default, Clone, Debug)]
pub struct MirrorArgs {
    /// Specific repo to mirror
    #[arg(long)]
    pub repo: Option<String>,

    /// Treat unexpected existence answers as failures and exit non-zero if any repository failed
    #[arg(long)]
    pub strict: bool,

    /// Number of repositories processed at the same time
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Print the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Run the gh-to-gitea tool with the provided command line options, returning the exit code
/// # Errors
/// Error if the configuration is incomplete or a fatal API error happens
pub async fn gh_to_gitea_main(cli_args: GhToGiteaCli) -> Result<i32, GhToGiteaError> {
    if cli_args.show_config_path {
        let path = match cli_args.config.clone() {
            Some(path) => path,
            None => GhToGiteaConfig::get_config_path()
                .ok_or("Unable to get your home dir! home::home_dir() isn't working")?,
        };
        println!("{}", path.display());
        return Ok(0);
    }
    let mirror_args = match &cli_args.command {
        Some(Commands::Version) => {
            println!("{} version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return Ok(0);
        }
        Some(Commands::Mirror(args)) => args.clone(),
        None => MirrorArgs {
            jobs: 1,
            ..Default::default()
        },
    };
    let config = GhToGiteaConfig::try_new(&cli_args)?;
    let options = MirrorOptions::from(&mirror_args);
    let summary = main_sync(&config, &options).await?;
    if mirror_args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(summary.exit_code(options.strict))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_options_parse() {
        let cli = GhToGiteaCli::parse_from([
            "gh-to-gitea",
            "--gt-url",
            "https://gitea.test",
            "mirror",
            "--repo",
            "dotfiles",
            "--strict",
            "-j",
            "4",
        ]);
        assert_eq!(cli.gt_url.as_deref(), Some("https://gitea.test"));
        match cli.command {
            Some(Commands::Mirror(args)) => {
                assert_eq!(args.repo.as_deref(), Some("dotfiles"));
                assert!(args.strict);
                assert_eq!(args.jobs, 4);
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn credentials_are_accepted_after_the_subcommand() {
        let cli = GhToGiteaCli::parse_from(["gh-to-gitea", "mirror", "--gh-user-name", "octocat"]);
        assert_eq!(cli.gh_user_name.as_deref(), Some("octocat"));
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = GhToGiteaCli::try_parse_from(["gh-to-gitea", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[tokio::test]
    async fn version_command_needs_no_credentials() {
        let cli = GhToGiteaCli::parse_from(["gh-to-gitea", "version"]);
        assert_eq!(gh_to_gitea_main(cli).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn show_config_path_uses_explicit_path() {
        let cli = GhToGiteaCli::parse_from([
            "gh-to-gitea",
            "--show-config-path",
            "--config",
            "/tmp/custom.toml",
        ]);
        assert_eq!(gh_to_gitea_main(cli).await.unwrap(), 0);
    }
}
