//! Mirror the origin repositories onto the target
use futures::{stream, TryStreamExt};
use log::{error, info, warn};
use serde::Serialize;

use crate::cli::MirrorArgs;
use crate::errors::GhToGiteaError;
use crate::platform::{MirrorOutcome, OriginPlatform, RepoPresence, RepoStream, TargetPlatform};
use crate::utils::{MirrorRequest, Repo};

/// Exit code of a strict run where some repository failed
pub const EXIT_REPO_FAILURES: i32 = 3;

/// Options of one mirror run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOptions {
    /// Only mirror this repository
    pub repo: Option<String>,

    /// Fail on unexpected existence answers and report failures in the exit code
    pub strict: bool,

    /// Repositories processed at the same time, at least 1
    pub jobs: usize,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            repo: None,
            strict: false,
            jobs: 1,
        }
    }
}

impl From<&MirrorArgs> for MirrorOptions {
    fn from(args: &MirrorArgs) -> Self {
        Self {
            repo: args.repo.clone(),
            strict: args.strict,
            jobs: args.jobs.max(1),
        }
    }
}

/// What happened to one repository
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RepoOutcome {
    /// Forks are not mirrored
    SkippedFork,

    /// The mirror was already there before the run
    SkippedExisting,

    /// The mirror was created
    Created,

    /// The target reported a conflict when creating
    AlreadyMirrored,

    /// Something went wrong for this repository
    Failed {
        /// Human readable cause
        reason: String,
    },
}

/// Outcome of one repository
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RepoReport {
    /// Repository name
    pub name: String,

    /// What happened
    #[serde(flatten)]
    pub outcome: RepoOutcome,
}

/// Outcomes of a whole run, in enumeration order
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MirrorSummary {
    /// One entry per repository
    pub repos: Vec<RepoReport>,
}

impl MirrorSummary {
    /// Number of repositories matching `pred`
    pub fn count(&self, pred: impl Fn(&RepoOutcome) -> bool) -> usize {
        self.repos.iter().filter(|r| pred(&r.outcome)).count()
    }

    /// Number of failed repositories
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RepoOutcome::Failed { .. }))
    }

    /// 0, or [`EXIT_REPO_FAILURES`] when strict and some repository failed
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && self.failed() > 0 {
            EXIT_REPO_FAILURES
        } else {
            0
        }
    }

    /// Log the counters
    fn log(&self) {
        info!(
            "Done: {} repos, {} created, {} already mirrored, {} skipped (existing), {} skipped (fork), {} failed",
            self.repos.len(),
            self.count(|o| *o == RepoOutcome::Created),
            self.count(|o| *o == RepoOutcome::AlreadyMirrored),
            self.count(|o| *o == RepoOutcome::SkippedExisting),
            self.count(|o| *o == RepoOutcome::SkippedFork),
            self.failed()
        );
    }
}

/// Mirror every owned repository of `source_platform` (or only `options.repo`) onto `destination_platform`
/// # Errors
/// Error if the named repository can't be fetched or the listing fails
pub async fn mirror_repos(
    source_platform: &dyn OriginPlatform,
    destination_platform: &dyn TargetPlatform,
    options: &MirrorOptions,
) -> Result<MirrorSummary, GhToGiteaError> {
    let repos: RepoStream<'_> = match &options.repo {
        Some(name) => {
            let repo = source_platform.get_repository(name).await?;
            Box::pin(stream::iter([Ok::<Repo, GhToGiteaError>(repo)]))
        }
        None => source_platform.list_owned_repositories(),
    };
    let strict = options.strict;
    let mut reports = std::pin::pin!(repos
        .map_ok(|repo| async move {
            Ok::<_, GhToGiteaError>(mirror_one(destination_platform, repo, strict).await)
        })
        .try_buffered(options.jobs.max(1)));

    let mut summary = MirrorSummary::default();
    while let Some(report) = reports.try_next().await? {
        summary.repos.push(report);
    }
    summary.log();
    Ok(summary)
}

/// Decide and act for one repository
async fn mirror_one(
    destination_platform: &dyn TargetPlatform,
    repo: Repo,
    strict: bool,
) -> RepoReport {
    info!("Looking at repo {}", repo.name);
    let outcome = if repo.fork {
        info!("Skipping forked repo: {}", repo.name);
        RepoOutcome::SkippedFork
    } else {
        let request = MirrorRequest::from_repo(&repo);
        match destination_platform
            .repository_exists(&request.repo_name)
            .await
        {
            Ok(RepoPresence::Present) => {
                info!("Skipping existing repo: {}", repo.name);
                RepoOutcome::SkippedExisting
            }
            Ok(RepoPresence::Unknown(status)) if strict => {
                error!("Existence check of {} answered {status}", repo.name);
                RepoOutcome::Failed {
                    reason: format!("existence check answered {status}"),
                }
            }
            Ok(presence) => {
                if let RepoPresence::Unknown(status) = presence {
                    warn!(
                        "Existence check of {} answered {status}, creating anyway",
                        repo.name
                    );
                }
                create(destination_platform, request, repo.private).await
            }
            Err(e) => {
                error!("Existence check of {} failed: {e}", repo.name);
                RepoOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    };
    RepoReport {
        name: repo.name,
        outcome,
    }
}

/// Issue the migrate call and translate its outcome
async fn create(
    destination_platform: &dyn TargetPlatform,
    request: MirrorRequest,
    is_private: bool,
) -> RepoOutcome {
    let name = request.repo_name.clone();
    match destination_platform.create_mirror(request, is_private).await {
        Ok(MirrorOutcome::Created) => RepoOutcome::Created,
        Ok(MirrorOutcome::AlreadyExists) => RepoOutcome::AlreadyMirrored,
        Ok(MirrorOutcome::UnexpectedFailure { status, body, .. }) => RepoOutcome::Failed {
            reason: format!("migrate answered {status}: {body}"),
        },
        Err(e) => {
            error!("Creating mirror {name} failed: {e}");
            RepoOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}
