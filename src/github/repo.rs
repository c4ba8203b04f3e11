//! Github Repo struct and conversion to Repo struct
use crate::utils::Repo;
use serde::{Deserialize, Serialize};

/// Github Repo
#[derive(Deserialize, Serialize, Default, Debug, Clone)]
pub struct RepoGithub {
    /// Repository name
    pub name: String,

    /// Repository description
    pub description: Option<String>,

    /// Repository private status
    pub private: bool,

    /// HTTPS clone URL
    pub clone_url: String,

    /// Repository fork status
    pub fork: bool,
}

/// Authenticated user
#[derive(Deserialize, Debug, Clone)]
pub struct UserGithub {
    /// Login name
    pub login: String,
}

impl From<RepoGithub> for Repo {
    fn from(repo: RepoGithub) -> Self {
        Repo {
            name: repo.name,
            description: repo.description,
            clone_url: repo.clone_url,
            private: repo.private,
            fork: repo.fork,
        }
    }
}
