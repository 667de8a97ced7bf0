//! Errors surfaced by the GitHub client
//!
//! The `Display` output of each variant is the human-readable reason shown
//! to the user, so the wording is part of the contract.

use thiserror::Error;

/// Failure while talking to the GitHub API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitHubError {
    /// HTTP 404 for the PR or one of its sub-resources
    #[error(
        "PR not found: {owner}/{repo}#{pr_number}. \
         The repository may be private or the PR doesn't exist."
    )]
    NotFound {
        owner: String,
        repo: String,
        pr_number: u64,
    },

    /// HTTP 403, which GitHub uses for exhausted rate limits
    #[error(
        "GitHub API rate limit exceeded. Remaining requests: {remaining}. \
         Add a GitHub token in settings to increase your rate limit."
    )]
    RateLimited { remaining: String },

    /// Any other API or transport failure
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Building the HTTP client failed
    #[error("Failed to create GitHub client: {0}")]
    Client(String),
}

impl GitHubError {
    /// Map an octocrab error for the given PR into a typed error
    pub fn from_octocrab(err: octocrab::Error, owner: &str, repo: &str, pr_number: u64) -> Self {
        match status_code(&err) {
            Some(404) => GitHubError::NotFound {
                owner: owner.to_string(),
                repo: repo.to_string(),
                pr_number,
            },
            Some(403) => GitHubError::RateLimited {
                remaining: "unknown".to_string(),
            },
            _ => GitHubError::Api(err.to_string()),
        }
    }

    /// Fill in the remaining request count of a rate limit error
    pub fn with_remaining(self, remaining: usize) -> Self {
        match self {
            GitHubError::RateLimited { .. } => GitHubError::RateLimited {
                remaining: remaining.to_string(),
            },
            other => other,
        }
    }
}

fn status_code(err: &octocrab::Error) -> Option<u16> {
    match err {
        octocrab::Error::GitHub { source, .. } => Some(source.status_code.as_u16()),
        _ => None,
    }
}
