//! GitHub client traits
//!
//! `GitHubClient` is what every client implementation must satisfy.
//! `ClientProvider` hands out clients for a given token, so callers do not
//! need to know how clients are built or cached.

use crate::error::GitHubError;
use crate::types::{PullRequest, PullRequestFiles};
use async_trait::async_trait;
use std::sync::Arc;

/// GitHub API client trait
///
/// Defines the interface for reading pull request data from the GitHub API.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, PullRequest};
///
/// async fn title(client: &dyn GitHubClient) -> Result<String, gh_client::GitHubError> {
///     Ok(client.fetch_pull_request("rust-lang", "rust", 1).await?.title)
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch a single pull request by number
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The pull request metadata, or an error if not found.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> Result<PullRequest, GitHubError>;

    /// Fetch the files changed by a pull request
    ///
    /// Pages through the listing transparently until `max_files` files
    /// were collected or no further page exists.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    /// * `max_files` - Upper bound on the number of files returned
    ///
    /// # Returns
    ///
    /// Files in API order plus a flag telling whether the cap was hit.
    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        max_files: usize,
    ) -> Result<PullRequestFiles, GitHubError>;
}

/// Source of GitHub clients keyed by authentication token
///
/// `token` is the explicitly configured token; `None` lets the provider
/// fall back to whatever ambient credentials it knows about.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    async fn client(&self, token: Option<&str>) -> Result<Arc<dyn GitHubClient>, GitHubError>;
}
