//! Pull request actions

use gh_client::{PullRequest, PullRequestFiles};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullRequestAction {
    /// Remember the URL to fetch
    SetUrl(String),
    /// Reset everything and fetch the PR behind the stored URL
    Fetch,
    /// Metadata and files arrived
    Loaded {
        generation: u64,
        pull_request: PullRequest,
        files: PullRequestFiles,
    },
    /// Fetching failed with a user-facing reason
    LoadError { generation: u64, error: String },
    /// Select a file by name (no existence check)
    SelectFile(String),
}
