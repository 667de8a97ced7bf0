//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from application domain models
//! to keep this crate pure and reusable.

use serde::{Deserialize, Serialize};

/// Default cap on the number of changed files fetched for one PR
pub const DEFAULT_MAX_FILES: usize = 100;

/// Pull request metadata from the GitHub API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR title
    pub title: String,

    /// Author's GitHub username
    pub author: String,

    /// PR body/description (empty when GitHub reports none)
    pub body: String,

    /// Base branch name (e.g., "main")
    pub base_branch: String,

    /// HEAD branch name (e.g., "feature/foo")
    pub head_branch: String,

    /// Number of lines added
    pub additions: u64,

    /// Number of lines deleted
    pub deletions: u64,
}

/// Change status of a file within a pull request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// File was created by the PR
    Added,
    /// File was deleted by the PR
    Removed,
    /// File was moved/renamed
    Renamed,
    /// File content changed
    #[default]
    Modified,
}

impl FileStatus {
    /// Lowercase label as used by the GitHub API
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Added => "added",
            FileStatus::Removed => "removed",
            FileStatus::Renamed => "renamed",
            FileStatus::Modified => "modified",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A file changed by a pull request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path of the file, unique within one PR
    pub filename: String,

    /// How the file changed
    pub status: FileStatus,

    /// Number of lines added
    pub additions: u64,

    /// Number of lines deleted
    pub deletions: u64,

    /// Unified diff text. Empty for binary or oversized files.
    pub patch: String,
}

impl ChangedFile {
    /// A file is reviewable when it carries a non-blank diff
    pub fn is_reviewable(&self) -> bool {
        !self.patch.trim().is_empty()
    }
}

/// Result of a paginated changed-files fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestFiles {
    /// Files in API order, at most `max_files` of them
    pub files: Vec<ChangedFile>,

    /// True when the file cap was reached
    pub truncated: bool,
}
