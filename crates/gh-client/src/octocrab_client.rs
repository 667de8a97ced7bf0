//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real API calls without any caching.

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::types::{ChangedFile, FileStatus, PullRequest, PullRequestFiles};
use async_trait::async_trait;
use log::debug;
use octocrab::models::repos::{DiffEntry, DiffEntryStatus};
use octocrab::{Octocrab, Page};
use serde::Serialize;
use std::sync::Arc;

/// GitHub never returns more than this many files per page
const MAX_PER_PAGE: usize = 100;

#[derive(Serialize)]
struct ListFilesParams {
    per_page: u8,
}

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Map a failed call, asking GitHub for the remaining quota on 403
    async fn api_error(
        &self,
        err: octocrab::Error,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> GitHubError {
        let error = GitHubError::from_octocrab(err, owner, repo, pr_number);
        if !matches!(error, GitHubError::RateLimited { .. }) {
            return error;
        }

        match self.octocrab.ratelimit().get().await {
            Ok(limits) => error.with_remaining(limits.resources.core.remaining),
            Err(e) => {
                debug!("Could not read rate limit: {}", e);
                error
            }
        }
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> Result<PullRequest, GitHubError> {
        debug!("Fetching PR metadata for {}/{}#{}", owner, repo, pr_number);

        let pr = match self.octocrab.pulls(owner, repo).get(pr_number).await {
            Ok(pr) => pr,
            Err(e) => return Err(self.api_error(e, owner, repo, pr_number).await),
        };

        Ok(convert_pull_request(&pr))
    }

    async fn fetch_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
        max_files: usize,
    ) -> Result<PullRequestFiles, GitHubError> {
        debug!(
            "Fetching changed files for {}/{}#{} (max {})",
            owner, repo, pr_number, max_files
        );

        let mut files = Vec::new();
        let mut truncated = false;

        if max_files == 0 {
            return Ok(PullRequestFiles { files, truncated });
        }

        let route = format!("/repos/{}/{}/pulls/{}/files", owner, repo, pr_number);
        let params = ListFilesParams {
            per_page: max_files.min(MAX_PER_PAGE) as u8,
        };
        let mut page: Page<DiffEntry> = match self.octocrab.get(route, Some(&params)).await {
            Ok(page) => page,
            Err(e) => return Err(self.api_error(e, owner, repo, pr_number).await),
        };

        loop {
            let items = page.items.iter().map(convert_diff_entry).collect();
            if accumulate_page(&mut files, items, max_files) {
                truncated = true;
                break;
            }

            match self.octocrab.get_page::<DiffEntry>(&page.next).await {
                Ok(Some(next_page)) => page = next_page,
                Ok(None) => break,
                Err(e) => return Err(self.api_error(e, owner, repo, pr_number).await),
            }
        }

        debug!(
            "Fetched {} files for {}/{}#{} (truncated: {})",
            files.len(),
            owner,
            repo,
            pr_number,
            truncated
        );
        Ok(PullRequestFiles { files, truncated })
    }
}

/// Append one page of files, cutting the list at `max_files`.
///
/// Returns true once the cap is reached, in which case `files` holds
/// exactly `max_files` entries.
fn accumulate_page(files: &mut Vec<ChangedFile>, page: Vec<ChangedFile>, max_files: usize) -> bool {
    files.extend(page);
    if files.len() >= max_files {
        files.truncate(max_files);
        return true;
    }
    false
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        title: pr.title.clone().unwrap_or_default(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_default(),
        body: pr.body.clone().unwrap_or_default(),
        base_branch: pr.base.ref_field.clone(),
        head_branch: pr.head.ref_field.clone(),
        additions: pr.additions.unwrap_or(0),
        deletions: pr.deletions.unwrap_or(0),
    }
}

/// Convert an octocrab diff entry to our ChangedFile type
fn convert_diff_entry(entry: &DiffEntry) -> ChangedFile {
    ChangedFile {
        filename: entry.filename.clone(),
        status: convert_status(&entry.status),
        additions: entry.additions,
        deletions: entry.deletions,
        patch: entry.patch.clone().unwrap_or_default(),
    }
}

/// Convert octocrab DiffEntryStatus to our enum
fn convert_status(status: &DiffEntryStatus) -> FileStatus {
    match status {
        DiffEntryStatus::Added => FileStatus::Added,
        DiffEntryStatus::Removed => FileStatus::Removed,
        DiffEntryStatus::Renamed => FileStatus::Renamed,
        _ => FileStatus::Modified,
    }
}
