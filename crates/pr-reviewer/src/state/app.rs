//! Application State
//!
//! `AppState` composes the PR data, review and settings slices. The file
//! list and the selection live only in [`PrDataState`]; every view that
//! combines them with review progress is computed here.

use gh_client::{ChangedFile, DEFAULT_MAX_FILES};
use pr_reviewer_config::AppConfig;
use review_stream::ReviewRequest;

use super::{PrDataState, ReviewState, SettingsState};
use crate::domain_models::PrUrl;

pub const EMPTY_URL_MESSAGE: &str = "Please enter a PR URL";
pub const INVALID_URL_MESSAGE: &str =
    "Invalid GitHub PR URL. Expected format: https://github.com/owner/repo/pull/123";
pub const NO_DIFF_MESSAGE: &str = "No diff available for this file";

/// Application state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub running: bool,
    /// Bumped by every fetch; results of older work carry a stale value
    pub generation: u64,
    /// Cap on changed files fetched per PR
    pub max_files: usize,
    pub pr_data: PrDataState,
    pub review: ReviewState,
    pub settings: SettingsState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            generation: 0,
            max_files: DEFAULT_MAX_FILES,
            pr_data: PrDataState::default(),
            review: ReviewState::default(),
            settings: SettingsState::default(),
        }
    }
}

/// What reviewing the selected file amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewPlan {
    /// A review is running or nothing is selected
    Ignore,
    /// The selected file has no diff
    NoDiff,
    /// Stream a review of this file
    Start(ReviewTarget),
}

/// A file queued for review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTarget {
    /// Position within the reviewable files
    pub index: usize,
    pub filename: String,
    pub diff: String,
}

/// Validate the entered URL before anything is fetched
pub fn plan_fetch(url: &str) -> Result<PrUrl, &'static str> {
    if url.trim().is_empty() {
        return Err(EMPTY_URL_MESSAGE);
    }
    PrUrl::parse(url).ok_or(INVALID_URL_MESSAGE)
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            max_files: config.max_files,
            settings: SettingsState::from_config(config),
            ..Self::default()
        }
    }

    /// Files with a non-blank diff, in list order
    pub fn reviewable_files(&self) -> Vec<&ChangedFile> {
        self.pr_data
            .files
            .iter()
            .filter(|f| f.is_reviewable())
            .collect()
    }

    pub fn reviewable_file_count(&self) -> usize {
        self.pr_data
            .files
            .iter()
            .filter(|f| f.is_reviewable())
            .count()
    }

    pub fn reviewed_file_count(&self) -> usize {
        self.pr_data
            .files
            .iter()
            .filter(|f| f.is_reviewable() && self.review.is_reviewed(&f.filename))
            .count()
    }

    pub fn review_progress_text(&self) -> String {
        format!(
            "{}/{}",
            self.reviewed_file_count(),
            self.reviewable_file_count()
        )
    }

    pub fn all_files_reviewed(&self) -> bool {
        let reviewable = self.reviewable_file_count();
        reviewable > 0 && self.reviewed_file_count() == reviewable
    }

    pub fn selected_file_review(&self) -> &str {
        if self.pr_data.selected_file.is_empty() {
            return "";
        }
        self.review.review_for(&self.pr_data.selected_file)
    }

    pub fn has_selected_file_review(&self) -> bool {
        !self.selected_file_review().is_empty()
    }

    pub fn is_reviewing_selected_file(&self) -> bool {
        self.review.is_reviewing && self.review.current_review_file == self.pr_data.selected_file
    }

    /// Decide what a single-file review request does in this state
    pub fn plan_review(&self) -> ReviewPlan {
        if self.review.is_reviewing || self.pr_data.selected_file.is_empty() {
            return ReviewPlan::Ignore;
        }

        let diff = self.pr_data.selected_file_diff();
        if diff.is_empty() {
            return ReviewPlan::NoDiff;
        }

        let index = self
            .reviewable_files()
            .iter()
            .position(|f| f.filename == self.pr_data.selected_file)
            .unwrap_or(0);

        ReviewPlan::Start(ReviewTarget {
            index,
            filename: self.pr_data.selected_file.clone(),
            diff: diff.to_string(),
        })
    }

    /// Files a batch review would stream, or `None` when it may not start
    ///
    /// Files that already have a review are left out, so running the batch
    /// again only fills the gaps.
    pub fn plan_review_all(&self) -> Option<Vec<ReviewTarget>> {
        if self.review.is_reviewing {
            return None;
        }

        let reviewable = self.reviewable_files();
        if reviewable.is_empty() {
            return None;
        }

        let queue = reviewable
            .into_iter()
            .enumerate()
            .filter(|(_, f)| !f.filename.is_empty() && !f.patch.is_empty())
            .filter(|(_, f)| !self.review.is_reviewed(&f.filename))
            .map(|(index, f)| ReviewTarget {
                index,
                filename: f.filename.clone(),
                diff: f.patch.clone(),
            })
            .collect();
        Some(queue)
    }

    /// Build the provider request for one file from the current settings
    pub fn review_request(&self, target: &ReviewTarget) -> ReviewRequest {
        ReviewRequest {
            filename: target.filename.clone(),
            diff: target.diff.clone(),
            model: self.settings.model.clone(),
            provider: self.settings.provider,
            api_key: self.settings.api_key_option(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_client::FileStatus;
    use pretty_assertions::assert_eq;

    fn file(name: &str, patch: &str) -> ChangedFile {
        ChangedFile {
            filename: name.to_string(),
            status: FileStatus::Modified,
            additions: 1,
            deletions: 0,
            patch: patch.to_string(),
        }
    }

    fn state_with(files: Vec<ChangedFile>) -> AppState {
        let mut state = AppState::default();
        state.pr_data.pull_request.title = "Title".to_string();
        state.pr_data.files = files;
        state
    }

    #[test]
    fn test_plan_fetch() {
        assert_eq!(plan_fetch("  "), Err(EMPTY_URL_MESSAGE));
        assert_eq!(
            plan_fetch("https://github.com/foo/bar"),
            Err(INVALID_URL_MESSAGE)
        );
        assert_eq!(
            plan_fetch("https://github.com/foo/bar/pull/42").map(|pr| pr.pr_number),
            Ok(42)
        );
    }

    #[test]
    fn test_reviewable_files_skip_blank_patches() {
        let state = state_with(vec![
            file("image.png", ""),
            file("blank.txt", "  \n"),
            file("src/main.rs", "+x"),
        ]);
        let names: Vec<_> = state
            .reviewable_files()
            .iter()
            .map(|f| f.filename.as_str())
            .collect();
        assert_eq!(names, vec!["src/main.rs"]);
        assert_eq!(state.reviewable_file_count(), 1);
        assert_eq!(state.review_progress_text(), "0/1");
        assert!(!state.all_files_reviewed());
    }

    #[test]
    fn test_progress_counts_only_reviewable_files() {
        let mut state = state_with(vec![file("a.rs", "+a"), file("b.bin", "")]);
        // A review keyed by a non-reviewable file does not count
        state.review.begin("b.bin");
        assert_eq!(state.reviewed_file_count(), 0);

        state.review.begin("a.rs");
        assert_eq!(state.reviewed_file_count(), 1);
        assert!(state.reviewed_file_count() <= state.reviewable_file_count());
        assert!(state.all_files_reviewed());
    }

    #[test]
    fn test_all_files_reviewed_false_without_reviewable_files() {
        let state = state_with(vec![file("b.bin", "")]);
        assert_eq!(state.review_progress_text(), "0/0");
        assert!(!state.all_files_reviewed());
    }

    #[test]
    fn test_plan_review() {
        let mut state = state_with(vec![file("a.rs", "+a"), file("b.bin", "")]);
        assert_eq!(state.plan_review(), ReviewPlan::Ignore);

        state.pr_data.selected_file = "b.bin".to_string();
        assert_eq!(state.plan_review(), ReviewPlan::NoDiff);

        state.pr_data.selected_file = "gone.rs".to_string();
        assert_eq!(state.plan_review(), ReviewPlan::NoDiff);

        state.pr_data.selected_file = "a.rs".to_string();
        assert_eq!(
            state.plan_review(),
            ReviewPlan::Start(ReviewTarget {
                index: 0,
                filename: "a.rs".to_string(),
                diff: "+a".to_string(),
            })
        );

        state.review.is_reviewing = true;
        assert_eq!(state.plan_review(), ReviewPlan::Ignore);
    }

    #[test]
    fn test_plan_review_all_skips_reviewed_files() {
        let mut state = state_with(vec![
            file("a.rs", "+a"),
            file("logo.png", ""),
            file("b.rs", "+b"),
            file("c.rs", "+c"),
        ]);
        state.review.begin("b.rs");

        let queue: Vec<_> = state
            .plan_review_all()
            .unwrap()
            .into_iter()
            .map(|t| (t.index, t.filename))
            .collect();
        assert_eq!(
            queue,
            vec![(0, "a.rs".to_string()), (2, "c.rs".to_string())]
        );

        state.review.is_reviewing = true;
        assert_eq!(state.plan_review_all(), None);
    }

    #[test]
    fn test_plan_review_all_requires_reviewable_files() {
        let state = state_with(vec![file("logo.png", "")]);
        assert_eq!(state.plan_review_all(), None);
    }

    #[test]
    fn test_selected_file_review_views() {
        let mut state = state_with(vec![file("a.rs", "+a")]);
        assert_eq!(state.selected_file_review(), "");
        assert!(!state.is_reviewing_selected_file());

        state.pr_data.selected_file = "a.rs".to_string();
        state.review.is_reviewing = true;
        state.review.begin("a.rs");
        state.review.append("a.rs", "## Summary");
        assert!(state.is_reviewing_selected_file());
        assert!(state.has_selected_file_review());
        assert_eq!(state.selected_file_review(), "## Summary");
    }

    #[test]
    fn test_review_request_uses_settings() {
        let mut state = AppState::default();
        state.settings.api_key = " sk-test ".to_string();
        let request = state.review_request(&ReviewTarget {
            index: 0,
            filename: "a.rs".to_string(),
            diff: "+a".to_string(),
        });
        assert_eq!(request.model, "claude-sonnet-4-5-20250929");
        assert_eq!(request.api_key, Some("sk-test".to_string()));
    }
}
