//! Loaded pull request state

use gh_client::{ChangedFile, PullRequest};

/// The single currently loaded PR, its files and the selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrDataState {
    /// URL as last entered by the user
    pub pr_url: String,
    /// Metadata of the loaded PR (all empty until a fetch succeeds)
    pub pull_request: PullRequest,
    /// Changed files in API order
    pub files: Vec<ChangedFile>,
    /// The files listing hit the configured cap
    pub files_truncated: bool,
    /// Selected filename, empty when nothing is selected
    pub selected_file: String,
    pub is_loading: bool,
    pub error_message: String,
}

impl PrDataState {
    /// Clear everything a fetch replaces. The entered URL survives.
    pub fn reset(&mut self) {
        *self = Self {
            pr_url: std::mem::take(&mut self.pr_url),
            ..Self::default()
        };
    }

    pub fn has_pr_loaded(&self) -> bool {
        !self.pull_request.title.is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.pull_request.body.trim().is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Look up a changed file by name
    pub fn find_file(&self, filename: &str) -> Option<&ChangedFile> {
        if filename.is_empty() {
            return None;
        }
        self.files.iter().find(|f| f.filename == filename)
    }

    pub fn selected_file_data(&self) -> Option<&ChangedFile> {
        self.find_file(&self.selected_file)
    }

    pub fn selected_file_diff(&self) -> &str {
        self.selected_file_data()
            .map(|f| f.patch.as_str())
            .unwrap_or_default()
    }

    pub fn selected_file_has_diff(&self) -> bool {
        !self.selected_file_diff().is_empty()
    }

    pub fn selected_file_additions(&self) -> u64 {
        self.selected_file_data().map(|f| f.additions).unwrap_or(0)
    }

    pub fn selected_file_deletions(&self) -> u64 {
        self.selected_file_data().map(|f| f.deletions).unwrap_or(0)
    }

    /// Status label of the selection, empty when nothing matches
    pub fn selected_file_status(&self) -> &'static str {
        self.selected_file_data()
            .map(|f| f.status.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_client::FileStatus;
    use pretty_assertions::assert_eq;

    fn loaded() -> PrDataState {
        PrDataState {
            pr_url: "https://github.com/foo/bar/pull/42".to_string(),
            pull_request: PullRequest {
                title: "Add parser".to_string(),
                body: "  \n".to_string(),
                ..PullRequest::default()
            },
            files: vec![ChangedFile {
                filename: "src/lib.rs".to_string(),
                status: FileStatus::Added,
                additions: 12,
                deletions: 3,
                patch: "@@ -0,0 +1 @@\n+fn main() {}".to_string(),
            }],
            files_truncated: true,
            selected_file: "src/lib.rs".to_string(),
            is_loading: false,
            error_message: "old".to_string(),
        }
    }

    #[test]
    fn test_selected_file_views() {
        let state = loaded();
        assert!(state.has_pr_loaded());
        assert!(!state.has_description());
        assert_eq!(state.file_count(), 1);
        assert!(state.selected_file_has_diff());
        assert_eq!(state.selected_file_additions(), 12);
        assert_eq!(state.selected_file_deletions(), 3);
        assert_eq!(state.selected_file_status(), "added");
    }

    #[test]
    fn test_selection_without_match_degrades_to_empty() {
        for selected in ["", "does/not/exist.rs"] {
            let state = PrDataState {
                selected_file: selected.to_string(),
                ..loaded()
            };
            assert_eq!(state.selected_file_data(), None);
            assert_eq!(state.selected_file_diff(), "");
            assert!(!state.selected_file_has_diff());
            assert_eq!(state.selected_file_additions(), 0);
            assert_eq!(state.selected_file_deletions(), 0);
            assert_eq!(state.selected_file_status(), "");
        }
    }

    #[test]
    fn test_reset_keeps_url_only() {
        let mut state = loaded();
        state.reset();
        assert_eq!(
            state,
            PrDataState {
                pr_url: "https://github.com/foo/bar/pull/42".to_string(),
                ..PrDataState::default()
            }
        );
    }
}
