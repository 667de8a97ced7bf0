//! Pull Request Reducer
//!
//! Handles fetching, loading results and file selection.

use crate::actions::PullRequestAction;
use crate::state::{plan_fetch, AppState};

pub fn reduce(mut state: AppState, action: &PullRequestAction) -> AppState {
    match action {
        PullRequestAction::SetUrl(url) => {
            state.pr_data.pr_url = url.clone();
        }

        PullRequestAction::Fetch => {
            // Reset precedes validation, so even a rejected URL clears the old PR
            state.generation += 1;
            state.pr_data.reset();
            state.review.reset();

            match plan_fetch(&state.pr_data.pr_url) {
                Ok(pr) => {
                    state.pr_data.is_loading = true;
                    log::debug!("Fetch {} started (generation {})", pr, state.generation);
                }
                Err(message) => {
                    log::warn!("Fetch rejected: {}", message);
                    state.pr_data.error_message = message.to_string();
                }
            }
        }

        PullRequestAction::Loaded {
            generation,
            pull_request,
            files,
        } => {
            if *generation != state.generation {
                log::debug!("Dropping PR data of stale fetch {}", generation);
                return state;
            }
            state.pr_data.pull_request = pull_request.clone();
            state.pr_data.files = files.files.clone();
            state.pr_data.files_truncated = files.truncated;
            state.pr_data.is_loading = false;
            log::info!(
                "Loaded PR \"{}\" with {} files{}",
                pull_request.title,
                files.files.len(),
                if files.truncated { " (truncated)" } else { "" }
            );
        }

        PullRequestAction::LoadError { generation, error } => {
            if *generation != state.generation {
                log::debug!("Dropping error of stale fetch {}: {}", generation, error);
                return state;
            }
            state.pr_data.error_message = error.clone();
            state.pr_data.is_loading = false;
            log::error!("Failed to load PR: {}", error);
        }

        PullRequestAction::SelectFile(filename) => {
            state.pr_data.selected_file = filename.clone();
            log::debug!("Selected file {}", filename);
        }
    }

    state
}
