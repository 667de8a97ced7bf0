//! Review Reducer
//!
//! Applies the review lifecycle. The guards mirror the ones the review
//! middleware uses to decide whether a stream is started.

use crate::actions::ReviewAction;
use crate::state::{AppState, ReviewPlan, NO_DIFF_MESSAGE};

pub fn reduce(mut state: AppState, action: &ReviewAction) -> AppState {
    match action {
        ReviewAction::ReviewFile => match state.plan_review() {
            ReviewPlan::Ignore => {
                log::debug!("ReviewFile ignored (reviewing or nothing selected)");
            }
            ReviewPlan::NoDiff => {
                state.review.review_error = NO_DIFF_MESSAGE.to_string();
            }
            ReviewPlan::Start(target) => {
                state.review.review_error.clear();
                state.review.is_reviewing = true;
                state.review.begin(&target.filename);
                log::debug!("Review of {} started", target.filename);
            }
        },

        ReviewAction::ReviewAll => {
            if state.plan_review_all().is_some() {
                state.review.review_error.clear();
                state.review.is_reviewing_all = true;
                state.review.is_reviewing = true;
                log::debug!("Batch review started ({})", state.review_progress_text());
            } else {
                log::debug!("ReviewAll ignored (reviewing or nothing reviewable)");
            }
        }

        ReviewAction::BatchFileStarted {
            generation,
            index,
            filename,
        } => {
            if is_current(&state, *generation) {
                state.review.review_all_current_index = *index;
                state.review.begin(filename);
            }
        }

        ReviewAction::Chunk {
            generation,
            filename,
            text,
        } => {
            if is_current(&state, *generation) {
                state.review.append(filename, text);
            }
        }

        ReviewAction::BatchFileFailed {
            generation,
            filename,
            error,
        } => {
            if is_current(&state, *generation) {
                log::warn!("Batch review of {} failed: {}", filename, error);
                state
                    .review
                    .file_reviews
                    .insert(filename.clone(), format!("Error: {}", error));
            }
        }

        ReviewAction::Finished { generation, error } => {
            if is_current(&state, *generation) {
                if let Some(error) = error {
                    log::warn!("Review failed: {}", error);
                    state.review.review_error = error.clone();
                }
                state.review.finish();
            }
        }

        ReviewAction::BatchFinished { generation } => {
            if is_current(&state, *generation) {
                state.review.finish();
                log::info!("Batch review finished ({})", state.review_progress_text());
            }
        }
    }

    state
}

/// Results of streams started before the latest fetch are dropped
fn is_current(state: &AppState, generation: u64) -> bool {
    if generation != state.generation {
        log::debug!(
            "Dropping review result of generation {} (current {})",
            generation,
            state.generation
        );
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::loaded_state;
    use pretty_assertions::assert_eq;

    fn selected(filename: &str) -> AppState {
        let mut state = loaded_state();
        state.pr_data.selected_file = filename.to_string();
        state
    }

    fn chunk(generation: u64, filename: &str, text: &str) -> ReviewAction {
        ReviewAction::Chunk {
            generation,
            filename: filename.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_review_file_starts_review() {
        let mut state = selected("a.rs");
        state.review.review_error = "old".to_string();

        let state = reduce(state, &ReviewAction::ReviewFile);
        assert!(state.review.is_reviewing);
        assert_eq!(state.review.current_review_file, "a.rs");
        assert_eq!(state.review.review_error, "");
        assert_eq!(state.review.file_reviews.get("a.rs"), Some(&String::new()));
        assert!(state.is_reviewing_selected_file());
    }

    #[test]
    fn test_review_file_without_diff_sets_error() {
        let state = reduce(selected("logo.png"), &ReviewAction::ReviewFile);
        assert!(!state.review.is_reviewing);
        assert_eq!(state.review.review_error, "No diff available for this file");
        assert!(state.review.file_reviews.is_empty());
    }

    #[test]
    fn test_review_file_without_selection_is_noop() {
        let state = loaded_state();
        assert_eq!(reduce(state.clone(), &ReviewAction::ReviewFile), state);
    }

    #[test]
    fn test_review_file_while_reviewing_is_noop() {
        let state = reduce(selected("a.rs"), &ReviewAction::ReviewFile);
        let state = reduce(state, &chunk(0, "a.rs", "partial"));

        let mut switched = state.clone();
        switched.pr_data.selected_file = "b.rs".to_string();
        let after = reduce(switched.clone(), &ReviewAction::ReviewFile);
        assert_eq!(after, switched);
        assert_eq!(after.review.file_reviews.len(), 1);
    }

    #[test]
    fn test_chunks_append_to_captured_target() {
        let state = reduce(selected("a.rs"), &ReviewAction::ReviewFile);
        let mut state = reduce(state, &chunk(0, "a.rs", "## Summary"));
        // Selection changes mid-stream; text still lands on a.rs
        state.pr_data.selected_file = "b.rs".to_string();
        let state = reduce(state, &chunk(0, "a.rs", "\nLooks fine."));

        assert_eq!(state.review.review_for("a.rs"), "## Summary\nLooks fine.");
        assert_eq!(state.review.review_for("b.rs"), "");
        assert!(!state.is_reviewing_selected_file());
    }

    #[test]
    fn test_failure_keeps_partial_text() {
        let state = reduce(selected("a.rs"), &ReviewAction::ReviewFile);
        let state = reduce(state, &chunk(0, "a.rs", "partial"));
        let state = reduce(
            state,
            &ReviewAction::Finished {
                generation: 0,
                error: Some("Review failed for a.rs: Overloaded".to_string()),
            },
        );

        assert!(!state.review.is_reviewing);
        assert_eq!(state.review.current_review_file, "");
        assert_eq!(
            state.review.review_error,
            "Review failed for a.rs: Overloaded"
        );
        assert_eq!(state.review.review_for("a.rs"), "partial");
    }

    #[test]
    fn test_review_all_sets_flags() {
        let state = reduce(loaded_state(), &ReviewAction::ReviewAll);
        assert!(state.review.is_reviewing_all);
        assert!(state.review.is_reviewing);

        // Second request while running changes nothing
        assert_eq!(reduce(state.clone(), &ReviewAction::ReviewAll), state);
    }

    #[test]
    fn test_review_all_without_reviewable_files_is_noop() {
        let mut state = loaded_state();
        state.pr_data.files.retain(|f| !f.is_reviewable());
        assert_eq!(reduce(state.clone(), &ReviewAction::ReviewAll), state);
    }

    #[test]
    fn test_batch_failure_is_recorded_inline() {
        let state = reduce(loaded_state(), &ReviewAction::ReviewAll);
        let state = reduce(
            state,
            &ReviewAction::BatchFileStarted {
                generation: 0,
                index: 1,
                filename: "b.rs".to_string(),
            },
        );
        assert_eq!(state.review.review_all_current_index, 1);
        assert_eq!(state.review.current_review_file, "b.rs");

        let state = reduce(
            state,
            &ReviewAction::BatchFileFailed {
                generation: 0,
                filename: "b.rs".to_string(),
                error: "ANTHROPIC_API_KEY not set. Add it to .env or provide in settings."
                    .to_string(),
            },
        );
        assert_eq!(
            state.review.review_for("b.rs"),
            "Error: ANTHROPIC_API_KEY not set. Add it to .env or provide in settings."
        );
        assert_eq!(state.review.review_error, "");
        assert!(state.review.is_reviewing_all);

        let state = reduce(state, &ReviewAction::BatchFinished { generation: 0 });
        assert!(!state.review.is_reviewing_all);
        assert!(!state.review.is_reviewing);
        assert_eq!(state.review.current_review_file, "");
    }

    #[test]
    fn test_stale_review_results_are_dropped() {
        let mut state = loaded_state();
        state.generation = 3;
        let before = state.clone();

        let state = reduce(state, &chunk(2, "a.rs", "late"));
        let state = reduce(
            state,
            &ReviewAction::Finished {
                generation: 2,
                error: Some("late".to_string()),
            },
        );
        let state = reduce(state, &ReviewAction::BatchFinished { generation: 2 });
        assert_eq!(state, before);
    }
}
