//! Plain-text rendering of the application state for the shell

use crate::state::AppState;
use std::fmt::Write;

pub const HELP: &str = "\
Commands:
  fetch [url]          load a pull request (reuses the last URL when omitted)
  files                list changed files
  select <name|n>      select a file by name or list number
  diff                 show the diff of the selected file
  review               review the selected file
  review-all           review every file that has no review yet
  show                 show the review of the selected file
  status               show loading, review progress and settings
  provider <name>      switch provider (anthropic, openai)
  model <id|name>      choose a model of the current provider
  models               list models of the current provider
  token [value]        set or clear the GitHub token
  key [value]          set or clear the provider API key
  help                 show this help
  quit                 exit";

/// PR header: title, author, branches and totals
pub fn pull_request(state: &AppState) -> String {
    let pr = &state.pr_data;
    if !pr.has_pr_loaded() {
        return "No pull request loaded.".to_string();
    }

    let meta = &pr.pull_request;
    let mut out = String::new();
    let _ = writeln!(out, "{}", meta.title);
    let _ = writeln!(
        out,
        "by @{}  {} <- {}  +{} -{}",
        meta.author, meta.base_branch, meta.head_branch, meta.additions, meta.deletions
    );
    if pr.has_description() {
        let _ = writeln!(out, "\n{}\n", meta.body.trim());
    }
    let _ = write!(out, "{} files changed", pr.file_count());
    if pr.files_truncated {
        let _ = write!(out, " (showing the first {})", pr.file_count());
    }
    out
}

/// Numbered file list with review markers
pub fn files(state: &AppState) -> String {
    let pr = &state.pr_data;
    if pr.files.is_empty() {
        return "No files.".to_string();
    }

    let mut out = String::new();
    for (i, file) in pr.files.iter().enumerate() {
        let cursor = if file.filename == pr.selected_file {
            '>'
        } else {
            ' '
        };
        let streaming =
            state.review.is_reviewing && state.review.current_review_file == file.filename;
        let marker = if streaming {
            "reviewing"
        } else if state.review.is_reviewed(&file.filename) {
            "reviewed"
        } else if !file.is_reviewable() {
            "no diff"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{} {:>3}. {:<8} {}  +{} -{}  {}",
            cursor,
            i + 1,
            file.status,
            file.filename,
            file.additions,
            file.deletions,
            marker
        );
    }
    let _ = write!(out, "Reviewed {}", state.review_progress_text());
    out
}

pub fn diff(state: &AppState) -> String {
    let pr = &state.pr_data;
    if pr.selected_file.is_empty() {
        return "No file selected.".to_string();
    }
    if !pr.selected_file_has_diff() {
        return format!("{}: no diff available", pr.selected_file);
    }
    format!(
        "{} ({}, +{} -{})\n{}",
        pr.selected_file,
        pr.selected_file_status(),
        pr.selected_file_additions(),
        pr.selected_file_deletions(),
        pr.selected_file_diff()
    )
}

pub fn review(state: &AppState) -> String {
    let selected = &state.pr_data.selected_file;
    if selected.is_empty() {
        return "No file selected.".to_string();
    }
    if state.has_selected_file_review() {
        let suffix = if state.is_reviewing_selected_file() {
            "\n(still streaming)"
        } else {
            ""
        };
        return format!("{}{}", state.selected_file_review(), suffix);
    }
    if state.is_reviewing_selected_file() {
        return format!("Reviewing {}...", selected);
    }
    format!("{} has not been reviewed yet.", selected)
}

pub fn status(state: &AppState) -> String {
    let pr = &state.pr_data;
    let settings = &state.settings;
    let mut out = String::new();

    if pr.is_loading {
        let _ = writeln!(out, "Loading {}", pr.pr_url);
    } else if pr.has_pr_loaded() {
        let _ = writeln!(
            out,
            "PR: {} ({} files)",
            pr.pull_request.title,
            pr.file_count()
        );
    } else {
        let _ = writeln!(out, "PR: none");
    }
    if !pr.error_message.is_empty() {
        let _ = writeln!(out, "Error: {}", pr.error_message);
    }
    if !pr.selected_file.is_empty() {
        let _ = writeln!(out, "Selected: {}", pr.selected_file);
    }

    let _ = write!(out, "Reviews: {}", state.review_progress_text());
    if state.all_files_reviewed() {
        let _ = write!(out, " (all reviewed)");
    }
    if state.review.is_reviewing_all {
        let _ = write!(
            out,
            " - reviewing all, file {} of {}",
            state.review.review_all_current_index + 1,
            state.reviewable_file_count()
        );
    } else if state.review.is_reviewing {
        let _ = write!(out, " - reviewing {}", state.review.current_review_file);
    }
    let _ = writeln!(out);
    if !state.review.review_error.is_empty() {
        let _ = writeln!(out, "Review error: {}", state.review.review_error);
    }

    let _ = write!(
        out,
        "Provider: {}  Model: {}  GitHub token: {}  API key: {}",
        settings.provider_display_name(),
        settings.model_display_name(),
        if settings.has_github_token() {
            "set"
        } else {
            "env/anonymous"
        },
        if settings.api_key.is_empty() {
            "env"
        } else {
            "set"
        },
    );
    out
}

pub fn models(state: &AppState) -> String {
    let settings = &state.settings;
    let mut out = format!("{} models:", settings.provider_display_name());
    for model in settings.available_models() {
        let current = if model.id == settings.model { '*' } else { ' ' };
        let _ = write!(
            out,
            "\n {} {:<18} {}",
            current,
            model.display_name,
            model.id
        );
    }
    out
}

/// Text to print for the transition from `prev` to `next`
///
/// Streamed review text is reported as the newly appended suffix only.
pub fn changes(prev: &AppState, next: &AppState) -> String {
    let mut out = String::new();
    let (was, now) = (&prev.pr_data, &next.pr_data);

    if now.is_loading && !was.is_loading {
        let _ = writeln!(out, "Loading {} ...", now.pr_url);
    }
    if was.is_loading && !now.is_loading && now.has_pr_loaded() {
        let _ = writeln!(out, "{}", pull_request(next));
    }
    if now.error_message != was.error_message && !now.error_message.is_empty() {
        let _ = writeln!(out, "Error: {}", now.error_message);
    }

    let (was, now) = (&prev.review, &next.review);
    if next.generation != prev.generation {
        return out;
    }

    for file in &next.pr_data.files {
        let name = &file.filename;
        let Some(text) = now.file_reviews.get(name) else {
            continue;
        };
        let before = was.review_for(name);
        let started = !was.is_reviewed(name)
            || (now.current_review_file == *name && was.current_review_file != *name);

        if started {
            let _ = writeln!(out, "\n--- {} ---", name);
            out.push_str(text);
        } else if let Some(suffix) = text.strip_prefix(before) {
            out.push_str(suffix);
        } else {
            // Replaced, e.g. by an inline batch error
            let _ = write!(out, "\n{}", text);
        }
    }

    if now.review_error != was.review_error && !now.review_error.is_empty() {
        let _ = writeln!(out, "\nReview error: {}", now.review_error);
    }
    if was.is_reviewing && !now.is_reviewing {
        let _ = writeln!(
            out,
            "\n--- done ({} reviewed) ---",
            next.review_progress_text()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::loaded_state;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_files_marks_selection_and_reviews() {
        let mut state = loaded_state();
        state.pr_data.selected_file = "b.rs".to_string();
        state.review.begin("a.rs");

        let out = files(&state);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("    1. modified"));
        assert!(lines[0].ends_with("reviewed"));
        assert!(lines[1].ends_with("no diff"));
        assert!(lines[2].starts_with(">   3."));
        assert_eq!(lines[3], "Reviewed 1/2");
    }

    #[test]
    fn test_diff_and_review_without_selection() {
        let state = loaded_state();
        assert_eq!(diff(&state), "No file selected.");
        assert_eq!(review(&state), "No file selected.");
    }

    #[test]
    fn test_changes_print_streamed_suffix() {
        let mut prev = loaded_state();
        prev.pr_data.selected_file = "a.rs".to_string();
        prev.review.is_reviewing = true;
        prev.review.begin("a.rs");
        prev.review.append("a.rs", "## Sum");

        let mut next = prev.clone();
        next.review.append("a.rs", "mary\n");
        assert_eq!(changes(&prev, &next), "mary\n");

        let mut done = next.clone();
        done.review.finish();
        assert_eq!(changes(&next, &done), "\n--- done (1/2 reviewed) ---\n");
    }

    #[test]
    fn test_changes_announce_new_review() {
        let prev = loaded_state();
        let mut next = prev.clone();
        next.review.is_reviewing = true;
        next.review.begin("b.rs");
        next.review.append("b.rs", "Looks");
        assert_eq!(changes(&prev, &next), "\n--- b.rs ---\nLooks");
    }

    #[test]
    fn test_changes_report_errors() {
        let prev = loaded_state();
        let mut next = prev.clone();
        next.review.review_error = "No diff available for this file".to_string();
        assert_eq!(
            changes(&prev, &next),
            "\nReview error: No diff available for this file\n"
        );
    }

    #[test]
    fn test_changes_ignore_reset() {
        let mut prev = loaded_state();
        prev.review.begin("a.rs");
        let mut next = prev.clone();
        next.generation += 1;
        next.pr_data.reset();
        next.review.reset();
        assert_eq!(changes(&prev, &next), "");
    }
}
