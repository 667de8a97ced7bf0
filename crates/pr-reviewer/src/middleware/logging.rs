use crate::actions::{Action, PullRequestAction, ReviewAction, SettingsAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Chunks arrive per token, keep them out of the debug log
        if matches!(action, Action::Review(ReviewAction::Chunk { .. })) {
            log::trace!("Action: {}", describe(action));
        } else {
            log::debug!("Action: {}", describe(action));
        }

        true // Always pass action through
    }
}

/// Short form of an action without diffs, review text or secrets
fn describe(action: &Action) -> String {
    match action {
        Action::PullRequest(PullRequestAction::Loaded {
            generation,
            pull_request,
            files,
        }) => format!(
            "Loaded(gen {}, \"{}\", {} files)",
            generation,
            pull_request.title,
            files.files.len()
        ),
        Action::Review(ReviewAction::Chunk {
            generation,
            filename,
            text,
        }) => format!(
            "Chunk(gen {}, {}, {} bytes)",
            generation,
            filename,
            text.len()
        ),
        Action::Settings(SettingsAction::SetGithubToken(_)) => "SetGithubToken(***)".to_string(),
        Action::Settings(SettingsAction::SetApiKey(_)) => "SetApiKey(***)".to_string(),
        other => format!("{:?}", other),
    }
}
