//! GitHub Middleware
//!
//! Fetches PR metadata and the changed files when a fetch is requested.
//! The reducer has already validated the URL by the time results arrive;
//! this middleware applies the same validation to decide whether to spawn.

use crate::actions::{Action, PullRequestAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::PrUrl;
use crate::middleware::Middleware;
use crate::state::{plan_fetch, AppState};
use gh_client::{ClientProvider, GitHubError, PullRequest, PullRequestFiles};
use std::sync::Arc;

/// Middleware for all GitHub API operations
pub struct GitHubMiddleware {
    clients: Arc<dyn ClientProvider>,
}

impl GitHubMiddleware {
    pub fn new(clients: Arc<dyn ClientProvider>) -> Self {
        Self { clients }
    }

    fn handle_fetch(&self, state: &AppState, dispatcher: &Dispatcher) {
        let Ok(pr) = plan_fetch(&state.pr_data.pr_url) else {
            return;
        };

        // The reducer bumps the generation for this very action
        let generation = state.generation + 1;
        let token = state.settings.github_token_option();
        let max_files = state.max_files;
        let clients = Arc::clone(&self.clients);
        let dispatcher = dispatcher.clone();

        log::info!("Spawning fetch of {} (generation {})", pr, generation);

        tokio::spawn(async move {
            let action = match load_pull_request(
                clients.as_ref(),
                token.as_deref(),
                &pr,
                max_files,
            )
            .await
            {
                Ok((pull_request, files)) => PullRequestAction::Loaded {
                    generation,
                    pull_request,
                    files,
                },
                Err(e) => {
                    log::error!("Fetching {} failed: {}", pr, e);
                    PullRequestAction::LoadError {
                        generation,
                        error: e.to_string(),
                    }
                }
            };
            dispatcher.dispatch(Action::PullRequest(action));
        });
    }
}

/// Metadata first, then the paginated file listing
async fn load_pull_request(
    clients: &dyn ClientProvider,
    token: Option<&str>,
    pr: &PrUrl,
    max_files: usize,
) -> Result<(PullRequest, PullRequestFiles), GitHubError> {
    let client = clients.client(token).await?;
    let pull_request = client
        .fetch_pull_request(&pr.owner, &pr.repo, pr.pr_number)
        .await?;
    let files = client
        .fetch_pull_request_files(&pr.owner, &pr.repo, pr.pr_number, max_files)
        .await?;
    Ok((pull_request, files))
}

impl Middleware for GitHubMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::PullRequest(PullRequestAction::Fetch) = action {
            self.handle_fetch(state, dispatcher);
        }
        true
    }
}
