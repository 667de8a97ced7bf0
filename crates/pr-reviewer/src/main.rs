mod actions;
mod commands;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod shell;
mod state;
mod store;
#[cfg(test)]
mod testing;
mod views;

use actions::{Action, PullRequestAction};
use gh_client::ClientManager;
use middleware::{
    github_middleware::GitHubMiddleware, logging::LoggingMiddleware,
    review_middleware::ReviewMiddleware,
};
use pr_reviewer_config::AppConfig;
use review_stream::HttpReviewer;
use state::AppState;
use std::sync::Arc;
use store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting pr-reviewer, logging to {}", log_file.display());

    // Provider keys and GitHub tokens may live in .env
    if let Err(e) = dotenvy::dotenv() {
        log::debug!("No .env loaded: {}", e);
    }

    let config = AppConfig::load();
    let mut store = Store::new(AppState::from_config(&config));

    // Middleware runs in this order, before the reducer
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(GitHubMiddleware::new(Arc::new(
        ClientManager::new(),
    ))));
    store.add_middleware(Box::new(ReviewMiddleware::new(Arc::new(
        HttpReviewer::default(),
    ))));

    let dispatcher = store.dispatcher().clone();
    let state_rx = store.subscribe();

    // A URL on the command line is fetched right away
    if let Some(url) = std::env::args().nth(1) {
        dispatcher.dispatch(Action::PullRequest(PullRequestAction::SetUrl(url)));
        dispatcher.dispatch(Action::PullRequest(PullRequestAction::Fetch));
    }

    let store_task = tokio::spawn(store.run());
    let result = shell::run(dispatcher, state_rx).await;

    if let Err(e) = store_task.await {
        log::error!("Store task failed: {}", e);
    }
    log::info!("Exiting pr-reviewer");
    result
}
