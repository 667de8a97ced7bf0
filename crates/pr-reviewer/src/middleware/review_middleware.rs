//! Review Middleware
//!
//! Starts review streams for single files and for the batch pass. At most
//! one stream runs at a time: the batch task reviews its queue file by file
//! and the shared `is_reviewing` guard rejects any other start meanwhile.
//!
//! A new fetch cancels the running task. Anything it still dispatches
//! carries the old generation and is dropped by the reducer.

use crate::actions::{Action, PullRequestAction, ReviewAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, ReviewPlan, ReviewTarget};
use futures::StreamExt;
use review_stream::{ReviewError, ReviewRequest, ReviewStream, ReviewStreamSource};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct ReviewMiddleware {
    source: Arc<dyn ReviewStreamSource>,
    cancel: CancellationToken,
}

impl ReviewMiddleware {
    pub fn new(source: Arc<dyn ReviewStreamSource>) -> Self {
        Self {
            source,
            cancel: CancellationToken::new(),
        }
    }

    /// Stop whatever is streaming and start a fresh token
    fn cancel_running(&mut self) {
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
    }

    fn start_review(&self, state: &AppState, target: ReviewTarget, dispatcher: &Dispatcher) {
        let generation = state.generation;
        let request = state.review_request(&target);
        let source = Arc::clone(&self.source);
        let cancel = self.cancel.clone();
        let dispatcher = dispatcher.clone();

        log::info!(
            "Spawning review of {} with {} / {}",
            target.filename,
            request.provider,
            request.model
        );

        tokio::spawn(async move {
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    log::debug!("Review of {} cancelled", target.filename);
                    return;
                }
                result = forward_chunks(
                    &dispatcher,
                    source.stream_review(request),
                    generation,
                    &target.filename,
                ) => result,
            };

            dispatcher.dispatch(Action::Review(ReviewAction::Finished {
                generation,
                error: result.err().map(|e| e.to_string()),
            }));
        });
    }

    fn start_batch(&self, state: &AppState, queue: Vec<ReviewTarget>, dispatcher: &Dispatcher) {
        let generation = state.generation;
        // Settings are captured once for the whole pass
        let requests: Vec<(ReviewTarget, ReviewRequest)> = queue
            .into_iter()
            .map(|target| {
                let request = state.review_request(&target);
                (target, request)
            })
            .collect();
        let source = Arc::clone(&self.source);
        let cancel = self.cancel.clone();
        let dispatcher = dispatcher.clone();

        log::info!("Spawning batch review of {} files", requests.len());

        tokio::spawn(async move {
            for (target, request) in requests {
                dispatcher.dispatch(Action::Review(ReviewAction::BatchFileStarted {
                    generation,
                    index: target.index,
                    filename: target.filename.clone(),
                }));

                let result = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        log::debug!("Batch review cancelled at {}", target.filename);
                        return;
                    }
                    result = forward_chunks(
                        &dispatcher,
                        source.stream_review(request),
                        generation,
                        &target.filename,
                    ) => result,
                };

                // One failing file never aborts the pass
                if let Err(e) = result {
                    dispatcher.dispatch(Action::Review(ReviewAction::BatchFileFailed {
                        generation,
                        filename: target.filename,
                        error: e.to_string(),
                    }));
                }
            }

            dispatcher.dispatch(Action::Review(ReviewAction::BatchFinished { generation }));
        });
    }
}

/// Dispatch every chunk of `stream` in order, stopping at the first error
async fn forward_chunks(
    dispatcher: &Dispatcher,
    mut stream: ReviewStream,
    generation: u64,
    filename: &str,
) -> Result<(), ReviewError> {
    while let Some(chunk) = stream.next().await {
        let text = chunk?;
        dispatcher.dispatch(Action::Review(ReviewAction::Chunk {
            generation,
            filename: filename.to_string(),
            text,
        }));
    }
    Ok(())
}

impl Middleware for ReviewMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::PullRequest(PullRequestAction::Fetch) => {
                self.cancel_running();
            }
            Action::Review(ReviewAction::ReviewFile) => {
                if let ReviewPlan::Start(target) = state.plan_review() {
                    self.start_review(state, target, dispatcher);
                }
            }
            Action::Review(ReviewAction::ReviewAll) => {
                if let Some(queue) = state.plan_review_all() {
                    self.start_batch(state, queue, dispatcher);
                }
            }
            _ => {}
        }
        true
    }
}
