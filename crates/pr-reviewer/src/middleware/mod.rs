use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod github_middleware;
pub mod logging;
pub mod review_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware must not block: slow work (API calls, streams) is spawned on
/// the tokio runtime and reports back through the dispatcher.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state, before the action is reduced
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
