use crate::actions::{Action, GlobalAction};
use crate::reducers::{pull_request_reducer, review_reducer, settings_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            state
        }
        Action::PullRequest(action) => pull_request_reducer::reduce(state, action),
        Action::Review(action) => review_reducer::reduce(state, action),
        Action::Settings(action) => {
            state.settings = settings_reducer::reduce(state.settings, action);
            state
        }
    }
}
