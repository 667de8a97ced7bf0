//! Actions module
//!
//! Actions are tagged by the slice of state they affect. Actions carrying a
//! `generation` are produced by background work and are dropped by the
//! reducer once a newer fetch has started.

pub mod global;
pub mod pull_request;
pub mod review;
pub mod settings;

pub use global::GlobalAction;
pub use pull_request::PullRequestAction;
pub use review::ReviewAction;
pub use settings::SettingsAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),
    /// Loading the PR and selecting files
    PullRequest(PullRequestAction),
    /// AI review lifecycle
    Review(ReviewAction),
    /// Provider, model and credentials
    Settings(SettingsAction),
}
