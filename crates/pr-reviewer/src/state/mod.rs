//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod pr_data;
mod review;
mod settings;

pub use app::{
    plan_fetch, AppState, ReviewPlan, ReviewTarget, EMPTY_URL_MESSAGE, INVALID_URL_MESSAGE,
    NO_DIFF_MESSAGE,
};
pub use pr_data::PrDataState;
pub use review::ReviewState;
pub use settings::SettingsState;
