pub mod app_reducer;
pub mod pull_request_reducer;
pub mod review_reducer;
pub mod settings_reducer;
