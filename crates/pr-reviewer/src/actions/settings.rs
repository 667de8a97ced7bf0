//! Settings actions

use review_stream::Provider;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    /// Switch provider (resets the model to its default)
    SetProvider(Provider),
    /// Set the model by id
    SetModel(String),
    /// Set the model by its display name
    SetModelByDisplayName(String),
    SetGithubToken(String),
    SetApiKey(String),
}
