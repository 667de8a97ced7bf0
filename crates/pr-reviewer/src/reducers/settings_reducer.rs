use crate::actions::SettingsAction;
use crate::state::SettingsState;

pub fn reduce(mut state: SettingsState, action: &SettingsAction) -> SettingsState {
    match action {
        SettingsAction::SetProvider(provider) => {
            state.set_provider(*provider);
            log::info!("Provider set to {} ({})", provider, state.model);
        }
        SettingsAction::SetModel(model) => {
            state.set_model(model);
            log::info!("Model set to {}", model);
        }
        SettingsAction::SetModelByDisplayName(name) => {
            if !state.set_model_by_display_name(name) {
                log::warn!("Unknown {} model: {}", state.provider, name);
            }
        }
        SettingsAction::SetGithubToken(token) => {
            state.github_token = token.trim().to_string();
            let status = if state.has_github_token() {
                "set"
            } else {
                "cleared"
            };
            log::info!("GitHub token {}", status);
        }
        SettingsAction::SetApiKey(key) => {
            state.api_key = key.trim().to_string();
            let status = if state.api_key.is_empty() {
                "cleared"
            } else {
                "set"
            };
            log::info!("API key {}", status);
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use review_stream::Provider;

    #[test]
    fn test_provider_switch_resets_model() {
        let state = reduce(
            SettingsState::default(),
            &SettingsAction::SetModel("claude-opus-4-5-20251101".to_string()),
        );
        let state = reduce(state, &SettingsAction::SetProvider(Provider::OpenAi));
        assert_eq!(state.model, "gpt-4.1");
    }

    #[test]
    fn test_unknown_display_name_is_ignored() {
        let state = SettingsState::default();
        let after = reduce(
            state.clone(),
            &SettingsAction::SetModelByDisplayName("Claude 1".to_string()),
        );
        assert_eq!(after, state);
    }

    #[test]
    fn test_tokens_are_trimmed() {
        let state = reduce(
            SettingsState::default(),
            &SettingsAction::SetGithubToken(" ghp_x \n".to_string()),
        );
        assert_eq!(state.github_token, "ghp_x");
        let state = reduce(state, &SettingsAction::SetGithubToken(String::new()));
        assert!(!state.has_github_token());
    }
}
