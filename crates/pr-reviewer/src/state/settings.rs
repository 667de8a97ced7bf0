//! Provider, model and credential settings

use pr_reviewer_config::AppConfig;
use review_stream::{ModelInfo, Provider};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsState {
    pub provider: Provider,
    /// Model id sent to the provider
    pub model: String,
    /// Empty means "use GITHUB_TOKEN / GH_TOKEN or go anonymous"
    pub github_token: String,
    /// Empty means "use the provider's environment variable"
    pub api_key: String,
}

impl Default for SettingsState {
    fn default() -> Self {
        let provider = Provider::default();
        Self {
            provider,
            model: provider.default_model().to_string(),
            github_token: String::new(),
            api_key: String::new(),
        }
    }
}

impl SettingsState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            provider: config.provider,
            model: config.effective_model(),
            github_token: config.github_token(),
            api_key: String::new(),
        }
    }

    /// Switch provider; the model falls back to the provider's default
    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
        self.model = provider.default_model().to_string();
    }

    pub fn set_model(&mut self, model: &str) {
        self.model = model.to_string();
    }

    /// Select a model of the current provider by display name.
    /// Unknown names leave the model unchanged.
    pub fn set_model_by_display_name(&mut self, display_name: &str) -> bool {
        match self.provider.model_by_display_name(display_name) {
            Some(model) => {
                self.model = model.id.to_string();
                true
            }
            None => false,
        }
    }

    pub fn has_github_token(&self) -> bool {
        !self.github_token.is_empty()
    }

    pub fn provider_display_name(&self) -> &'static str {
        self.provider.display_name()
    }

    pub fn available_models(&self) -> &'static [ModelInfo] {
        self.provider.available_models()
    }

    /// Display name of the model, or the raw id for custom models
    pub fn model_display_name(&self) -> &str {
        self.provider
            .model(&self.model)
            .map(|m| m.display_name)
            .unwrap_or(self.model.as_str())
    }

    pub fn github_token_option(&self) -> Option<String> {
        non_blank(&self.github_token)
    }

    pub fn api_key_option(&self) -> Option<String> {
        non_blank(&self.api_key)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
