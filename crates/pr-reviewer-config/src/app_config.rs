//! Application configuration
//!
//! Configuration loaded from `.pr-reviewer.toml`.

use review_stream::Provider;
use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.pr-reviewer.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Upper bound on changed files fetched per PR
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// AI provider used for reviews
    #[serde(default)]
    pub provider: Provider,

    /// Model id; the provider default is used when absent
    #[serde(default)]
    pub model: Option<String>,

    /// GitHub token; `GITHUB_TOKEN`/`GH_TOKEN` are used when absent
    #[serde(default)]
    pub github_token: Option<String>,
}

fn default_max_files() -> usize {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            provider: Provider::default(),
            model: None,
            github_token: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The configured model, or the provider's default
    pub fn effective_model(&self) -> String {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.provider.default_model())
            .to_string()
    }

    /// The configured token, empty when absent
    pub fn github_token(&self) -> String {
        self.github_token
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }
}
