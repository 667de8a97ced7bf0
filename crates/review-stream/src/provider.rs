//! AI providers and the static model table

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Hosted LLM provider used to generate reviews
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Anthropic,
    OpenAi,
}

/// A selectable model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    /// Identifier sent to the provider API
    pub id: &'static str,
    /// Human readable name
    pub display_name: &'static str,
}

const ANTHROPIC_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "claude-opus-4-5-20251101",
        display_name: "Claude Opus 4.5",
    },
    ModelInfo {
        id: "claude-sonnet-4-5-20250929",
        display_name: "Claude Sonnet 4.5",
    },
    ModelInfo {
        id: "claude-haiku-4-5-20251001",
        display_name: "Claude Haiku 4.5",
    },
];

const OPENAI_MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "gpt-4.1",
        display_name: "GPT-4.1",
    },
    ModelInfo {
        id: "gpt-4.1-mini",
        display_name: "GPT-4.1 mini",
    },
    ModelInfo {
        id: "o4-mini",
        display_name: "o4-mini",
    },
];

impl Provider {
    /// All supported providers in display order
    pub const ALL: [Provider; 2] = [Provider::Anthropic, Provider::OpenAi];

    /// Lowercase identifier (config files, shell commands)
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Anthropic => "anthropic",
            Provider::OpenAi => "openai",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Anthropic => "Anthropic",
            Provider::OpenAi => "OpenAI",
        }
    }

    /// Environment variable consulted when no API key is configured
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::Anthropic => "ANTHROPIC_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        }
    }

    /// Models offered for this provider
    pub fn available_models(&self) -> &'static [ModelInfo] {
        match self {
            Provider::Anthropic => ANTHROPIC_MODELS,
            Provider::OpenAi => OPENAI_MODELS,
        }
    }

    /// Model selected when switching to this provider
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Anthropic => ANTHROPIC_MODELS[1].id,
            Provider::OpenAi => OPENAI_MODELS[0].id,
        }
    }

    /// Look up a model of this provider by its id
    pub fn model(&self, id: &str) -> Option<&'static ModelInfo> {
        self.available_models().iter().find(|m| m.id == id)
    }

    /// Look up a model of this provider by its display name
    pub fn model_by_display_name(&self, display_name: &str) -> Option<&'static ModelInfo> {
        self.available_models()
            .iter()
            .find(|m| m.display_name == display_name)
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anthropic" => Ok(Provider::Anthropic),
            "openai" => Ok(Provider::OpenAi),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}
