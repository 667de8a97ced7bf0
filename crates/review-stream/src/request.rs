//! Review request and prompt construction

use crate::error::ReviewError;
use crate::provider::Provider;

/// Instructions given to the model for every file review
pub const SYSTEM_PROMPT: &str = "You are an expert code reviewer. Analyze the provided diff and give a concise, actionable review.

Focus on:
- Bugs or logic errors
- Security vulnerabilities
- Performance issues
- Code clarity and maintainability
- Missing error handling

Format your response as markdown with sections:
## Summary
Brief 1-2 sentence summary of the changes.

## Issues
List any problems found (or \"None found\" if clean).

## Suggestions
Optional improvements (keep brief).

Be direct and specific. Reference line numbers from the diff when relevant.";

/// Upper bound on generated tokens per review
pub const MAX_TOKENS: u32 = 1024;

/// Everything needed to review one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub filename: String,
    pub diff: String,
    pub model: String,
    pub provider: Provider,
    /// Explicit key; `None` or blank falls back to the provider's env var
    pub api_key: Option<String>,
}

impl ReviewRequest {
    /// The user turn sent alongside [`SYSTEM_PROMPT`]
    pub fn user_message(&self) -> String {
        format!(
            "Review this diff for `{}`:\n\n```diff\n{}\n```",
            self.filename, self.diff
        )
    }

    /// Resolve the API key, consulting `env` for the provider's variable
    pub fn resolve_api_key<F>(&self, env: F) -> Result<String, ReviewError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string);

        let var = self.provider.api_key_env();
        explicit
            .or_else(|| env(var).filter(|k| !k.trim().is_empty()))
            .ok_or(ReviewError::MissingApiKey { var })
    }
}
