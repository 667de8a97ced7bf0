use thiserror::Error;

/// Failure of a review stream
///
/// The `Display` output is what ends up in the UI, either as the review
/// error of a single-file review or inline as `Error: <reason>` in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// No API key configured and none in the environment
    #[error("{var} not set. Add it to .env or provide in settings.")]
    MissingApiKey { var: &'static str },

    /// The provider rejected the request or the connection broke
    #[error("Review failed for {filename}: {message}")]
    Provider { filename: String, message: String },
}

impl ReviewError {
    pub fn provider(filename: &str, message: impl Into<String>) -> Self {
        ReviewError::Provider {
            filename: filename.to_string(),
            message: message.into(),
        }
    }
}
