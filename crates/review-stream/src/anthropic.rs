//! Anthropic Messages API (streaming)

use crate::Decoded;
use crate::request::{ReviewRequest, MAX_TOKENS, SYSTEM_PROMPT};
use crate::sse::SseEvent;
use serde::Deserialize;
use serde_json::{json, Value};

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum StreamEvent {
    ContentBlockDelta { delta: Delta },
    Error { error: ApiError },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Delta {
    TextDelta { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

pub fn request_body(request: &ReviewRequest) -> Value {
    json!({
        "model": request.model,
        "max_tokens": MAX_TOKENS,
        "stream": true,
        "system": SYSTEM_PROMPT,
        "messages": [
            { "role": "user", "content": request.user_message() }
        ]
    })
}

/// Interpret one streamed event
pub fn decode(event: &SseEvent) -> Decoded {
    match serde_json::from_str::<StreamEvent>(&event.data) {
        Ok(StreamEvent::ContentBlockDelta {
            delta: Delta::TextDelta { text },
        }) => Decoded::Text(text),
        Ok(StreamEvent::Error { error }) => Decoded::Failed(error.message),
        Ok(_) => Decoded::Skip,
        Err(e) => {
            log::debug!("Ignoring undecodable Anthropic event: {}", e);
            Decoded::Skip
        }
    }
}
