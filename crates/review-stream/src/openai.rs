//! OpenAI Responses API (streaming)

use crate::Decoded;
use crate::request::{ReviewRequest, SYSTEM_PROMPT};
use crate::sse::SseEvent;
use serde::Deserialize;
use serde_json::{json, Value};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/responses";

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum StreamEvent {
    #[serde(rename = "response.output_text.delta")]
    OutputTextDelta { delta: String },
    #[serde(rename = "response.failed")]
    Failed { response: FailedResponse },
    #[serde(rename = "error")]
    Error { message: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct FailedResponse {
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

pub fn request_body(request: &ReviewRequest) -> Value {
    json!({
        "model": request.model,
        "instructions": SYSTEM_PROMPT,
        "input": request.user_message(),
        "stream": true,
    })
}

/// Interpret one streamed event
pub fn decode(event: &SseEvent) -> Decoded {
    if event.data == "[DONE]" {
        return Decoded::Skip;
    }
    match serde_json::from_str::<StreamEvent>(&event.data) {
        Ok(StreamEvent::OutputTextDelta { delta }) => Decoded::Text(delta),
        Ok(StreamEvent::Failed { response }) => Decoded::Failed(
            response
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| "response failed".to_string()),
        ),
        Ok(StreamEvent::Error { message }) => Decoded::Failed(message),
        Ok(StreamEvent::Other) => Decoded::Skip,
        Err(e) => {
            log::debug!("Ignoring undecodable OpenAI event: {}", e);
            Decoded::Skip
        }
    }
}
