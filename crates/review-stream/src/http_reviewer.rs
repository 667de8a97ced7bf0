//! reqwest-backed review stream source

use crate::error::ReviewError;
use crate::provider::Provider;
use crate::request::ReviewRequest;
use crate::sse::{event_stream, SseEvent};
use crate::{anthropic, openai, Decoded, ReviewStream, ReviewStreamSource};
use futures::future;
use futures::stream::{self, BoxStream, StreamExt};
use log::{debug, info};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

/// Longest slice of an error body quoted back to the user
const ERROR_SNIPPET_CHARS: usize = 200;

/// Streams reviews from the hosted provider APIs
#[derive(Debug, Clone)]
pub struct HttpReviewer {
    http: reqwest::Client,
    anthropic_endpoint: String,
    openai_endpoint: String,
}

impl Default for HttpReviewer {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl HttpReviewer {
    /// Create a reviewer talking to the public provider endpoints
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_endpoints(http, anthropic::DEFAULT_ENDPOINT, openai::DEFAULT_ENDPOINT)
    }

    /// Create a reviewer talking to custom endpoints (proxies, gateways)
    pub fn with_endpoints(
        http: reqwest::Client,
        anthropic_endpoint: impl Into<String>,
        openai_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            http,
            anthropic_endpoint: anthropic_endpoint.into(),
            openai_endpoint: openai_endpoint.into(),
        }
    }

    async fn open(self, request: ReviewRequest) -> Result<ReviewStream, ReviewError> {
        let api_key = request.resolve_api_key(|var| std::env::var(var).ok())?;
        let filename = request.filename.clone();

        info!(
            "Requesting {} review of {} with model {}",
            request.provider, filename, request.model
        );

        let (builder, decode): (_, fn(&SseEvent) -> Decoded) = match request.provider {
            Provider::Anthropic => (
                self.http
                    .post(&self.anthropic_endpoint)
                    .header("x-api-key", api_key)
                    .header("anthropic-version", anthropic::API_VERSION)
                    .json(&anthropic::request_body(&request)),
                anthropic::decode,
            ),
            Provider::OpenAi => (
                self.http
                    .post(&self.openai_endpoint)
                    .bearer_auth(api_key)
                    .json(&openai::request_body(&request)),
                openai::decode,
            ),
        };

        let response = builder
            .header(ACCEPT, "text/event-stream")
            .send()
            .await
            .map_err(|e| ReviewError::provider(&filename, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReviewError::provider(
                &filename,
                describe_http_failure(status, &body),
            ));
        }

        debug!("Review stream opened for {}", filename);
        let events = event_stream(Box::pin(response.bytes_stream()));
        Ok(text_chunks(events, decode, filename))
    }
}

impl ReviewStreamSource for HttpReviewer {
    fn stream_review(&self, request: ReviewRequest) -> ReviewStream {
        let opened = self.clone().open(request);
        stream::once(opened)
            .flat_map(|result| match result {
                Ok(chunks) => chunks,
                Err(e) => stream::once(future::ready(Err(e))).boxed(),
            })
            .boxed()
    }
}

/// Map provider events to review text, ending after the first failure
fn text_chunks<E>(
    events: BoxStream<'static, Result<SseEvent, E>>,
    decode: fn(&SseEvent) -> Decoded,
    filename: String,
) -> ReviewStream
where
    E: std::fmt::Display + Send + 'static,
{
    events
        .scan(false, move |failed, event| {
            if *failed {
                return future::ready(None);
            }
            let decoded = match event {
                Ok(event) => decode(&event),
                Err(e) => Decoded::Failed(e.to_string()),
            };
            let item = match decoded {
                Decoded::Text(text) if !text.is_empty() => Some(Ok(text)),
                Decoded::Text(_) | Decoded::Skip => None,
                Decoded::Failed(message) => {
                    *failed = true;
                    Some(Err(ReviewError::provider(&filename, message)))
                }
            };
            future::ready(Some(item))
        })
        .filter_map(future::ready)
        .boxed()
}

/// Build a readable reason from a non-2xx provider response
fn describe_http_failure(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string));

    match message {
        Some(message) => format!("{} ({})", message, status),
        None => {
            let snippet: String = body.trim().chars().take(ERROR_SNIPPET_CHARS).collect();
            if snippet.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, snippet)
            }
        }
    }
}
