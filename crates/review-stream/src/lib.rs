//! AI review streaming for a single file diff
//!
//! This crate turns a [`ReviewRequest`] (file name, unified diff, provider,
//! model, optional API key) into a stream of markdown text chunks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        ReviewStreamSource (trait)            │
//! │  fn stream_review(request) -> ReviewStream   │
//! └──────────────────────────────────────────────┘
//!                       △
//!                       │
//!              ┌────────┴────────┐
//!              │  HttpReviewer   │
//!              │  (reqwest)      │
//!              └────────┬────────┘
//!                       │ text/event-stream
//!                ┌──────┴──────┐
//!                ▼             ▼
//!           anthropic       openai
//!         /v1/messages   /v1/responses
//! ```
//!
//! # Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use review_stream::{HttpReviewer, Provider, ReviewRequest, ReviewStreamSource};
//!
//! # async fn example() {
//! let reviewer = HttpReviewer::default();
//! let mut chunks = reviewer.stream_review(ReviewRequest {
//!     filename: "src/main.rs".to_string(),
//!     diff: "@@ -1 +1 @@\n-old\n+new".to_string(),
//!     model: Provider::Anthropic.default_model().to_string(),
//!     provider: Provider::Anthropic,
//!     api_key: None,
//! });
//! while let Some(chunk) = chunks.next().await {
//!     match chunk {
//!         Ok(text) => print!("{}", text),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! # }
//! ```

pub mod anthropic;
pub mod error;
pub mod http_reviewer;
pub mod openai;
pub mod provider;
pub mod request;
pub mod sse;

pub use error::ReviewError;
pub use http_reviewer::HttpReviewer;
pub use provider::{ModelInfo, Provider};
pub use request::{ReviewRequest, MAX_TOKENS, SYSTEM_PROMPT};

use futures::stream::BoxStream;

/// Ordered review text chunks; an `Err` item is always the last one
pub type ReviewStream = BoxStream<'static, Result<String, ReviewError>>;

/// Something that can stream a review for one file
pub trait ReviewStreamSource: Send + Sync {
    /// Start reviewing. Nothing happens until the stream is polled.
    fn stream_review(&self, request: ReviewRequest) -> ReviewStream;
}

/// Meaning of a single provider event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// More review text
    Text(String),
    /// The provider reported a failure mid-stream
    Failed(String),
    /// Lifecycle or unrelated event
    Skip,
}
