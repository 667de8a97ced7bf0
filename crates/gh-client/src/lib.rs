//! GitHub API client for pull request review
//!
//! This crate provides a trait-based GitHub API client that reads the two
//! things a reviewer needs: PR metadata and the list of changed files with
//! their patches.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              ClientProvider trait                │
//! │  - client(token)                                 │
//! └─────────────────────────────────────────────────┘
//!                        │ hands out
//!                        ▼
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_pull_request()                          │
//! │  - fetch_pull_request_files()                    │
//! └─────────────────────────────────────────────────┘
//!                        ▲
//!            ┌───────────┴───────────┐
//!   ┌─────────────────┐     ┌─────────────────┐
//!   │ ClientManager   │────►│ OctocrabClient  │
//!   │ (per token)     │     │ (direct API)    │
//!   └─────────────────┘     └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{ClientManager, ClientProvider, DEFAULT_MAX_FILES};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let manager = ClientManager::new();
//! let client = manager.client(None).await?;
//!
//! let pr = client.fetch_pull_request("rust-lang", "rust", 1).await?;
//! let files = client
//!     .fetch_pull_request_files("rust-lang", "rust", 1, DEFAULT_MAX_FILES)
//!     .await?;
//! println!("{}: {} files", pr.title, files.files.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_manager;
pub mod error;
pub mod octocrab_client;
pub mod types;

pub use client::{ClientProvider, GitHubClient};
pub use client_manager::{ClientManager, TokenResolver};
pub use error::GitHubError;
pub use octocrab_client::OctocrabClient;
pub use types::{ChangedFile, FileStatus, PullRequest, PullRequestFiles, DEFAULT_MAX_FILES};
