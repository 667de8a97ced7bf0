//! Token-aware GitHub client manager
//!
//! Builds octocrab-backed clients on demand and caches them per token, so
//! switching the token in the settings yields a freshly authenticated client
//! while repeated fetches with the same token reuse one connection pool.

use crate::OctocrabClient;
use crate::client::{ClientProvider, GitHubClient};
use crate::error::GitHubError;
use async_trait::async_trait;
use log::{debug, info};
use octocrab::Octocrab;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Cache key used for unauthenticated clients
const ANONYMOUS: &str = "";

/// Resolves the GitHub token to use for a request
///
/// Tries multiple sources in order:
/// 1. The token configured explicitly (settings)
/// 2. Generic `GITHUB_TOKEN` or `GH_TOKEN` environment variables
///
/// When neither is present, requests go out unauthenticated.
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    /// Cached default token from GITHUB_TOKEN/GH_TOKEN
    default_token: Option<String>,
}

impl TokenResolver {
    /// Create a new token resolver reading the environment once
    pub fn new() -> Self {
        let default_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self { default_token }
    }

    /// Create a resolver with a fixed fallback token (tests, embedding)
    pub fn with_default(default_token: Option<String>) -> Self {
        Self { default_token }
    }

    /// Pick the effective token, ignoring blank explicit values
    pub fn resolve(&self, explicit: Option<&str>) -> Option<String> {
        match explicit.map(str::trim) {
            Some(token) if !token.is_empty() => Some(token.to_string()),
            _ => self.default_token.clone(),
        }
    }
}

/// Hands out GitHub clients, one per distinct token
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{ClientManager, ClientProvider};
///
/// let manager = ClientManager::new();
/// let client = manager.client(Some("ghp_...")).await?;
/// let pr = client.fetch_pull_request("rust-lang", "rust", 1).await?;
/// ```
pub struct ClientManager {
    /// Cached clients per token
    clients: Mutex<HashMap<String, Arc<OctocrabClient>>>,
    /// Token resolver
    tokens: TokenResolver,
}

impl Default for ClientManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientManager {
    /// Create a new client manager using environment token fallbacks
    pub fn new() -> Self {
        Self::with_resolver(TokenResolver::new())
    }

    /// Create a new client manager with a specific token resolver
    pub fn with_resolver(tokens: TokenResolver) -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
            tokens,
        }
    }

    /// Check if a client exists for the given token (without creating one)
    pub fn has_client(&self, token: Option<&str>) -> bool {
        let key = self.tokens.resolve(token).unwrap_or_default();
        self.clients
            .lock()
            .map(|clients| clients.contains_key(&key))
            .unwrap_or(false)
    }

    /// Get or create the client for the effective token
    pub fn get_client(&self, token: Option<&str>) -> Result<Arc<OctocrabClient>, GitHubError> {
        let resolved = self.tokens.resolve(token);
        let key = resolved.clone().unwrap_or_else(|| ANONYMOUS.to_string());

        let mut clients = self
            .clients
            .lock()
            .map_err(|e| GitHubError::Client(e.to_string()))?;

        if let Some(client) = clients.get(&key) {
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(create_client(resolved)?);
        clients.insert(key, Arc::clone(&client));
        Ok(client)
    }
}

#[async_trait]
impl ClientProvider for ClientManager {
    async fn client(&self, token: Option<&str>) -> Result<Arc<dyn GitHubClient>, GitHubError> {
        let client: Arc<dyn GitHubClient> = self.get_client(token)?;
        Ok(client)
    }
}

/// Create a new octocrab-backed client
fn create_client(token: Option<String>) -> Result<OctocrabClient, GitHubError> {
    let builder = match token {
        Some(token) => {
            debug!("Creating authenticated GitHub client");
            Octocrab::builder().personal_token(token)
        }
        None => {
            info!("No GitHub token configured, creating anonymous client");
            Octocrab::builder()
        }
    };

    let octocrab = builder
        .build()
        .map_err(|e| GitHubError::Client(e.to_string()))?;
    Ok(OctocrabClient::new(Arc::new(octocrab)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_token_wins() {
        let resolver = TokenResolver::with_default(Some("env-token".to_string()));
        assert_eq!(
            resolver.resolve(Some("settings-token")),
            Some("settings-token".to_string())
        );
    }

    #[test]
    fn test_blank_token_falls_back_to_default() {
        let resolver = TokenResolver::with_default(Some("env-token".to_string()));
        assert_eq!(resolver.resolve(Some("   ")), Some("env-token".to_string()));
        assert_eq!(resolver.resolve(None), Some("env-token".to_string()));
    }

    #[test]
    fn test_no_token_anywhere() {
        let resolver = TokenResolver::with_default(None);
        assert_eq!(resolver.resolve(None), None);
        assert_eq!(resolver.resolve(Some("")), None);
    }

    #[test]
    fn test_client_manager_new() {
        let manager = ClientManager::with_resolver(TokenResolver::with_default(None));
        assert!(!manager.has_client(None));
        assert!(!manager.has_client(Some("token")));
    }

    #[tokio::test]
    async fn test_clients_are_cached_per_token() {
        let manager = ClientManager::with_resolver(TokenResolver::with_default(None));

        let first = manager.get_client(Some("token-a")).unwrap();
        let again = manager.get_client(Some("token-a")).unwrap();
        let other = manager.get_client(Some("token-b")).unwrap();

        assert!(Arc::ptr_eq(&first, &again));
        assert!(!Arc::ptr_eq(&first, &other));
        assert!(manager.has_client(Some("token-a")));
    }
}
