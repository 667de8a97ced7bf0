//! Pull request URL parsing

use regex::Regex;
use std::sync::OnceLock;

/// Coordinates of a pull request extracted from its URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrUrl {
    pub owner: String,
    pub repo: String,
    pub pr_number: u64,
}

impl PrUrl {
    /// Parse `http(s)://[www.]github.com/<owner>/<repo>/pull/<number>`
    ///
    /// Surrounding whitespace is ignored. Anything after the number
    /// (`/files`, `#discussion`, query strings) is accepted and ignored.
    pub fn parse(url: &str) -> Option<Self> {
        static PR_URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = PR_URL_REGEX.get_or_init(|| {
            Regex::new(r"^https?://(?:www\.)?github\.com/([^/]+)/([^/]+)/pull/(\d+)")
                .expect("PR URL regex is valid")
        });

        let caps = regex.captures(url.trim())?;
        Some(Self {
            owner: caps.get(1)?.as_str().to_string(),
            repo: caps.get(2)?.as_str().to_string(),
            pr_number: caps.get(3)?.as_str().parse().ok()?,
        })
    }
}

impl std::fmt::Display for PrUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.pr_number)
    }
}
