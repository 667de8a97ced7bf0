//! Cache directory path
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.cache/pr-reviewer/`
//! - macOS: `~/Library/Caches/pr-reviewer/`
//! - Windows: `%LOCALAPPDATA%\pr-reviewer\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "pr-reviewer";

/// Get the application cache directory (log files in release builds)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    app_dir_in(&base)
}

/// `<base>/pr-reviewer`, created if needed
fn app_dir_in(base: &Path) -> Result<PathBuf> {
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}
