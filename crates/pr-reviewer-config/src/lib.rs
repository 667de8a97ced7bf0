//! Configuration and file management for pr-reviewer
//!
//! This crate provides:
//! - The cache directory path
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::cache_dir;
