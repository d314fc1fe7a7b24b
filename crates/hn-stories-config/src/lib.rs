//! Configuration and file management for hn-stories
//!
//! This crate provides:
//! - File path utilities for config, session, and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Session persistence for the active search term

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod session;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir, global_session_path, local_session_path};
pub use session::Session;
