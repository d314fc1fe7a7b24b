//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/hn-stories/`, `~/.cache/hn-stories/`
//! - macOS: `~/Library/Application Support/hn-stories/`, `~/Library/Caches/hn-stories/`
//! - Windows: `%APPDATA%\hn-stories\`, `%LOCALAPPDATA%\hn-stories\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "hn-stories";
const LOCAL_SESSION_FILE: &str = ".hn-stories.session.toml";

/// Get the application config directory
/// Returns ~/.config/hn-stories/ on Linux, ~/Library/Application Support/hn-stories/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
/// Returns ~/.cache/hn-stories/ on Linux, ~/Library/Caches/hn-stories/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to global session file
pub fn global_session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("session.toml"))
}

/// Get path to local session file (in CWD)
pub fn local_session_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_SESSION_FILE))
}

/// Check if local session file exists
pub fn has_local_session() -> bool {
    local_session_path().map(|p| p.exists()).unwrap_or(false)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
