//! Session state persistence
//!
//! Persists the active search term across runs, with local/global
//! precedence.
//!
//! # Precedence
//!
//! 1. `$CWD/.hn-stories.session.toml` - Local session (highest priority)
//! 2. `~/.config/hn-stories/session.toml` - Global session (fallback)
//!
//! On save: Use local file if it exists, otherwise use global. The file
//! holds the last written term; whoever wrote last wins.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// Session data - the actual persisted state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionData {
    /// The search term that was active when the session was saved
    pub search_term: Option<String>,
}

/// Complete session with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    #[serde(default)]
    pub session: SessionData,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            session: SessionData::default(),
        }
    }
}

impl Session {
    /// Load session with precedence: local > global > default
    pub fn load() -> Self {
        // Try local first
        if paths::has_local_session() {
            if let Ok(path) = paths::local_session_path() {
                if let Ok(session) = Self::load_from_path(&path) {
                    log::info!("Loaded local session from {:?}", path);
                    return session;
                }
            }
        }

        // Try global
        if let Ok(path) = paths::global_session_path() {
            if path.exists() {
                if let Ok(session) = Self::load_from_path(&path) {
                    log::info!("Loaded global session from {:?}", path);
                    return session;
                }
            }
        }

        log::info!("No existing session found, using defaults");
        Self::default()
    }

    /// Load session from specific path
    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Save session (to local if exists, otherwise global)
    pub fn save(&mut self) -> Result<()> {
        // Update timestamp
        self.meta.last_modified = Utc::now();

        let path = if paths::has_local_session() {
            paths::local_session_path()?
        } else {
            paths::global_session_path()?
        };

        self.save_to_path(&path)
    }

    /// Save session to specific path
    fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }

    /// Update the persisted search term
    pub fn set_search_term(&mut self, term: &str) {
        self.session.search_term = Some(term.to_string());
    }

    /// Get the persisted search term
    pub fn search_term(&self) -> Option<&str> {
        self.session.search_term.as_deref()
    }
}
