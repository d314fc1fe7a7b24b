//! Application configuration
//!
//! Configuration loaded from the `.hn-stories.toml` file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .hn-stories.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the story search API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Search term used when no session was persisted yet
    #[serde(default = "default_search_term")]
    pub default_search_term: String,
}

fn default_api_base_url() -> String {
    "https://hn.algolia.com/api/v1".to_string()
}

fn default_search_term() -> String {
    "React".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_search_term: default_search_term(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://hn.algolia.com/api/v1");
        assert_eq!(config.default_search_term, "React");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            api_base_url = "http://localhost:8080/api/v1"
            default_search_term = "rust"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.default_search_term, "rust");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            default_search_term = "zig"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_search_term, "zig");
        // api_base_url should use default
        assert_eq!(config.api_base_url, "https://hn.algolia.com/api/v1");
    }
}
