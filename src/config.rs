// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Loaded once at startup and carried in `AppState`; nothing reads the
//! environment after that.

use std::env;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

/// Which document store backs the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUrl {
    /// Process-local store; contents are lost on exit.
    Memory,
    /// Firestore project (emulator when `FIRESTORE_EMULATOR_HOST` is set).
    Firestore { project_id: String },
}

impl StoreUrl {
    /// Parse `memory://` or `firestore://<project-id>`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw == "memory://" || raw == "memory" {
            return Ok(StoreUrl::Memory);
        }
        match raw.strip_prefix("firestore://") {
            Some(project) if !project.is_empty() && !project.contains('/') => {
                Ok(StoreUrl::Firestore {
                    project_id: project.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidStoreUrl(raw.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection
    pub store_url: StoreUrl,
    /// Public base address advertised by the API index (no trailing slash)
    pub api_base_url: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let store_url = StoreUrl::parse(
            &env::var("DATABASE_URL").unwrap_or_else(|_| "memory://".to_string()),
        )?;

        let api_base_url = resolve_base_url(
            env::var("API_BASE_URL").ok().as_deref(),
            env::var("CODESPACE_NAME").ok().as_deref(),
            port,
        );

        Ok(Self {
            store_url,
            api_base_url,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            port,
        })
    }

    /// Config for tests: in-memory store, localhost addresses.
    pub fn test_default() -> Self {
        Self {
            store_url: StoreUrl::Memory,
            api_base_url: format!("http://localhost:{DEFAULT_PORT}"),
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Pick the public base address.
///
/// An explicit `API_BASE_URL` wins, then a GitHub Codespace forwarding
/// address for port 8000, then localhost.
fn resolve_base_url(explicit: Option<&str>, codespace: Option<&str>, port: u16) -> String {
    if let Some(url) = explicit.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }
    match codespace.map(str::trim).filter(|c| !c.is_empty()) {
        Some(name) => format!("https://{name}-8000.app.github.dev"),
        None => format!("http://localhost:{port}"),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),

    #[error("Unsupported DATABASE_URL {0:?} (expected memory:// or firestore://<project-id>)")]
    InvalidStoreUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_url_parsing() {
        assert_eq!(StoreUrl::parse("memory://").unwrap(), StoreUrl::Memory);
        assert_eq!(
            StoreUrl::parse("firestore://octofit-db").unwrap(),
            StoreUrl::Firestore {
                project_id: "octofit-db".to_string()
            }
        );
        assert!(StoreUrl::parse("firestore://").is_err());
        assert!(StoreUrl::parse("mongodb://localhost:27017/octofit_db").is_err());
    }

    #[test]
    fn test_base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some("https://api.example.com/"), Some("cs"), 8000),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_base_url(None, Some("octo-space"), 8000),
            "https://octo-space-8000.app.github.dev"
        );
        assert_eq!(resolve_base_url(None, None, 9000), "http://localhost:9000");
        assert_eq!(resolve_base_url(Some(""), None, 8000), "http://localhost:8000");
    }

    #[test]
    fn test_config_from_env() {
        env::set_var("DATABASE_URL", "memory://");
        env::set_var("API_BASE_URL", "http://api.test");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.store_url, StoreUrl::Memory);
        assert_eq!(config.api_base_url, "http://api.test");
    }
}
