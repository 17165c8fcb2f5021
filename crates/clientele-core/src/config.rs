//! Sign-in configuration.
//!
//! The only configurable value is the login endpoint URL. It is resolved,
//! first match wins, from:
//!
//! 1. the `CLIENTELE_LOGIN_URL` environment variable
//! 2. `login_url` in `~/.config/clientele/config.json`
//! 3. `$CLIENTBOOK_API_BASE/api/login`, with the base defaulting to the
//!    public Clientbook dashboard
//!
//! The URL is kept verbatim; it is validated when a sign-in is attempted.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Application name used for config/cache directory paths
pub const APP_NAME: &str = "clientele";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the login URL
pub const LOGIN_URL_ENV: &str = "CLIENTELE_LOGIN_URL";

/// Environment variable overriding the API base the default URL is built from
pub const API_BASE_ENV: &str = "CLIENTBOOK_API_BASE";

const DEFAULT_API_BASE: &str = "https://dashboard.clientbook.com";

const LOGIN_PATH: &str = "/api/login";

/// On-disk config file contents
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct ConfigFile {
    login_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub login_url: String,
}

impl AuthConfig {
    pub fn with_login_url(login_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
        }
    }

    /// Load from the environment and the user's config file
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path, |key| std::env::var(key).ok())
    }

    /// Resolve using only the environment and built-in defaults.
    /// Used when the config file cannot be read.
    pub fn from_env() -> Self {
        Self::resolve(None, |key| std::env::var(key).ok())
    }

    fn load_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let file = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let parsed: ConfigFile = serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            Some(parsed)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            None
        };

        Ok(Self::resolve(file, env))
    }

    fn resolve(file: Option<ConfigFile>, env: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |v: String| if v.trim().is_empty() { None } else { Some(v) };

        let login_url = env(LOGIN_URL_ENV)
            .and_then(non_empty)
            .or_else(|| file.and_then(|f| f.login_url))
            .unwrap_or_else(|| {
                let base = env(API_BASE_ENV)
                    .and_then(non_empty)
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
                format!("{}{}", base.trim_end_matches('/'), LOGIN_PATH)
            });

        debug!(%login_url, "Login URL resolved");
        Self { login_url }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

// ============================================================================
// Tests
// ============================================================================
