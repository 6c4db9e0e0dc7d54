//! Client configuration.
//!
//! Configuration is an explicit value handed to [`crate::LastfmApi::new`];
//! nothing is read from process-wide state unless the caller asks for it
//! with [`Config::from_env`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LastfmError, Result};

/// Default Last.fm web service endpoint.
pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Default user authorization page.
pub const DEFAULT_AUTH_URL: &str = "https://www.last.fm/api/auth";

/// Credentials and endpoints for a [`crate::LastfmApi`].
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Application API key.
    pub api_key: String,

    /// Shared secret, required for signed calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,

    /// Session key added to signed calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,

    /// Username for `auth.getMobileSession`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password for `auth.getMobileSession`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_auth_url")]
    pub auth_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            if value.is_some() {
                "[REDACTED]"
            } else {
                "None"
            }
        }

        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &redact(&self.api_secret))
            .field("session_key", &redact(&self.session_key))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("api_url", &self.api_url)
            .field("auth_url", &self.auth_url)
            .finish()
    }
}

impl Config {
    /// Create a configuration with just an API key.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: None,
            session_key: None,
            username: None,
            password: None,
            api_url: default_api_url(),
            auth_url: default_auth_url(),
        }
    }

    /// Read the configuration from `LASTFM_*` environment variables.
    ///
    /// `LASTFM_API_KEY` is required; `LASTFM_API_SECRET`,
    /// `LASTFM_SESSION_KEY`, `LASTFM_USERNAME` and `LASTFM_PASSWORD` are
    /// optional.
    pub fn from_env() -> Result<Self> {
        let api_key = env_var("LASTFM_API_KEY")
            .ok_or_else(|| LastfmError::Config("LASTFM_API_KEY is not set".to_string()))?;

        let config = Self {
            api_secret: env_var("LASTFM_API_SECRET"),
            session_key: env_var("LASTFM_SESSION_KEY"),
            username: env_var("LASTFM_USERNAME"),
            password: env_var("LASTFM_PASSWORD"),
            ..Self::new(api_key)
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the API key is usable.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(LastfmError::Config(
                "API key is required for Last.fm API access".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.api_secret = Some(secret.into());
        self
    }

    pub fn with_session_key<S: Into<String>>(mut self, session_key: S) -> Self {
        self.session_key = Some(session_key.into());
        self
    }

    pub fn with_credentials<S1: Into<String>, S2: Into<String>>(
        mut self,
        username: S1,
        password: S2,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Point the client at another endpoint (a proxy or a mock server).
    pub fn with_api_url<S: Into<String>>(mut self, api_url: S) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_auth_url<S: Into<String>>(mut self, auth_url: S) -> Self {
        self.auth_url = auth_url.into();
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("K");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert!(config.api_secret.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = Config::new("  ").validate();
        assert!(matches!(result, Err(LastfmError::Config(_))));
    }

    #[test]
    fn test_builder() {
        let config = Config::new("K")
            .with_secret("S")
            .with_session_key("SK")
            .with_credentials("alice", "pw")
            .with_api_url("http://localhost:1234/2.0/");
        assert_eq!(config.api_secret.as_deref(), Some("S"));
        assert_eq!(config.session_key.as_deref(), Some("SK"));
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert_eq!(config.password.as_deref(), Some("pw"));
        assert_eq!(config.api_url, "http://localhost:1234/2.0/");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("my_key")
            .with_secret("my_secret")
            .with_credentials("alice", "hunter2");
        let debug_str = format!("{:?}", config);
        assert!(!debug_str.contains("my_key"));
        assert!(!debug_str.contains("my_secret"));
        assert!(!debug_str.contains("hunter2"));
        assert!(debug_str.contains("alice"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"api_key": "K", "api_secret": "S"}"#).unwrap();
        assert_eq!(config.api_secret.as_deref(), Some("S"));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/nonexistent/rustfm.json");
        assert!(matches!(result, Err(LastfmError::Io(_))));
    }
}
