//! Authentication methods.
//!
//! Two flows are supported:
//! - mobile: [`LastfmApi::mobile_session`] with a configured username and
//!   password;
//! - web: [`LastfmApi::token`], send the user to [`LastfmApi::auth_url`],
//!   then exchange the token with [`LastfmApi::session`].
//!
//! The returned session key goes into [`crate::Config::with_session_key`].

use reqwest::Url;

use crate::error::{LastfmError, Result};
use crate::models::{AuthSession, Record};

use super::client::{LastfmApi, Params};

impl LastfmApi {
    /// Create a web service session from the configured credentials.
    pub async fn mobile_session(&self) -> Result<AuthSession> {
        let config = self.config();
        let (username, password) = match (&config.username, &config.password) {
            (Some(u), Some(p)) => (u.as_str(), p.as_str()),
            _ => {
                return Err(LastfmError::Config(
                    "username and password are required for a mobile session".to_string(),
                ))
            }
        };

        let data = self
            .call(
                "auth.getMobileSession",
                Params::new()
                    .set("username", username)
                    .set("password", password),
                true,
            )
            .await?;
        AuthSession::bind(&data)
    }

    /// Fetch an unauthorized request token for the web flow.
    pub async fn token(&self) -> Result<String> {
        let data = self.call("auth.getToken", Params::new(), true).await?;
        data.as_str()
            .map(str::to_string)
            .ok_or_else(|| LastfmError::SchemaMismatch {
                record: "AuthToken",
                field: "token".to_string(),
                expected: "text",
            })
    }

    /// Exchange a user-authorized token for a session.
    pub async fn session(&self, token: &str) -> Result<AuthSession> {
        let data = self
            .call("auth.getSession", Params::new().set("token", token), true)
            .await?;
        AuthSession::bind(&data)
    }

    /// URL the user visits to authorize `token`.
    pub fn auth_url(&self, token: &str) -> Result<String> {
        let config = self.config();
        let url = Url::parse_with_params(
            &config.auth_url,
            &[("token", token), ("api_key", config.api_key.as_str())],
        )
        .map_err(|e| LastfmError::Config(format!("Invalid auth URL {}: {}", config.auth_url, e)))?;
        Ok(url.to_string())
    }
}
