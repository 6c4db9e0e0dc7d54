//! Last.fm client and HTTP transport.
//!
//! Every façade method goes through [`LastfmApi::call`]: it adds the common
//! parameters, signs the request when asked to, performs one HTTP round trip
//! and strips the response envelope. No retries and no caching.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::crypto;
use crate::error::{LastfmError, Result};
use crate::models::{Collection, Record};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("rustfm/", env!("CARGO_PKG_VERSION"));

/// Request parameters for one API method.
///
/// Optional values that are `None` are dropped, never sent as empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    pub fn set<V: ToString>(mut self, key: &str, value: V) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    /// Set a parameter only if a value is present.
    pub fn set_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(key, v),
            None => self,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

/// Last.fm error envelope.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: i64,
    #[serde(default)]
    message: String,
}

/// Last.fm web service client.
///
/// Holds only the configuration and an HTTP client, so it is cheap to clone
/// and safe to share between tasks.
///
/// # Example
///
/// ```rust,no_run
/// use rustfm::{Config, LastfmApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = LastfmApi::new(Config::new("your_api_key"))?;
///     let tag = api.tag_info("rap", Some("en")).await?;
///     println!("{}: {:?} uses", tag.name, tag.total);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LastfmApi {
    client: Client,
    config: Config,
}

impl LastfmApi {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the API key is empty.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Self::with_client(config, client)
    }

    /// Create a client on top of a caller-built `reqwest::Client`.
    ///
    /// Use this to set timeouts, proxies or connection pooling.
    pub fn with_client(config: Config, client: Client) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Call an API method and return the unwrapped payload.
    ///
    /// Unauthenticated calls are GET requests. Authenticated calls are signed
    /// POST requests carrying the session key, when one is configured.
    pub async fn call(&self, method: &str, params: Params, authenticated: bool) -> Result<Value> {
        let params = self.prepare(method, params, authenticated)?;
        debug!(
            method,
            authenticated,
            params = ?params.keys().collect::<Vec<_>>(),
            "Calling Last.fm"
        );

        let request = if authenticated {
            self.client.post(&self.config.api_url).form(&params)
        } else {
            self.client.get(&self.config.api_url).query(&params)
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        parse_response(status, &text).inspect_err(|e| {
            debug!(method, error = %e, "Last.fm call failed");
        })
    }

    /// Build the full parameter set for a call.
    fn prepare(
        &self,
        method: &str,
        params: Params,
        authenticated: bool,
    ) -> Result<BTreeMap<String, String>> {
        let mut params = params.into_inner();
        params.insert("method".to_string(), method.to_string());
        params.insert("api_key".to_string(), self.config.api_key.clone());

        if authenticated {
            let secret = self.config.api_secret.as_deref().ok_or_else(|| {
                LastfmError::Config(format!("API secret is required to sign {}", method))
            })?;

            if let Some(session_key) = &self.config.session_key {
                if !method.starts_with("auth.") {
                    params.insert("sk".to_string(), session_key.clone());
                }
            }

            let signature = crypto::api_signature(&params, secret);
            params.insert("api_sig".to_string(), signature);
        }

        params.insert("format".to_string(), "json".to_string());
        Ok(params)
    }

    /// Call a method returning a single record.
    pub(crate) async fn fetch_one<T: Record>(&self, method: &str, params: Params) -> Result<T> {
        let data = self.call(method, params, false).await?;
        T::bind(&data)
    }

    /// Call a method returning a list of records.
    pub(crate) async fn fetch_list<T: Record>(
        &self,
        method: &str,
        params: Params,
        item_key: &str,
    ) -> Result<Collection<T>> {
        let data = self.call(method, params.clone(), false).await?;
        Ok(Collection::bind(&data, item_key)?.with_params(params))
    }
}

/// Check a raw response and strip its envelope.
///
/// Error envelopes win over the HTTP status: Last.fm sends them with 4xx
/// codes as well as 200.
pub(crate) fn parse_response(status: u16, text: &str) -> Result<Value> {
    let success = (200..300).contains(&status);

    let data: Value = match serde_json::from_str(text) {
        Ok(data) => data,
        Err(_) if !success => {
            return Err(LastfmError::HttpStatus {
                status,
                body: text.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    if data.get("error").is_some() {
        if let Ok(err) = ErrorResponse::deserialize(&data) {
            return Err(LastfmError::RemoteApi {
                code: err.error,
                message: err.message,
            });
        }
    }

    if !success {
        return Err(LastfmError::HttpStatus {
            status,
            body: text.to_string(),
        });
    }

    Ok(unwrap_root(data))
}

/// Strip the `{"<root>": payload}` wrapper.
fn unwrap_root(data: Value) -> Value {
    match data {
        Value::Object(map) if map.len() == 1 => match map.into_iter().next() {
            Some((_, payload)) => payload,
            None => Value::Null,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api() -> LastfmApi {
        LastfmApi::new(Config::new("K").with_secret("S")).unwrap()
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = LastfmApi::new(Config::new(""));
        assert!(matches!(result, Err(LastfmError::Config(_))));
    }

    #[test]
    fn test_params_drop_none() {
        let params = Params::new()
            .set("tag", "rap")
            .set_opt("lang", None::<&str>)
            .set_opt("limit", Some(10));
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.get("lang"), None);
    }

    #[test]
    fn test_prepare_unsigned() {
        let params = api()
            .prepare("tag.getInfo", Params::new().set("tag", "rap"), false)
            .unwrap();
        assert_eq!(params["method"], "tag.getInfo");
        assert_eq!(params["api_key"], "K");
        assert_eq!(params["format"], "json");
        assert!(!params.contains_key("api_sig"));
    }

    #[test]
    fn test_prepare_signed() {
        let params = api()
            .prepare(
                "auth.getMobileSession",
                Params::new().set("username", "alice").set("password", "pw"),
                true,
            )
            .unwrap();
        assert_eq!(params["api_sig"], "4eb67313d598c5c6449f82c3738e4a0f");
        assert_eq!(params["format"], "json");
    }

    #[test]
    fn test_prepare_adds_session_key() {
        let api = LastfmApi::new(Config::new("K").with_secret("S").with_session_key("SK")).unwrap();
        let params = api.prepare("track.love", Params::new(), true).unwrap();
        assert_eq!(params["sk"], "SK");

        let params = api.prepare("auth.getToken", Params::new(), true).unwrap();
        assert!(!params.contains_key("sk"));
    }

    #[test]
    fn test_signed_call_needs_secret() {
        let api = LastfmApi::new(Config::new("K")).unwrap();
        let result = api.prepare("auth.getToken", Params::new(), true);
        assert!(matches!(result, Err(LastfmError::Config(_))));
    }

    #[test]
    fn test_parse_unwraps_root() {
        let data = parse_response(200, r#"{"tag": {"name": "rap"}}"#).unwrap();
        assert_eq!(data, json!({"name": "rap"}));
    }

    #[test]
    fn test_parse_keeps_multi_key_payload() {
        let data = parse_response(200, r#"{"a": 1, "b": 2}"#).unwrap();
        assert_eq!(data, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_parse_error_envelope() {
        let err = parse_response(200, r#"{"error": 6, "message": "no artist"}"#).unwrap_err();
        match err {
            LastfmError::RemoteApi { code, message } => {
                assert_eq!(code, 6);
                assert_eq!(message, "no artist");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_envelope_with_http_error() {
        let err = parse_response(403, r#"{"error": 10, "message": "Invalid API key"}"#).unwrap_err();
        assert_eq!(err.api_code(), Some(10));
    }

    #[test]
    fn test_parse_http_error() {
        let err = parse_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LastfmError::HttpStatus { status: 502, .. }));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_response(200, "not json").unwrap_err();
        assert!(matches!(err, LastfmError::Parse(_)));
    }
}
