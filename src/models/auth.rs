//! Authentication session model.

use serde::Serialize;

use crate::converters::Fields;
use crate::error::Result;

use super::schema::{Field, Record, Schema, FLAG, TEXT};

/// A web service session, as returned by `auth.getMobileSession` and
/// `auth.getSession`.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct AuthSession {
    /// Session key for signed calls. Does not expire.
    pub key: String,

    /// Username the session belongs to.
    pub name: String,

    /// Whether the user is a subscriber.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<bool>,
}

pub static AUTH_SESSION: Schema = Schema {
    name: "AuthSession",
    fields: &[
        Field::required("key", TEXT),
        Field::required("name", TEXT),
        Field::optional("subscriber", FLAG),
    ],
};

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("key", &"[REDACTED]")
            .field("name", &self.name)
            .field("subscriber", &self.subscriber)
            .finish()
    }
}

impl Record for AuthSession {
    fn schema() -> &'static Schema {
        &AUTH_SESSION
    }

    fn from_fields(mut f: Fields) -> Result<Self> {
        Ok(Self {
            key: f.required_text("key")?,
            name: f.required_text("name")?,
            subscriber: f.flag("subscriber"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bind_session() {
        let session = AuthSession::bind(&json!({
            "name": "alice",
            "key": "d580d57f32848f5dcf574d1ce18d78b2",
            "subscriber": 0
        }))
        .unwrap();
        assert_eq!(session.name, "alice");
        assert_eq!(session.subscriber, Some(false));
    }

    #[test]
    fn test_debug_redacts_key() {
        let session = AuthSession {
            key: "secret_key".to_string(),
            name: "alice".to_string(),
            subscriber: None,
        };
        let debug_str = format!("{:?}", session);
        assert!(!debug_str.contains("secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }
}
