//! Session: the client-local "logged in" record.
//!
//! A session is not a credential: it is whatever the last successful login
//! wrote into storage, with no expiry and no server validation.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Storage key holding the JSON-encoded session.
pub const STORAGE_KEY: &str = "corporate-dashboard-session";

/// The currently logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: String,
}

impl Session {
    #[must_use]
    pub fn new(username: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
        }
    }

    /// Encode for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a persisted value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Malformed`] for invalid JSON and
    /// [`SessionError::MissingUsername`] when the username is empty.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        let session: Self = serde_json::from_str(raw)?;
        if session.username.is_empty() {
            return Err(SessionError::MissingUsername);
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_persisted_session() {
        let session = Session::from_json(r#"{"username":"admin","role":"Administrator"}"#).unwrap();
        assert_eq!(session, Session::new("admin", "Administrator"));
    }

    #[test]
    fn should_reject_invalid_json() {
        let result = Session::from_json("{not json");
        assert!(matches!(result, Err(SessionError::Malformed(_))));
    }

    #[test]
    fn should_reject_empty_username() {
        let result = Session::from_json(r#"{"username":"","role":"User"}"#);
        assert!(matches!(result, Err(SessionError::MissingUsername)));
    }

    #[test]
    fn should_encode_only_username_and_role() {
        let json = Session::new("user", "User").to_json().unwrap();
        assert_eq!(json, r#"{"username":"user","role":"User"}"#);
    }
}
