//! Session store: login against the credential policy and the persisted
//! "current user" record.

use std::sync::Arc;

use corpdash_domain::credential::CredentialPolicy;
use corpdash_domain::error::AuthError;
use corpdash_domain::session::{self, Session};

use crate::ports::KeyValueStore;

/// Logs users in and out and reads back the persisted session.
pub struct SessionStore<S> {
    store: S,
    policy: Arc<CredentialPolicy>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a store checking logins against `policy`.
    ///
    /// Accepts either an owned policy or one shared with other stores.
    pub fn new(store: S, policy: impl Into<Arc<CredentialPolicy>>) -> Self {
        Self {
            store,
            policy: policy.into(),
        }
    }

    /// Authenticate and persist the resulting session.
    ///
    /// A session that cannot be persisted is still returned: the login
    /// succeeded, it just will not survive a reload.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no credential matches.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let session = self
            .policy
            .authenticate(username, password)
            .inspect_err(|_| tracing::info!(username, "login rejected"))?;

        match session.to_json() {
            Ok(json) => {
                if let Err(err) = self.store.set(session::STORAGE_KEY, &json) {
                    tracing::warn!(error = %err, "session not persisted");
                }
            }
            Err(err) => tracing::warn!(error = %err, "session not encodable"),
        }

        tracing::info!(username = %session.username, role = %session.role, "login succeeded");
        Ok(session)
    }

    /// Forget the persisted session.
    pub fn logout(&self) {
        if let Err(err) = self.store.remove(session::STORAGE_KEY) {
            tracing::warn!(error = %err, "session not cleared");
        }
        tracing::info!("logged out");
    }

    /// The persisted session, if one exists and is well-formed.
    ///
    /// A malformed value is purged so the next read starts clean.
    pub fn current_session(&self) -> Option<Session> {
        let raw = match self.store.get(session::STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "session storage unreadable");
                return None;
            }
        };

        match Session::from_json(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed session");
                if let Err(err) = self.store.remove(session::STORAGE_KEY) {
                    tracing::warn!(error = %err, "malformed session not purged");
                }
                None
            }
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    #[must_use]
    pub fn policy(&self) -> &CredentialPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use corpdash_domain::credential::Credential;

    fn make_store() -> (SessionStore<MemoryStore>, MemoryStore) {
        let store = MemoryStore::default();
        (
            SessionStore::new(store.clone(), CredentialPolicy::default()),
            store,
        )
    }

    #[test]
    fn should_login_every_policy_credential_with_matching_role() {
        let (sessions, _) = make_store();
        let credentials: Vec<Credential> = sessions.policy().iter().cloned().collect();

        for credential in credentials {
            let session = sessions
                .login(&credential.username, &credential.password)
                .unwrap();
            assert_eq!(session.role, credential.role);
            assert_eq!(sessions.current_session(), Some(session));
        }
    }

    #[test]
    fn should_share_policy_between_stores() {
        let policy = Arc::new(CredentialPolicy::default());
        let first = SessionStore::new(MemoryStore::default(), Arc::clone(&policy));
        let second = SessionStore::new(MemoryStore::default(), Arc::clone(&policy));

        assert!(std::ptr::eq(first.policy(), second.policy()));
        assert!(std::ptr::eq(first.policy(), policy.as_ref()));
        assert_eq!(Arc::strong_count(&policy), 3);
        assert!(first.login("admin", "admin123").is_ok());
        assert!(second.login("admin", "admin123").is_ok());
    }

    #[test]
    fn should_return_invalid_credentials_for_unknown_pairs() {
        let (sessions, store) = make_store();
        for (user, pass) in [("admin", "wrongpass"), ("nobody", "admin123"), ("", "")] {
            assert_eq!(
                sessions.login(user, pass),
                Err(AuthError::InvalidCredentials)
            );
        }
        assert_eq!(store.raw(session::STORAGE_KEY), None);
    }

    #[test]
    fn should_persist_session_as_json() {
        let (sessions, store) = make_store();
        sessions.login("admin", "admin123").unwrap();
        assert_eq!(
            store.raw(session::STORAGE_KEY).as_deref(),
            Some(r#"{"username":"admin","role":"Administrator"}"#)
        );
    }

    #[test]
    fn should_keep_a_single_session_when_logging_in_twice() {
        let (sessions, _) = make_store();
        sessions.login("admin", "admin123").unwrap();
        sessions.login("user", "user123").unwrap();
        assert_eq!(
            sessions.current_session().map(|s| s.username),
            Some("user".to_string())
        );
    }

    #[test]
    fn should_have_no_session_after_logout() {
        let (sessions, _) = make_store();
        sessions.login("admin", "admin123").unwrap();
        sessions.logout();
        assert_eq!(sessions.current_session(), None);
        assert!(!sessions.is_authenticated());
    }

    #[test]
    fn should_purge_malformed_session() {
        let (sessions, store) = make_store();
        store.put_raw(session::STORAGE_KEY, "{broken");

        assert_eq!(sessions.current_session(), None);
        assert_eq!(store.raw(session::STORAGE_KEY), None);
    }

    #[test]
    fn should_purge_session_without_username() {
        let (sessions, store) = make_store();
        store.put_raw(session::STORAGE_KEY, r#"{"username":"","role":"User"}"#);

        assert_eq!(sessions.current_session(), None);
        assert_eq!(store.raw(session::STORAGE_KEY), None);
    }

    #[test]
    fn should_still_login_when_storage_is_unavailable() {
        let (sessions, store) = make_store();
        store.set_unavailable(true);

        let session = sessions.login("admin", "admin123").unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(sessions.current_session(), None);
    }
}
