//! Credentials and the allow-list policy used by the login console.
//!
//! This is client-visible gatekeeping only: the credentials ship with the
//! program in clear text. Anything that needs real access control has to
//! live server-side.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{AuthError, ValidationError};
use crate::session::Session;

/// A username/password/role triple accepted by the login console.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Credential {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
        }
    }

    /// Exact, case-sensitive comparison of both fields.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUsername`] or
    /// [`ValidationError::EmptyPassword`] when a field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if self.password.is_empty() {
            return Err(ValidationError::EmptyPassword);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .field("role", &self.role)
            .finish()
    }
}

/// Ordered allow-list of credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    credentials: Vec<Credential>,
}

impl CredentialPolicy {
    /// Build a policy after validating every entry.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for blank fields or a username listed
    /// twice.
    pub fn new(credentials: Vec<Credential>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for credential in &credentials {
            credential.validate()?;
            if !seen.insert(credential.username.as_str()) {
                return Err(ValidationError::DuplicateUsername(
                    credential.username.clone(),
                ));
            }
        }
        Ok(Self { credentials })
    }

    /// Linear scan for an exact match.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when nothing matches.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        self.credentials
            .iter()
            .find(|c| c.matches(username, password))
            .map(|c| Session::new(c.username.clone(), c.role.clone()))
            .ok_or(AuthError::InvalidCredentials)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.credentials.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl Default for CredentialPolicy {
    /// The built-in accounts shipped with the dashboard.
    fn default() -> Self {
        Self {
            credentials: vec![
                Credential::new("admin", "admin123", "Administrator"),
                Credential::new("manager", "manager123", "Manager"),
                Credential::new("user", "user123", "User"),
                Credential::new("guest", "guest123", "Guest"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_authenticate_every_builtin_credential_with_its_role() {
        let policy = CredentialPolicy::default();
        for credential in policy.iter() {
            let session = policy
                .authenticate(&credential.username, &credential.password)
                .unwrap();
            assert_eq!(session.username, credential.username);
            assert_eq!(session.role, credential.role);
        }
    }

    #[test]
    fn should_reject_wrong_password() {
        let policy = CredentialPolicy::default();
        assert_eq!(
            policy.authenticate("admin", "wrongpass"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn should_reject_swapped_pairs_and_case_changes() {
        let policy = CredentialPolicy::default();
        assert!(policy.authenticate("admin", "user123").is_err());
        assert!(policy.authenticate("Admin", "admin123").is_err());
        assert!(policy.authenticate("", "").is_err());
    }

    #[test]
    fn should_reject_duplicate_usernames() {
        let result = CredentialPolicy::new(vec![
            Credential::new("a", "1", "User"),
            Credential::new("a", "2", "Admin"),
        ]);
        assert_eq!(
            result,
            Err(ValidationError::DuplicateUsername("a".to_string()))
        );
    }

    #[test]
    fn should_reject_blank_password() {
        let result = CredentialPolicy::new(vec![Credential::new("a", "", "User")]);
        assert_eq!(result, Err(ValidationError::EmptyPassword));
    }

    #[test]
    fn should_redact_password_in_debug_output() {
        let rendered = format!("{:?}", Credential::new("admin", "s3cret", "Administrator"));
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("admin"));
    }
}
