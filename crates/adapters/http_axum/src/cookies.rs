//! Cookie-backed [`KeyValueStore`]: the server-side stand-in for
//! `localStorage`.
//!
//! Values are read from the request `Cookie` header once. Writes are kept
//! in memory so later reads in the same request observe them, and are
//! emitted as `Set-Cookie` headers on the response.

use std::cell::RefCell;
use std::collections::BTreeMap;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};

use corpdash_app::ports::KeyValueStore;
use corpdash_domain::error::StorageError;

/// One year, the lifetime of every cookie written.
const MAX_AGE_SECONDS: u32 = 365 * 24 * 60 * 60;

/// Request-scoped cookie storage.
#[derive(Debug, Default)]
pub struct CookieStore {
    values: RefCell<BTreeMap<String, String>>,
    changes: RefCell<BTreeMap<String, Option<String>>>,
}

impl CookieStore {
    /// Parse every cookie of the request. Undecodable values are skipped.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut values = BTreeMap::new();
        for header in headers.get_all(COOKIE) {
            let Ok(header) = header.to_str() else {
                continue;
            };
            for pair in header.split(';') {
                let Some((name, value)) = pair.trim().split_once('=') else {
                    continue;
                };
                match urlencoding::decode(value) {
                    Ok(value) => {
                        values.insert(name.to_string(), value.into_owned());
                    }
                    Err(err) => tracing::debug!(cookie = name, error = %err, "skipping cookie"),
                }
            }
        }

        Self {
            values: RefCell::new(values),
            changes: RefCell::default(),
        }
    }

    /// `Set-Cookie` headers for every key written or removed.
    #[must_use]
    pub fn into_headers(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in self.changes.into_inner() {
            let cookie = match value {
                Some(value) => format!(
                    "{name}={}; Path=/; Max-Age={MAX_AGE_SECONDS}; HttpOnly; SameSite=Lax",
                    urlencoding::encode(&value)
                ),
                None => format!("{name}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax"),
            };
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    headers.append(SET_COOKIE, value);
                }
                Err(err) => tracing::warn!(cookie = name, error = %err, "cookie not emitted"),
            }
        }
        headers
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !is_token(key) {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "not a valid cookie name".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.changes
            .borrow_mut()
            .insert(key.to_string(), Some(value.to_string()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().remove(key);
        self.changes.borrow_mut().insert(key.to_string(), None);
        Ok(())
    }
}

fn is_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"-_.!#$%&'*+^`|~".contains(&b))
}
