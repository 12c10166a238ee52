//! Shared application state for axum handlers.

use std::path::PathBuf;
use std::sync::Arc;

use corpdash_app::ports::TimeSource;
use corpdash_domain::clock::DateLocale;
use corpdash_domain::credential::CredentialPolicy;

/// Application state shared across all axum handlers.
///
/// `Clone` is implemented manually so `T` does not need to be `Clone`;
/// only the `Arc` wrappers are cloned.
pub struct AppState<T> {
    /// Accounts accepted by the login console.
    pub policy: Arc<CredentialPolicy>,
    /// Destination after a successful login.
    pub portal_url: Arc<str>,
    /// Locale of the clock and document date stamps.
    pub locale: DateLocale,
    /// Wall clock used to render the time.
    pub time: Arc<T>,
    /// Directory served under `/assets`, if any.
    pub assets_dir: Option<PathBuf>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            policy: Arc::clone(&self.policy),
            portal_url: Arc::clone(&self.portal_url),
            locale: self.locale,
            time: Arc::clone(&self.time),
            assets_dir: self.assets_dir.clone(),
        }
    }
}

impl<T: TimeSource + Send + Sync + 'static> AppState<T> {
    /// Create a new application state.
    pub fn new(
        policy: CredentialPolicy,
        portal_url: impl Into<Arc<str>>,
        locale: DateLocale,
        time: T,
    ) -> Self {
        Self {
            policy: Arc::new(policy),
            portal_url: portal_url.into(),
            locale,
            time: Arc::new(time),
            assets_dir: None,
        }
    }

    /// Serve static files from `dir` under `/assets`.
    #[must_use]
    pub fn with_assets(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = Some(dir.into());
        self
    }
}
