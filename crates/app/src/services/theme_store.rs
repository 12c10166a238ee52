//! Theme store: the persisted light/dark flag and its reflection on the
//! document.

use corpdash_domain::theme::{self, Theme};

use crate::ports::{KeyValueStore, ThemeSurface};

/// Reads and writes the theme preference.
///
/// Storage failures never surface: reads fall back to the document marker
/// and writes still update the document, they just do not persist.
pub struct ThemeStore<S, D> {
    store: S,
    surface: D,
}

impl<S: KeyValueStore, D: ThemeSurface> ThemeStore<S, D> {
    /// Create a store backed by the given storage and document surface.
    pub fn new(store: S, surface: D) -> Self {
        Self { store, surface }
    }

    /// Current theme: persisted value first, then the document marker,
    /// then light.
    pub fn get_theme(&self) -> Theme {
        match self.store.get(theme::STORAGE_KEY) {
            Ok(Some(value)) => Theme::from_persisted(&value),
            Ok(None) => self.marker_theme(),
            Err(err) => {
                tracing::warn!(error = %err, "theme storage unreadable, using document marker");
                self.marker_theme()
            }
        }
    }

    /// Apply the current theme to the document without persisting it.
    pub fn initialize(&self) -> Theme {
        let current = self.get_theme();
        self.apply(current);
        tracing::debug!(theme = %current, "theme initialized");
        current
    }

    /// Persist `theme`, update the document marker and every toggle button.
    pub fn set_theme(&self, theme: Theme) {
        if let Err(err) = self.store.set(theme::STORAGE_KEY, theme.as_str()) {
            tracing::warn!(error = %err, %theme, "theme not persisted");
        }
        self.apply(theme);
        tracing::debug!(%theme, "theme changed");
    }

    /// Switch to the opposite theme and return it.
    pub fn toggle(&self) -> Theme {
        let next = self.get_theme().toggled();
        self.set_theme(next);
        next
    }

    fn marker_theme(&self) -> Theme {
        if self.surface.has_dark_marker() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn apply(&self, theme: Theme) {
        self.surface.set_dark_marker(theme.is_dark());
        self.surface.refresh_toggles(theme);
    }
}
