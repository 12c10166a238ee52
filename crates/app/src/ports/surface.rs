//! Theme surface port: where the active theme becomes visible.

use corpdash_domain::theme::Theme;

/// The document the theme is reflected onto.
pub trait ThemeSurface {
    /// Whether the document currently carries the dark-theme marker.
    fn has_dark_marker(&self) -> bool;

    /// Add (`true`) or remove (`false`) the dark-theme marker.
    fn set_dark_marker(&self, dark: bool);

    /// Update every visible toggle button to reflect `theme`.
    fn refresh_toggles(&self, theme: Theme);
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn has_dark_marker(&self) -> bool {
        (**self).has_dark_marker()
    }

    fn set_dark_marker(&self, dark: bool) {
        (**self).set_dark_marker(dark);
    }

    fn refresh_toggles(&self, theme: Theme) {
        (**self).refresh_toggles(theme);
    }
}
