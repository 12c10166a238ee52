//! Navigator port: outbound navigation.

/// Opens external destinations.
pub trait Navigator {
    /// Open `url` in a new tab or window.
    fn open_external(&self, url: &str);
}
