//! Browser addons recommended in the addon catalog.

use serde::{Deserialize, Serialize};

/// Browsers an addon can be installed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Firefox,
    Edge,
    Chrome,
}

impl Browser {
    /// Brand icon class (Font Awesome brands set).
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Firefox => "fa-firefox",
            Self::Edge => "fa-edge",
            Self::Chrome => "fa-chrome",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Firefox => "Firefox",
            Self::Edge => "Edge",
            Self::Chrome => "Chrome",
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Firefox => "firefox",
            Self::Edge => "edge",
            Self::Chrome => "chrome",
        }
    }
}

/// Store link for one browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserBadge {
    pub browser: Browser,
    pub url: String,
}

/// A recommended addon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub name: String,
    /// Icon class including its set, e.g. `fas fa-shield-alt`.
    pub icon: String,
    pub description: String,
    pub badges: Vec<BrowserBadge>,
}

impl Addon {
    /// Whether the addon has a store page for `browser`.
    #[must_use]
    pub fn supports(&self, browser: Browser) -> bool {
        self.badges.iter().any(|b| b.browser == browser)
    }
}
