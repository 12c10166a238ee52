//! Link buttons and the groups they are laid out in.

use serde::{Deserialize, Serialize};

/// Colour of the small marker drawn left of a link title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Orange,
    Blue,
    Green,
    Red,
    Purple,
    Yellow,
}

impl MarkerColor {
    /// CSS classes applied to the marker element.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("marker marker-{self}")
    }
}

impl std::fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Orange => f.write_str("orange"),
            Self::Blue => f.write_str("blue"),
            Self::Green => f.write_str("green"),
            Self::Red => f.write_str("red"),
            Self::Purple => f.write_str("purple"),
            Self::Yellow => f.write_str("yellow"),
        }
    }
}

/// A single button pointing at an external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub title: String,
    /// Font Awesome class, e.g. `fa-envelope`.
    pub icon: Option<String>,
    /// Target opened in a new tab. Buttons without a URL are inert.
    pub url: Option<String>,
}

impl LinkItem {
    #[must_use]
    pub fn new(title: impl Into<String>, icon: &str, url: &str) -> Self {
        Self {
            title: title.into(),
            icon: Some(icon.to_string()),
            url: Some(url.to_string()),
        }
    }

    /// A label-only button.
    #[must_use]
    pub fn label(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            url: None,
        }
    }

    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.url.is_some()
    }
}

/// A card of link buttons split into one or more columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkGroup {
    pub columns: Vec<Vec<LinkItem>>,
    pub marker_color: Option<MarkerColor>,
}

impl LinkGroup {
    #[must_use]
    pub fn is_two_column(&self) -> bool {
        self.columns.len() > 1
    }

    /// Every button in column order.
    pub fn items(&self) -> impl Iterator<Item = &LinkItem> {
        self.columns.iter().flatten()
    }
}
