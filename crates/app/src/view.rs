//! Declarative description of the rendered page.
//!
//! [`Dashboard::view`](crate::dashboard::Dashboard::view) is a pure
//! function of component state; adapters turn a [`DashboardView`] into DOM
//! nodes or HTML without reaching back into the components.

use corpdash_domain::catalog;
use corpdash_domain::clock::ClockFace;
use corpdash_domain::document::Document;
use corpdash_domain::link::LinkGroup;
use corpdash_domain::session::Session;
use corpdash_domain::theme::Theme;

use crate::services::console::{HELP_LINES, TranscriptLine};
use crate::services::modal::ModalPhase;

/// The whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub header: HeaderView,
    pub clock: ClockFace,
    pub left: Vec<LinkGroup>,
    pub right: Vec<LinkGroup>,
    pub footer: FooterView,
    pub modal: Option<ModalView>,
    pub console: ConsoleView,
    pub session: Option<Session>,
}

/// Controls above the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub theme: Theme,
    pub nav: Vec<NavButton>,
}

/// A round icon button in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    /// Font Awesome class, e.g. `fa-terminal`.
    pub icon: &'static str,
    pub title: &'static str,
    pub action: NavAction,
    /// Draw a separator before this button.
    pub separated: bool,
}

/// What a [`NavButton`] does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    OpenAddons,
    ShowConsole,
    OpenExternal(&'static str),
}

impl HeaderView {
    /// Header for the given theme with the fixed navigation buttons.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            nav: vec![
                NavButton {
                    icon: "fa-bars",
                    title: "Navigation Options",
                    action: NavAction::OpenAddons,
                    separated: false,
                },
                NavButton {
                    icon: "fa-terminal",
                    title: "Open Login Console (Ctrl+L)",
                    action: NavAction::ShowConsole,
                    separated: false,
                },
                NavButton {
                    icon: "fa-play",
                    title: "Visit PlayLiveOS",
                    action: NavAction::OpenExternal(catalog::PLAYLIVEOS_URL),
                    separated: true,
                },
                NavButton {
                    icon: "fa-users",
                    title: "Lista Driverów",
                    action: NavAction::OpenExternal(catalog::DRIVERS_URL),
                    separated: true,
                },
            ],
        }
    }
}

/// Page footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub title: &'static str,
    pub version: &'static str,
    pub year: i32,
    pub status: &'static str,
}

impl FooterView {
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self {
            title: catalog::PRODUCT_TITLE,
            version: catalog::PRODUCT_VERSION,
            year,
            status: "SYSTEM ONLINE",
        }
    }

    #[must_use]
    pub fn copyright(&self) -> String {
        format!("© {} All rights reserved", self.year)
    }
}

/// The overlay, present whenever the modal is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub document: Document,
    pub phase: ModalPhase,
    pub active_addon: Option<usize>,
}

impl ModalView {
    /// Whether the `active` style is applied (drives the CSS transition).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// Closing overlays ignore pointer events.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }
}

/// The login console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleView {
    pub active: bool,
    pub focus_username: bool,
    pub transcript: Vec<TranscriptLine>,
    pub help: [&'static str; 4],
}

impl ConsoleView {
    #[must_use]
    pub fn new(active: bool, focus_username: bool, transcript: Vec<TranscriptLine>) -> Self {
        Self {
            active,
            focus_username,
            transcript,
            help: HELP_LINES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_nav_buttons_in_header_order() {
        let header = HeaderView::new(Theme::Light);
        let icons: Vec<&str> = header.nav.iter().map(|b| b.icon).collect();
        assert_eq!(icons, ["fa-bars", "fa-terminal", "fa-play", "fa-users"]);
    }

    #[test]
    fn should_format_copyright_with_year() {
        assert_eq!(
            FooterView::new(2026).copyright(),
            "© 2026 All rights reserved"
        );
    }

    #[test]
    fn should_only_be_active_when_open() {
        let mut view = ModalView {
            document: Document::new("Help"),
            phase: ModalPhase::Opening,
            active_addon: None,
        };
        assert!(!view.is_active());
        assert!(view.is_interactive());

        view.phase = ModalPhase::Closing;
        assert!(!view.is_active());
        assert!(!view.is_interactive());
    }
}
