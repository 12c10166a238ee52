//! Server-side rendered HTML dashboard (no JavaScript).

pub mod console;
pub mod home;
pub mod theme;

use std::cell::Cell;
use std::sync::Arc;

use askama::Template;
use axum::Router;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use chrono::Datelike;

use corpdash_app::ports::{ThemeSurface, TimeSource};
use corpdash_app::services::session_store::SessionStore;
use corpdash_app::services::theme_store::ThemeStore;
use corpdash_app::view::{
    ConsoleView, DashboardView, FooterView, HeaderView, ModalView, NavAction, NavButton,
};
use corpdash_domain::catalog;
use corpdash_domain::clock::ClockFace;
use corpdash_domain::document::{Block, Inline, Leaf};
use corpdash_domain::link::LinkGroup;
use corpdash_domain::theme::{self as theme_marker, Theme};

use crate::cookies::CookieStore;
use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<T>() -> Router<AppState<T>>
where
    T: TimeSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<T>))
        .route("/addons", get(home::addons::<T>))
        .route("/privacy", get(home::privacy::<T>))
        .route("/help", get(home::help::<T>))
        .route("/console", get(console::show::<T>))
        .route("/console/login", post(console::login::<T>))
        .route("/logout", post(console::logout::<T>))
        .route("/theme", post(theme::set))
        .route("/theme/toggle", post(theme::toggle))
}

/// Records the theme applied while rendering a page.
///
/// A fresh request carries no document, so the marker starts cleared.
#[derive(Debug, Default)]
pub struct PageSurface {
    dark: Cell<bool>,
}

impl ThemeSurface for PageSurface {
    fn has_dark_marker(&self) -> bool {
        self.dark.get()
    }

    fn set_dark_marker(&self, dark: bool) {
        self.dark.set(dark);
    }

    fn refresh_toggles(&self, theme: Theme) {
        tracing::trace!(%theme, "toggle rendered");
    }
}

/// Delayed client-side navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    pub seconds: u32,
    pub url: String,
}

/// The dashboard page.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub view: DashboardView,
    /// Path the theme form returns to.
    pub path: &'static str,
    pub refresh: Option<Refresh>,
}

impl IntoResponse for DashboardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

#[allow(clippy::unused_self)]
impl DashboardTemplate {
    fn theme_marker(&self) -> &'static str {
        if self.view.header.theme.is_dark() {
            theme_marker::DOCUMENT_MARKER
        } else {
            ""
        }
    }

    fn sections(&self) -> [(&'static str, &[LinkGroup]); 2] {
        [
            ("left-section", &self.view.left),
            ("right-section", &self.view.right),
        ]
    }

    fn nav_href(&self, button: &NavButton) -> &'static str {
        match button.action {
            NavAction::OpenAddons => "/addons",
            NavAction::ShowConsole => "/console",
            NavAction::OpenExternal(url) => url,
        }
    }

    fn is_external(&self, button: &NavButton) -> bool {
        matches!(button.action, NavAction::OpenExternal(_))
    }

    fn is_active_addon(&self, index: &usize) -> bool {
        self.view
            .modal
            .as_ref()
            .is_some_and(|modal| modal.active_addon == Some(*index))
    }

    fn addon_href(&self, index: &usize) -> String {
        if self.is_active_addon(index) {
            "/addons".to_string()
        } else {
            format!("/addons?addon={index}")
        }
    }
}

/// Inputs of a single page render.
pub(crate) struct Page {
    pub path: &'static str,
    pub modal: Option<ModalView>,
    pub console: ConsoleView,
    pub refresh: Option<Refresh>,
}

impl Page {
    pub fn at(path: &'static str) -> Self {
        Self {
            path,
            modal: None,
            console: ConsoleView::new(false, false, Vec::new()),
            refresh: None,
        }
    }

    /// Resolve theme and session from `cookies` and render.
    pub fn render<T: TimeSource>(
        self,
        state: &AppState<T>,
        cookies: &CookieStore,
    ) -> DashboardTemplate {
        let surface = PageSurface::default();
        let theme = ThemeStore::new(cookies, &surface).initialize();
        let session = SessionStore::new(cookies, Arc::clone(&state.policy)).current_session();
        let now = state.time.now();

        DashboardTemplate {
            view: DashboardView {
                header: HeaderView::new(theme),
                clock: ClockFace::at(now, state.locale),
                left: catalog::left_groups(),
                right: catalog::right_groups(),
                footer: FooterView::new(now.date().year()),
                modal: self.modal,
                console: self.console,
                session,
            },
            path: self.path,
            refresh: self.refresh,
        }
    }
}

/// Keep redirects on this site.
pub(crate) fn local_path(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpdash_app::services::modal::ModalPhase;

    #[test]
    fn should_only_follow_local_redirects() {
        assert_eq!(local_path(Some("/privacy")), "/privacy");
        assert_eq!(local_path(Some("//evil.example")), "/");
        assert_eq!(local_path(Some("https://evil.example")), "/");
        assert_eq!(local_path(None), "/");
    }

    fn addons_page(active_addon: Option<usize>) -> DashboardTemplate {
        DashboardTemplate {
            view: DashboardView {
                header: HeaderView::new(Theme::Light),
                clock: ClockFace {
                    time: "09:15:00".to_string(),
                    date: "poniedziałek, 19 października 2026".to_string(),
                },
                left: catalog::left_groups(),
                right: catalog::right_groups(),
                footer: FooterView::new(2026),
                modal: Some(ModalView {
                    document: catalog::addons_document(),
                    phase: ModalPhase::Open,
                    active_addon,
                }),
                console: ConsoleView::new(false, false, Vec::new()),
                session: None,
            },
            path: "/addons",
            refresh: None,
        }
    }

    #[test]
    fn should_link_inactive_addons_to_their_selection() {
        let page = addons_page(Some(1));
        assert!(page.is_active_addon(&1));
        assert!(!page.is_active_addon(&0));
        assert_eq!(page.addon_href(&0), "/addons?addon=0");
        assert_eq!(page.addon_href(&1), "/addons");

        let html = page.render().unwrap();
        assert!(html.contains("addons?addon=0"));
        assert_eq!(html.matches("addon-item active").count(), 1);
    }

    #[test]
    fn should_escape_refresh_target() {
        let mut page = addons_page(None);
        page.refresh = Some(Refresh {
            seconds: 3,
            url: "https://portal.example/\"><script>".to_string(),
        });

        let html = page.render().unwrap();
        assert!(html.contains("content=\"3;url=https:"));
        assert!(!html.contains("\"><script>"));
    }

    #[test]
    fn should_start_without_dark_marker() {
        let surface = PageSurface::default();
        assert!(!surface.has_dark_marker());
        surface.set_dark_marker(true);
        assert!(surface.has_dark_marker());
    }
}
