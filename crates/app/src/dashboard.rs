//! Dashboard: the composition root of the page.
//!
//! Owns exactly one instance of every component, routes UI events and
//! elapsed timers to them and renders the combined [`DashboardView`].

use corpdash_domain::catalog;
use corpdash_domain::clock::DateLocale;
use corpdash_domain::credential::CredentialPolicy;
use corpdash_domain::error::AuthError;
use corpdash_domain::link::LinkGroup;
use corpdash_domain::session::Session;
use corpdash_domain::theme::Theme;

use crate::ports::{
    KeyListeners, KeyPress, KeyValueStore, ListenerId, Navigator, Scheduler, ThemeSurface,
    TimeSource, TimerId,
};
use crate::services::clock_widget::ClockWidget;
use crate::services::console::ConsoleLogin;
use crate::services::modal::{ClickTarget, ModalController};
use crate::services::session_store::SessionStore;
use crate::services::theme_store::ThemeStore;
use crate::view::{ConsoleView, DashboardView, FooterView, HeaderView, ModalView, NavAction};

/// Injected policy and presentation settings.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub policy: CredentialPolicy,
    /// Opened after a successful console login.
    pub portal_url: String,
    pub locale: DateLocale,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            policy: CredentialPolicy::default(),
            portal_url: catalog::PORTAL_URL.to_string(),
            locale: DateLocale::default(),
        }
    }
}

/// Port implementations handed to [`Dashboard::new`].
pub struct Ports<S, D, N, C, K, T> {
    pub store: S,
    pub surface: D,
    pub navigator: N,
    pub scheduler: C,
    pub keys: K,
    pub time: T,
}

/// Everything the user can do to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ToggleTheme,
    Nav(NavAction),
    OpenAddons,
    OpenPrivacy,
    OpenHelp,
    CloseModal,
    ModalClick(ClickTarget),
    /// Escape reached the listener with this id.
    Escape(ListenerId),
    SelectAddon(usize),
    ClearAddonSelection,
    ShowConsole,
    HideConsole,
    SubmitLogin { username: String, password: String },
    ClearConsole,
    Logout,
    OpenLink(String),
}

/// The page composition root.
pub struct Dashboard<S, D, N, C, K, T> {
    theme: ThemeStore<S, D>,
    sessions: SessionStore<S>,
    modal: ModalController<C, K>,
    clock: ClockWidget<C, T>,
    console: ConsoleLogin<C, N>,
    navigator: N,
    left: Vec<LinkGroup>,
    right: Vec<LinkGroup>,
    current_theme: Theme,
    mounted: bool,
}

impl<S, D, N, C, K, T> Dashboard<S, D, N, C, K, T>
where
    S: KeyValueStore + Clone,
    D: ThemeSurface,
    N: Navigator + Clone,
    C: Scheduler + Clone,
    K: KeyListeners,
    T: TimeSource,
{
    /// Wire every component to the given ports.
    pub fn new(ports: Ports<S, D, N, C, K, T>, config: DashboardConfig) -> Self {
        let Ports {
            store,
            surface,
            navigator,
            scheduler,
            keys,
            time,
        } = ports;

        Self {
            theme: ThemeStore::new(store.clone(), surface),
            sessions: SessionStore::new(store, config.policy),
            modal: ModalController::new(scheduler.clone(), keys),
            clock: ClockWidget::new(scheduler.clone(), time, config.locale),
            console: ConsoleLogin::new(scheduler, navigator.clone(), config.portal_url),
            navigator,
            left: catalog::left_groups(),
            right: catalog::right_groups(),
            current_theme: Theme::default(),
            mounted: false,
        }
    }

    /// Apply the theme and start the clock. Mounting twice is a no-op.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.current_theme = self.theme.initialize();
        self.clock.start();
        self.mounted = true;
        tracing::info!(theme = %self.current_theme, "dashboard mounted");
    }

    /// Stop every timer and release every listener.
    pub fn destroy(&mut self) {
        self.clock.stop();
        self.modal.destroy();
        self.console.destroy();
        self.mounted = false;
        tracing::info!("dashboard destroyed");
    }

    /// Apply a user interaction.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::ToggleTheme => self.current_theme = self.theme.toggle(),
            UiEvent::Nav(action) => self.nav(&action),
            UiEvent::OpenAddons => self.modal.open(catalog::addons_document()),
            UiEvent::OpenPrivacy => self.modal.open(catalog::privacy_document(
                self.clock.today(),
                self.clock.locale(),
            )),
            UiEvent::OpenHelp => self.modal.open(catalog::help_document(
                self.clock.today(),
                self.clock.locale(),
            )),
            UiEvent::CloseModal => self.modal.close(),
            UiEvent::ModalClick(target) => self.modal.click(target),
            UiEvent::Escape(listener) => {
                self.modal.on_escape(listener);
            }
            UiEvent::SelectAddon(index) => self.modal.toggle_addon(index),
            UiEvent::ClearAddonSelection => self.modal.clear_addon_selection(),
            UiEvent::ShowConsole => self.console.show(),
            UiEvent::HideConsole => self.console.hide(),
            UiEvent::SubmitLogin { username, password } => {
                let _ = self.submit_login(&username, &password);
            }
            UiEvent::ClearConsole => self.console.clear(),
            UiEvent::Logout => self.sessions.logout(),
            UiEvent::OpenLink(url) => {
                tracing::debug!(%url, "opening link");
                self.navigator.open_external(&url);
            }
        }
    }

    /// Run a console login and return its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the login is rejected.
    pub fn submit_login(&mut self, username: &str, password: &str) -> Result<Session, AuthError> {
        self.console.submit(&self.sessions, username, password)
    }

    /// Global keydown handler. Returns `true` when the browser default
    /// action must be suppressed.
    pub fn handle_key(&mut self, key: &KeyPress) -> bool {
        self.console.handle_key(key)
    }

    /// Deliver an elapsed timer to whichever component owns it.
    pub fn fire(&mut self, id: TimerId) {
        let owned = self.clock.fire(id) || self.modal.fire(id) || self.console.fire(id);
        if !owned {
            tracing::debug!(%id, "ignoring stale timer");
        }
    }

    /// Consume the console's pending focus request.
    pub fn take_focus_request(&mut self) -> bool {
        self.console.take_focus_request()
    }

    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.sessions.current_session()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.current_theme
    }

    #[must_use]
    pub fn modal(&self) -> &ModalController<C, K> {
        &self.modal
    }

    #[must_use]
    pub fn console(&self) -> &ConsoleLogin<C, N> {
        &self.console
    }

    #[must_use]
    pub fn clock(&self) -> &ClockWidget<C, T> {
        &self.clock
    }

    /// Render the current state.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView {
            header: HeaderView::new(self.current_theme),
            clock: self.clock.face().clone(),
            left: self.left.clone(),
            right: self.right.clone(),
            footer: FooterView::new(self.clock.year()),
            modal: self.modal.document().map(|document| ModalView {
                document: document.clone(),
                phase: self.modal.phase(),
                active_addon: self.modal.active_addon(),
            }),
            console: ConsoleView::new(
                self.console.is_active(),
                self.console.focus_requested(),
                self.console.transcript().to_vec(),
            ),
            session: self.sessions.current_session(),
        }
    }

    fn nav(&mut self, action: &NavAction) {
        match action {
            NavAction::OpenAddons => self.handle(UiEvent::OpenAddons),
            NavAction::ShowConsole => self.console.show(),
            NavAction::OpenExternal(url) => self.navigator.open_external(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::services::modal::ModalPhase;
    use crate::testing::{
        FixedTime, MemoryStore, RecordingNavigator, RecordingSurface, VirtualKeyboard,
        VirtualScheduler,
    };

    type TestDashboard = Dashboard<
        MemoryStore,
        RecordingSurface,
        RecordingNavigator,
        VirtualScheduler,
        VirtualKeyboard,
        FixedTime,
    >;

    struct Harness {
        dashboard: TestDashboard,
        store: MemoryStore,
        surface: RecordingSurface,
        navigator: RecordingNavigator,
        scheduler: VirtualScheduler,
        keys: VirtualKeyboard,
    }

    impl Harness {
        fn new() -> Self {
            let store = MemoryStore::default();
            let surface = RecordingSurface::default();
            let navigator = RecordingNavigator::default();
            let scheduler = VirtualScheduler::default();
            let keys = VirtualKeyboard::default();
            let ports = Ports {
                store: store.clone(),
                surface: surface.clone(),
                navigator: navigator.clone(),
                scheduler: scheduler.clone(),
                keys: keys.clone(),
                time: FixedTime::at(2026, 10, 19, 8, 30, 0),
            };
            let mut dashboard = Dashboard::new(ports, DashboardConfig::default());
            dashboard.mount();
            Self {
                dashboard,
                store,
                surface,
                navigator,
                scheduler,
                keys,
            }
        }

        fn run(&mut self, by: Duration) {
            let dashboard = &mut self.dashboard;
            self.scheduler.advance(by, |id| dashboard.fire(id));
        }

        fn press_escape(&mut self) {
            self.dashboard.handle_key(&KeyPress::new("Escape"));
            for listener in self.keys.attached() {
                self.dashboard.handle(UiEvent::Escape(listener));
            }
        }

        fn submit(&mut self, username: &str, password: &str) {
            self.dashboard.handle(UiEvent::SubmitLogin {
                username: username.to_string(),
                password: password.to_string(),
            });
        }
    }

    #[test]
    fn should_render_clock_links_and_footer_after_mount() {
        let h = Harness::new();
        let view = h.dashboard.view();

        assert_eq!(view.clock.time, "08:30:00");
        assert_eq!(view.clock.date, "poniedziałek, 19 października 2026");
        assert_eq!(view.footer.year, 2026);
        assert!(!view.left.is_empty());
        assert!(!view.right.is_empty());
        assert!(view.modal.is_none());
        assert!(!view.console.active);
        assert!(h.dashboard.clock().is_running());
    }

    #[test]
    fn should_persist_theme_toggle_and_update_header() {
        let mut h = Harness::new();
        h.dashboard.handle(UiEvent::ToggleTheme);

        assert_eq!(h.dashboard.view().header.theme, Theme::Dark);
        assert_eq!(h.store.raw("theme").as_deref(), Some("dark"));
        assert!(h.surface.is_dark());
    }

    #[test]
    fn should_leave_no_modal_or_listener_after_open_then_close() {
        let mut h = Harness::new();
        h.dashboard.handle(UiEvent::OpenPrivacy);
        h.dashboard.handle(UiEvent::CloseModal);

        h.run(Duration::from_millis(301));

        assert!(h.dashboard.view().modal.is_none());
        assert!(h.keys.attached().is_empty());
    }

    #[test]
    fn should_close_modal_on_escape() {
        let mut h = Harness::new();
        h.dashboard.handle(UiEvent::OpenHelp);
        h.run(Duration::ZERO);
        assert_eq!(h.dashboard.modal().phase(), ModalPhase::Open);

        h.press_escape();
        assert_eq!(h.dashboard.modal().phase(), ModalPhase::Closing);
        h.run(Duration::from_millis(300));
        assert!(!h.dashboard.modal().is_attached());
    }

    #[test]
    fn should_stamp_privacy_document_with_today() {
        let mut h = Harness::new();
        h.dashboard.handle(UiEvent::OpenPrivacy);
        let modal = h.dashboard.view().modal.unwrap();
        assert_eq!(modal.document.title, "Privacy Policy");
        assert!(modal.document.plain_text().contains("19.10.2026"));
    }

    #[test]
    fn should_show_error_and_schedule_nothing_for_wrong_password() {
        let mut h = Harness::new();
        h.dashboard.handle_key(&KeyPress::with_ctrl("l"));
        h.submit("admin", "wrongpass");

        let view = h.dashboard.view();
        assert!(view.console.active);
        assert_eq!(view.console.transcript[0].text, "✗ Authentication failed");
        assert_eq!(h.dashboard.console().pending_redirect(), None);

        h.run(Duration::from_secs(5));
        assert!(h.navigator.opened().is_empty());
        assert_eq!(view.session, None);
    }

    #[test]
    fn should_navigate_and_hide_console_three_seconds_after_valid_login() {
        let mut h = Harness::new();
        h.dashboard.handle(UiEvent::ShowConsole);
        h.submit("admin", "admin123");

        let view = h.dashboard.view();
        assert_eq!(
            view.console.transcript[0].text,
            "✓ Authentication successful"
        );
        assert_eq!(view.session.map(|s| s.role), Some("Administrator".into()));

        h.run(Duration::from_millis(2999));
        assert!(h.navigator.opened().is_empty());
        assert!(h.dashboard.view().console.active);

        h.run(Duration::from_millis(1));
        assert_eq!(h.navigator.opened(), vec![catalog::PORTAL_URL.to_string()]);
        assert!(!h.dashboard.view().console.active);
    }

    #[test]
    fn should_clear_session_on_logout() {
        let mut h = Harness::new();
        h.submit("user", "user123");
        h.dashboard.handle(UiEvent::Logout);
        assert_eq!(h.dashboard.current_session(), None);
    }

    #[test]
    fn should_close_console_with_escape_but_keep_modal_closed() {
        let mut h = Harness::new();
        h.dashboard.handle(UiEvent::ShowConsole);
        h.press_escape();
        assert!(!h.dashboard.console().is_active());
        assert!(!h.dashboard.modal().is_attached());
    }

    #[test]
    fn should_open_external_nav_targets() {
        let mut h = Harness::new();
        h.dashboard
            .handle(UiEvent::Nav(NavAction::OpenExternal(catalog::PLAYLIVEOS_URL)));
        h.dashboard
            .handle(UiEvent::OpenLink("https://github.com/".to_string()));
        assert_eq!(
            h.navigator.opened(),
            vec![
                catalog::PLAYLIVEOS_URL.to_string(),
                "https://github.com/".to_string()
            ]
        );
    }

    #[test]
    fn should_release_all_timers_on_destroy() {
        let mut h = Harness::new();
        h.dashboard.handle(UiEvent::OpenAddons);
        h.dashboard.handle(UiEvent::ShowConsole);
        h.submit("admin", "admin123");

        h.dashboard.destroy();

        assert_eq!(h.scheduler.armed_count(), 0);
        assert!(h.keys.attached().is_empty());
        h.run(Duration::from_secs(10));
        assert!(h.navigator.opened().is_empty());
    }

    #[test]
    fn should_ignore_unknown_timer_ids() {
        let mut h = Harness::new();
        let before = h.dashboard.view();
        h.dashboard.fire(TimerId::new(9_999));
        assert_eq!(h.dashboard.view(), before);
    }
}
