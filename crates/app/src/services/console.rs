//! Login console: a terminal-styled login form.
//!
//! Visibility (hidden/active) is independent from the outcome of the last
//! submission (idle, success, failure). A successful login schedules a
//! single redirect to the portal; the console hides itself when it fires.

use std::time::Duration;

use corpdash_domain::error::AuthError;
use corpdash_domain::session::Session;

use crate::ports::{KeyPress, KeyValueStore, Navigator, Scheduler, TimerId};
use crate::services::session_store::SessionStore;

/// Delay between a successful login and the portal opening.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Lines listed under the form.
pub const HELP_LINES: [&str; 4] = [
    "Available commands:",
    "• login - authenticate user",
    "• clear - clear console output",
    "• exit - close console (Esc)",
];

/// Result of the most recent submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConsoleOutcome {
    #[default]
    Idle,
    Succeeded(Session),
    Failed(AuthError),
}

/// Styling hint for a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Plain,
    Success,
    Error,
    Loading,
}

impl LineKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Plain => "output-line",
            Self::Success => "output-line success",
            Self::Error => "output-line error",
            Self::Loading => "output-line loading",
        }
    }
}

/// One line of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Transcript shown after a successful login.
#[must_use]
pub fn success_transcript(session: &Session) -> Vec<TranscriptLine> {
    vec![
        TranscriptLine::new(LineKind::Success, "✓ Authentication successful"),
        TranscriptLine::new(LineKind::Plain, format!("User: {}", session.username)),
        TranscriptLine::new(LineKind::Plain, format!("Role: {}", session.role)),
        TranscriptLine::new(LineKind::Plain, "Redirecting to AI Link Hub..."),
        TranscriptLine::new(LineKind::Loading, "Opening new tab in 3 seconds..."),
    ]
}

/// Transcript shown after a rejected login.
#[must_use]
pub fn failure_transcript(err: &AuthError) -> Vec<TranscriptLine> {
    vec![
        TranscriptLine::new(LineKind::Error, "✗ Authentication failed"),
        TranscriptLine::new(LineKind::Error, err.to_string()),
        TranscriptLine::new(LineKind::Plain, "Please try again..."),
    ]
}

/// The login console component.
pub struct ConsoleLogin<S, N> {
    scheduler: S,
    navigator: N,
    portal_url: String,
    active: bool,
    outcome: ConsoleOutcome,
    transcript: Vec<TranscriptLine>,
    redirect: Option<TimerId>,
    focus_requested: bool,
}

impl<S: Scheduler, N: Navigator> ConsoleLogin<S, N> {
    pub fn new(scheduler: S, navigator: N, portal_url: impl Into<String>) -> Self {
        Self {
            scheduler,
            navigator,
            portal_url: portal_url.into(),
            active: false,
            outcome: ConsoleOutcome::Idle,
            transcript: Vec::new(),
            redirect: None,
            focus_requested: false,
        }
    }

    /// Reveal the console with an empty transcript and focus the username.
    pub fn show(&mut self) {
        self.active = true;
        self.transcript.clear();
        self.outcome = ConsoleOutcome::Idle;
        self.focus_requested = true;
        tracing::debug!("console shown");
    }

    pub fn hide(&mut self) {
        self.active = false;
        self.focus_requested = false;
        tracing::debug!("console hidden");
    }

    /// Check the pair against `sessions` and print the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the login is rejected;
    /// the console stays open for another attempt.
    pub fn submit<KV: KeyValueStore>(
        &mut self,
        sessions: &SessionStore<KV>,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        if let Some(id) = self.redirect.take() {
            self.scheduler.cancel(id);
        }

        match sessions.login(username, password) {
            Ok(session) => {
                self.transcript = success_transcript(&session);
                self.outcome = ConsoleOutcome::Succeeded(session.clone());
                self.redirect = Some(self.scheduler.once(REDIRECT_DELAY));
                Ok(session)
            }
            Err(err) => {
                self.transcript = failure_transcript(&err);
                self.outcome = ConsoleOutcome::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// The `clear` command.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// Global shortcut handling. Returns `true` when the browser default
    /// action must be suppressed.
    pub fn handle_key(&mut self, key: &KeyPress) -> bool {
        if key.is_console_shortcut() {
            self.show();
            return true;
        }
        if key.is_escape() && self.active {
            self.hide();
        }
        false
    }

    /// Handle an elapsed timer. Returns `false` for ids this console does not own.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.redirect != Some(id) {
            return false;
        }
        self.redirect = None;
        tracing::info!(url = %self.portal_url, "opening portal");
        self.navigator.open_external(&self.portal_url);
        self.hide();
        true
    }

    /// Cancel the pending redirect and hide.
    pub fn destroy(&mut self) {
        if let Some(id) = self.redirect.take() {
            self.scheduler.cancel(id);
        }
        self.hide();
    }

    /// Consume a pending focus request (set by [`show`](Self::show)).
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn focus_requested(&self) -> bool {
        self.focus_requested
    }

    #[must_use]
    pub fn outcome(&self) -> &ConsoleOutcome {
        &self.outcome
    }

    #[must_use]
    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    #[must_use]
    pub fn pending_redirect(&self) -> Option<TimerId> {
        self.redirect
    }

    #[must_use]
    pub fn portal_url(&self) -> &str {
        &self.portal_url
    }
}
