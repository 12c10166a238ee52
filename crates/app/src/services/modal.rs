//! Modal controller: the single overlay showing static documents.
//!
//! ```text
//!            open                 reveal timer (next frame)
//!  Closed ─────────▶ Opening ───────────────────────────▶ Open
//!    ▲                  │ close                            │ close
//!    │ detach timer     ▼                                  ▼
//!    └────────────── Closing ◀─────────────────────────────┘
//!                      │ open (cancels detach)
//!                      └──────────▶ Opening
//! ```

use std::time::Duration;

use corpdash_domain::document::Document;

use crate::ports::{KeyListeners, ListenerId, Scheduler, TimerId};

/// How long a closing modal stays attached so its exit transition can run.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Lifecycle phase of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    /// Nothing attached.
    #[default]
    Closed,
    /// Attached without the active style; the transition starts next frame.
    Opening,
    /// Attached with the active style.
    Open,
    /// Still attached, non-interactive, waiting for the detach timer.
    Closing,
}

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed background around the content box.
    Backdrop,
    /// Anywhere inside the content box.
    Content,
}

/// Drives the overlay through its phases and owns its escape listener.
pub struct ModalController<S, K> {
    scheduler: S,
    keys: K,
    phase: ModalPhase,
    document: Option<Document>,
    reveal: Option<TimerId>,
    detach: Option<TimerId>,
    escape: Option<ListenerId>,
    active_addon: Option<usize>,
}

impl<S: Scheduler, K: KeyListeners> ModalController<S, K> {
    pub fn new(scheduler: S, keys: K) -> Self {
        Self {
            scheduler,
            keys,
            phase: ModalPhase::Closed,
            document: None,
            reveal: None,
            detach: None,
            escape: None,
            active_addon: None,
        }
    }

    /// Show `document`, replacing whatever the overlay displayed.
    pub fn open(&mut self, document: Document) {
        self.cancel_timers();
        tracing::debug!(title = %document.title, from = ?self.phase, "opening modal");

        self.document = Some(document);
        self.active_addon = None;
        self.phase = ModalPhase::Opening;
        self.reveal = Some(self.scheduler.once(Duration::ZERO));
        if self.escape.is_none() {
            self.escape = Some(self.keys.attach_escape());
        }
    }

    /// Start the exit transition. No-op unless opening or open.
    pub fn close(&mut self) {
        if !self.is_interactive() {
            return;
        }
        self.cancel_timers();
        self.phase = ModalPhase::Closing;
        self.detach = Some(self.scheduler.once(CLOSE_DELAY));
        self.detach_escape();
        tracing::debug!("closing modal");
    }

    /// Handle an elapsed timer. Returns `false` for ids this modal does not own.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.reveal == Some(id) {
            self.reveal = None;
            self.phase = ModalPhase::Open;
            true
        } else if self.detach == Some(id) {
            self.detach = None;
            self.phase = ModalPhase::Closed;
            self.document = None;
            self.active_addon = None;
            tracing::debug!("modal detached");
            true
        } else {
            false
        }
    }

    /// Escape was pressed while `listener` was attached.
    pub fn on_escape(&mut self, listener: ListenerId) -> bool {
        if self.escape == Some(listener) {
            self.close();
            true
        } else {
            false
        }
    }

    /// Backdrop clicks close the modal; clicks on the content do not.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    /// Toggle addon card `index` as the single active card.
    pub fn toggle_addon(&mut self, index: usize) {
        let count = self.document.as_ref().map_or(0, |d| d.addons().len());
        if !self.is_interactive() || index >= count {
            return;
        }
        self.active_addon = if self.active_addon == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// A click inside the body but outside every addon card.
    pub fn clear_addon_selection(&mut self) {
        self.active_addon = None;
    }

    /// Drop everything immediately, leaving no timer or listener behind.
    pub fn destroy(&mut self) {
        self.cancel_timers();
        self.detach_escape();
        self.phase = ModalPhase::Closed;
        self.document = None;
        self.active_addon = None;
    }

    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn active_addon(&self) -> Option<usize> {
        self.active_addon
    }

    #[must_use]
    pub fn escape_listener(&self) -> Option<ListenerId> {
        self.escape
    }

    /// Whether the overlay element exists at all.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    fn cancel_timers(&mut self) {
        for id in [self.reveal.take(), self.detach.take()].into_iter().flatten() {
            self.scheduler.cancel(id);
        }
    }

    fn detach_escape(&mut self) {
        if let Some(id) = self.escape.take() {
            self.keys.detach(id);
        }
    }
}
