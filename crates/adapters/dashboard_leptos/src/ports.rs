//! Browser implementations of the dashboard ports.
//!
//! Every port is a cheap handle: clones share the same underlying browser
//! object or bookkeeping. Timer and key callbacks never call into the
//! dashboard synchronously; they go through a [`Dispatch`] slot which
//! re-enters on a fresh task, so a listener is never dropped from inside
//! its own callback.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use leptos::ev;
use leptos::leptos_dom::helpers::{
    AnimationFrameRequestHandle, WindowListenerHandle, request_animation_frame_with_handle,
    window_event_listener,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use corpdash_app::ports::{
    KeyListeners, KeyValueStore, ListenerId, Navigator, Scheduler, ThemeSurface, TimerId,
};
use corpdash_domain::error::StorageError;
use corpdash_domain::theme::{DOCUMENT_MARKER, Theme};

/// A late-bound callback, connected once the runtime exists.
pub struct Dispatch<T>(Rc<RefCell<Option<Rc<dyn Fn(T)>>>>);

impl<T> Clone for Dispatch<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Default for Dispatch<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T: 'static> Dispatch<T> {
    pub fn connect(&self, target: impl Fn(T) + 'static) {
        *self.0.borrow_mut() = Some(Rc::new(target));
    }

    /// Deliver `value` on a new task.
    fn emit_later(&self, value: T) {
        let slot = self.clone();
        spawn_local(async move {
            let target = slot.0.borrow().clone();
            match target {
                Some(target) => target(value),
                None => leptos::logging::warn!("dispatch fired before the runtime connected"),
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Read {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

// ---------------------------------------------------------------------------
// Theme surface
// ---------------------------------------------------------------------------

/// The `<html>` element plus the signal every theme toggle renders from.
#[derive(Debug, Clone, Copy)]
pub struct DocumentSurface {
    theme: RwSignal<Theme>,
}

impl DocumentSurface {
    #[must_use]
    pub fn new(theme: RwSignal<Theme>) -> Self {
        Self { theme }
    }

    fn root() -> Option<web_sys::Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
    }
}

impl ThemeSurface for DocumentSurface {
    fn has_dark_marker(&self) -> bool {
        Self::root().is_some_and(|el| el.has_attribute(DOCUMENT_MARKER))
    }

    fn set_dark_marker(&self, dark: bool) {
        let Some(root) = Self::root() else {
            return;
        };
        let result = if dark {
            root.set_attribute(DOCUMENT_MARKER, "")
        } else {
            root.remove_attribute(DOCUMENT_MARKER)
        };
        if let Err(err) = result {
            leptos::logging::warn!("failed to update theme marker: {err:?}");
        }
    }

    fn refresh_toggles(&self, theme: Theme) {
        self.theme.set(theme);
    }
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// `window.open(url, "_blank")`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_external(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            leptos::logging::warn!("failed to open {url}: {err:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Timers
// ---------------------------------------------------------------------------

enum Handle {
    Once(Timeout),
    Every(Interval),
    Frame(AnimationFrameRequestHandle),
}

impl Handle {
    fn cancel(self) {
        match self {
            Self::Once(timeout) => {
                let _ = timeout.cancel();
            }
            Self::Every(interval) => {
                let _ = interval.cancel();
            }
            Self::Frame(frame) => frame.cancel(),
        }
    }
}

#[derive(Default)]
struct Timers {
    next: u64,
    handles: HashMap<TimerId, Handle>,
}

/// `setTimeout`, `setInterval` and `requestAnimationFrame`.
#[derive(Clone)]
pub struct BrowserScheduler {
    timers: Rc<RefCell<Timers>>,
    dispatch: Dispatch<TimerId>,
}

impl BrowserScheduler {
    #[must_use]
    pub fn new(dispatch: Dispatch<TimerId>) -> Self {
        Self {
            timers: Rc::default(),
            dispatch,
        }
    }

    fn allocate(&self) -> TimerId {
        let mut timers = self.timers.borrow_mut();
        timers.next += 1;
        TimerId::new(timers.next)
    }

    fn track(&self, id: TimerId, handle: Handle) {
        self.timers.borrow_mut().handles.insert(id, handle);
    }

    /// Callback for a one-shot timer: forget the handle, then deliver.
    fn elapsed_once(&self, id: TimerId) -> impl FnOnce() + 'static {
        let timers = Rc::downgrade(&self.timers);
        let dispatch = self.dispatch.clone();
        move || {
            untrack(&timers, id);
            dispatch.emit_later(id);
        }
    }
}

fn untrack(timers: &Weak<RefCell<Timers>>, id: TimerId) {
    if let Some(timers) = timers.upgrade() {
        let finished = timers.borrow_mut().handles.remove(&id);
        if let Some(handle) = finished {
            // Elapsed: only the JS closure is left to release.
            spawn_local(async move { drop(handle) });
        }
    }
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
    fn once(&self, delay: Duration) -> TimerId {
        let id = self.allocate();
        let elapsed = self.elapsed_once(id);

        if delay.is_zero() {
            match request_animation_frame_with_handle(elapsed) {
                Ok(frame) => self.track(id, Handle::Frame(frame)),
                Err(err) => leptos::logging::warn!("failed to request animation frame: {err:?}"),
            }
        } else {
            self.track(id, Handle::Once(Timeout::new(millis(delay), elapsed)));
        }
        id
    }

    fn every(&self, period: Duration) -> TimerId {
        let id = self.allocate();
        let dispatch = self.dispatch.clone();
        let interval = Interval::new(millis(period), move || dispatch.emit_later(id));
        self.track(id, Handle::Every(interval));
        id
    }

    fn cancel(&self, id: TimerId) {
        let handle = self.timers.borrow_mut().handles.remove(&id);
        if let Some(handle) = handle {
            handle.cancel();
        }
    }
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Listeners {
    next: u64,
    handles: HashMap<ListenerId, WindowListenerHandle>,
}

/// Document-level Escape listeners.
#[derive(Clone)]
pub struct BrowserKeys {
    listeners: Rc<RefCell<Listeners>>,
    dispatch: Dispatch<ListenerId>,
}

impl BrowserKeys {
    #[must_use]
    pub fn new(dispatch: Dispatch<ListenerId>) -> Self {
        Self {
            listeners: Rc::default(),
            dispatch,
        }
    }
}

impl KeyListeners for BrowserKeys {
    fn attach_escape(&self) -> ListenerId {
        let id = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.next += 1;
            ListenerId::new(listeners.next)
        };

        let dispatch = self.dispatch.clone();
        let handle = window_event_listener(ev::keydown, move |event| {
            if event.key() == "Escape" {
                dispatch.emit_later(id);
            }
        });
        self.listeners.borrow_mut().handles.insert(id, handle);
        id
    }

    fn detach(&self, id: ListenerId) {
        let handle = self.listeners.borrow_mut().handles.remove(&id);
        if let Some(handle) = handle {
            handle.remove();
        }
    }
}
