//! Glue between the dashboard state machine and Leptos signals.

use std::cell::RefCell;

use leptos::html::Input;
use leptos::prelude::*;

use corpdash_app::dashboard::{Dashboard, UiEvent};
use corpdash_app::ports::{KeyPress, LocalTime, TimerId};
use corpdash_app::view::DashboardView;

use crate::ports::{
    BrowserKeys, BrowserNavigator, BrowserScheduler, BrowserStorage, DocumentSurface,
};

pub type BrowserDashboard = Dashboard<
    BrowserStorage,
    DocumentSurface,
    BrowserNavigator,
    BrowserScheduler,
    BrowserKeys,
    LocalTime,
>;

/// Copyable handle to the mounted dashboard.
///
/// Every entry point borrows the dashboard, applies one step, then publishes
/// a fresh [`DashboardView`] to the `view` signal. Components only read that
/// signal; they never touch the dashboard directly.
#[derive(Clone, Copy)]
pub struct Runtime {
    dashboard: StoredValue<RefCell<BrowserDashboard>, LocalStorage>,
    view: RwSignal<DashboardView>,
    username: NodeRef<Input>,
}

impl Runtime {
    pub fn new(dashboard: BrowserDashboard) -> Self {
        let view = RwSignal::new(dashboard.view());
        Self {
            dashboard: StoredValue::new_local(RefCell::new(dashboard)),
            view,
            username: NodeRef::new(),
        }
    }

    pub fn view(self) -> ReadSignal<DashboardView> {
        self.view.read_only()
    }

    /// The console's username input, focused on request.
    pub fn username(self) -> NodeRef<Input> {
        self.username
    }

    pub fn mount(self) {
        self.with(BrowserDashboard::mount);
    }

    pub fn destroy(self) {
        self.with(BrowserDashboard::destroy);
    }

    pub fn handle(self, event: UiEvent) {
        self.with(|dashboard| dashboard.handle(event));
    }

    pub fn fire(self, id: TimerId) {
        self.with(|dashboard| dashboard.fire(id));
    }

    /// Returns `true` when the browser default must be prevented.
    pub fn key(self, key: &KeyPress) -> bool {
        self.with(|dashboard| dashboard.handle_key(key))
            .unwrap_or_default()
    }

    fn with<R>(self, step: impl FnOnce(&mut BrowserDashboard) -> R) -> Option<R> {
        let (result, view, focus) = self
            .dashboard
            .try_with_value(|cell| {
                let Ok(mut dashboard) = cell.try_borrow_mut() else {
                    leptos::logging::warn!("dashboard is busy, dropping re-entrant call");
                    return None;
                };
                let result = step(&mut dashboard);
                let view = dashboard.view();
                let focus = dashboard.take_focus_request();
                Some((result, view, focus))
            })
            .flatten()?;

        self.view.set(view);
        if focus {
            let username = self.username;
            request_animation_frame(move || {
                if let Some(input) = username.get_untracked() {
                    if let Err(err) = input.focus() {
                        leptos::logging::warn!("failed to focus username: {err:?}");
                    }
                }
            });
        }
        Some(result)
    }
}
