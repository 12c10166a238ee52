//! Browser front-end of the corporate dashboard.
//!
//! Builds the dashboard on browser ports (`localStorage`, the `<html>`
//! element, timers, `window.open`) and renders its view with Leptos. All
//! behaviour lives in `corpdash-app`; this crate only forwards DOM events
//! and draws [`DashboardView`](corpdash_app::view::DashboardView).

use leptos::ev;
use leptos::leptos_dom::helpers::{document, window_event_listener};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use corpdash_app::dashboard::{Dashboard, DashboardConfig, Ports, UiEvent};
use corpdash_app::ports::{KeyPress, ListenerId, LocalTime, TimerId};
use corpdash_domain::theme::Theme;

mod components;
pub mod ports;
pub mod runtime;

use components::{Clock, Console, Footer, Header, LinkSections, Modal};
use ports::{
    BrowserKeys, BrowserNavigator, BrowserScheduler, BrowserStorage, Dispatch, DocumentSurface,
};
use runtime::Runtime;

/// Mount [`App`] into `#root`, if the page has one.
pub fn start() {
    let Some(root) = document().get_element_by_id("root") else {
        leptos::logging::warn!("no #root element, dashboard not mounted");
        return;
    };
    leptos::mount::mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let theme = RwSignal::new(Theme::default());
    let timers = Dispatch::<TimerId>::default();
    let escapes = Dispatch::<ListenerId>::default();

    let ports = Ports {
        store: BrowserStorage,
        surface: DocumentSurface::new(theme),
        navigator: BrowserNavigator,
        scheduler: BrowserScheduler::new(timers.clone()),
        keys: BrowserKeys::new(escapes.clone()),
        time: LocalTime,
    };
    let runtime = Runtime::new(Dashboard::new(ports, DashboardConfig::default()));
    timers.connect(move |id| runtime.fire(id));
    escapes.connect(move |id| runtime.handle(UiEvent::Escape(id)));
    runtime.mount();

    let shortcuts = window_event_listener(ev::keydown, move |event| {
        let key = KeyPress {
            key: event.key(),
            ctrl: event.ctrl_key(),
        };
        if runtime.key(&key) {
            event.prevent_default();
        }
    });
    on_cleanup(move || {
        shortcuts.remove();
        runtime.destroy();
    });

    view! {
        <div class="app-container">
            <div class="content-wrapper">
                <div class="decorative-corner decorative-corner-tl" aria-hidden="true"></div>
                <div class="decorative-corner decorative-corner-br" aria-hidden="true"></div>
                <div class="datetime-container">
                    <Header runtime=runtime theme=theme.read_only()/>
                    <Clock runtime=runtime/>
                </div>
                <LinkSections runtime=runtime/>
            </div>
            <Footer runtime=runtime/>
        </div>
        <Modal runtime=runtime/>
        <Console runtime=runtime/>
    }
}
