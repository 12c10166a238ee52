//! Dark/light theme toggle button.
//!
//! Renders from the signal the document surface refreshes, so every
//! toggle on the page follows the persisted theme.

use leptos::prelude::*;

use corpdash_app::dashboard::UiEvent;
use corpdash_domain::theme::Theme;

use crate::runtime::Runtime;

/// A toggle button that switches between light and dark themes.
#[component]
pub fn ThemeToggle(runtime: Runtime, theme: ReadSignal<Theme>) -> impl IntoView {
    let icon = move || format!("fas {}", theme.get().toggle_icon());
    let label = move || theme.get().toggle_label();
    let aria_label = move || theme.get().toggle_aria_label();

    view! {
        <button
            class="theme-toggle"
            aria-label=aria_label
            on:click=move |_| runtime.handle(UiEvent::ToggleTheme)
        >
            <span class="theme-toggle-icon"><i class=icon></i></span>
            <span class="theme-toggle-text">{label}</span>
        </button>
    }
}
