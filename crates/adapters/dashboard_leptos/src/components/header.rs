use leptos::prelude::*;

use corpdash_app::dashboard::UiEvent;
use corpdash_app::view::NavButton;
use corpdash_domain::theme::Theme;

use crate::components::ThemeToggle;
use crate::runtime::Runtime;

/// Theme toggle, navigation buttons and the signed-in user.
#[component]
pub fn Header(runtime: Runtime, theme: ReadSignal<Theme>) -> impl IntoView {
    let nav = runtime.view().with_untracked(|v| v.header.nav.clone());
    let session = Memo::new(move |_| runtime.view().with(|v| v.session.clone()));

    view! {
        <div class="user-info">
            <ThemeToggle runtime=runtime theme=theme/>
            {nav.into_iter().map(|button| nav_button(runtime, button)).collect_view()}
            {move || {
                session
                    .get()
                    .map(|session| {
                        view! {
                            <div class="vertical-separator orange"></div>
                            <span class="session-user" title=session.role>
                                <i class="fas fa-user"></i>
                                " "
                                {session.username}
                            </span>
                            <button
                                class="datetime-nav-button"
                                title="Logout"
                                on:click=move |_| runtime.handle(UiEvent::Logout)
                            >
                                <i class="fas fa-sign-out-alt"></i>
                            </button>
                        }
                    })
            }}
        </div>
    }
}

fn nav_button(runtime: Runtime, button: NavButton) -> impl IntoView {
    let NavButton {
        icon,
        title,
        action,
        separated,
    } = button;

    view! {
        {separated.then(|| view! { <div class="vertical-separator orange"></div> })}
        <button
            class="datetime-nav-button"
            title=title
            on:click=move |_| runtime.handle(UiEvent::Nav(action.clone()))
        >
            <i class=format!("fas {icon}")></i>
        </button>
    }
}
