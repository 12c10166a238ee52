//! Terminal-styled login console, toggled with Ctrl+L.

use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;

use corpdash_app::dashboard::UiEvent;

use crate::runtime::Runtime;

#[component]
pub fn Console(runtime: Runtime) -> impl IntoView {
    let active = Memo::new(move |_| runtime.view().with(|v| v.console.active));
    let transcript = Memo::new(move |_| runtime.view().with(|v| v.console.transcript.clone()));
    let help = runtime.view().with_untracked(|v| v.console.help);

    let username = runtime.username();
    let password = NodeRef::<Input>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = |input: NodeRef<Input>| {
            input
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default()
        };
        runtime.handle(UiEvent::SubmitLogin {
            username: value(username),
            password: value(password),
        });
    };

    view! {
        <div class=move || {
            if active.get() { "login-console active" } else { "login-console hidden" }
        }>
            <div class="console-header">
                <span class="console-title">
                    <i class="fas fa-terminal"></i>
                    " Login Console - Corporate Dashboard"
                </span>
                <button
                    class="console-help-link"
                    title="Pomoc"
                    on:click=move |_| runtime.handle(UiEvent::OpenHelp)
                >
                    <i class="fas fa-question-circle"></i>
                </button>
                <button
                    class="console-close"
                    aria-label="Close"
                    on:click=move |_| runtime.handle(UiEvent::HideConsole)
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>
            <div class="console-body">
                <div class="console-prompt">
                    <span class="prompt-symbol">"$"</span>
                    <span class="prompt-text">
                        "Please enter your credentials to access AI Link Hub"
                    </span>
                </div>
                <form class="console-form" on:submit=on_submit>
                    <div class="console-input-group">
                        <span class="input-label">"username:"</span>
                        <input
                            type="text"
                            name="username"
                            required
                            autocomplete="username"
                            spellcheck="false"
                            node_ref=username
                        />
                    </div>
                    <div class="console-input-group">
                        <span class="input-label">"password:"</span>
                        <input
                            type="password"
                            name="password"
                            required
                            autocomplete="current-password"
                            node_ref=password
                        />
                    </div>
                    <div class="console-actions">
                        <button type="submit" class="console-btn">
                            <i class="fas fa-arrow-right"></i>
                            " Execute Login"
                        </button>
                        <button
                            type="button"
                            class="console-btn"
                            on:click=move |_| runtime.handle(UiEvent::ClearConsole)
                        >
                            "clear"
                        </button>
                    </div>
                </form>
                <div class="console-output">
                    {move || {
                        transcript
                            .get()
                            .into_iter()
                            .map(|line| view! { <div class=line.kind.css_class()>{line.text}</div> })
                            .collect_view()
                    }}
                </div>
                <div class="console-help">
                    {help
                        .into_iter()
                        .map(|line| view! { <div class="help-line">{line}</div> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
