use leptos::prelude::*;

use corpdash_app::dashboard::UiEvent;

use crate::runtime::Runtime;

#[component]
pub fn Footer(runtime: Runtime) -> impl IntoView {
    let footer = runtime.view().with_untracked(|v| v.footer.clone());
    let copyright = Memo::new(move |_| runtime.view().with(|v| v.footer.copyright()));

    view! {
        <footer class="app-footer">
            <div class="footer-content">
                <div class="footer-section">
                    <span class="footer-title">{footer.title}</span>
                    <span class="footer-version">{footer.version}</span>
                </div>
                <div class="footer-section">
                    <span
                        class="footer-info"
                        on:click=move |_| runtime.handle(UiEvent::OpenPrivacy)
                    >
                        "PRIVACY POLICY "
                        <i class="fas fa-info-circle ml-2"></i>
                    </span>
                </div>
                <div class="footer-section">
                    <span class="footer-info-copyright">{move || copyright.get()}</span>
                </div>
                <div class="footer-section">
                    <span class="footer-status">
                        <i class="fas fa-circle status-indicator"></i>
                        " "
                        {footer.status}
                    </span>
                </div>
            </div>
        </footer>
    }
}
