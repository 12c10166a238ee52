use leptos::prelude::*;

use crate::runtime::Runtime;

/// Live time and long-form date.
#[component]
pub fn Clock(runtime: Runtime) -> impl IntoView {
    let face = Memo::new(move |_| runtime.view().with(|v| v.clock.clone()));

    view! {
        <div class="datetime-content">
            <div class="datetime-icon"><i class="fas fa-clock"></i></div>
            <div class="datetime-info">
                <div class="datetime-time">{move || face.with(|f| f.time.clone())}</div>
                <div class="datetime-date">{move || face.with(|f| f.date.clone())}</div>
            </div>
        </div>
    }
}
