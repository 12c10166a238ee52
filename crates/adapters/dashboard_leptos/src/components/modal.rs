//! Overlay showing a [`Document`].
//!
//! The overlay's DOM is built once per opened document. Phase changes only
//! flip the `active` class and pointer events so the CSS transition runs.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use corpdash_app::dashboard::UiEvent;
use corpdash_app::services::modal::ClickTarget;
use corpdash_app::view::ModalView;
use corpdash_domain::addon::{Addon, BrowserBadge};
use corpdash_domain::document::{Block, Document, Inline, Leaf, Section};

use crate::runtime::Runtime;

#[component]
pub fn Modal(runtime: Runtime) -> impl IntoView {
    let document = Memo::new(move |_| {
        runtime
            .view()
            .with(|v| v.modal.as_ref().map(|m| m.document.clone()))
    });
    let active = Memo::new(move |_| {
        runtime
            .view()
            .with(|v| v.modal.as_ref().is_some_and(ModalView::is_active))
    });
    let interactive = Memo::new(move |_| {
        runtime
            .view()
            .with(|v| v.modal.as_ref().is_some_and(ModalView::is_interactive))
    });
    let active_addon = Memo::new(move |_| {
        runtime
            .view()
            .with(|v| v.modal.as_ref().and_then(|m| m.active_addon))
    });

    move || {
        document
            .get()
            .map(|document| overlay(runtime, document, active, interactive, active_addon))
    }
}

fn overlay(
    runtime: Runtime,
    document: Document,
    active: Memo<bool>,
    interactive: Memo<bool>,
    active_addon: Memo<Option<usize>>,
) -> impl IntoView {
    let Document { title, blocks } = document;

    let on_overlay_click = move |ev: MouseEvent| {
        let target = if ev.target() == ev.current_target() {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Content
        };
        runtime.handle(UiEvent::ModalClick(target));
    };
    let on_close = move |ev: MouseEvent| {
        ev.stop_propagation();
        runtime.handle(UiEvent::CloseModal);
    };

    view! {
        <div
            class="modal-overlay"
            class:active=move || active.get()
            style:pointer-events=move || if interactive.get() { "auto" } else { "none" }
            on:click=on_overlay_click
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close" aria-label="Close" on:click=on_close>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div
                    class="modal-body"
                    on:click=move |_| runtime.handle(UiEvent::ClearAddonSelection)
                >
                    {blocks
                        .into_iter()
                        .map(|block| render_block(runtime, block, active_addon))
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

fn render_block(runtime: Runtime, block: Block, active_addon: Memo<Option<usize>>) -> AnyView {
    match block {
        Block::Heading(text) => view! { <h3>{text}</h3> }.into_any(),
        Block::Paragraph(runs) => view! { <p>{inlines(runs)}</p> }.into_any(),
        Block::List(items) => list(items).into_any(),
        Block::Section(section) => render_section(section).into_any(),
        Block::AddonGrid(addons) => addon_grid(runtime, addons, active_addon).into_any(),
    }
}

fn render_section(section: Section) -> impl IntoView {
    let Section {
        tone,
        heading,
        body,
    } = section;

    view! {
        <div class=tone.css_class()>
            {heading.map(|heading| view! { <h4>{heading}</h4> })}
            {body
                .into_iter()
                .map(|leaf| match leaf {
                    Leaf::Paragraph(runs) => view! { <p>{inlines(runs)}</p> }.into_any(),
                    Leaf::List(items) => list(items).into_any(),
                })
                .collect_view()}
        </div>
    }
}

fn list(items: Vec<Vec<Inline>>) -> impl IntoView {
    view! {
        <ul>
            {items
                .into_iter()
                .map(|runs| view! { <li>{inlines(runs)}</li> })
                .collect_view()}
        </ul>
    }
}

fn inlines(runs: Vec<Inline>) -> impl IntoView {
    runs.into_iter()
        .map(|run| match run {
            Inline::Text(text) => text.into_any(),
            Inline::Highlight(text) => view! { <span class="highlight">{text}</span> }.into_any(),
            Inline::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
            Inline::Icon(class) => view! { <i class=class></i> }.into_any(),
        })
        .collect_view()
}

fn addon_grid(
    runtime: Runtime,
    addons: Vec<Addon>,
    active_addon: Memo<Option<usize>>,
) -> impl IntoView {
    view! {
        <div class="modal-nav-grid">
            {addons
                .into_iter()
                .enumerate()
                .map(|(index, addon)| addon_card(runtime, index, addon, active_addon))
                .collect_view()}
        </div>
    }
}

fn addon_card(
    runtime: Runtime,
    index: usize,
    addon: Addon,
    active_addon: Memo<Option<usize>>,
) -> impl IntoView {
    let Addon {
        name,
        icon,
        description,
        badges,
    } = addon;

    // Selecting a card must not reach the body, which clears the selection.
    let on_select = move |ev: MouseEvent| {
        ev.stop_propagation();
        runtime.handle(UiEvent::SelectAddon(index));
    };

    view! {
        <div
            class="modal-nav-item addon-item"
            class:active=move || active_addon.get() == Some(index)
            on:click=on_select
        >
            <div class="corner top-left"></div>
            <div class="corner top-right"></div>
            <div class="corner bottom-left"></div>
            <div class="corner bottom-right"></div>
            <div class="modal-nav-item-title">
                <i class=icon></i>
                " "
                {name}
            </div>
            <div class="modal-nav-item-description">{description}</div>
            <div class="browser-selection">
                {badges.into_iter().map(badge).collect_view()}
            </div>
        </div>
    }
}

fn badge(badge: BrowserBadge) -> impl IntoView {
    let BrowserBadge { browser, url } = badge;

    view! {
        <a
            href=url
            class=format!("browser-badge {}", browser.css_class())
            target="_blank"
            rel="noopener"
            title=browser.title()
            on:click=|ev: MouseEvent| ev.stop_propagation()
        >
            <i class=format!("fab {}", browser.icon())></i>
        </a>
    }
}
