//! The two columns of link group cards.

use leptos::prelude::*;

use corpdash_app::dashboard::UiEvent;
use corpdash_domain::link::{LinkGroup, LinkItem, MarkerColor};

use crate::runtime::Runtime;

#[component]
pub fn LinkSections(runtime: Runtime) -> impl IntoView {
    let (left, right) = runtime
        .view()
        .with_untracked(|v| (v.left.clone(), v.right.clone()));

    view! {
        <div class="main-grid">
            <div class="left-section">{group_cards(runtime, left)}</div>
            <div class="right-section">{group_cards(runtime, right)}</div>
        </div>
    }
}

fn group_cards(runtime: Runtime, groups: Vec<LinkGroup>) -> impl IntoView {
    groups
        .into_iter()
        .map(|group| group_card(runtime, group))
        .collect_view()
}

fn group_card(runtime: Runtime, group: LinkGroup) -> impl IntoView {
    let grid_class = if group.is_two_column() {
        "group-card-grid two-columns"
    } else {
        "group-card-grid"
    };
    let marker = group.marker_color.map(MarkerColor::css_class);

    view! {
        <div class="group-card">
            <div class=grid_class>
                {group
                    .columns
                    .into_iter()
                    .map(|column| {
                        view! {
                            <div class="group-column">
                                {column
                                    .into_iter()
                                    .map(|item| link_button(runtime, item, marker.clone()))
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// A card row. Rows without a URL are plain labels.
fn link_button(runtime: Runtime, item: LinkItem, marker: Option<String>) -> impl IntoView {
    let LinkItem { title, icon, url } = item;
    let cursor = if url.is_some() { "pointer" } else { "default" };

    view! {
        <div
            class="link-button"
            style:cursor=cursor
            on:click=move |_| {
                if let Some(url) = &url {
                    runtime.handle(UiEvent::OpenLink(url.clone()));
                }
            }
        >
            <div class="corner top-left"></div>
            <div class="corner top-right"></div>
            <div class="corner bottom-left"></div>
            <div class="corner bottom-right"></div>
            <div class="link-button-left">
                {marker.map(|class| view! { <div class=class></div> })}
                <span class="link-button-title">{title}</span>
            </div>
            {icon
                .map(|icon| {
                    view! {
                        <span class="link-button-icon">
                            <i class=format!("fas {icon}")></i>
                        </span>
                    }
                })}
        </div>
    }
}
