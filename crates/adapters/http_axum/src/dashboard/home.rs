//! Dashboard home page and the static documents shown in the modal.

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use serde::Deserialize;

use corpdash_app::ports::TimeSource;
use corpdash_app::services::modal::ModalPhase;
use corpdash_app::view::ModalView;
use corpdash_domain::catalog;
use corpdash_domain::document::Document;

use super::{DashboardTemplate, Page};
use crate::cookies::CookieStore;
use crate::state::AppState;

/// `GET /`: links, clock and footer.
pub async fn index<T>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> (HeaderMap, DashboardTemplate)
where
    T: TimeSource + Send + Sync + 'static,
{
    let cookies = CookieStore::from_headers(&headers);
    let page = Page::at("/").render(&state, &cookies);
    (cookies.into_headers(), page)
}

/// Query of the addons page.
#[derive(Debug, Default, Deserialize)]
pub struct AddonsQuery {
    /// Index of the highlighted addon card.
    pub addon: Option<usize>,
}

/// `GET /addons`: the navigation options modal.
pub async fn addons<T>(
    State(state): State<AppState<T>>,
    Query(query): Query<AddonsQuery>,
    headers: HeaderMap,
) -> (HeaderMap, DashboardTemplate)
where
    T: TimeSource + Send + Sync + 'static,
{
    let document = catalog::addons_document();
    let active_addon = query
        .addon
        .filter(|index| *index < document.addons().len());
    render_modal(&state, &headers, "/addons", document, active_addon)
}

/// `GET /privacy`: the privacy policy modal, stamped with today's date.
pub async fn privacy<T>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> (HeaderMap, DashboardTemplate)
where
    T: TimeSource + Send + Sync + 'static,
{
    let today = state.time.now().date();
    let document = catalog::privacy_document(today, state.locale);
    render_modal(&state, &headers, "/privacy", document, None)
}

/// `GET /help`: the login help modal.
pub async fn help<T>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> (HeaderMap, DashboardTemplate)
where
    T: TimeSource + Send + Sync + 'static,
{
    let today = state.time.now().date();
    let document = catalog::help_document(today, state.locale);
    render_modal(&state, &headers, "/help", document, None)
}

fn render_modal<T: TimeSource>(
    state: &AppState<T>,
    headers: &HeaderMap,
    path: &'static str,
    document: Document,
    active_addon: Option<usize>,
) -> (HeaderMap, DashboardTemplate) {
    tracing::debug!(title = %document.title, "rendering modal");
    let cookies = CookieStore::from_headers(headers);
    let mut page = Page::at(path);
    page.modal = Some(ModalView {
        document,
        phase: ModalPhase::Open,
        active_addon,
    });
    let page = page.render(state, &cookies);
    (cookies.into_headers(), page)
}
