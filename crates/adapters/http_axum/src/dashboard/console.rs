//! Login console pages.

use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;

use corpdash_app::ports::TimeSource;
use corpdash_app::services::console::{REDIRECT_DELAY, failure_transcript, success_transcript};
use corpdash_app::services::session_store::SessionStore;
use corpdash_app::view::ConsoleView;

use super::{DashboardTemplate, Page, Refresh};
use crate::cookies::CookieStore;
use crate::error::DashboardError;
use crate::state::AppState;

/// `GET /console`: the console with an empty transcript.
pub async fn show<T>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> (HeaderMap, DashboardTemplate)
where
    T: TimeSource + Send + Sync + 'static,
{
    let cookies = CookieStore::from_headers(&headers);
    let mut page = Page::at("/console");
    page.console = ConsoleView::new(true, true, Vec::new());
    let page = page.render(&state, &cookies);
    (cookies.into_headers(), page)
}

/// Form data of the console login.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /console/login`: authenticate and print the outcome.
///
/// Success answers with a delayed refresh to the portal; failure answers
/// `401` with the console still open.
pub async fn login<T>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response
where
    T: TimeSource + Send + Sync + 'static,
{
    let cookies = CookieStore::from_headers(&headers);
    let sessions = SessionStore::new(&cookies, Arc::clone(&state.policy));

    let mut page = Page::at("/console");
    let status = match sessions.login(&form.username, &form.password) {
        Ok(session) => {
            page.console = ConsoleView::new(true, false, success_transcript(&session));
            page.refresh = Some(Refresh {
                seconds: u32::try_from(REDIRECT_DELAY.as_secs()).unwrap_or(u32::MAX),
                url: state.portal_url.to_string(),
            });
            StatusCode::OK
        }
        Err(err) => {
            page.console = ConsoleView::new(true, true, failure_transcript(&err));
            DashboardError::from(err).status()
        }
    };

    let page = page.render(&state, &cookies);
    (status, cookies.into_headers(), page).into_response()
}

/// `POST /logout`: forget the session and go home (PRG).
pub async fn logout<T>(State(state): State<AppState<T>>, headers: HeaderMap) -> impl IntoResponse
where
    T: TimeSource + Send + Sync + 'static,
{
    let cookies = CookieStore::from_headers(&headers);
    SessionStore::new(&cookies, Arc::clone(&state.policy)).logout();
    (cookies.into_headers(), Redirect::to("/"))
}
