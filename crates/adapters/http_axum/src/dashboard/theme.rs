//! Theme form handlers (PRG).

use std::str::FromStr;

use axum::extract::Form;
use axum::http::HeaderMap;
use axum::response::Redirect;
use serde::Deserialize;

use corpdash_app::services::theme_store::ThemeStore;
use corpdash_domain::theme::Theme;

use super::{PageSurface, local_path};
use crate::cookies::CookieStore;
use crate::error::DashboardError;

/// Form data of the toggle button.
#[derive(Debug, Default, Deserialize)]
pub struct ToggleForm {
    /// Page to return to.
    pub next: Option<String>,
}

/// `POST /theme/toggle`: flip the theme and return to the page.
pub async fn toggle(headers: HeaderMap, Form(form): Form<ToggleForm>) -> (HeaderMap, Redirect) {
    let cookies = CookieStore::from_headers(&headers);
    let surface = PageSurface::default();
    let theme = ThemeStore::new(&cookies, &surface).toggle();
    tracing::debug!(%theme, "theme toggled");

    let redirect = Redirect::to(local_path(form.next.as_deref()));
    (cookies.into_headers(), redirect)
}

/// Form data of an explicit theme choice.
#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub theme: String,
    pub next: Option<String>,
}

/// `POST /theme`: store an explicit theme.
///
/// # Errors
///
/// Answers `400` for anything other than `light` or `dark`.
pub async fn set(
    headers: HeaderMap,
    Form(form): Form<ThemeForm>,
) -> Result<(HeaderMap, Redirect), DashboardError> {
    let theme = Theme::from_str(&form.theme)?;
    let cookies = CookieStore::from_headers(&headers);
    let surface = PageSurface::default();
    ThemeStore::new(&cookies, &surface).set_theme(theme);

    let redirect = Redirect::to(local_path(form.next.as_deref()));
    Ok((cookies.into_headers(), redirect))
}
