//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use corpdash_app::ports::TimeSource;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the dashboard pages at `/` and, when an assets directory is
/// configured, serves it under `/assets`. Includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level.
pub fn build<T>(state: AppState<T>) -> Router
where
    T: TimeSource + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes());

    if let Some(dir) = &state.assets_dir {
        tracing::info!(dir = %dir.display(), "serving static assets");
        router = router.nest_service("/assets", ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{Request, Response, StatusCode};
    use chrono::{NaiveDate, NaiveDateTime};
    use corpdash_domain::catalog::PORTAL_URL;
    use corpdash_domain::clock::DateLocale;
    use corpdash_domain::credential::CredentialPolicy;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct FixedClock(NaiveDateTime);

    impl TimeSource for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn test_state() -> AppState<FixedClock> {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        AppState::new(
            CredentialPolicy::default(),
            PORTAL_URL,
            DateLocale::Polish,
            FixedClock(now),
        )
    }

    async fn send(request: Request<Body>) -> Response<Body> {
        build(test_state()).oneshot(request).await.unwrap()
    }

    async fn get_page(uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        send(builder.body(Body::empty()).unwrap()).await
    }

    async fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    async fn body_text(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn set_cookies(response: &Response<Body>) -> Vec<String> {
        response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = get_page("/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_render_home_with_clock_links_and_footer() {
        let response = get_page("/", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("09:15:00"));
        assert!(body.contains("poniedziałek, 19 października 2026"));
        assert!(body.contains("Outlook"));
        assert!(body.contains("ChatGPT"));
        assert!(body.contains("© 2026 All rights reserved"));
        assert!(body.contains("SYSTEM ONLINE"));
        assert!(!body.contains("modal-overlay"));
    }

    #[tokio::test]
    async fn should_render_dark_theme_from_cookie() {
        let body = body_text(get_page("/", Some("theme=dark")).await).await;
        assert!(body.contains("dark-theme"));
        assert!(body.contains("fa-sun"));
    }

    #[tokio::test]
    async fn should_persist_toggled_theme_and_redirect_back() {
        let response = post_form("/theme/toggle", "next=%2Fprivacy", None).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/privacy");
        let cookies = set_cookies(&response);
        assert!(cookies.iter().any(|c| c.starts_with("theme=dark;")));
    }

    #[tokio::test]
    async fn should_not_redirect_off_site_after_toggle() {
        let response = post_form("/theme/toggle", "next=https%3A%2F%2Fevil.example", None).await;
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
    }

    #[tokio::test]
    async fn should_reject_unknown_theme() {
        let response = post_form("/theme", "theme=blue", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_store_explicit_theme() {
        let response = post_form("/theme", "theme=light", Some("theme=dark")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookies = set_cookies(&response);
        assert!(cookies.iter().any(|c| c.starts_with("theme=light;")));
    }

    #[tokio::test]
    async fn should_render_privacy_document_with_date_stamp() {
        let body = body_text(get_page("/privacy", None).await).await;
        assert!(body.contains("Privacy Policy"));
        assert!(body.contains("19.10.2026"));
        assert!(body.contains("modal-overlay active"));
    }

    #[tokio::test]
    async fn should_highlight_selected_addon() {
        let body = body_text(get_page("/addons?addon=0", None).await).await;
        assert!(body.contains("Navigation Options"));
        assert!(body.contains("addon-item active"));
    }

    #[tokio::test]
    async fn should_ignore_out_of_range_addon() {
        let body = body_text(get_page("/addons?addon=99", None).await).await;
        assert!(!body.contains("addon-item active"));
    }

    #[tokio::test]
    async fn should_show_console_with_help() {
        let body = body_text(get_page("/console", None).await).await;
        assert!(body.contains("login-console active"));
        assert!(body.contains("clear console output"));
    }

    #[tokio::test]
    async fn should_reject_wrong_password_without_refresh() {
        let response = post_form("/console/login", "username=admin&password=wrongpass", None).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(set_cookies(&response).is_empty());
        let body = body_text(response).await;
        assert!(body.contains("✗ Authentication failed"));
        assert!(body.contains("Nieprawidłowe dane logowania"));
        assert!(!body.contains("http-equiv=\"refresh\""));
    }

    #[tokio::test]
    async fn should_login_and_refresh_to_portal() {
        let response = post_form("/console/login", "username=admin&password=admin123", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookies = set_cookies(&response);
        assert!(
            cookies
                .iter()
                .any(|c| c.starts_with("corporate-dashboard-session="))
        );
        let body = body_text(response).await;
        assert!(body.contains("✓ Authentication successful"));
        assert!(body.contains("Role: Administrator"));
        assert!(body.contains("http-equiv=\"refresh\" content=\"3;url=https:"));
        assert!(body.contains("devospanel.carrd.co"));
    }

    #[tokio::test]
    async fn should_show_session_from_cookie() {
        let cookie = "corporate-dashboard-session=%7B%22username%22%3A%22manager%22%2C%22role%22%3A%22Manager%22%7D";
        let body = body_text(get_page("/", Some(cookie)).await).await;
        assert!(body.contains("manager"));
        assert!(body.contains("action=\"/logout\""));
    }

    #[tokio::test]
    async fn should_purge_malformed_session_cookie() {
        let response = get_page("/", Some("corporate-dashboard-session=%7Bbroken")).await;
        let cookies = set_cookies(&response);
        assert!(
            cookies
                .iter()
                .any(|c| c.starts_with("corporate-dashboard-session=;") && c.contains("Max-Age=0"))
        );
    }

    #[tokio::test]
    async fn should_clear_session_on_logout() {
        let response = post_form(
            "/logout",
            "",
            Some("corporate-dashboard-session=%7B%22username%22%3A%22user%22%2C%22role%22%3A%22User%22%7D"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
        assert!(
            set_cookies(&response)
                .iter()
                .any(|c| c.contains("Max-Age=0"))
        );
    }
}
