//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use corpdash_domain::error::{AuthError, CorpdashError, ValidationError};

/// Maps [`CorpdashError`] to a plain HTML error page.
#[derive(Debug)]
pub struct DashboardError(CorpdashError);

impl From<CorpdashError> for DashboardError {
    fn from(err: CorpdashError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for DashboardError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<AuthError> for DashboardError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl DashboardError {
    /// Status code the error is answered with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CorpdashError::Validation(_) => StatusCode::BAD_REQUEST,
            CorpdashError::Auth(_) => StatusCode::UNAUTHORIZED,
            CorpdashError::Storage(_) | CorpdashError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            CorpdashError::Validation(err) => err.to_string(),
            CorpdashError::Auth(err) => err.to_string(),
            CorpdashError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                "internal server error".to_string()
            }
            CorpdashError::Session(err) => {
                tracing::error!(error = %err, "session error");
                "internal server error".to_string()
            }
        };

        let body = format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p><a href=\"/\">Back</a></body></html>",
            status.as_u16(),
            escape(&message)
        );
        (status, Html(body)).into_response()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpdash_domain::error::StorageError;

    #[test]
    fn should_map_validation_to_bad_request() {
        let response =
            DashboardError::from(ValidationError::UnknownTheme("<blue>".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_auth_to_unauthorized() {
        let response = DashboardError::from(AuthError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn should_hide_storage_details() {
        let response =
            DashboardError::from(CorpdashError::from(StorageError::Unavailable)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn should_escape_markup_in_messages() {
        assert_eq!(escape("<b>&"), "&lt;b&gt;&amp;");
    }
}
