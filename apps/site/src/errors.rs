use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::content::ContentError;
use crate::relay::RelayError;
use crate::render;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Page-facing outcomes (`NotFound`, `Content`) render HTML error shells —
/// a missing document is a 404, a failed fetch a 500, and the two are
/// never conflated. The contact API variants render the JSON error
/// envelope the form script consumes.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Content fetch failed: {0}")]
    Content(#[from] ContentError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("Submission failed: {0}")]
    Submission(String),
}

impl From<RelayError> for AppError {
    fn from(error: RelayError) -> Self {
        match error {
            RelayError::MissingAccessKey => AppError::ConfigurationMissing(
                "the contact form is not configured on this deployment".to_string(),
            ),
            other => AppError::Submission(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                let body = render::error_page(
                    "Page Not Found",
                    "404 — Page Not Found",
                    &message,
                );
                (StatusCode::NOT_FOUND, Html(body)).into_response()
            }
            AppError::Content(error) => {
                tracing::error!("content fetch failed: {error}");
                let body = render::error_page(
                    "Something Went Wrong",
                    "500 — Something Went Wrong",
                    "The page could not be rendered right now. Please try again shortly.",
                );
                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
            AppError::Validation(message) => {
                json_error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", &message)
            }
            AppError::ConfigurationMissing(message) => {
                tracing::error!("configuration missing: {message}");
                json_error(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CONFIGURATION_MISSING",
                    &message,
                )
            }
            AppError::Submission(message) => {
                tracing::warn!("contact submission failed: {message}");
                json_error(StatusCode::BAD_GATEWAY, "SUBMISSION_FAILED", &message)
            }
        }
    }
}

fn json_error(status: StatusCode, code: &str, message: &str) -> Response {
    let body = Json(json!({
        "error": {
            "code": code,
            "message": message
        }
    }));
    (status, body).into_response()
}
