//! Page assemblers, one per route.
//!
//! Each handler fans out its independent content fetches concurrently,
//! derives metadata and structured data from the results, and composes the
//! presentational renderers into a full document. Detail routes distinguish
//! "no such document" (404) from "fetch failed" (500).

pub mod about;
pub mod contact;
pub mod experience;
pub mod home;
pub mod project_detail;
pub mod projects;
pub mod sitemap;
pub mod skills;

use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use chrono::NaiveDate;

use crate::errors::AppError;

/// Whole-page revalidation window. Expiry and recomputation are the
/// hosting platform's concern; the application only declares the window.
pub const REVALIDATE_SECS: u32 = 3600;

pub fn page_response(html: String) -> Response {
    (
        [(
            header::CACHE_CONTROL,
            format!("public, s-maxage={REVALIDATE_SECS}, stale-while-revalidate=60"),
        )],
        Html(html),
    )
        .into_response()
}

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Router fallback for unknown paths.
pub async fn handle_fallback() -> AppError {
    AppError::NotFound("The page you are looking for does not exist.".to_string())
}
