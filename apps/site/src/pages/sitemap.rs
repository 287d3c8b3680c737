use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::render::escape;
use crate::state::AppState;

use super::REVALIDATE_SECS;

const STATIC_ROUTES: [&str; 6] = ["", "/about", "/skills", "/projects", "/experience", "/contact"];

/// GET /sitemap.xml
///
/// Static routes plus one entry per active project slug. The slug list
/// comes from the same projection family as the detail lookup, so every
/// listed URL resolves.
pub async fn handle_sitemap(State(state): State<AppState>) -> Result<Response, AppError> {
    let (settings, slugs) = tokio::try_join!(
        state.content.site_settings(),
        state.content.project_slugs(),
    )?;

    let site_url = state.seo().site_url(settings.as_ref());

    let mut xml =
        String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in STATIC_ROUTES {
        xml.push_str(&format!("<url><loc>{site_url}{route}</loc></url>\n"));
    }
    for slug in &slugs {
        xml.push_str(&format!(
            "<url><loc>{site_url}/projects/{}</loc></url>\n",
            escape(slug)
        ));
    }
    xml.push_str("</urlset>\n");

    Ok((
        [
            (header::CONTENT_TYPE, "application/xml".to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, s-maxage={REVALIDATE_SECS}, stale-while-revalidate=60"),
            ),
        ],
        xml,
    )
        .into_response())
}
