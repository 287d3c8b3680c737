use axum::extract::State;
use axum::response::Response;

use crate::errors::AppError;
use crate::render::{self, sections, Chrome};
use crate::seo::structured_data::{self, Crumb};
use crate::seo::PageMetadata;
use crate::state::AppState;

use super::page_response;

/// GET /about
pub async fn handle_about(State(state): State<AppState>) -> Result<Response, AppError> {
    let (personal, settings, header_links, footer_links) = tokio::try_join!(
        state.content.personal_info(),
        state.content.site_settings(),
        state.content.header_social_links(),
        state.content.footer_social_links(),
    )?;

    let seo = state.seo();
    let meta = PageMetadata::about(personal.as_ref(), settings.as_ref(), &seo);
    let site_url = seo.site_url(settings.as_ref());

    let mut schemas = Vec::new();
    if let Some(personal) = &personal {
        schemas.push(structured_data::person(personal, settings.as_ref(), &seo));
    }
    schemas.push(structured_data::breadcrumb_list(&[
        Crumb::new("Home", site_url.clone()),
        Crumb::new("About", format!("{site_url}/about")),
    ]));

    let body = sections::about::render(personal.as_ref());
    let chrome = Chrome {
        settings: settings.as_ref(),
        header_links: &header_links,
        footer_links: &footer_links,
    };
    Ok(page_response(render::document(&meta, &schemas, &chrome, &body)))
}
