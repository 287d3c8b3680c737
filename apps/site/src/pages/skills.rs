use axum::extract::State;
use axum::response::Response;

use crate::errors::AppError;
use crate::render::{self, sections, Chrome};
use crate::seo::structured_data::{self, Crumb};
use crate::seo::PageMetadata;
use crate::state::AppState;

use super::page_response;

/// GET /skills
pub async fn handle_skills(State(state): State<AppState>) -> Result<Response, AppError> {
    let (skills_data, settings, header_links, footer_links) = tokio::try_join!(
        state.content.skills_with_categories(),
        state.content.site_settings(),
        state.content.header_social_links(),
        state.content.footer_social_links(),
    )?;

    let seo = state.seo();
    let meta = PageMetadata::skills(settings.as_ref(), &seo);
    let site_url = seo.site_url(settings.as_ref());

    let schemas = vec![structured_data::breadcrumb_list(&[
        Crumb::new("Home", site_url.clone()),
        Crumb::new("Skills", format!("{site_url}/skills")),
    ])];

    let body = sections::skills::render(&skills_data.categories, &skills_data.skills);
    let chrome = Chrome {
        settings: settings.as_ref(),
        header_links: &header_links,
        footer_links: &footer_links,
    };
    Ok(page_response(render::document(&meta, &schemas, &chrome, &body)))
}
