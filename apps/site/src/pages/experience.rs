use axum::extract::State;
use axum::response::Response;

use crate::errors::AppError;
use crate::render::{self, sections, Chrome};
use crate::seo::structured_data::{self, Crumb};
use crate::seo::PageMetadata;
use crate::state::AppState;

use super::{page_response, today};

/// GET /experience
pub async fn handle_experience(State(state): State<AppState>) -> Result<Response, AppError> {
    let (experiences, personal, settings, header_links, footer_links) = tokio::try_join!(
        state.content.experiences(),
        state.content.personal_info(),
        state.content.site_settings(),
        state.content.header_social_links(),
        state.content.footer_social_links(),
    )?;

    let seo = state.seo();
    let meta = PageMetadata::experience(settings.as_ref(), &seo);
    let site_url = seo.site_url(settings.as_ref());

    let mut schemas = vec![structured_data::breadcrumb_list(&[
        Crumb::new("Home", site_url.clone()),
        Crumb::new("Experience", format!("{site_url}/experience")),
    ])];
    for experience in &experiences {
        schemas.push(structured_data::work_experience(
            experience,
            personal.as_ref(),
            &seo,
        ));
    }

    let body = sections::experience::render(&experiences, today());
    let chrome = Chrome {
        settings: settings.as_ref(),
        header_links: &header_links,
        footer_links: &footer_links,
    };
    Ok(page_response(render::document(&meta, &schemas, &chrome, &body)))
}
