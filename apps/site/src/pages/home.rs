use axum::extract::State;
use axum::response::Response;

use crate::errors::AppError;
use crate::render::{self, sections, Chrome};
use crate::seo::{structured_data, PageMetadata};
use crate::state::AppState;

use super::{page_response, today};

/// GET /
///
/// The single-page overview: every section, assembled from one concurrent
/// fan-out across the Content Store.
pub async fn handle_home(State(state): State<AppState>) -> Result<Response, AppError> {
    let (
        personal,
        settings,
        skills,
        categories,
        featured,
        projects,
        experiences,
        header_links,
        footer_links,
    ) = tokio::try_join!(
        state.content.personal_info(),
        state.content.site_settings(),
        state.content.skills(),
        state.content.skill_categories(),
        state.content.featured_projects(),
        state.content.projects(),
        state.content.experiences(),
        state.content.header_social_links(),
        state.content.footer_social_links(),
    )?;

    let seo = state.seo();
    let meta = PageMetadata::home(personal.as_ref(), settings.as_ref(), &seo);

    let mut schemas = Vec::new();
    if let Some(personal) = &personal {
        schemas.push(structured_data::person(personal, settings.as_ref(), &seo));
    }
    if let Some(settings) = &settings {
        schemas.push(structured_data::web_site(settings, &seo));
    }

    // The landing page leads with curated work; an unflagged store still
    // shows the full list rather than an empty section.
    let showcase = if featured.is_empty() { &projects } else { &featured };

    let today = today();
    let mut body = String::new();
    body.push_str(&sections::hero::render(personal.as_ref()));
    body.push_str(&sections::about::render(personal.as_ref()));
    body.push_str(&sections::skills::render(&categories, &skills));
    body.push_str(&sections::projects::render(showcase));
    body.push_str(&sections::experience::render(&experiences, today));
    body.push_str(&sections::contact::render(None, personal.as_ref(), &[]));

    let chrome = Chrome {
        settings: settings.as_ref(),
        header_links: &header_links,
        footer_links: &footer_links,
    };
    Ok(page_response(render::document(&meta, &schemas, &chrome, &body)))
}
