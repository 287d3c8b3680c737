use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::relay::{validate, ContactSubmission};
use crate::render::{self, sections, Chrome};
use crate::seo::structured_data::{self, Crumb};
use crate::seo::PageMetadata;
use crate::state::AppState;

use super::page_response;

/// GET /contact
pub async fn handle_contact(State(state): State<AppState>) -> Result<Response, AppError> {
    let (contact, personal, settings, contact_links, header_links, footer_links) = tokio::try_join!(
        state.content.contact_info(),
        state.content.personal_info(),
        state.content.site_settings(),
        state.content.contact_social_links(),
        state.content.header_social_links(),
        state.content.footer_social_links(),
    )?;

    let seo = state.seo();
    let meta = PageMetadata::contact(settings.as_ref(), &seo);
    let site_url = seo.site_url(settings.as_ref());

    let schemas = vec![structured_data::breadcrumb_list(&[
        Crumb::new("Home", site_url.clone()),
        Crumb::new("Contact", format!("{site_url}/contact")),
    ])];

    let body = sections::contact::render(contact.as_ref(), personal.as_ref(), &contact_links);
    let chrome = Chrome {
        settings: settings.as_ref(),
        header_links: &header_links,
        footer_links: &footer_links,
    };
    Ok(page_response(render::document(&meta, &schemas, &chrome, &body)))
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/contact
///
/// Validates the payload, relays it, and returns a distinct success or
/// failure outcome. A relay failure is never reported as success.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<SubmitResponse>, AppError> {
    validate(&submission).map_err(AppError::Validation)?;

    let message = state.relay.submit(&submission).await?;

    Ok(Json(SubmitResponse {
        success: true,
        message,
    }))
}
