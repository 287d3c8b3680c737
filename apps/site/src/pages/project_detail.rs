use axum::extract::{Path, State};
use axum::response::Response;

use crate::errors::AppError;
use crate::render::{self, sections, Chrome};
use crate::seo::structured_data::{self, Crumb};
use crate::seo::PageMetadata;
use crate::state::AppState;

use super::{page_response, today};

/// GET /projects/:slug
///
/// A slug that matches no active project is a 404, not a render failure.
pub async fn handle_project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let (project, personal, settings, header_links, footer_links) = tokio::try_join!(
        state.content.project_by_slug(&slug),
        state.content.personal_info(),
        state.content.site_settings(),
        state.content.header_social_links(),
        state.content.footer_social_links(),
    )?;

    let project = project
        .ok_or_else(|| AppError::NotFound(format!("No project matches \"{slug}\".")))?;

    let seo = state.seo();
    let meta = PageMetadata::project_detail(&project, settings.as_ref(), &seo);
    let site_url = seo.site_url(settings.as_ref());

    let schemas = vec![
        structured_data::creative_work(&project, settings.as_ref(), &seo),
        structured_data::article(&project, personal.as_ref(), settings.as_ref(), &seo),
        structured_data::breadcrumb_list(&[
            Crumb::new("Home", site_url.clone()),
            Crumb::new("Projects", format!("{site_url}/projects")),
            Crumb::new(
                project.title.clone(),
                format!("{site_url}/projects/{}", project.slug.current),
            ),
        ]),
    ];

    let body = sections::project_detail::render(&project, today());
    let chrome = Chrome {
        settings: settings.as_ref(),
        header_links: &header_links,
        footer_links: &footer_links,
    };
    Ok(page_response(render::document(&meta, &schemas, &chrome, &body)))
}
