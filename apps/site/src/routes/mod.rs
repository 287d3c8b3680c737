pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::home::handle_home))
        .route("/about", get(pages::about::handle_about))
        .route("/skills", get(pages::skills::handle_skills))
        .route("/projects", get(pages::projects::handle_projects))
        .route(
            "/projects/:slug",
            get(pages::project_detail::handle_project_detail),
        )
        .route("/experience", get(pages::experience::handle_experience))
        .route("/contact", get(pages::contact::handle_contact))
        .route("/api/contact", post(pages::contact::handle_submit))
        .route("/sitemap.xml", get(pages::sitemap::handle_sitemap))
        .fallback(pages::handle_fallback)
        .with_state(state)
}
