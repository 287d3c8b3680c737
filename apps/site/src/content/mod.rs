//! Content Access Layer — the single point of entry for Content Store reads.
//!
//! No other module may query the Content Store directly. Each page fetch
//! goes through one of the typed accessors below, which execute a named
//! projection from `queries` and deserialize the `{result}` envelope.
//!
//! Absence is a valid outcome: singleton accessors return `Ok(None)` and
//! list accessors return an empty Vec when nothing matches. Transport,
//! auth, and query errors surface as `ContentError` — fatal for the page
//! render, with no in-request retry.

pub mod image;
pub mod queries;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::models::experience::Experience;
use crate::models::personal::PersonalInfo;
use crate::models::project::Project;
use crate::models::settings::{ContactInfo, SiteSettings};
use crate::models::skill::{Skill, SkillCategory};
use crate::models::social::SocialLink;
use crate::models::{active_in_order, Orderable};

const QUERY_HOST: &str = "api.sanity.io";
/// Pinned query API version; bump deliberately, never float.
const API_VERSION: &str = "2024-01-01";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("query failed (status {status}): {message}")]
    Query { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct QueryErrorEnvelope {
    error: QueryErrorBody,
}

#[derive(Debug, Deserialize)]
struct QueryErrorBody {
    description: String,
}

#[derive(Debug, Deserialize)]
struct SlugRow {
    slug: String,
}

/// Both halves of the combined skills-page projection.
#[derive(Debug, Deserialize)]
pub struct SkillsWithCategories {
    pub categories: Vec<SkillCategory>,
    pub skills: Vec<Skill>,
}

#[derive(Clone)]
pub struct ContentClient {
    client: Client,
    query_url: String,
    token: Option<String>,
}

impl ContentClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            query_url: format!(
                "https://{}.{}/v{}/data/query/{}",
                config.content_project_id, QUERY_HOST, API_VERSION, config.content_dataset
            ),
            token: config.content_api_token.clone(),
        }
    }

    /// Executes one projection. `params` are GROQ parameters; values are
    /// JSON-encoded strings on the wire. Drafts never reach the site:
    /// every request pins `perspective=published`.
    async fn fetch<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<Option<T>, ContentError> {
        let mut request = self
            .client
            .get(&self.query_url)
            .query(&[("query", query), ("perspective", "published")]);

        for (name, value) in params {
            request = request.query(&[(format!("${name}"), format!("\"{value}\""))]);
        }

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<QueryErrorEnvelope>(&body)
                .map(|e| e.error.description)
                .unwrap_or(body);
            return Err(ContentError::Query {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: QueryEnvelope<T> = response.json().await?;
        debug!(query_url = %self.query_url, "content query ok");
        Ok(envelope.result)
    }

    /// List fetch with the active-subset/ascending-order contract applied
    /// in-process, independent of what the store returned.
    async fn fetch_list<T>(&self, query: &str) -> Result<Vec<T>, ContentError>
    where
        T: DeserializeOwned + Orderable,
    {
        let rows: Option<Vec<T>> = self.fetch(query, &[]).await?;
        Ok(active_in_order(rows.unwrap_or_default()))
    }

    // ── Singletons ──────────────────────────────────────────────────────

    pub async fn personal_info(&self) -> Result<Option<PersonalInfo>, ContentError> {
        self.fetch(queries::PERSONAL_INFO, &[]).await
    }

    pub async fn site_settings(&self) -> Result<Option<SiteSettings>, ContentError> {
        self.fetch(queries::SITE_SETTINGS, &[]).await
    }

    pub async fn contact_info(&self) -> Result<Option<ContactInfo>, ContentError> {
        self.fetch(queries::CONTACT_INFO, &[]).await
    }

    // ── Skills ──────────────────────────────────────────────────────────

    pub async fn skills(&self) -> Result<Vec<Skill>, ContentError> {
        self.fetch_list(queries::SKILLS).await
    }

    pub async fn skill_categories(&self) -> Result<Vec<SkillCategory>, ContentError> {
        self.fetch_list(queries::SKILL_CATEGORIES).await
    }

    pub async fn skills_with_categories(&self) -> Result<SkillsWithCategories, ContentError> {
        let combined: Option<SkillsWithCategories> =
            self.fetch(queries::SKILLS_WITH_CATEGORIES, &[]).await?;
        let combined = combined.unwrap_or(SkillsWithCategories {
            categories: Vec::new(),
            skills: Vec::new(),
        });
        Ok(SkillsWithCategories {
            categories: active_in_order(combined.categories),
            skills: active_in_order(combined.skills),
        })
    }

    // ── Projects ────────────────────────────────────────────────────────

    pub async fn projects(&self) -> Result<Vec<Project>, ContentError> {
        self.fetch_list(queries::PROJECTS).await
    }

    pub async fn featured_projects(&self) -> Result<Vec<Project>, ContentError> {
        self.fetch_list(queries::FEATURED_PROJECTS).await
    }

    pub async fn project_by_slug(&self, slug: &str) -> Result<Option<Project>, ContentError> {
        self.fetch(queries::PROJECT_BY_SLUG, &[("slug", slug)]).await
    }

    pub async fn project_slugs(&self) -> Result<Vec<String>, ContentError> {
        let rows: Option<Vec<SlugRow>> = self.fetch(queries::PROJECT_SLUGS, &[]).await?;
        Ok(rows
            .unwrap_or_default()
            .into_iter()
            .map(|row| row.slug)
            .collect())
    }

    // ── Experience ──────────────────────────────────────────────────────

    pub async fn experiences(&self) -> Result<Vec<Experience>, ContentError> {
        self.fetch_list(queries::EXPERIENCES).await
    }

    // ── Social links ────────────────────────────────────────────────────

    pub async fn header_social_links(&self) -> Result<Vec<SocialLink>, ContentError> {
        self.fetch_list(queries::HEADER_SOCIAL_LINKS).await
    }

    pub async fn footer_social_links(&self) -> Result<Vec<SocialLink>, ContentError> {
        self.fetch_list(queries::FOOTER_SOCIAL_LINKS).await
    }

    pub async fn contact_social_links(&self) -> Result<Vec<SocialLink>, ContentError> {
        self.fetch_list(queries::CONTACT_SOCIAL_LINKS).await
    }
}
