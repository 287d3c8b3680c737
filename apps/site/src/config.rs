use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Missing required variables fail startup; the form-relay access key is
/// optional here and checked at submission time instead, so the rest of
/// the site serves without it.
#[derive(Debug, Clone)]
pub struct Config {
    pub content_project_id: String,
    pub content_dataset: String,
    pub content_api_token: Option<String>,
    pub form_relay_endpoint: Option<String>,
    pub form_relay_access_key: Option<String>,
    pub site_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            content_project_id: require_env("CONTENT_PROJECT_ID")?,
            content_dataset: require_env("CONTENT_DATASET")?,
            content_api_token: optional_env("CONTENT_API_TOKEN"),
            form_relay_endpoint: optional_env("FORM_RELAY_ENDPOINT"),
            form_relay_access_key: optional_env("FORM_RELAY_ACCESS_KEY"),
            site_url: optional_env("SITE_URL").unwrap_or_else(|| "https://example.com".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
