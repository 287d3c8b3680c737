use crate::config::Config;
use crate::content::image::ImageUrlBuilder;
use crate::content::ContentClient;
use crate::relay::RelayClient;
use crate::seo::SeoContext;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentClient,
    pub relay: RelayClient,
    pub images: ImageUrlBuilder,
    pub config: Config,
}

impl AppState {
    /// SEO inputs for the current request: configured fallback origin plus
    /// the image URL builder.
    pub fn seo(&self) -> SeoContext<'_> {
        SeoContext {
            fallback_site_url: &self.config.site_url,
            images: &self.images,
        }
    }
}
