//! Page metadata derivation.
//!
//! Pure transforms from fetched entities to the `<head>` surface: title,
//! description, Open Graph, and Twitter card. Each page type has an
//! explicit fallback precedence chain — entity field, then site default,
//! then hardcoded literal — so a half-filled Content Store still renders
//! complete metadata.

pub mod structured_data;

use crate::content::image::ImageUrlBuilder;
use crate::models::personal::PersonalInfo;
use crate::models::project::Project;
use crate::models::settings::SiteSettings;
use crate::models::ImageRef;

pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const DEFAULT_OG_IMAGE: &str = "/og-image-placeholder.svg";

/// Request-scoped inputs the derivations need besides the entities:
/// the configured fallback site URL and the image URL builder.
pub struct SeoContext<'a> {
    pub fallback_site_url: &'a str,
    pub images: &'a ImageUrlBuilder,
}

impl SeoContext<'_> {
    /// Canonical site origin: settings override, then configured fallback.
    pub fn site_url(&self, settings: Option<&SiteSettings>) -> String {
        settings
            .and_then(|s| s.site_url.as_deref())
            .unwrap_or(self.fallback_site_url)
            .trim_end_matches('/')
            .to_string()
    }

    /// First usable candidate wins; the placeholder under the site origin
    /// is the final fallback. Never fails on a missing or malformed image.
    pub fn og_image(&self, candidates: &[Option<&ImageRef>], site_url: &str) -> String {
        for image in candidates.iter().flatten() {
            if let Some(id) = image.asset_id() {
                if let Ok(url) = self.images.image(id) {
                    return url.width(OG_IMAGE_WIDTH).height(OG_IMAGE_HEIGHT).url();
                }
            }
        }
        format!("{site_url}{DEFAULT_OG_IMAGE}")
    }
}

#[derive(Debug, Clone)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: Option<String>,
    pub image: OgImage,
    pub og_type: &'static str,
    pub locale: &'static str,
}

#[derive(Debug, Clone)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
    pub creator: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub keywords: Vec<String>,
    pub author: Option<String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

impl PageMetadata {
    pub fn home(
        personal: Option<&PersonalInfo>,
        settings: Option<&SiteSettings>,
        ctx: &SeoContext,
    ) -> Self {
        let title = settings
            .map(|s| s.title.clone())
            .unwrap_or_else(|| "Portfolio".to_string());
        let description = settings
            .map(|s| s.description.clone())
            .or_else(|| personal.and_then(|p| p.tagline.clone()))
            .unwrap_or_else(|| "Professional Portfolio".to_string());
        let site_url = ctx.site_url(settings);
        let og_image = ctx.og_image(&[settings.and_then(|s| s.og_image.as_ref())], &site_url);

        let mut meta = assemble(
            title.clone(),
            description,
            site_url,
            "website",
            og_image,
            title,
            settings,
        );
        meta.keywords = settings.map(|s| s.keywords.clone()).unwrap_or_default();
        meta.author = settings.and_then(|s| s.author.clone());
        meta
    }

    pub fn about(
        personal: Option<&PersonalInfo>,
        settings: Option<&SiteSettings>,
        ctx: &SeoContext,
    ) -> Self {
        let first_name = personal
            .and_then(|p| p.first_name.as_deref())
            .unwrap_or("Me");
        let title = format!("About {first_name} | {}", site_title(settings));
        let description = personal
            .and_then(|p| p.tagline.clone())
            .or_else(|| settings.map(|s| s.description.clone()))
            .unwrap_or_else(|| "Learn more about my journey and expertise".to_string());
        let site_url = ctx.site_url(settings);
        let og_image = ctx.og_image(
            &[
                personal.and_then(|p| p.profile_image.as_ref()),
                settings.and_then(|s| s.og_image.as_ref()),
            ],
            &site_url,
        );

        let alt = title.clone();
        assemble(
            title,
            description,
            format!("{site_url}/about"),
            "profile",
            og_image,
            alt,
            settings,
        )
    }

    pub fn contact(settings: Option<&SiteSettings>, ctx: &SeoContext) -> Self {
        section(
            "Contact Me",
            "Get in touch for collaborations, opportunities, or just to say hello",
            "/contact",
            settings,
            ctx,
        )
    }

    pub fn skills(settings: Option<&SiteSettings>, ctx: &SeoContext) -> Self {
        section(
            "Skills & Technologies",
            "Explore my technical skills and expertise across various technologies and frameworks",
            "/skills",
            settings,
            ctx,
        )
    }

    pub fn experience(settings: Option<&SiteSettings>, ctx: &SeoContext) -> Self {
        section(
            "Experience & Timeline",
            "Explore my professional journey, work experience, and career milestones",
            "/experience",
            settings,
            ctx,
        )
    }

    pub fn projects(settings: Option<&SiteSettings>, ctx: &SeoContext) -> Self {
        section(
            "Projects & Work",
            "Browse through my portfolio of projects showcasing my development skills and expertise",
            "/projects",
            settings,
            ctx,
        )
    }

    pub fn project_detail(
        project: &Project,
        settings: Option<&SiteSettings>,
        ctx: &SeoContext,
    ) -> Self {
        let title = format!("{} | {}", project.title, site_title(settings));
        let site_url = ctx.site_url(settings);
        let og_image = ctx.og_image(
            &[
                project.main_image.as_ref(),
                settings.and_then(|s| s.og_image.as_ref()),
            ],
            &site_url,
        );

        assemble(
            title,
            project.description.clone(),
            format!("{site_url}/projects/{}", project.slug.current),
            "article",
            og_image,
            project.title.clone(),
            settings,
        )
    }
}

fn site_title(settings: Option<&SiteSettings>) -> String {
    settings
        .map(|s| s.title.clone())
        .unwrap_or_else(|| "Portfolio".to_string())
}

/// Shared shape for the section listing pages, which differ only in the
/// title prefix, the literal description, and the path.
fn section(
    title_prefix: &str,
    description: &str,
    path: &str,
    settings: Option<&SiteSettings>,
    ctx: &SeoContext,
) -> PageMetadata {
    let title = format!("{title_prefix} | {}", site_title(settings));
    let site_url = ctx.site_url(settings);
    let og_image = ctx.og_image(&[settings.and_then(|s| s.og_image.as_ref())], &site_url);
    let alt = title.clone();
    assemble(
        title,
        description.to_string(),
        format!("{site_url}{path}"),
        "website",
        og_image,
        alt,
        settings,
    )
}

fn assemble(
    title: String,
    description: String,
    canonical: String,
    og_type: &'static str,
    og_image: String,
    image_alt: String,
    settings: Option<&SiteSettings>,
) -> PageMetadata {
    PageMetadata {
        open_graph: OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: canonical.clone(),
            site_name: settings.map(|s| s.title.clone()),
            image: OgImage {
                url: og_image.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: image_alt,
            },
            og_type,
            locale: "en_US",
        },
        twitter: TwitterCard {
            card: "summary_large_image",
            title: title.clone(),
            description: description.clone(),
            image: og_image,
            creator: settings.and_then(|s| s.twitter_handle.clone()),
        },
        title,
        description,
        canonical,
        keywords: Vec::new(),
        author: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slug;

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new("abc123", "production")
    }

    fn ctx<'a>(images: &'a ImageUrlBuilder) -> SeoContext<'a> {
        SeoContext {
            fallback_site_url: "https://example.com",
            images,
        }
    }

    fn settings() -> SiteSettings {
        SiteSettings {
            id: "settings".to_string(),
            title: "Jane Doe Portfolio".to_string(),
            description: "Full-stack work by Jane Doe".to_string(),
            keywords: vec!["rust".to_string()],
            author: Some("Jane Doe".to_string()),
            site_url: Some("https://janedoe.dev".to_string()),
            og_image: None,
            twitter_handle: Some("@janedoe".to_string()),
            google_analytics_id: None,
            enable_blog: false,
            enable_dark_mode: false,
        }
    }

    fn project() -> Project {
        Project {
            id: "p1".to_string(),
            title: "Crate Tracker".to_string(),
            slug: Slug {
                current: "crate-tracker".to_string(),
            },
            description: "Tracks crates".to_string(),
            long_description: None,
            main_image: None,
            gallery: Vec::new(),
            category: Default::default(),
            technologies: Vec::new(),
            features: Vec::new(),
            challenges: None,
            solutions: None,
            results: None,
            live_url: None,
            github_url: None,
            demo_url: None,
            case_study_url: None,
            start_date: None,
            end_date: None,
            client: None,
            team_size: None,
            my_role: None,
            status: None,
            testimonial: None,
            is_featured: false,
            order: 0,
            is_active: true,
            related_experience: None,
        }
    }

    #[test]
    fn test_home_falls_back_without_settings() {
        let images = images();
        let meta = PageMetadata::home(None, None, &ctx(&images));
        assert_eq!(meta.title, "Portfolio");
        assert_eq!(meta.description, "Professional Portfolio");
        assert_eq!(meta.canonical, "https://example.com");
        assert_eq!(
            meta.open_graph.image.url,
            "https://example.com/og-image-placeholder.svg"
        );
    }

    #[test]
    fn test_project_without_image_uses_placeholder() {
        let images = images();
        let s = settings();
        let meta = PageMetadata::project_detail(&project(), Some(&s), &ctx(&images));
        assert_eq!(
            meta.open_graph.image.url,
            "https://janedoe.dev/og-image-placeholder.svg"
        );
        assert_eq!(meta.title, "Crate Tracker | Jane Doe Portfolio");
        assert_eq!(meta.canonical, "https://janedoe.dev/projects/crate-tracker");
        assert_eq!(meta.open_graph.og_type, "article");
        assert_eq!(meta.twitter.creator.as_deref(), Some("@janedoe"));
    }

    #[test]
    fn test_about_title_uses_first_name() {
        let images = images();
        let s = settings();
        let meta = PageMetadata::about(None, Some(&s), &ctx(&images));
        assert_eq!(meta.title, "About Me | Jane Doe Portfolio");
        assert_eq!(meta.description, "Full-stack work by Jane Doe");
        assert_eq!(meta.open_graph.og_type, "profile");
    }

    #[test]
    fn test_section_pages_use_literal_descriptions() {
        let images = images();
        let meta = PageMetadata::skills(None, &ctx(&images));
        assert_eq!(meta.title, "Skills & Technologies | Portfolio");
        assert_eq!(
            meta.description,
            "Explore my technical skills and expertise across various technologies and frameworks"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed_from_site_url() {
        let images = images();
        let seo = ctx(&images);
        let mut s = settings();
        s.site_url = Some("https://janedoe.dev/".to_string());
        assert_eq!(seo.site_url(Some(&s)), "https://janedoe.dev");
    }
}
