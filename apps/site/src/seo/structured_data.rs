//! schema.org structured-data generators.
//!
//! Pure transforms from fetched entities to JSON objects embedded in each
//! page's `application/ld+json` script. A property whose source field is
//! absent is omitted entirely — consumers must never see `null`.

use serde_json::{json, Map, Value};

use crate::models::experience::Experience;
use crate::models::personal::PersonalInfo;
use crate::models::project::Project;
use crate::models::rich_text::blocks_to_text;
use crate::models::settings::SiteSettings;

use super::SeoContext;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

fn schema(ty: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
    map.insert("@type".to_string(), json!(ty));
    map
}

fn put(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

fn image_url(ctx: &SeoContext, asset_id: Option<&str>) -> Option<Value> {
    let id = asset_id?;
    ctx.images.image(id).ok().map(|u| json!(u.url()))
}

pub fn person(
    personal: &PersonalInfo,
    settings: Option<&SiteSettings>,
    ctx: &SeoContext,
) -> Value {
    let site_url = ctx.site_url(settings);
    let mut map = schema("Person");
    map.insert("name".to_string(), json!(personal.name));
    put(
        &mut map,
        "jobTitle",
        personal.title.as_ref().map(|t| json!(t)),
    );
    put(
        &mut map,
        "description",
        personal
            .bio
            .as_deref()
            .map(blocks_to_text)
            .filter(|text| !text.is_empty())
            .map(|text| json!(text)),
    );
    map.insert("url".to_string(), json!(site_url));
    put(
        &mut map,
        "image",
        image_url(
            ctx,
            personal
                .profile_image
                .as_ref()
                .and_then(|image| image.asset_id()),
        ),
    );
    map.insert(
        "sameAs".to_string(),
        json!(personal
            .social_links
            .iter()
            .map(|link| link.url.as_str())
            .collect::<Vec<_>>()),
    );
    put(&mut map, "email", personal.email.as_ref().map(|e| json!(e)));
    put(
        &mut map,
        "telephone",
        personal.phone.as_ref().map(|p| json!(p)),
    );
    put(
        &mut map,
        "address",
        personal.location.as_ref().map(|location| {
            json!({
                "@type": "PostalAddress",
                "addressLocality": location,
            })
        }),
    );
    Value::Object(map)
}

pub fn web_site(settings: &SiteSettings, ctx: &SeoContext) -> Value {
    let mut map = schema("WebSite");
    map.insert("name".to_string(), json!(settings.title));
    map.insert("description".to_string(), json!(settings.description));
    map.insert("url".to_string(), json!(ctx.site_url(Some(settings))));
    put(
        &mut map,
        "author",
        settings
            .author
            .as_ref()
            .map(|author| json!({ "@type": "Person", "name": author })),
    );
    Value::Object(map)
}

pub fn creative_work(
    project: &Project,
    settings: Option<&SiteSettings>,
    ctx: &SeoContext,
) -> Value {
    let site_url = ctx.site_url(settings);
    let mut map = schema("CreativeWork");
    map.insert("name".to_string(), json!(project.title));
    map.insert("description".to_string(), json!(project.description));
    map.insert(
        "url".to_string(),
        json!(project.live_url.clone().unwrap_or_else(|| format!(
            "{site_url}/projects/{}",
            project.slug.current
        ))),
    );
    put(
        &mut map,
        "image",
        image_url(
            ctx,
            project
                .main_image
                .as_ref()
                .and_then(|image| image.asset_id()),
        ),
    );
    put(
        &mut map,
        "dateCreated",
        project.start_date.map(|d| json!(d.to_string())),
    );
    put(
        &mut map,
        "dateModified",
        project
            .end_date
            .or(project.start_date)
            .map(|d| json!(d.to_string())),
    );
    put(
        &mut map,
        "keywords",
        if project.technologies.is_empty() {
            None
        } else {
            Some(json!(project
                .technologies
                .iter()
                .map(|tech| tech.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")))
        },
    );
    let author = settings
        .and_then(|s| s.author.as_deref())
        .unwrap_or("Portfolio Owner");
    map.insert(
        "author".to_string(),
        json!({ "@type": "Person", "name": author }),
    );
    Value::Object(map)
}

pub fn article(
    project: &Project,
    personal: Option<&PersonalInfo>,
    settings: Option<&SiteSettings>,
    ctx: &SeoContext,
) -> Value {
    let site_url = ctx.site_url(settings);
    let mut map = schema("Article");
    map.insert("headline".to_string(), json!(project.title));
    map.insert("description".to_string(), json!(project.description));
    put(
        &mut map,
        "image",
        image_url(
            ctx,
            project
                .main_image
                .as_ref()
                .and_then(|image| image.asset_id()),
        ),
    );
    put(
        &mut map,
        "datePublished",
        project.start_date.map(|d| json!(d.to_string())),
    );
    put(
        &mut map,
        "dateModified",
        project
            .end_date
            .or(project.start_date)
            .map(|d| json!(d.to_string())),
    );
    put(
        &mut map,
        "author",
        personal.map(|p| json!({ "@type": "Person", "name": p.name })),
    );
    put(
        &mut map,
        "publisher",
        settings.map(|s| {
            json!({
                "@type": "Organization",
                "name": s.title,
                "logo": {
                    "@type": "ImageObject",
                    "url": format!("{site_url}/logo.png"),
                },
            })
        }),
    );
    Value::Object(map)
}

/// `position` is 1-based, in input order.
pub fn breadcrumb_list(items: &[Crumb]) -> Value {
    let mut map = schema("BreadcrumbList");
    map.insert(
        "itemListElement".to_string(),
        json!(items
            .iter()
            .enumerate()
            .map(|(index, crumb)| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": crumb.name,
                    "item": crumb.url,
                })
            })
            .collect::<Vec<_>>()),
    );
    Value::Object(map)
}

pub fn organization(experience: &Experience, ctx: &SeoContext) -> Value {
    let mut map = schema("Organization");
    put(
        &mut map,
        "name",
        experience.company.as_ref().map(|c| json!(c)),
    );
    put(
        &mut map,
        "url",
        experience.company_website.as_ref().map(|u| json!(u)),
    );
    put(
        &mut map,
        "logo",
        image_url(
            ctx,
            experience
                .company_logo
                .as_ref()
                .and_then(|image| image.asset_id()),
        ),
    );
    Value::Object(map)
}

pub fn work_experience(
    experience: &Experience,
    personal: Option<&PersonalInfo>,
    ctx: &SeoContext,
) -> Value {
    let mut map = schema("WorkExperience");
    map.insert("name".to_string(), json!(experience.title));
    let description = blocks_to_text(&experience.description);
    put(
        &mut map,
        "description",
        (!description.is_empty()).then(|| json!(description)),
    );
    map.insert(
        "startDate".to_string(),
        json!(experience.start_date.to_string()),
    );
    // Current positions carry no endDate, even when one is stored.
    put(
        &mut map,
        "endDate",
        if experience.is_current {
            None
        } else {
            experience.end_date.map(|d| json!(d.to_string()))
        },
    );
    map.insert("employer".to_string(), organization(experience, ctx));
    put(
        &mut map,
        "employee",
        personal.map(|p| json!({ "@type": "Person", "name": p.name })),
    );
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::image::ImageUrlBuilder;
    use crate::models::experience::ExperienceType;
    use crate::models::Slug;
    use chrono::NaiveDate;

    fn images() -> ImageUrlBuilder {
        ImageUrlBuilder::new("abc123", "production")
    }

    fn ctx<'a>(images: &'a ImageUrlBuilder) -> SeoContext<'a> {
        SeoContext {
            fallback_site_url: "https://example.com",
            images,
        }
    }

    fn personal() -> PersonalInfo {
        PersonalInfo {
            id: "p".to_string(),
            name: "Jane Doe".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            title: Some("Full-Stack Developer".to_string()),
            roles: Vec::new(),
            tagline: None,
            bio: None,
            profile_image: None,
            resume_file: None,
            location: None,
            availability: None,
            years_of_experience: None,
            projects_completed: None,
            email: None,
            phone: None,
            social_links: Vec::new(),
        }
    }

    fn experience() -> Experience {
        Experience {
            id: "e".to_string(),
            title: "Backend Engineer".to_string(),
            company: Some("Acme".to_string()),
            company_website: None,
            company_logo: None,
            kind: ExperienceType::Fulltime,
            location: None,
            start_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            is_current: false,
            description: Vec::new(),
            responsibilities: Vec::new(),
            achievements: Vec::new(),
            technologies: Vec::new(),
            related_projects: Vec::new(),
            order: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_breadcrumb_positions_are_one_based() {
        let value = breadcrumb_list(&[
            Crumb::new("Home", "https://x/"),
            Crumb::new("Projects", "https://x/projects"),
        ]);
        let items = value["itemListElement"].as_array().unwrap();
        assert_eq!(items[0]["@type"], "ListItem");
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["name"], "Projects");
    }

    #[test]
    fn test_person_omits_absent_fields() {
        let images = images();
        let value = person(&personal(), None, &ctx(&images));
        let object = value.as_object().unwrap();
        assert_eq!(object["name"], "Jane Doe");
        assert_eq!(object["jobTitle"], "Full-Stack Developer");
        assert!(!object.contains_key("email"));
        assert!(!object.contains_key("telephone"));
        assert!(!object.contains_key("address"));
        assert!(!object.contains_key("image"));
        // Present-but-empty list is intentional for sameAs.
        assert_eq!(object["sameAs"], json!([]));
    }

    #[test]
    fn test_work_experience_omits_end_date_when_current() {
        let images = images();
        let mut exp = experience();
        exp.is_current = true;
        let value = work_experience(&exp, None, &ctx(&images));
        let object = value.as_object().unwrap();
        assert_eq!(object["startDate"], "2022-03-01");
        assert!(!object.contains_key("endDate"));
        assert_eq!(object["employer"]["name"], "Acme");
    }

    #[test]
    fn test_creative_work_url_falls_back_to_project_page() {
        let images = images();
        let project = Project {
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
        };
        let value = creative_work(&project, None, &ctx(&images));
        assert_eq!(value["url"], "https://example.com/projects/crate-tracker");
        assert!(!value.as_object().unwrap().contains_key("keywords"));
        assert_eq!(value["author"]["name"], "Portfolio Owner");
    }
}
