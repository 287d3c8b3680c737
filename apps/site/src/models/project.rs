use chrono::NaiveDate;
use serde::Deserialize;

use super::rich_text::Block;
use super::skill::TechRef;
use super::{default_true, null_as_default, null_as_true, ImageRef, Orderable, Slug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ProjectCategory {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Data,
    Devops,
    Ml,
    Design,
    Other,
}

impl From<String> for ProjectCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "frontend" => ProjectCategory::Frontend,
            "backend" => ProjectCategory::Backend,
            "fullstack" => ProjectCategory::Fullstack,
            "mobile" => ProjectCategory::Mobile,
            "data" => ProjectCategory::Data,
            "devops" => ProjectCategory::Devops,
            "ml" => ProjectCategory::Ml,
            "design" => ProjectCategory::Design,
            _ => ProjectCategory::Other,
        }
    }
}

impl Default for ProjectCategory {
    fn default() -> Self {
        ProjectCategory::Other
    }
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "Frontend",
            ProjectCategory::Backend => "Backend",
            ProjectCategory::Fullstack => "Full-Stack",
            ProjectCategory::Mobile => "Mobile",
            ProjectCategory::Data => "Data Engineering",
            ProjectCategory::Devops => "DevOps",
            ProjectCategory::Ml => "Machine Learning",
            ProjectCategory::Design => "Design",
            ProjectCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    OnHold,
    Archived,
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "in-progress" => ProjectStatus::InProgress,
            "on-hold" => ProjectStatus::OnHold,
            "archived" => ProjectStatus::Archived,
            _ => ProjectStatus::Completed,
        }
    }
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: Option<String>,
}

/// Experience fields as projected into a project's `relatedExperience`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceStub {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub description: String,
    pub long_description: Option<Vec<Block>>,
    pub main_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: ProjectCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<TechRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    pub challenges: Option<Vec<Block>>,
    pub solutions: Option<Vec<Block>>,
    pub results: Option<Vec<Block>>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub case_study_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub client: Option<String>,
    pub team_size: Option<u32>,
    pub my_role: Option<String>,
    pub status: Option<ProjectStatus>,
    pub testimonial: Option<Testimonial>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
    pub related_experience: Option<ExperienceStub>,
}

impl Orderable for Project {
    fn display_order(&self) -> i64 {
        self.order
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_defaults_to_other() {
        assert_eq!(
            ProjectCategory::from("blockchain".to_string()),
            ProjectCategory::Other
        );
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            ProjectStatus::from("in-progress".to_string()),
            ProjectStatus::InProgress
        );
        assert_eq!(
            ProjectStatus::from("on-hold".to_string()),
            ProjectStatus::OnHold
        );
    }

    /// Projections emit explicit `null` for fields a document lacks;
    /// a sparse published project must still deserialize.
    #[test]
    fn test_sparse_document_with_nulls_deserializes() {
        let json = r#"{
            "_id": "p1",
            "title": "Crate Tracker",
            "slug": { "current": "crate-tracker" },
            "description": "Tracks crates",
            "longDescription": null,
            "mainImage": null,
            "gallery": null,
            "category": null,
            "technologies": null,
            "features": null,
            "liveUrl": null,
            "startDate": null,
            "teamSize": null,
            "status": null,
            "isFeatured": null,
            "order": null,
            "isActive": null,
            "relatedExperience": null
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.category, ProjectCategory::Other);
        assert!(project.technologies.is_empty());
        assert!(!project.is_featured);
        assert_eq!(project.order, 0);
        assert!(project.is_active);
        assert!(project.status.is_none());
    }
}
