use chrono::NaiveDate;
use serde::Deserialize;

use super::rich_text::Block;
use super::skill::TechRef;
use super::{default_true, null_as_default, null_as_true, ImageRef, Orderable, Slug};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ExperienceType {
    Fulltime,
    Parttime,
    Freelance,
    Contract,
    Internship,
    Project,
    Personal,
    Volunteer,
}

impl From<String> for ExperienceType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "fulltime" => ExperienceType::Fulltime,
            "parttime" => ExperienceType::Parttime,
            "freelance" => ExperienceType::Freelance,
            "contract" => ExperienceType::Contract,
            "internship" => ExperienceType::Internship,
            "personal" => ExperienceType::Personal,
            "volunteer" => ExperienceType::Volunteer,
            _ => ExperienceType::Project,
        }
    }
}

impl Default for ExperienceType {
    fn default() -> Self {
        ExperienceType::Project
    }
}

impl ExperienceType {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceType::Fulltime => "Full-time",
            ExperienceType::Parttime => "Part-time",
            ExperienceType::Freelance => "Freelance",
            ExperienceType::Contract => "Contract",
            ExperienceType::Internship => "Internship",
            ExperienceType::Project => "Project",
            ExperienceType::Personal => "Personal",
            ExperienceType::Volunteer => "Volunteer",
        }
    }
}

/// Project fields as projected into an experience's `relatedProjects`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectStub {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub company_website: Option<String>,
    pub company_logo: Option<ImageRef>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: ExperienceType,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_current: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: Vec<Block>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub responsibilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievements: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<TechRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_projects: Vec<ProjectStub>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
}

impl Orderable for Experience {
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
    fn test_unknown_type_defaults_to_project() {
        assert_eq!(
            ExperienceType::from("apprenticeship".to_string()),
            ExperienceType::Project
        );
    }
}
