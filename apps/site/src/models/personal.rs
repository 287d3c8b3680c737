use serde::Deserialize;

use super::rich_text::Block;
use super::social::SocialLink;
use super::{null_as_default, FileRef, ImageRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
}

impl From<String> for Availability {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => Availability::Available,
            "busy" => Availability::Busy,
            _ => Availability::Unavailable,
        }
    }
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::Available => "Available for work",
            Availability::Busy => "Currently busy",
            Availability::Unavailable => "Not available",
        }
    }
}

/// Singleton document. At most one instance exists in the Content Store;
/// absence is valid and pages render fallback copy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
    pub tagline: Option<String>,
    pub bio: Option<Vec<Block>>,
    pub profile_image: Option<ImageRef>,
    pub resume_file: Option<FileRef>,
    pub location: Option<String>,
    pub availability: Option<Availability>,
    pub years_of_experience: Option<u32>,
    pub projects_completed: Option<u32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: Vec<SocialLink>,
}
