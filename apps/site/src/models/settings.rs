use serde::Deserialize;

use super::rich_text::Block;
use super::{default_true, null_as_default, null_as_true, ImageRef};

/// Singleton document. Site-wide titles, SEO defaults, and feature flags.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    pub author: Option<String>,
    pub site_url: Option<String>,
    pub og_image: Option<ImageRef>,
    pub twitter_handle: Option<String>,
    pub google_analytics_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enable_blog: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enable_dark_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ContactAvailability {
    Available,
    Partial,
    Unavailable,
}

impl From<String> for ContactAvailability {
    fn from(value: String) -> Self {
        match value.as_str() {
            "available" => ContactAvailability::Available,
            "unavailable" => ContactAvailability::Unavailable,
            _ => ContactAvailability::Partial,
        }
    }
}

impl ContactAvailability {
    pub fn label(&self) -> &'static str {
        match self {
            ContactAvailability::Available => "Available for new projects",
            ContactAvailability::Partial => "Partially available",
            ContactAvailability::Unavailable => "Not available",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PreferredContactMethod {
    Email,
    Phone,
    Form,
}

impl From<String> for PreferredContactMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "phone" => PreferredContactMethod::Phone,
            "form" => PreferredContactMethod::Form,
            _ => PreferredContactMethod::Email,
        }
    }
}

impl PreferredContactMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PreferredContactMethod::Email => "Email",
            PreferredContactMethod::Phone => "Phone",
            PreferredContactMethod::Form => "Contact form",
        }
    }
}

/// Singleton document. Copy and configuration for the contact section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<Vec<Block>>,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub availability: Option<ContactAvailability>,
    pub preferred_contact_method: Option<PreferredContactMethod>,
    pub response_time: Option<String>,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub form_enabled: bool,
    pub form_success_message: Option<String>,
    pub form_error_message: Option<String>,
}
