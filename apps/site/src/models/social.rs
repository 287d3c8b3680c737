use serde::Deserialize;

use super::{default_true, null_as_default, null_as_true, ImageRef, Orderable};

/// Closed platform list from the Content Store's social-link schema.
/// Anything the site does not recognize lands on `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Platform {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Tiktok,
    Medium,
    Devto,
    Hashnode,
    Stackoverflow,
    Codepen,
    Dribbble,
    Behance,
    Discord,
    Slack,
    Email,
    Website,
    Rss,
    Other,
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "github" => Platform::Github,
            "linkedin" => Platform::Linkedin,
            "twitter" => Platform::Twitter,
            "instagram" => Platform::Instagram,
            "facebook" => Platform::Facebook,
            "youtube" => Platform::Youtube,
            "tiktok" => Platform::Tiktok,
            "medium" => Platform::Medium,
            "devto" => Platform::Devto,
            "hashnode" => Platform::Hashnode,
            "stackoverflow" => Platform::Stackoverflow,
            "codepen" => Platform::Codepen,
            "dribbble" => Platform::Dribbble,
            "behance" => Platform::Behance,
            "discord" => Platform::Discord,
            "slack" => Platform::Slack,
            "email" => Platform::Email,
            "website" => Platform::Website,
            "rss" => Platform::Rss,
            _ => Platform::Other,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Other
    }
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Github => "GitHub",
            Platform::Linkedin => "LinkedIn",
            Platform::Twitter => "Twitter/X",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Youtube => "YouTube",
            Platform::Tiktok => "TikTok",
            Platform::Medium => "Medium",
            Platform::Devto => "Dev.to",
            Platform::Hashnode => "Hashnode",
            Platform::Stackoverflow => "Stack Overflow",
            Platform::Codepen => "CodePen",
            Platform::Dribbble => "Dribbble",
            Platform::Behance => "Behance",
            Platform::Discord => "Discord",
            Platform::Slack => "Slack",
            Platform::Email => "Email",
            Platform::Website => "Website",
            Platform::Rss => "RSS",
            Platform::Other => "Link",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: Platform,
    pub url: String,
    pub username: Option<String>,
    pub display_text: Option<String>,
    pub icon: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_in_header: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_in_footer: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_in_hero: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_in_contact: bool,
}

impl SocialLink {
    /// Display text precedence: explicit text, then username, then the
    /// platform name.
    pub fn display_label(&self) -> &str {
        self.display_text
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or_else(|| self.platform.label())
    }
}

impl Orderable for SocialLink {
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

    fn link() -> SocialLink {
        SocialLink {
            id: "sl-1".to_string(),
            platform: Platform::Github,
            url: "https://github.com/someone".to_string(),
            username: None,
            display_text: None,
            icon: None,
            order: 0,
            is_active: true,
            show_in_header: false,
            show_in_footer: false,
            show_in_hero: true,
            show_in_contact: false,
        }
    }

    #[test]
    fn test_display_label_precedence() {
        let mut l = link();
        assert_eq!(l.display_label(), "GitHub");
        l.username = Some("someone".to_string());
        assert_eq!(l.display_label(), "someone");
        l.display_text = Some("My code".to_string());
        assert_eq!(l.display_label(), "My code");
    }

    #[test]
    fn test_unknown_platform_is_other() {
        assert_eq!(Platform::from("myspace".to_string()), Platform::Other);
    }
}
