use serde::Deserialize;

use super::{default_true, null_as_default, null_as_true, ImageRef, Orderable, Slug};

/// Fixed badge palette for skill categories. Unrecognized values render
/// as the neutral gray rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CategoryColor {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Indigo,
    Gray,
}

impl From<String> for CategoryColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "blue" => CategoryColor::Blue,
            "green" => CategoryColor::Green,
            "purple" => CategoryColor::Purple,
            "orange" => CategoryColor::Orange,
            "red" => CategoryColor::Red,
            "indigo" => CategoryColor::Indigo,
            _ => CategoryColor::Gray,
        }
    }
}

impl Default for CategoryColor {
    fn default() -> Self {
        CategoryColor::Gray
    }
}

impl CategoryColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryColor::Blue => "blue",
            CategoryColor::Green => "green",
            CategoryColor::Purple => "purple",
            CategoryColor::Orange => "orange",
            CategoryColor::Red => "red",
            CategoryColor::Indigo => "indigo",
            CategoryColor::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: CategoryColor,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
}

impl Orderable for SkillCategory {
    fn display_order(&self) -> i64 {
        self.order
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Category fields as projected into a skill or technology reference.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Option<Slug>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: CategoryColor,
}

/// Derived banding over the 0–100 proficiency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProficiencyLabel {
    Learning,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLabel {
    /// expert ≥ 85, advanced 70–84, intermediate 60–69, learning < 60.
    pub fn for_proficiency(proficiency: u8) -> Self {
        match proficiency {
            85.. => ProficiencyLabel::Expert,
            70..=84 => ProficiencyLabel::Advanced,
            60..=69 => ProficiencyLabel::Intermediate,
            _ => ProficiencyLabel::Learning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLabel::Learning => "learning",
            ProficiencyLabel::Intermediate => "intermediate",
            ProficiencyLabel::Advanced => "advanced",
            ProficiencyLabel::Expert => "expert",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: Option<CategoryRef>,
    pub proficiency: u8,
    pub icon: Option<ImageRef>,
    pub description: Option<String>,
    pub years_of_experience: Option<f32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_highlighted: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
}

impl Skill {
    /// Banding is derived from the number; the store's copy of the label
    /// can lag edits to `proficiency`.
    pub fn proficiency_label(&self) -> ProficiencyLabel {
        ProficiencyLabel::for_proficiency(self.proficiency)
    }
}

impl Orderable for Skill {
    fn display_order(&self) -> i64 {
        self.order
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Skill fields as projected into project/experience technology lists.
#[derive(Debug, Clone, Deserialize)]
pub struct TechRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: Option<CategoryRef>,
    pub proficiency: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banding_boundaries() {
        assert_eq!(
            ProficiencyLabel::for_proficiency(0),
            ProficiencyLabel::Learning
        );
        assert_eq!(
            ProficiencyLabel::for_proficiency(59),
            ProficiencyLabel::Learning
        );
        assert_eq!(
            ProficiencyLabel::for_proficiency(60),
            ProficiencyLabel::Intermediate
        );
        assert_eq!(
            ProficiencyLabel::for_proficiency(69),
            ProficiencyLabel::Intermediate
        );
        assert_eq!(
            ProficiencyLabel::for_proficiency(70),
            ProficiencyLabel::Advanced
        );
        assert_eq!(
            ProficiencyLabel::for_proficiency(84),
            ProficiencyLabel::Advanced
        );
        assert_eq!(
            ProficiencyLabel::for_proficiency(85),
            ProficiencyLabel::Expert
        );
        assert_eq!(
            ProficiencyLabel::for_proficiency(100),
            ProficiencyLabel::Expert
        );
    }

    #[test]
    fn test_unknown_color_defaults_to_gray() {
        assert_eq!(
            CategoryColor::from("magenta".to_string()),
            CategoryColor::Gray
        );
    }
}
