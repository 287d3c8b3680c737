use crate::models::skill::{Skill, SkillCategory};
use crate::render::escape;

pub fn render(categories: &[SkillCategory], skills: &[Skill]) -> String {
    let mut html = String::from("<section id=\"skills\" class=\"skills\">\n<h2>Skills &amp; Technologies</h2>\n");
    html.push_str(
        "<p class=\"section-lead\">A comprehensive overview of my technical expertise and the \
         technologies I work with</p>\n",
    );

    for category in categories {
        let members: Vec<&Skill> = skills
            .iter()
            .filter(|skill| {
                skill
                    .category
                    .as_ref()
                    .is_some_and(|c| c.id == category.id)
            })
            .collect();
        if members.is_empty() {
            continue;
        }
        html.push_str(&render_group(
            &category.name,
            category.color.as_str(),
            category.description.as_deref(),
            &members,
        ));
    }

    // Skills whose category reference dangles still render, under a
    // neutral group, rather than disappearing from the page.
    let orphans: Vec<&Skill> = skills
        .iter()
        .filter(|skill| {
            skill
                .category
                .as_ref()
                .map_or(true, |c| !categories.iter().any(|cat| cat.id == c.id))
        })
        .collect();
    if !orphans.is_empty() {
        html.push_str(&render_group("Other", "gray", None, &orphans));
    }

    html.push_str("</section>\n");
    html
}

fn render_group(
    name: &str,
    color: &str,
    description: Option<&str>,
    skills: &[&Skill],
) -> String {
    let mut html = format!(
        "<div class=\"skill-group color-{color}\">\n<h3>{}</h3>\n",
        escape(name)
    );
    if let Some(description) = description {
        html.push_str(&format!("<p>{}</p>\n", escape(description)));
    }
    html.push_str("<ul class=\"skill-list\">\n");
    for skill in skills {
        let label = skill.proficiency_label();
        let highlighted = if skill.is_highlighted { " highlighted" } else { "" };
        html.push_str(&format!("<li class=\"skill{highlighted}\">\n"));
        if let Some(icon) = skill.icon.as_ref().and_then(|i| i.asset.as_ref()) {
            html.push_str(&format!(
                "<img class=\"skill-icon\" src=\"{}\" alt=\"\" loading=\"lazy\">\n",
                escape(&icon.url)
            ));
        }
        html.push_str(&format!(
            "<span class=\"skill-name\">{}</span>\n",
            escape(&skill.name)
        ));
        if let Some(years) = skill.years_of_experience {
            html.push_str(&format!(
                "<span class=\"skill-years\">{}+ yrs</span>\n",
                years.floor() as u32
            ));
        }
        html.push_str(&format!(
            "<span class=\"skill-level\">{}</span>\n\
             <div class=\"skill-bar\"><div class=\"skill-bar-fill\" style=\"width:{}%\"></div></div>\n",
            label.as_str(),
            skill.proficiency.min(100)
        ));
        if let Some(description) = &skill.description {
            html.push_str(&format!(
                "<span class=\"skill-note\">{}</span>\n",
                escape(description)
            ));
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skill::{CategoryColor, CategoryRef};
    use crate::models::Slug;

    fn category(id: &str, name: &str) -> SkillCategory {
        SkillCategory {
            id: id.to_string(),
            name: name.to_string(),
            slug: Slug {
                current: name.to_lowercase(),
            },
            description: None,
            color: CategoryColor::Blue,
            order: 0,
            is_active: true,
        }
    }

    fn skill(name: &str, category_id: Option<&str>, proficiency: u8) -> Skill {
        Skill {
            id: format!("skill-{name}"),
            name: name.to_string(),
            category: category_id.map(|id| CategoryRef {
                id: id.to_string(),
                name: "X".to_string(),
                slug: None,
                color: CategoryColor::Gray,
            }),
            proficiency,
            icon: None,
            description: None,
            years_of_experience: None,
            is_highlighted: false,
            order: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_skills_group_under_their_category() {
        let html = render(
            &[category("c1", "Backend")],
            &[skill("Rust", Some("c1"), 90)],
        );
        assert!(html.contains("<h3>Backend</h3>"));
        assert!(html.contains("Rust"));
        assert!(html.contains("expert"));
        assert!(html.contains("width:90%"));
    }

    #[test]
    fn test_orphan_skills_render_under_other() {
        let html = render(&[category("c1", "Backend")], &[skill("Figma", None, 50)]);
        assert!(html.contains("<h3>Other</h3>"));
        assert!(html.contains("Figma"));
        assert!(html.contains("learning"));
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        let html = render(&[category("c1", "Backend")], &[]);
        assert!(!html.contains("<h3>Backend</h3>"));
    }
}
