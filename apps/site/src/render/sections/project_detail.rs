use chrono::NaiveDate;

use crate::models::project::Project;
use crate::render::rich_text::render_blocks;
use crate::render::{duration_between, escape, format_month_year};

pub fn render(project: &Project, today: NaiveDate) -> String {
    let mut html = String::from("<article class=\"project-detail\">\n");

    html.push_str(&format!(
        "<nav class=\"breadcrumbs\"><a href=\"/\">Home</a> / <a href=\"/projects\">Projects</a> / \
         <span>{}</span></nav>\n",
        escape(&project.title)
    ));

    html.push_str(&format!("<h1>{}</h1>\n", escape(&project.title)));
    html.push_str(&format!(
        "<span class=\"project-category\">{}</span>\n",
        project.category.label()
    ));
    if let Some(status) = project.status {
        html.push_str(&format!(
            "<span class=\"project-status\">{}</span>\n",
            status.label()
        ));
    }
    html.push_str(&format!("<p class=\"section-lead\">{}</p>\n", escape(&project.description)));

    if let Some(image) = project.main_image.as_ref().and_then(|i| i.asset.as_ref()) {
        let alt = project
            .main_image
            .as_ref()
            .and_then(|i| i.alt.as_deref())
            .unwrap_or(&project.title);
        html.push_str(&format!(
            "<img class=\"project-hero\" src=\"{}\" alt=\"{}\">\n",
            escape(&image.url),
            escape(alt)
        ));
    }

    if let Some(blocks) = project.long_description.as_deref() {
        html.push_str("<div class=\"project-body\">\n");
        html.push_str(&render_blocks(blocks));
        html.push_str("</div>\n");
    }

    if !project.features.is_empty() {
        html.push_str("<h3>Key Features</h3>\n<ul class=\"feature-list\">\n");
        for feature in &project.features {
            html.push_str(&format!("<li>{}</li>\n", escape(feature)));
        }
        html.push_str("</ul>\n");
    }

    for (heading, blocks) in [
        ("Challenges", project.challenges.as_deref()),
        ("Solutions", project.solutions.as_deref()),
        ("Results", project.results.as_deref()),
    ] {
        if let Some(blocks) = blocks.filter(|b| !b.is_empty()) {
            html.push_str(&format!("<h3>{heading}</h3>\n"));
            html.push_str(&render_blocks(blocks));
        }
    }

    if !project.gallery.is_empty() {
        html.push_str("<div class=\"gallery\">\n");
        for image in &project.gallery {
            if let Some(asset) = &image.asset {
                let alt = image.alt.as_deref().unwrap_or(&project.title);
                html.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
                    escape(&asset.url),
                    escape(alt)
                ));
            }
        }
        html.push_str("</div>\n");
    }

    if !project.technologies.is_empty() {
        html.push_str("<h3>Technologies</h3>\n<ul class=\"tech-tags\">\n");
        for tech in &project.technologies {
            html.push_str(&format!("<li>{}</li>\n", escape(&tech.name)));
        }
        html.push_str("</ul>\n");
    }

    html.push_str(&facts(project, today));

    if let Some(testimonial) = &project.testimonial {
        html.push_str(&format!(
            "<blockquote class=\"testimonial\">\n<p>{}</p>\n<cite>{}{}</cite>\n</blockquote>\n",
            escape(&testimonial.quote),
            escape(&testimonial.author),
            testimonial
                .role
                .as_deref()
                .map(|role| format!(", {}", escape(role)))
                .unwrap_or_default()
        ));
    }

    let mut links = Vec::new();
    if let Some(url) = &project.live_url {
        links.push(("View Live", url));
    }
    if let Some(url) = &project.github_url {
        links.push(("Source Code", url));
    }
    if let Some(url) = &project.demo_url {
        links.push(("Demo", url));
    }
    if let Some(url) = &project.case_study_url {
        links.push(("Case Study", url));
    }
    if !links.is_empty() {
        html.push_str("<p class=\"project-links\">\n");
        for (label, url) in links {
            html.push_str(&format!(
                "<a class=\"button\" href=\"{}\" rel=\"noopener noreferrer\">{label}</a>\n",
                escape(url)
            ));
        }
        html.push_str("</p>\n");
    }

    html.push_str("</article>\n");
    html
}

fn facts(project: &Project, today: NaiveDate) -> String {
    let mut rows = Vec::new();
    if let Some(client) = &project.client {
        rows.push(("Client", escape(client)));
    }
    if let Some(role) = &project.my_role {
        rows.push(("Role", escape(role)));
    }
    if let Some(team_size) = project.team_size {
        rows.push(("Team", format!("{team_size} people")));
    }
    if let Some(start) = project.start_date {
        let range = match project.end_date {
            Some(end) => format!("{} – {}", format_month_year(start), format_month_year(end)),
            None => format!("{} – Present", format_month_year(start)),
        };
        rows.push(("Timeline", range));
        rows.push((
            "Duration",
            duration_between(start, project.end_date, today),
        ));
    }
    if let Some(experience) = &project.related_experience {
        let label = match &experience.company {
            Some(company) => format!("{} at {}", escape(&experience.title), escape(company)),
            None => escape(&experience.title),
        };
        rows.push(("Built during", label));
    }

    if rows.is_empty() {
        return String::new();
    }
    let mut html = String::from("<dl class=\"project-facts\">\n");
    for (term, detail) in rows {
        html.push_str(&format!("<dt>{term}</dt><dd>{detail}</dd>\n"));
    }
    html.push_str("</dl>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slug;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
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
            features: vec!["Fast search".to_string()],
            challenges: None,
            solutions: None,
            results: None,
            live_url: None,
            github_url: Some("https://github.com/x/crate-tracker".to_string()),
            demo_url: None,
            case_study_url: None,
            start_date: Some(date(2023, 1, 15)),
            end_date: Some(date(2023, 7, 15)),
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
    fn test_detail_includes_duration_and_timeline() {
        let html = render(&project(), date(2025, 1, 1));
        assert!(html.contains("Jan 2023 – Jul 2023"));
        assert!(html.contains("6 months"));
        assert!(html.contains("Fast search"));
        assert!(html.contains("Source Code"));
    }

    #[test]
    fn test_breadcrumb_trail_present() {
        let html = render(&project(), date(2025, 1, 1));
        assert!(html.contains("<a href=\"/projects\">Projects</a>"));
        assert!(html.contains("<span>Crate Tracker</span>"));
    }
}
