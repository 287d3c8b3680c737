use chrono::NaiveDate;

use crate::models::experience::Experience;
use crate::render::rich_text::render_blocks;
use crate::render::{duration_between, escape, format_month_year};

pub fn render(experiences: &[Experience], today: NaiveDate) -> String {
    let mut html = String::from("<section id=\"experience\" class=\"experience\">\n<h2>Experience</h2>\n");
    html.push_str(
        "<p class=\"section-lead\">My journey through practical projects, freelance work, and \
         continuous learning</p>\n",
    );

    if experiences.is_empty() {
        html.push_str("<p class=\"empty-state\">Experience entries are on their way.</p>\n");
    } else {
        html.push_str("<ol class=\"timeline\">\n");
        for experience in experiences {
            html.push_str(&entry(experience, today));
        }
        html.push_str("</ol>\n");
    }

    html.push_str("</section>\n");
    html
}

fn entry(experience: &Experience, today: NaiveDate) -> String {
    let mut html = String::from("<li class=\"timeline-entry\">\n");

    html.push_str(&format!("<h3>{}</h3>\n", escape(&experience.title)));
    if let Some(company) = &experience.company {
        match &experience.company_website {
            Some(url) => html.push_str(&format!(
                "<p class=\"company\"><a href=\"{}\" rel=\"noopener noreferrer\">{}</a></p>\n",
                escape(url),
                escape(company)
            )),
            None => html.push_str(&format!("<p class=\"company\">{}</p>\n", escape(company))),
        }
    }

    html.push_str(&format!(
        "<span class=\"type-badge\">{}</span>\n",
        experience.kind.label()
    ));

    let end_label = if experience.is_current || experience.end_date.is_none() {
        "Present".to_string()
    } else {
        format_month_year(experience.end_date.unwrap_or(today))
    };
    html.push_str(&format!(
        "<p class=\"date-range\">{} – {end_label} <span class=\"duration\">({})</span></p>\n",
        format_month_year(experience.start_date),
        duration_between(
            experience.start_date,
            if experience.is_current {
                None
            } else {
                experience.end_date
            },
            today
        )
    ));

    if let Some(location) = &experience.location {
        html.push_str(&format!("<p class=\"location\">{}</p>\n", escape(location)));
    }

    if !experience.description.is_empty() {
        html.push_str("<div class=\"entry-description\">\n");
        html.push_str(&render_blocks(&experience.description));
        html.push_str("</div>\n");
    }

    if !experience.responsibilities.is_empty() {
        html.push_str("<h4>Responsibilities</h4>\n<ul>\n");
        for responsibility in &experience.responsibilities {
            html.push_str(&format!("<li>{}</li>\n", escape(responsibility)));
        }
        html.push_str("</ul>\n");
    }

    if !experience.achievements.is_empty() {
        html.push_str("<h4>Key Achievements</h4>\n<ul>\n");
        for achievement in &experience.achievements {
            html.push_str(&format!("<li>{}</li>\n", escape(achievement)));
        }
        html.push_str("</ul>\n");
    }

    if !experience.technologies.is_empty() {
        html.push_str("<h4>Technologies Used</h4>\n<ul class=\"tech-tags\">\n");
        for tech in &experience.technologies {
            html.push_str(&format!("<li>{}</li>\n", escape(&tech.name)));
        }
        html.push_str("</ul>\n");
    }

    if !experience.related_projects.is_empty() {
        html.push_str("<p class=\"related-projects\">Related: ");
        let links: Vec<String> = experience
            .related_projects
            .iter()
            .map(|project| {
                format!(
                    "<a href=\"/projects/{}\">{}</a>",
                    escape(&project.slug.current),
                    escape(&project.title)
                )
            })
            .collect();
        html.push_str(&links.join(", "));
        html.push_str("</p>\n");
    }

    html.push_str("</li>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::experience::ExperienceType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn experience() -> Experience {
        Experience {
            id: "e1".to_string(),
            title: "Backend Engineer".to_string(),
            company: Some("Acme".to_string()),
            company_website: None,
            company_logo: None,
            kind: ExperienceType::Fulltime,
            location: None,
            start_date: date(2022, 1, 1),
            end_date: None,
            is_current: true,
            description: Vec::new(),
            responsibilities: Vec::new(),
            achievements: vec!["Cut p99 latency in half".to_string()],
            technologies: Vec::new(),
            related_projects: Vec::new(),
            order: 0,
            is_active: true,
        }
    }

    #[test]
    fn test_current_position_reads_present() {
        let html = render(&[experience()], date(2024, 4, 10));
        assert!(html.contains("Jan 2022 – Present"));
        assert!(html.contains("(2 years 3 months)"));
        assert!(html.contains("Full-time"));
        assert!(html.contains("Cut p99 latency in half"));
    }

    #[test]
    fn test_current_flag_overrides_stored_end_date() {
        let mut exp = experience();
        exp.end_date = Some(date(2023, 1, 1));
        let html = render(&[exp], date(2024, 4, 10));
        assert!(html.contains("Present"));
        assert!(html.contains("(2 years 3 months)"));
    }
}
