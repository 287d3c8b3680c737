use crate::models::personal::PersonalInfo;
use crate::render::escape;

pub fn render(personal: Option<&PersonalInfo>) -> String {
    let mut html = String::from("<section id=\"home\" class=\"hero\">\n");

    if let Some(availability) = personal.and_then(|p| p.availability) {
        html.push_str(&format!(
            "<span class=\"availability-badge\">{}</span>\n",
            availability.label()
        ));
    }

    let name = personal.map(|p| p.name.as_str()).unwrap_or("Welcome");
    html.push_str(&format!("<h1>Hi, I&#39;m {}</h1>\n", escape(name)));

    if let Some(p) = personal {
        if !p.roles.is_empty() {
            html.push_str(&format!(
                "<p class=\"hero-roles\">{}</p>\n",
                escape(&p.roles.join(" · "))
            ));
        }
        if let Some(tagline) = &p.tagline {
            html.push_str(&format!("<p class=\"hero-tagline\">{}</p>\n", escape(tagline)));
        }
        if let Some(image) = p.profile_image.as_ref().and_then(|i| i.asset.as_ref()) {
            let alt = p
                .profile_image
                .as_ref()
                .and_then(|i| i.alt.as_deref())
                .unwrap_or(&p.name);
            html.push_str(&format!(
                "<img class=\"hero-portrait\" src=\"{}\" alt=\"{}\">\n",
                escape(&image.url),
                escape(alt)
            ));
        }

        let mut stats = Vec::new();
        if let Some(years) = p.years_of_experience {
            stats.push(format!("<li>{years}+ Years Experience</li>"));
        }
        if let Some(projects) = p.projects_completed {
            stats.push(format!("<li>{projects}+ Projects Completed</li>"));
        }
        if !stats.is_empty() {
            html.push_str(&format!(
                "<ul class=\"hero-stats\">\n{}\n</ul>\n",
                stats.join("\n")
            ));
        }

        if !p.social_links.is_empty() {
            html.push_str("<ul class=\"hero-social\">\n");
            for link in &p.social_links {
                html.push_str(&format!(
                    "<li><a href=\"{}\" rel=\"noopener noreferrer\">{}</a></li>\n",
                    escape(&link.url),
                    escape(link.display_label())
                ));
            }
            html.push_str("</ul>\n");
        }
    }

    html.push_str(
        "<div class=\"hero-actions\">\n\
         <a class=\"button\" href=\"/projects\">View My Work</a>\n\
         <a class=\"button secondary\" href=\"/contact\">Get In Touch</a>\n\
         </div>\n",
    );
    html.push_str("</section>\n");
    html
}
