use crate::models::project::Project;
use crate::render::escape;

pub fn render(projects: &[Project]) -> String {
    let mut html = String::from("<section id=\"projects\" class=\"projects\">\n<h2>Projects</h2>\n");
    html.push_str(
        "<p class=\"section-lead\">A selection of work spanning frontend, backend, and \
         everything in between</p>\n",
    );

    if projects.is_empty() {
        html.push_str("<p class=\"empty-state\">Projects are being curated. Check back soon.</p>\n");
    } else {
        html.push_str("<div class=\"project-grid\">\n");
        for project in projects {
            html.push_str(&card(project));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</section>\n");
    html
}

fn card(project: &Project) -> String {
    let mut html = String::from("<article class=\"project-card\">\n");
    if project.is_featured {
        html.push_str("<span class=\"featured-badge\">Featured</span>\n");
    }
    if let Some(image) = project.main_image.as_ref().and_then(|i| i.asset.as_ref()) {
        let alt = project
            .main_image
            .as_ref()
            .and_then(|i| i.alt.as_deref())
            .unwrap_or(&project.title);
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">\n",
            escape(&image.url),
            escape(alt)
        ));
    }
    html.push_str(&format!(
        "<h3><a href=\"/projects/{}\">{}</a></h3>\n",
        escape(&project.slug.current),
        escape(&project.title)
    ));
    html.push_str(&format!(
        "<span class=\"project-category\">{}</span>\n",
        project.category.label()
    ));
    html.push_str(&format!("<p>{}</p>\n", escape(&project.description)));

    if !project.technologies.is_empty() {
        html.push_str("<ul class=\"tech-tags\">\n");
        for tech in &project.technologies {
            html.push_str(&format!("<li>{}</li>\n", escape(&tech.name)));
        }
        html.push_str("</ul>\n");
    }

    let mut links = Vec::new();
    if let Some(url) = &project.live_url {
        links.push(("Live", url));
    }
    if let Some(url) = &project.github_url {
        links.push(("Code", url));
    }
    if !links.is_empty() {
        html.push_str("<p class=\"project-links\">\n");
        for (label, url) in links {
            html.push_str(&format!(
                "<a href=\"{}\" rel=\"noopener noreferrer\">{label}</a>\n",
                escape(url)
            ));
        }
        html.push_str("</p>\n");
    }

    html.push_str("</article>\n");
    html
}
