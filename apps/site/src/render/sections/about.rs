use crate::models::personal::{Availability, PersonalInfo};
use crate::render::rich_text::render_blocks;
use crate::render::escape;

const FALLBACK_TAGLINE: &str = "Passionate developer with a journey from full-stack development \
to exploring the frontiers of data engineering and DevOps";

/// Shown verbatim when the Content Store has no bio.
const FALLBACK_BIO: [&str; 3] = [
    "I'm a dedicated full-stack developer with hands-on experience in building modern web \
applications using React.js, Next.js, and Node.js. My expertise spans from creating intuitive \
frontend interfaces to developing robust backend systems with Express and MongoDB.",
    "What sets me apart is my practical approach to learning and problem-solving. I've worked \
extensively with headless CMS solutions like Sanity, enabling content-driven applications that \
scale efficiently. My projects demonstrate real-world application of modern development \
practices and technologies.",
    "Currently, I'm expanding my skill set into the exciting realms of Data Engineering and \
DevOps. I'm diving deep into Python, Pandas, Apache Spark for data processing, and exploring \
cloud infrastructure with Docker, AWS, and CI/CD pipelines. This evolution reflects my \
commitment to staying at the forefront of technology trends.",
];

pub fn render(personal: Option<&PersonalInfo>) -> String {
    let mut html = String::from("<section id=\"about\" class=\"about\">\n<h2>About Me</h2>\n");

    let tagline = personal
        .and_then(|p| p.tagline.as_deref())
        .unwrap_or(FALLBACK_TAGLINE);
    html.push_str(&format!("<p class=\"section-lead\">{}</p>\n", escape(tagline)));

    html.push_str("<div class=\"about-bio\">\n");
    match personal.and_then(|p| p.bio.as_deref()).filter(|b| !b.is_empty()) {
        Some(bio) => html.push_str(&render_blocks(bio)),
        None => {
            html.push_str("<h3>My Journey</h3>\n");
            for paragraph in FALLBACK_BIO {
                html.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
            }
        }
    }
    html.push_str("</div>\n");

    let projects_completed = personal.and_then(|p| p.projects_completed).unwrap_or(15);
    let years = personal.and_then(|p| p.years_of_experience).unwrap_or(3);
    let available = personal.and_then(|p| p.availability) == Some(Availability::Available);
    html.push_str(&format!(
        "<ul class=\"about-stats\">\n\
         <li><strong>{projects_completed}+</strong> Projects Completed</li>\n\
         <li><strong>{years}+</strong> Years Experience</li>\n\
         <li><strong>10+</strong> Technologies</li>\n\
         <li><strong>{}</strong></li>\n\
         </ul>\n",
        if available { "Available" } else { "Learning Mode" }
    ));

    if let Some(resume) = personal
        .and_then(|p| p.resume_file.as_ref())
        .and_then(|f| f.asset.as_ref())
    {
        html.push_str(&format!(
            "<a class=\"button\" href=\"{}\" download rel=\"noopener noreferrer\">Download Resume</a>\n",
            escape(&resume.url)
        ));
    }

    html.push_str("</section>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_bio_renders_verbatim_without_personal_info() {
        let html = render(None);
        assert!(html.contains("My Journey"));
        for paragraph in FALLBACK_BIO {
            assert!(html.contains(&escape(paragraph)));
        }
    }

    #[test]
    fn test_fallback_stats_without_personal_info() {
        let html = render(None);
        assert!(html.contains("<strong>15+</strong> Projects Completed"));
        assert!(html.contains("<strong>3+</strong> Years Experience"));
        assert!(html.contains("Learning Mode"));
    }
}
