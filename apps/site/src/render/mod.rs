//! Stateless HTML rendering.
//!
//! Renderers accept already-fetched entities and produce markup; no module
//! here performs I/O or transforms business data beyond display formatting
//! (date formatting, pluralization, duration computation). All dynamic
//! text passes through `escape`.

pub mod rich_text;
pub mod sections;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::models::settings::SiteSettings;
use crate::models::social::SocialLink;
use crate::seo::PageMetadata;

/// Site chrome shared by every page: settings for the footer line and the
/// header/footer social links.
pub struct Chrome<'a> {
    pub settings: Option<&'a SiteSettings>,
    pub header_links: &'a [SocialLink],
    pub footer_links: &'a [SocialLink],
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Assembles a complete document: head metadata, one ld+json script
/// holding the page's structured-data array, then header, sections, footer.
pub fn document(
    meta: &PageMetadata,
    structured_data: &[Value],
    chrome: &Chrome,
    body: &str,
) -> String {
    let mut html = String::with_capacity(body.len() + 4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&meta.title)));
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape(&meta.description)
    ));
    if !meta.keywords.is_empty() {
        html.push_str(&format!(
            "<meta name=\"keywords\" content=\"{}\">\n",
            escape(&meta.keywords.join(", "))
        ));
    }
    if let Some(author) = &meta.author {
        html.push_str(&format!(
            "<meta name=\"author\" content=\"{}\">\n",
            escape(author)
        ));
    }
    html.push_str(&format!(
        "<link rel=\"canonical\" href=\"{}\">\n",
        escape(&meta.canonical)
    ));

    let og = &meta.open_graph;
    push_meta(&mut html, "og:title", &og.title);
    push_meta(&mut html, "og:description", &og.description);
    push_meta(&mut html, "og:url", &og.url);
    if let Some(site_name) = &og.site_name {
        push_meta(&mut html, "og:site_name", site_name);
    }
    push_meta(&mut html, "og:image", &og.image.url);
    push_meta(&mut html, "og:image:width", &og.image.width.to_string());
    push_meta(&mut html, "og:image:height", &og.image.height.to_string());
    push_meta(&mut html, "og:image:alt", &og.image.alt);
    push_meta(&mut html, "og:locale", og.locale);
    push_meta(&mut html, "og:type", og.og_type);

    let twitter = &meta.twitter;
    push_name_meta(&mut html, "twitter:card", twitter.card);
    push_name_meta(&mut html, "twitter:title", &twitter.title);
    push_name_meta(&mut html, "twitter:description", &twitter.description);
    push_name_meta(&mut html, "twitter:image", &twitter.image);
    if let Some(creator) = &twitter.creator {
        push_name_meta(&mut html, "twitter:creator", creator);
    }

    if !structured_data.is_empty() {
        html.push_str("<script type=\"application/ld+json\">");
        html.push_str(&ld_json(structured_data));
        html.push_str("</script>\n");
    }

    if let Some(analytics_id) = chrome
        .settings
        .and_then(|s| s.google_analytics_id.as_deref())
    {
        html.push_str(&format!(
            "<script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\n\
             <script>window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}gtag('js',new Date());gtag('config','{id}');</script>\n",
            id = escape(analytics_id)
        ));
    }

    let body_class = if chrome.settings.is_some_and(|s| s.enable_dark_mode) {
        " class=\"dark\""
    } else {
        ""
    };
    html.push_str(&format!("</head>\n<body{body_class}>\n"));
    html.push_str(&header(chrome));
    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");
    html.push_str(&footer(chrome));
    html.push_str("</body>\n</html>\n");
    html
}

/// Serializes the structured-data array. `<` is escaped so a string field
/// can never terminate the surrounding script element early.
fn ld_json(structured_data: &[Value]) -> String {
    serde_json::to_string(structured_data)
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c")
}

fn push_meta(html: &mut String, property: &str, content: &str) {
    html.push_str(&format!(
        "<meta property=\"{property}\" content=\"{}\">\n",
        escape(content)
    ));
}

fn push_name_meta(html: &mut String, name: &str, content: &str) {
    html.push_str(&format!(
        "<meta name=\"{name}\" content=\"{}\">\n",
        escape(content)
    ));
}

const NAV_ITEMS: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/skills", "Skills"),
    ("/projects", "Projects"),
    ("/experience", "Experience"),
    ("/contact", "Contact"),
];

fn header(chrome: &Chrome) -> String {
    let mut html = String::from("<header class=\"site-header\">\n<nav>\n<ul class=\"nav-links\">\n");
    for (href, label) in NAV_ITEMS {
        html.push_str(&format!("<li><a href=\"{href}\">{label}</a></li>\n"));
    }
    html.push_str("</ul>\n");
    if !chrome.header_links.is_empty() {
        html.push_str("<ul class=\"header-social\">\n");
        for link in chrome.header_links {
            html.push_str(&format!(
                "<li><a href=\"{}\" rel=\"noopener noreferrer\">{}</a></li>\n",
                escape(&link.url),
                escape(link.display_label())
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</nav>\n</header>\n");
    html
}

fn footer(chrome: &Chrome) -> String {
    let year = chrono::Utc::now().year();
    let owner = chrome
        .settings
        .map(|s| s.author.as_deref().unwrap_or(&s.title).to_string())
        .unwrap_or_else(|| "Portfolio".to_string());
    let mut html = String::from("<footer class=\"site-footer\">\n");
    if !chrome.footer_links.is_empty() {
        html.push_str("<ul class=\"footer-social\">\n");
        for link in chrome.footer_links {
            html.push_str(&format!(
                "<li><a href=\"{}\" rel=\"noopener noreferrer\">{}</a></li>\n",
                escape(&link.url),
                escape(link.display_label())
            ));
        }
        html.push_str("</ul>\n");
    }
    html.push_str(&format!(
        "<p>&copy; {year} {}. All rights reserved.</p>\n",
        escape(&owner)
    ));
    html.push_str("</footer>\n");
    html
}

/// Minimal self-contained page for error responses; no chrome data is
/// available when rendering these.
pub fn error_page(title: &str, heading: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n<main class=\"error-page\">\n\
         <h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to home</a></p>\n\
         </main>\n</body>\n</html>\n",
        escape(title),
        escape(heading),
        escape(message)
    )
}

// ── Display formatting ──────────────────────────────────────────────────

pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

pub fn pluralize(count: i32, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// Month-granular duration between two dates:
/// `(end_year - start_year) * 12 + (end_month - start_month)`.
/// Under a year reads as months; otherwise years with a month remainder.
pub fn duration_between(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> String {
    let end = end.unwrap_or(today);
    let months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    let months = months.max(0);

    if months < 12 {
        pluralize(months, "month")
    } else {
        let years = months / 12;
        let remainder = months % 12;
        if remainder == 0 {
            pluralize(years, "year")
        } else {
            format!(
                "{} {}",
                pluralize(years, "year"),
                pluralize(remainder, "month")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_duration_six_months() {
        let out = duration_between(date(2023, 1, 15), Some(date(2023, 7, 15)), date(2025, 1, 1));
        assert_eq!(out, "6 months");
    }

    #[test]
    fn test_duration_open_ended_uses_today() {
        let out = duration_between(date(2022, 1, 1), None, date(2024, 4, 10));
        assert_eq!(out, "2 years 3 months");
    }

    #[test]
    fn test_duration_exact_years() {
        let out = duration_between(date(2022, 1, 1), Some(date(2023, 1, 20)), date(2025, 1, 1));
        assert_eq!(out, "1 year");
    }

    #[test]
    fn test_duration_single_month() {
        let out = duration_between(date(2023, 3, 1), Some(date(2023, 4, 1)), date(2025, 1, 1));
        assert_eq!(out, "1 month");
    }

    #[test]
    fn test_duration_same_month() {
        let out = duration_between(date(2023, 3, 1), Some(date(2023, 3, 25)), date(2025, 1, 1));
        assert_eq!(out, "0 months");
    }

    #[test]
    fn test_ld_json_escapes_script_close() {
        let data = vec![serde_json::json!({ "name": "</script><b>" })];
        let out = ld_json(&data);
        assert!(!out.contains("</script>"));
        assert!(out.contains("\\u003c/script>"));
    }

    #[test]
    fn test_document_assembles_head_and_chrome() {
        let images = crate::content::image::ImageUrlBuilder::new("abc123", "production");
        let ctx = crate::seo::SeoContext {
            fallback_site_url: "https://example.com",
            images: &images,
        };
        let meta = PageMetadata::home(None, None, &ctx);
        let schemas = vec![serde_json::json!({ "@type": "WebSite" })];
        let chrome = Chrome {
            settings: None,
            header_links: &[],
            footer_links: &[],
        };
        let html = document(&meta, &schemas, &chrome, "<section>hi</section>");

        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains("<script type=\"application/ld+json\">"));
        assert!(html.contains("property=\"og:image\""));
        assert!(html.contains("<a href=\"/projects\">Projects</a>"));
        assert!(html.contains("<section>hi</section>"));
        assert!(html.contains("<body>"));
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year(date(2023, 1, 15)), "Jan 2023");
    }
}
