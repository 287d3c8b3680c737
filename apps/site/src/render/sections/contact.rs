use crate::models::personal::PersonalInfo;
use crate::models::settings::ContactInfo;
use crate::models::social::SocialLink;
use crate::render::rich_text::render_blocks;
use crate::render::escape;

const DEFAULT_SUCCESS: &str = "Message sent successfully!";
const DEFAULT_ERROR: &str = "Something went wrong sending your message.";

pub fn render(
    contact: Option<&ContactInfo>,
    personal: Option<&PersonalInfo>,
    links: &[SocialLink],
) -> String {
    let mut html = String::from("<section id=\"contact\" class=\"contact\">\n");

    let title = contact
        .and_then(|c| c.title.as_deref())
        .unwrap_or("Get In Touch");
    html.push_str(&format!("<h2>{}</h2>\n", escape(title)));
    if let Some(subtitle) = contact.and_then(|c| c.subtitle.as_deref()) {
        html.push_str(&format!("<p class=\"section-lead\">{}</p>\n", escape(subtitle)));
    }
    if let Some(blocks) = contact.and_then(|c| c.description.as_deref()) {
        html.push_str(&render_blocks(blocks));
    }

    let email = contact
        .map(|c| c.email.as_str())
        .or_else(|| personal.and_then(|p| p.email.as_deref()));

    html.push_str("<ul class=\"contact-details\">\n");
    if let Some(email) = email {
        html.push_str(&format!(
            "<li>Email: <a href=\"mailto:{0}\">{0}</a></li>\n",
            escape(email)
        ));
    }
    if let Some(phone) = contact
        .and_then(|c| c.phone.as_deref())
        .or_else(|| personal.and_then(|p| p.phone.as_deref()))
    {
        html.push_str(&format!("<li>Phone: {}</li>\n", escape(phone)));
    }
    if let Some(location) = contact
        .and_then(|c| c.location.as_deref())
        .or_else(|| personal.and_then(|p| p.location.as_deref()))
    {
        html.push_str(&format!("<li>Location: {}</li>\n", escape(location)));
    }
    if let Some(availability) = contact.and_then(|c| c.availability) {
        html.push_str(&format!("<li>{}</li>\n", availability.label()));
    }
    if let Some(method) = contact.and_then(|c| c.preferred_contact_method) {
        html.push_str(&format!(
            "<li>Preferred contact method: {}</li>\n",
            method.label()
        ));
    }
    if let Some(response_time) = contact.and_then(|c| c.response_time.as_deref()) {
        html.push_str(&format!(
            "<li>Typical response time: {}</li>\n",
            escape(response_time)
        ));
    }
    html.push_str("</ul>\n");

    if !links.is_empty() {
        html.push_str("<ul class=\"contact-social\">\n");
        for link in links {
            html.push_str(&format!(
                "<li><a href=\"{}\" rel=\"noopener noreferrer\">{}</a></li>\n",
                escape(&link.url),
                escape(link.display_label())
            ));
        }
        html.push_str("</ul>\n");
    }

    let form_enabled = contact.map(|c| c.form_enabled).unwrap_or(true);
    if form_enabled {
        html.push_str(&form(contact, email));
    } else if let Some(email) = email {
        html.push_str(&format!(
            "<p>The contact form is currently disabled — reach me directly at \
             <a href=\"mailto:{0}\">{0}</a>.</p>\n",
            escape(email)
        ));
    }

    html.push_str("</section>\n");
    html
}

fn form(contact: Option<&ContactInfo>, email: Option<&str>) -> String {
    let success = contact
        .and_then(|c| c.form_success_message.as_deref())
        .unwrap_or(DEFAULT_SUCCESS);
    let error = contact
        .and_then(|c| c.form_error_message.as_deref())
        .unwrap_or(DEFAULT_ERROR);
    let fallback = email
        .map(|e| format!("You can also email me directly at {e}."))
        .unwrap_or_default();

    format!(
        "<form id=\"contact-form\" data-success-message=\"{success}\" \
         data-error-message=\"{error}\" data-fallback=\"{fallback}\">\n\
         <label>Name <input type=\"text\" name=\"name\" required></label>\n\
         <label>Email <input type=\"email\" name=\"email\" required></label>\n\
         <label>Subject <input type=\"text\" name=\"subject\" required></label>\n\
         <label>Message <textarea name=\"message\" rows=\"6\" required></textarea></label>\n\
         <button type=\"submit\">Send Message</button>\n\
         <p id=\"form-status\" role=\"status\"></p>\n\
         </form>\n{SUBMIT_SCRIPT}",
        success = escape(success),
        error = escape(error),
        fallback = escape(&fallback),
    )
}

/// Posts the form as JSON and surfaces the API's outcome inline. Failures
/// keep the typed message in place so the visitor can retry.
const SUBMIT_SCRIPT: &str = r#"<script>
(function () {
  var form = document.getElementById('contact-form');
  if (!form) return;
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    var status = document.getElementById('form-status');
    var payload = Object.fromEntries(new FormData(form));
    fetch('/api/contact', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    }).then(function (response) {
      return response.json().then(function (body) {
        return { ok: response.ok, body: body };
      });
    }).then(function (result) {
      if (result.ok && result.body.success) {
        status.textContent = result.body.message || form.dataset.successMessage;
        form.reset();
      } else {
        var reason = (result.body.error && result.body.error.message) || form.dataset.errorMessage;
        status.textContent = reason + ' ' + form.dataset.fallback;
      }
    }).catch(function () {
      status.textContent = form.dataset.errorMessage + ' ' + form.dataset.fallback;
    });
  });
})();
</script>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_info() -> ContactInfo {
        ContactInfo {
            id: "c".to_string(),
            title: Some("Let's talk".to_string()),
            subtitle: None,
            description: None,
            email: "jane@example.com".to_string(),
            phone: None,
            location: None,
            availability: None,
            preferred_contact_method: None,
            response_time: None,
            form_enabled: true,
            form_success_message: None,
            form_error_message: None,
        }
    }

    #[test]
    fn test_form_rendered_when_enabled() {
        let html = render(Some(&contact_info()), None, &[]);
        assert!(html.contains("id=\"contact-form\""));
        assert!(html.contains("jane@example.com"));
        assert!(html.contains("data-success-message=\"Message sent successfully!\""));
    }

    #[test]
    fn test_direct_email_fallback_when_form_disabled() {
        let mut info = contact_info();
        info.form_enabled = false;
        let html = render(Some(&info), None, &[]);
        assert!(!html.contains("id=\"contact-form\""));
        assert!(html.contains("mailto:jane@example.com"));
    }
}
