//! Named projections against the Content Store.
//!
//! One constant per content shape. List queries filter to active documents
//! and order by the author-controlled `order` field; singletons take the
//! first document of their type. Detail queries accept a single `$slug`
//! parameter.

pub const PERSONAL_INFO: &str = r#"
*[_type == "personalInfo"][0] {
  _id,
  name,
  firstName,
  lastName,
  title,
  roles,
  tagline,
  bio,
  profileImage { asset->{ _id, url }, alt },
  resumeFile { asset->{ _id, url } },
  location,
  availability,
  yearsOfExperience,
  projectsCompleted,
  email,
  phone,
  "socialLinks": *[_type == "socialLink" && showInHero == true && isActive == true] | order(order asc) {
    _id, platform, url, username, displayText, order, isActive,
    showInHeader, showInFooter, showInHero, showInContact
  }
}
"#;

pub const SITE_SETTINGS: &str = r#"
*[_type == "siteSettings"][0] {
  _id,
  title,
  description,
  keywords,
  author,
  siteUrl,
  ogImage { asset->{ _id, url }, alt },
  twitterHandle,
  googleAnalyticsId,
  enableBlog,
  enableDarkMode
}
"#;

pub const CONTACT_INFO: &str = r#"
*[_type == "contactInfo"][0] {
  _id,
  title,
  subtitle,
  description,
  email,
  phone,
  location,
  availability,
  preferredContactMethod,
  responseTime,
  formEnabled,
  formSuccessMessage,
  formErrorMessage
}
"#;

pub const SKILL_CATEGORIES: &str = r#"
*[_type == "skillCategory" && isActive == true] | order(order asc) {
  _id, name, slug, description, color, order, isActive
}
"#;

pub const SKILLS: &str = r#"
*[_type == "skill" && isActive == true] | order(order asc) {
  _id,
  name,
  category->{ _id, name, slug, color },
  proficiency,
  icon { asset->{ _id, url }, alt },
  description,
  yearsOfExperience,
  isHighlighted,
  order,
  isActive
}
"#;

/// Combined projection for the skills page: one request, both shapes.
pub const SKILLS_WITH_CATEGORIES: &str = r#"
{
  "categories": *[_type == "skillCategory" && isActive == true] | order(order asc) {
    _id, name, slug, description, color, order, isActive
  },
  "skills": *[_type == "skill" && isActive == true] | order(order asc) {
    _id,
    name,
    category->{ _id, name, slug, color },
    proficiency,
    icon { asset->{ _id, url }, alt },
    description,
    yearsOfExperience,
    isHighlighted,
    order,
    isActive
  }
}
"#;

pub const PROJECTS: &str = r#"
*[_type == "project" && isActive == true] | order(order asc) {
  _id,
  title,
  slug,
  description,
  mainImage { asset->{ _id, url }, alt },
  category,
  technologies[]->{ _id, name, category->{ _id, name, slug, color }, proficiency },
  features,
  liveUrl,
  githubUrl,
  demoUrl,
  startDate,
  endDate,
  client,
  teamSize,
  myRole,
  status,
  isFeatured,
  order,
  isActive
}
"#;

pub const FEATURED_PROJECTS: &str = r#"
*[_type == "project" && isActive == true && isFeatured == true] | order(order asc) {
  _id,
  title,
  slug,
  description,
  mainImage { asset->{ _id, url }, alt },
  category,
  technologies[]->{ _id, name, category->{ _id, name, slug, color }, proficiency },
  features,
  liveUrl,
  githubUrl,
  isFeatured,
  order,
  isActive
}
"#;

pub const PROJECT_SLUGS: &str = r#"
*[_type == "project" && isActive == true] { "slug": slug.current }
"#;

pub const PROJECT_BY_SLUG: &str = r#"
*[_type == "project" && slug.current == $slug && isActive == true][0] {
  _id,
  title,
  slug,
  description,
  longDescription,
  mainImage { asset->{ _id, url }, alt },
  gallery[] { asset->{ _id, url }, alt },
  category,
  technologies[]->{ _id, name, category->{ _id, name, slug, color }, proficiency },
  features,
  challenges,
  solutions,
  results,
  liveUrl,
  githubUrl,
  demoUrl,
  caseStudyUrl,
  startDate,
  endDate,
  client,
  teamSize,
  myRole,
  status,
  testimonial,
  isFeatured,
  relatedExperience->{ _id, title, company }
}
"#;

pub const EXPERIENCES: &str = r#"
*[_type == "experience" && isActive == true] | order(order asc) {
  _id,
  title,
  company,
  companyWebsite,
  companyLogo { asset->{ _id, url }, alt },
  type,
  location,
  startDate,
  endDate,
  isCurrent,
  description,
  responsibilities,
  achievements,
  technologies[]->{ _id, name, category->{ _id, name, slug, color }, proficiency },
  relatedProjects[]->{ _id, title, slug },
  order,
  isActive
}
"#;

pub const HEADER_SOCIAL_LINKS: &str = r#"
*[_type == "socialLink" && isActive == true && showInHeader == true] | order(order asc) {
  _id, platform, url, username, displayText, order, isActive,
  showInHeader, showInFooter, showInHero, showInContact
}
"#;

pub const FOOTER_SOCIAL_LINKS: &str = r#"
*[_type == "socialLink" && isActive == true && showInFooter == true] | order(order asc) {
  _id, platform, url, username, displayText, order, isActive,
  showInHeader, showInFooter, showInHero, showInContact
}
"#;

pub const CONTACT_SOCIAL_LINKS: &str = r#"
*[_type == "socialLink" && isActive == true && showInContact == true] | order(order asc) {
  _id, platform, url, username, displayText, icon { asset->{ _id, url }, alt },
  order, isActive, showInHeader, showInFooter, showInHero, showInContact
}
"#;
