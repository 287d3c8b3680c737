//! Image URL builder over the Content Store's image CDN.
//!
//! Pure and deterministic: the same asset reference and dimensions always
//! produce the same URL, so downstream CDNs cache resized variants.
//! Resizing itself happens in the Content Store's image pipeline.

use thiserror::Error;

const CDN_HOST: &str = "cdn.sanity.io";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("malformed image reference: {0:?}")]
    Malformed(String),
}

/// Builds CDN URLs for asset references of the form
/// `image-{id}-{width}x{height}-{format}`.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: &str, dataset: &str) -> Self {
        Self {
            base: format!("https://{CDN_HOST}/images/{project_id}/{dataset}"),
        }
    }

    /// Starts a URL for the given asset reference. Callers must check
    /// presence first; a malformed reference is an authoring error, not a
    /// renderable state.
    pub fn image(&self, asset_ref: &str) -> Result<ImageUrl, ImageRefError> {
        let filename = parse_asset_ref(asset_ref)?;
        Ok(ImageUrl {
            base: self.base.clone(),
            filename,
            width: None,
            height: None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ImageUrl {
    base: String,
    filename: String,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageUrl {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn url(&self) -> String {
        let mut url = format!("{}/{}", self.base, self.filename);
        let mut sep = '?';
        if let Some(w) = self.width {
            url.push_str(&format!("{sep}w={w}"));
            sep = '&';
        }
        if let Some(h) = self.height {
            url.push_str(&format!("{sep}h={h}"));
            sep = '&';
        }
        if self.width.is_some() || self.height.is_some() {
            url.push_str(&format!("{sep}fit=crop&auto=format"));
        }
        url
    }
}

/// `image-{id}-{WxH}-{format}` → `{id}-{WxH}.{format}`. The id itself may
/// contain dashes, so parsing anchors on the first and last two segments.
fn parse_asset_ref(asset_ref: &str) -> Result<String, ImageRefError> {
    let parts: Vec<&str> = asset_ref.split('-').collect();
    if parts.len() < 4 || parts[0] != "image" {
        return Err(ImageRefError::Malformed(asset_ref.to_string()));
    }
    let format = parts[parts.len() - 1];
    let dimensions = parts[parts.len() - 2];
    let id = parts[1..parts.len() - 2].join("-");
    if id.is_empty() || format.is_empty() || !is_dimensions(dimensions) {
        return Err(ImageRefError::Malformed(asset_ref.to_string()));
    }
    Ok(format!("{id}-{dimensions}.{format}"))
}

fn is_dimensions(s: &str) -> bool {
    match s.split_once('x') {
        Some((w, h)) => {
            !w.is_empty()
                && !h.is_empty()
                && w.bytes().all(|b| b.is_ascii_digit())
                && h.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("abc123", "production")
    }

    #[test]
    fn test_plain_url() {
        let url = builder().image("image-deadbeef-1200x800-jpg").unwrap().url();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/abc123/production/deadbeef-1200x800.jpg"
        );
    }

    #[test]
    fn test_resized_url() {
        let url = builder()
            .image("image-deadbeef-1200x800-jpg")
            .unwrap()
            .width(1200)
            .height(630)
            .url();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/abc123/production/deadbeef-1200x800.jpg?w=1200&h=630&fit=crop&auto=format"
        );
    }

    #[test]
    fn test_deterministic() {
        let a = builder()
            .image("image-deadbeef-100x100-png")
            .unwrap()
            .width(64)
            .url();
        let b = builder()
            .image("image-deadbeef-100x100-png")
            .unwrap()
            .width(64)
            .url();
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_with_dashes() {
        let url = builder()
            .image("image-dead-beef-cafe-640x480-webp")
            .unwrap()
            .url();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/abc123/production/dead-beef-cafe-640x480.webp"
        );
    }

    #[test]
    fn test_malformed_refs_rejected() {
        for bad in ["", "image", "file-deadbeef-1x1-jpg", "image-deadbeef-jpg", "image-x-1200xjpg-"] {
            assert!(builder().image(bad).is_err(), "accepted {bad:?}");
        }
    }
}
