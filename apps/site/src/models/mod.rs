//! Typed views of the Content Store's published documents.
//!
//! Every struct here mirrors a named projection in `content::queries` —
//! fields the projection does not request simply do not exist on the type.
//! Documents are read-only: they are fetched per request and dropped after
//! rendering.

pub mod experience;
pub mod personal;
pub mod project;
pub mod rich_text;
pub mod settings;
pub mod skill;
pub mod social;

use serde::Deserialize;

/// URL-safe document identifier, author-edited in the Content Store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slug {
    pub current: String,
}

/// An image field with its asset reference resolved.
///
/// `asset` is `None` when the reference dangles (asset deleted after the
/// document was published); callers must check before building URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageRef {
    pub asset: Option<ImageAsset>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
}

/// A file field (resume download) with its asset resolved to a direct URL.
#[derive(Debug, Clone, Deserialize)]
pub struct FileRef {
    pub asset: Option<FileAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileAsset {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
}

impl ImageRef {
    pub fn asset_id(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.id.as_str())
    }
}

/// List documents carry an author-controlled `order` and an `isActive`
/// flag. List accessors return exactly the active subset in ascending
/// order; ties keep input order (the sort is stable).
pub trait Orderable {
    fn display_order(&self) -> i64;
    fn is_active(&self) -> bool;
}

pub fn active_in_order<T: Orderable>(mut items: Vec<T>) -> Vec<T> {
    items.retain(|item| item.is_active());
    items.sort_by_key(|item| item.display_order());
    items
}

pub(crate) fn default_true() -> bool {
    true
}

/// The Content Store emits `null` for projected fields a document does
/// not carry; plain `#[serde(default)]` only covers missing keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Flags that default on: `isActive`, `formEnabled`.
pub(crate) fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        name: &'static str,
        order: i64,
        active: bool,
    }

    impl Orderable for Entry {
        fn display_order(&self) -> i64 {
            self.order
        }
        fn is_active(&self) -> bool {
            self.active
        }
    }

    fn entry(name: &'static str, order: i64, active: bool) -> Entry {
        Entry {
            name,
            order,
            active,
        }
    }

    #[test]
    fn test_inactive_entries_are_dropped() {
        let out = active_in_order(vec![
            entry("a", 1, true),
            entry("b", 2, false),
            entry("c", 3, true),
        ]);
        let names: Vec<_> = out.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_sorted_ascending_by_order() {
        let out = active_in_order(vec![
            entry("late", 30, true),
            entry("early", 10, true),
            entry("mid", 20, true),
        ]);
        let names: Vec<_> = out.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let out = active_in_order(vec![
            entry("first", 5, true),
            entry("second", 5, true),
            entry("third", 5, true),
        ]);
        let names: Vec<_> = out.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
