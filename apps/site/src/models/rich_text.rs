//! Rich-text block tree as stored by the Content Store.
//!
//! A field like `bio` or `longDescription` is an ordered sequence of
//! blocks. Each block is either a paragraph/heading or a list item, holding
//! inline spans whose `marks` are either decorators (`strong`, `em`,
//! `code`) or keys into the block's `markDefs` (link annotations).

use serde::Deserialize;

use super::null_as_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BlockStyle {
    Normal,
    H3,
    H4,
}

impl From<String> for BlockStyle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "h3" => BlockStyle::H3,
            "h4" => BlockStyle::H4,
            _ => BlockStyle::Normal,
        }
    }
}

impl Default for BlockStyle {
    fn default() -> Self {
        BlockStyle::Normal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ListKind {
    Bullet,
    Number,
}

impl From<String> for ListKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "number" => ListKind::Number,
            _ => ListKind::Bullet,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marks: Vec<String>,
}

/// Link (or other) annotation referenced from a span by `_key`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkDef {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "_type")]
    pub kind: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default, deserialize_with = "null_as_default")]
    pub style: BlockStyle,
    #[serde(default)]
    pub list_item: Option<ListKind>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<Span>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mark_defs: Vec<MarkDef>,
}

impl Block {
    /// Resolves a span mark to its link target, if the mark is a link key.
    pub fn link_target(&self, mark: &str) -> Option<&str> {
        self.mark_defs
            .iter()
            .find(|def| def.key == mark)
            .and_then(|def| def.href.as_deref())
    }
}

/// Flattens a block sequence to plain text. Spans concatenate directly;
/// blocks join with a blank line, matching paragraph boundaries.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| {
            block
                .children
                .iter()
                .map(|span| span.text.as_str())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(texts: &[&str]) -> Block {
        Block {
            style: BlockStyle::Normal,
            list_item: None,
            children: texts
                .iter()
                .map(|t| Span {
                    text: t.to_string(),
                    marks: Vec::new(),
                })
                .collect(),
            mark_defs: Vec::new(),
        }
    }

    #[test]
    fn test_blocks_to_text_concatenates_spans() {
        let text = blocks_to_text(&[block(&["Hello, ", "world"])]);
        assert_eq!(text, "Hello, world");
    }

    #[test]
    fn test_blocks_to_text_separates_paragraphs() {
        let text = blocks_to_text(&[block(&["First"]), block(&["Second"])]);
        assert_eq!(text, "First\n\nSecond");
    }

    #[test]
    fn test_unknown_style_falls_back_to_normal() {
        assert_eq!(BlockStyle::from("blockquote".to_string()), BlockStyle::Normal);
    }

    #[test]
    fn test_link_target_resolution() {
        let mut b = block(&["docs"]);
        b.mark_defs.push(MarkDef {
            key: "abc".to_string(),
            kind: "link".to_string(),
            href: Some("https://example.com".to_string()),
        });
        assert_eq!(b.link_target("abc"), Some("https://example.com"));
        assert_eq!(b.link_target("strong"), None);
    }
}
