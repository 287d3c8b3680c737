//! Rich-text block tree → HTML.
//!
//! A recursive visitor over the tagged block union: headings and
//! paragraphs render directly; consecutive list items of the same kind are
//! grouped under one `<ul>`/`<ol>`. Span marks nest innermost-first, and
//! link marks resolve through the block's `markDefs`.

use crate::models::rich_text::{Block, BlockStyle, ListKind, Span};

use super::escape;

pub fn render_blocks(blocks: &[Block]) -> String {
    let mut html = String::new();
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        match block.list_item {
            Some(kind) => {
                if open_list != Some(kind) {
                    close_list(&mut html, open_list);
                    html.push_str(match kind {
                        ListKind::Bullet => "<ul>\n",
                        ListKind::Number => "<ol>\n",
                    });
                    open_list = Some(kind);
                }
                html.push_str(&format!("<li>{}</li>\n", render_spans(block)));
            }
            None => {
                close_list(&mut html, open_list.take());
                let tag = match block.style {
                    BlockStyle::Normal => "p",
                    BlockStyle::H3 => "h3",
                    BlockStyle::H4 => "h4",
                };
                html.push_str(&format!("<{tag}>{}</{tag}>\n", render_spans(block)));
            }
        }
    }
    close_list(&mut html, open_list);
    html
}

fn close_list(html: &mut String, open: Option<ListKind>) {
    match open {
        Some(ListKind::Bullet) => html.push_str("</ul>\n"),
        Some(ListKind::Number) => html.push_str("</ol>\n"),
        None => {}
    }
}

fn render_spans(block: &Block) -> String {
    block
        .children
        .iter()
        .map(|span| render_span(block, span))
        .collect()
}

fn render_span(block: &Block, span: &Span) -> String {
    let mut html = escape(&span.text);
    for mark in &span.marks {
        html = match mark.as_str() {
            "strong" => format!("<strong>{html}</strong>"),
            "em" => format!("<em>{html}</em>"),
            "code" => format!("<code>{html}</code>"),
            key => match block.link_target(key) {
                Some(href) => format!(
                    "<a href=\"{}\" rel=\"noopener noreferrer\">{html}</a>",
                    escape(href)
                ),
                // Unknown decorator or dangling key: render the text alone.
                None => html,
            },
        };
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rich_text::MarkDef;

    fn span(text: &str, marks: &[&str]) -> Span {
        Span {
            text: text.to_string(),
            marks: marks.iter().map(|m| m.to_string()).collect(),
        }
    }

    fn paragraph(spans: Vec<Span>) -> Block {
        Block {
            style: BlockStyle::Normal,
            list_item: None,
            children: spans,
            mark_defs: Vec::new(),
        }
    }

    #[test]
    fn test_paragraph_and_heading() {
        let mut heading = paragraph(vec![span("Journey", &[])]);
        heading.style = BlockStyle::H3;
        let html = render_blocks(&[heading, paragraph(vec![span("Started in 2019.", &[])])]);
        assert_eq!(html, "<h3>Journey</h3>\n<p>Started in 2019.</p>\n");
    }

    #[test]
    fn test_marks_nest() {
        let html = render_blocks(&[paragraph(vec![span("hot", &["strong", "em"])])]);
        assert_eq!(html, "<p><em><strong>hot</strong></em></p>\n");
    }

    #[test]
    fn test_link_mark_resolves_href() {
        let mut block = paragraph(vec![span("docs", &["k1"])]);
        block.mark_defs.push(MarkDef {
            key: "k1".to_string(),
            kind: "link".to_string(),
            href: Some("https://example.com/docs".to_string()),
        });
        let html = render_blocks(&[block]);
        assert_eq!(
            html,
            "<p><a href=\"https://example.com/docs\" rel=\"noopener noreferrer\">docs</a></p>\n"
        );
    }

    #[test]
    fn test_consecutive_list_items_group() {
        let mut first = paragraph(vec![span("one", &[])]);
        first.list_item = Some(ListKind::Bullet);
        let mut second = paragraph(vec![span("two", &[])]);
        second.list_item = Some(ListKind::Bullet);
        let html = render_blocks(&[first, second, paragraph(vec![span("after", &[])])]);
        assert_eq!(
            html,
            "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>after</p>\n"
        );
    }

    #[test]
    fn test_list_kind_switch_closes_previous_list() {
        let mut bullet = paragraph(vec![span("b", &[])]);
        bullet.list_item = Some(ListKind::Bullet);
        let mut numbered = paragraph(vec![span("n", &[])]);
        numbered.list_item = Some(ListKind::Number);
        let html = render_blocks(&[bullet, numbered]);
        assert_eq!(html, "<ul>\n<li>b</li>\n</ul>\n<ol>\n<li>n</li>\n</ol>\n");
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_blocks(&[paragraph(vec![span("<script>", &[])])]);
        assert_eq!(html, "<p>&lt;script&gt;</p>\n");
    }
}
