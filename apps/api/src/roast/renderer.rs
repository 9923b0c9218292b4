//! Tags section bodies as list blocks or paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Leading `1.` / `1)` followed by whitespace or end of line, or a `•` / `-` bullet.
static LIST_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d+[.)](?:\s+|$)|[•\-]\s*)").expect("list marker pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    List { items: Vec<String> },
    Paragraph { text: String },
}

/// Strips a leading list marker, returning the item text, or `None` for non-list lines.
pub fn strip_list_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    LIST_MARKER_RE
        .find(trimmed)
        .map(|marker| trimmed[marker.end()..].trim())
}

/// Converts section content into list and paragraph blocks.
///
/// Consecutive list lines form one list. Blank lines inside a list keep it
/// open; the first non-list text line closes it and becomes its own paragraph.
pub fn render_content(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut open_list: Option<Vec<String>> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match strip_list_marker(trimmed) {
            Some(item) => {
                let items = open_list.get_or_insert_with(Vec::new);
                if !item.is_empty() {
                    items.push(item.to_string());
                }
            }
            None => {
                if let Some(items) = open_list.take() {
                    push_list(&mut blocks, items);
                }
                blocks.push(Block::Paragraph {
                    text: trimmed.to_string(),
                });
            }
        }
    }

    if let Some(items) = open_list {
        push_list(&mut blocks, items);
    }

    blocks
}

fn push_list(blocks: &mut Vec<Block>, items: Vec<String>) {
    if !items.is_empty() {
        blocks.push(Block::List { items });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Block {
        Block::List {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_content_renders_nothing() {
        assert!(render_content("").is_empty());
        assert!(render_content("\n\n  \n").is_empty());
    }

    #[test]
    fn test_dash_bullet_stripped() {
        let blocks = render_content("- Uses clichés like 'team player'");
        assert_eq!(blocks, vec![list(&["Uses clichés like 'team player'"])]);
    }

    #[test]
    fn test_numbered_items_grouped() {
        let blocks = render_content("1. Too long\n2. Vague\n3. Typos");
        assert_eq!(blocks, vec![list(&["Too long", "Vague", "Typos"])]);
    }

    #[test]
    fn test_paren_numbering_and_round_bullets() {
        let blocks = render_content("1) First\n• Second\n-Third");
        assert_eq!(blocks, vec![list(&["First", "Second", "Third"])]);
    }

    #[test]
    fn test_paragraph_closes_list() {
        let blocks = render_content("Intro line\n- one\n- two\nClosing thought");
        assert_eq!(
            blocks,
            vec![
                paragraph("Intro line"),
                list(&["one", "two"]),
                paragraph("Closing thought"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_separate_paragraphs_without_empty_units() {
        let blocks = render_content("First paragraph.\n\n\nSecond paragraph.");
        assert_eq!(
            blocks,
            vec![paragraph("First paragraph."), paragraph("Second paragraph.")]
        );
    }

    #[test]
    fn test_blank_line_inside_list_keeps_it_open() {
        let blocks = render_content("1. Alpha\n\n2. Beta");
        assert_eq!(blocks, vec![list(&["Alpha", "Beta"])]);
    }

    #[test]
    fn test_decimal_number_is_not_a_marker() {
        let blocks = render_content("3.5 years of experience, apparently");
        assert_eq!(blocks, vec![paragraph("3.5 years of experience, apparently")]);
    }

    #[test]
    fn test_bare_marker_skipped() {
        let blocks = render_content("-\n- real item");
        assert_eq!(blocks, vec![list(&["real item"])]);
    }

    #[test]
    fn test_block_serialization_shape() {
        let json = serde_json::to_value(list(&["a"])).unwrap();
        assert_eq!(json["type"], "list");
        assert_eq!(json["items"][0], "a");

        let json = serde_json::to_value(paragraph("p")).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["text"], "p");
    }
}
