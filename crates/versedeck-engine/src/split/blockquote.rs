use crate::models::Block;
use crate::parsing::normalize_whitespace;

use super::split_paragraph;

/// Splits quote text (markers already stripped) like a paragraph.
///
/// Each output segment is its own quote block; the `>` marker is re-applied
/// to every line when the block is rendered back to markdown.
pub fn split_blockquote(text: &str, max_chars: usize) -> Vec<Block> {
    if text.chars().count() <= max_chars.max(1) {
        return vec![Block::Blockquote {
            text: text.to_string(),
        }];
    }
    split_paragraph(&normalize_whitespace(text), max_chars)
        .into_iter()
        .map(|text| Block::Blockquote { text })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_quote_keeps_its_lines() {
        let text = "line one\nline two";
        assert_eq!(
            split_blockquote(text, 100),
            vec![Block::Blockquote {
                text: text.to_string()
            }]
        );
    }

    #[test]
    fn long_quote_collapses_then_splits() {
        let text = "First sentence here.\nSecond sentence here.\nThird one.";
        let parts = split_blockquote(text, 25);
        let texts: Vec<String> = parts.iter().map(Block::content_text).collect();
        assert_eq!(
            texts,
            vec!["First sentence here.", "Second sentence here.", "Third one."]
        );
        assert!(parts.iter().all(|b| matches!(b, Block::Blockquote { .. })));
        assert_eq!(parts[0].to_markdown(), "> First sentence here.");
    }
}
