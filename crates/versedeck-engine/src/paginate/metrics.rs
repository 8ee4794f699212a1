use crate::models::{Block, SlideHeading, WidgetKind};
use crate::parsing::inline::plain_inline;

use super::Measure;

/// Headless measurement oracle: estimated terminal rows at a fixed width.
///
/// Text is word-wrapped after inline markup is stripped; a word wider than
/// the line is broken across rows. One blank row separates the heading and
/// every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: usize,
}

impl TextMetrics {
    /// Rows taken by a scripture panel in its collapsed state.
    pub const BIBLE_ROWS: usize = 3;
    /// Rows reserved for an embedded player.
    pub const VIDEO_ROWS: usize = 8;

    const MARKER_WIDTH: usize = 2;

    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    /// Rows one block occupies.
    pub fn block_rows(&self, block: &Block) -> usize {
        let indented = self.width.saturating_sub(Self::MARKER_WIDTH).max(1);
        match block {
            Block::Heading { text, .. } | Block::Paragraph { text } => {
                wrapped_rows(&plain_inline(text), self.width)
            }
            Block::List { items, .. } => items
                .iter()
                .map(|item| wrapped_rows(&plain_inline(item), indented))
                .sum(),
            Block::Blockquote { text } => text
                .split('\n')
                .map(|line| wrapped_rows(&plain_inline(line), indented))
                .sum(),
            Block::CodeFence { text, .. } => text
                .split('\n')
                .map(|line| line.chars().count().div_ceil(self.width).max(1))
                .sum(),
            Block::Widget { kind, .. } => match kind {
                WidgetKind::Bible => Self::BIBLE_ROWS,
                WidgetKind::Video => Self::VIDEO_ROWS,
            },
        }
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new(80)
    }
}

impl Measure for TextMetrics {
    fn measure(&mut self, heading: &SlideHeading, blocks: &[Block]) -> usize {
        let heading_rows = wrapped_rows(&plain_inline(&heading.display()), self.width);
        heading_rows + blocks.iter().map(|b| 1 + self.block_rows(b)).sum::<usize>()
    }
}

/// Greedy word-wrap row count. Empty text still takes one row.
fn wrapped_rows(text: &str, width: usize) -> usize {
    let width = width.max(1);
    let mut rows = 1usize;
    let mut col = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if col > 0 && col + 1 + len <= width {
            col += 1 + len;
            continue;
        }
        if col > 0 {
            rows += 1;
        }
        // overlong words spill onto extra rows
        rows += (len.max(1) - 1) / width;
        col = match len % width {
            0 => width,
            rest => rest,
        };
    }
    rows
}
