//! # Block Splitters
//!
//! Type-specific subdivision of one oversized block into an ordered list of
//! smaller blocks of the same variant. Concatenating the output reproduces
//! the input, modulo whitespace normalisation at the split points.
//!
//! - **`paragraph`**: sentence bin-packing with whitespace hard-slice fallback
//! - **`list`**: whole-item grouping under item-count and character ceilings
//! - **`blockquote`**: marker-free text through the paragraph splitter
//!
//! Code fences, headings and widgets are returned unchanged.

pub mod blockquote;
pub mod list;
pub mod paragraph;

use serde::Serialize;

use crate::models::Block;

pub use blockquote::split_blockquote;
pub use list::split_list;
pub use paragraph::split_paragraph;

/// Size profile driving the splitters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SplitLimits {
    pub max_paragraph_chars: usize,
    pub max_list_items: usize,
    pub max_list_chars: usize,
}

impl SplitLimits {
    /// Small screens (phones, narrow windows).
    pub const fn compact() -> Self {
        Self {
            max_paragraph_chars: 280,
            max_list_items: 5,
            max_list_chars: 400,
        }
    }

    /// Large screens.
    pub const fn roomy() -> Self {
        Self {
            max_paragraph_chars: 600,
            max_list_items: 8,
            max_list_chars: 900,
        }
    }
}

impl Default for SplitLimits {
    fn default() -> Self {
        Self::roomy()
    }
}

/// Splits one block according to its type. Always returns at least one block.
pub fn split_block(block: &Block, limits: &SplitLimits) -> Vec<Block> {
    match block {
        Block::Paragraph { text } => split_paragraph(text, limits.max_paragraph_chars)
            .into_iter()
            .map(|text| Block::Paragraph { text })
            .collect(),
        Block::List {
            ordered,
            start,
            items,
        } => split_list(
            *ordered,
            *start,
            items,
            limits.max_list_items,
            limits.max_list_chars,
        ),
        Block::Blockquote { text } => split_blockquote(text, limits.max_paragraph_chars),
        Block::Heading { .. } | Block::CodeFence { .. } | Block::Widget { .. } => {
            vec![block.clone()]
        }
    }
}

/// Pre-expands a section body so that no single block is pathologically large.
pub fn expand_blocks(blocks: &[Block], limits: &SplitLimits) -> Vec<Block> {
    blocks.iter().flat_map(|b| split_block(b, limits)).collect()
}
