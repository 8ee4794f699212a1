//! # Block Extraction
//!
//! Two-phase, line-oriented extraction of a section body into [`Block`]s.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` of local facts (indentation, quote marker, fence signature,
//!    list marker, heading, widget token, blank status)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the one open
//!    run and emits blocks as runs open and close
//!
//! ## Modules
//!
//! - **`kinds`**: block types owning their delimiters (BlockQuote, CodeFence,
//!   Heading, ListMarker)
//! - **`classify`**: `MarkdownLineClassifier`
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block detection inside
//! - Blank lines separate blocks; nesting is not modelled
//! - A line holding only a widget token becomes a widget block in place

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};

use crate::models::Block;

use super::widgets::IsolatedText;

/// Extracts the ordered block sequence of one (already isolated) section body.
pub fn extract_blocks(body: &str, widgets: &IsolatedText) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new(widgets);

    for line in body.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
