//! # Document Parsing
//!
//! Raw text → [`Section`]s of typed [`Block`](crate::models::Block)s.
//!
//! Pipeline order matters:
//!
//! 1. `normalize_newlines`: `\r\n` / `\r` become `\n`
//! 2. `widgets`: embed directives are swapped for opaque tokens first, so
//!    nothing inside a directive can influence structure
//! 3. `sections`: split at top-level `# ` headings (fence-aware)
//! 4. `blocks`: per-section block extraction; tokens come back as widget
//!    blocks or, outside paragraphs, as their literal directive text
//!
//! `inline` is independent of the pipeline: it renders a block's inline text
//! and protects styled spans for the splitters.

pub mod blocks;
pub mod inline;
pub mod placeholder;
pub mod sections;
pub mod widgets;

use crate::models::Section;

use sections::{RawSection, split_sections};
use widgets::{IsolatedText, isolate_widgets};

/// A parsed source document: raw section texts plus the widget table their
/// tokens refer to. Immutable once built.
#[derive(Debug, Clone)]
pub struct Document {
    sections: Vec<RawSection>,
    widgets: IsolatedText,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let normalized = normalize_newlines(text);
        let widgets = isolate_widgets(&normalized);
        let sections = split_sections(&widgets.text);
        Self { sections, widgets }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Extracts the blocks of every section, in document order.
    pub fn sections(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|raw| Section {
                heading: self.widgets.restore(&raw.heading),
                blocks: blocks::extract_blocks(&raw.body, &self.widgets),
            })
            .collect()
    }
}

/// Convenience: parse and extract in one step.
pub fn parse_document(text: &str) -> Vec<Section> {
    Document::parse(text).sections()
}

/// Normalizes `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Collapses every whitespace run to a single space and trims the ends.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
