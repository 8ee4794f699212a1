use crate::parsing::placeholder::Placeholder;

use super::kinds::{BlockQuote, CodeFence, FenceKind, Heading, ListMarker};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block extraction: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass<'a> {
    /// The raw line, without its newline.
    pub text: &'a str,
    /// Leading indentation width in columns (tabs count as [`MarkdownLineClassifier::TAB_WIDTH`]).
    pub indent: usize,
    /// Line text after the indentation.
    pub content: &'a str,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// Remainder after one blockquote marker, if the line is quoted.
    pub quote: Option<&'a str>,
    /// Fence delimiter at the start of the content, if any.
    pub fence: Option<FenceKind>,
    /// List-item marker at the start of the content.
    pub list_marker: Option<ListMarker>,
    /// `#`..`###` heading level and text.
    pub heading: Option<(u8, &'a str)>,
    /// Widget slot index when the whole line is one widget token.
    pub widget: Option<usize>,
}

/// Classifies individual lines for the block extraction phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub const TAB_WIDTH: usize = 4;

    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let content = line.trim_start_matches([' ', '\t']);
        let indent = line[..line.len() - content.len()]
            .chars()
            .map(|c| if c == '\t' { Self::TAB_WIDTH } else { 1 })
            .sum();

        LineClass {
            text: line,
            indent,
            content,
            is_blank: content.trim().is_empty(),
            quote: BlockQuote::strip_marker(line),
            fence: CodeFence::detect(content),
            list_marker: ListMarker::parse(content),
            heading: Heading::parse(content),
            widget: Placeholder::WIDGET.parse_exact(content.trim_end()),
        }
    }
}
