use crate::parsing::placeholder::Placeholder;

use super::{parser::parse_inline, types::InlineNode};

/// Text whose styled inline spans were swapped for opaque tokens.
///
/// Character-position splitting works on `text`; a token never contains
/// whitespace or sentence punctuation, so no split point can fall inside a
/// code, bold or italic span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedText {
    pub text: String,
    spans: Vec<String>,
}

impl ProtectedText {
    /// Source text of protected span `index`.
    pub fn span(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(String::as_str)
    }

    /// Puts the original span text back in place of every token in `s`.
    pub fn restore(&self, s: &str) -> String {
        Placeholder::SPAN.replace_all(s, |i| self.span(i))
    }

    /// Character count of `s` once restored.
    pub fn display_len(&self, s: &str) -> usize {
        self.restore(s).chars().count()
    }
}

/// Extracts code, bold and italic spans into placeholders.
pub fn protect_spans(s: &str) -> ProtectedText {
    let mut text = String::with_capacity(s.len());
    let mut spans = vec![];
    for node in parse_inline(s) {
        let full = node.full().slice(s);
        if node.is_styled() {
            text.push_str(&Placeholder::SPAN.token(spans.len()));
            spans.push(full.to_string());
        } else {
            text.push_str(full);
        }
    }
    ProtectedText { text, spans }
}
