//! Bracket-embed isolation.
//!
//! `[Bible: <reference>]` and `[YouTube: <id>]` directives are swapped for
//! opaque placeholder tokens before any structural detection runs, so list
//! markers, blank lines or sentence punctuation inside a reference can never
//! influence block boundaries. Restoration is the inverse lookup and does not
//! depend on order because every token carries its own slot index.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Block, WidgetKind};

use super::placeholder::Placeholder;

/// One isolated directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub kind: WidgetKind,
    /// Trimmed directive argument (reference or video id).
    pub payload: String,
    /// The directive exactly as it appeared in the source.
    pub source: String,
}

impl Widget {
    pub fn to_block(&self) -> Block {
        Block::Widget {
            kind: self.kind,
            payload: self.payload.clone(),
        }
    }
}

/// Text with every directive replaced by a token, plus the token table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsolatedText {
    pub text: String,
    widgets: Vec<Widget>,
}

impl IsolatedText {
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Returns the widget if `s` (ignoring surrounding whitespace) is exactly one token.
    pub fn widget_for_line(&self, s: &str) -> Option<&Widget> {
        Placeholder::WIDGET
            .parse_exact(s.trim())
            .and_then(|i| self.widgets.get(i))
    }

    pub fn widget(&self, index: usize) -> Option<&Widget> {
        self.widgets.get(index)
    }

    /// Puts the original directive text back in place of every token.
    pub fn restore(&self, s: &str) -> String {
        Placeholder::WIDGET.replace_all(s, |i| self.widgets.get(i).map(|w| w.source.as_str()))
    }
}

fn directive_regex() -> &'static Regex {
    static DIRECTIVE_REGEX: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE_REGEX.get_or_init(|| {
        Regex::new(r"\[(Bible|YouTube):[ \t]*([^\]\n]+)\]").expect("Invalid directive regex")
    })
}

/// Replaces each well-formed directive with a unique placeholder token.
///
/// A directive never spans a line break. Malformed syntax (missing `]`,
/// empty argument) stays in the text as a literal.
pub fn isolate_widgets(text: &str) -> IsolatedText {
    let mut widgets = Vec::new();
    let isolated = directive_regex().replace_all(text, |caps: &regex::Captures<'_>| {
        let source = caps[0].to_string();
        let payload = caps[2].trim();
        if payload.is_empty() {
            return source;
        }
        let kind = match &caps[1] {
            "Bible" => WidgetKind::Bible,
            _ => WidgetKind::Video,
        };
        let token = Placeholder::WIDGET.token(widgets.len());
        widgets.push(Widget {
            kind,
            payload: payload.to_string(),
            source,
        });
        token
    });

    IsolatedText {
        text: isolated.into_owned(),
        widgets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn isolates_bible_and_video_directives() {
        let iso = isolate_widgets("See [Bible: John 3:16] and [YouTube: abc123].");
        assert_eq!(iso.widgets().len(), 2);
        assert_eq!(iso.widgets()[0].kind, WidgetKind::Bible);
        assert_eq!(iso.widgets()[0].payload, "John 3:16");
        assert_eq!(iso.widgets()[1].kind, WidgetKind::Video);
        assert_eq!(iso.widgets()[1].payload, "abc123");
        assert!(!iso.text.contains('['));
    }

    #[test]
    fn restore_is_the_inverse() {
        let src = "A [Bible: Romans 8:28 - 39] then [YouTube:  xyz ] end";
        let iso = isolate_widgets(src);
        assert_eq!(iso.restore(&iso.text), src);
    }

    #[test]
    fn restore_works_on_reordered_fragments() {
        let iso = isolate_widgets("[Bible: A]\n[Bible: B]");
        let second_line = iso.text.lines().nth(1).unwrap();
        assert_eq!(iso.restore(second_line), "[Bible: B]");
    }

    #[test]
    fn unbalanced_bracket_is_literal() {
        let iso = isolate_widgets("Broken [Bible: John 3:16 here");
        assert!(iso.widgets().is_empty());
        assert_eq!(iso.text, "Broken [Bible: John 3:16 here");
    }

    #[test]
    fn directive_does_not_span_lines() {
        let iso = isolate_widgets("[Bible: John\n3:16]");
        assert!(iso.widgets().is_empty());
    }

    #[test]
    fn empty_argument_is_literal() {
        let iso = isolate_widgets("[Bible:   ]");
        assert!(iso.widgets().is_empty());
        assert_eq!(iso.text, "[Bible:   ]");
    }

    #[test]
    fn whole_line_token_resolves_to_widget() {
        let iso = isolate_widgets("  [YouTube: v1]  ");
        let widget = iso.widget_for_line(&iso.text).unwrap();
        assert_eq!(widget.payload, "v1");
    }
}
