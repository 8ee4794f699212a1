use crate::models::Block;
use crate::parsing::{normalize_whitespace, placeholder::Placeholder, widgets::IsolatedText};

use super::{
    classify::LineClass,
    kinds::{CodeFence, FenceKind, ListMarker},
};

#[derive(Debug, Clone, Default)]
enum OpenBlock {
    #[default]
    None,
    Paragraph {
        lines: Vec<String>,
    },
    Fence {
        kind: FenceKind,
        lang: Option<String>,
        lines: Vec<String>,
    },
    Quote {
        lines: Vec<String>,
    },
    List {
        ordered: bool,
        start: u32,
        base_indent: usize,
        items: Vec<String>,
    },
}

/// Phase 2 of block extraction: a state machine fed one [`LineClass`] at a
/// time that emits [`Block`]s as runs open and close.
///
/// Precedence per line is fence, blockquote, list, heading, paragraph.
/// Widget tokens still embedded in non-paragraph text are restored to their
/// literal directive when the block is emitted.
pub struct BlockBuilder<'w> {
    widgets: &'w IsolatedText,
    open: OpenBlock,
    out: Vec<Block>,
}

impl<'w> BlockBuilder<'w> {
    pub fn new(widgets: &'w IsolatedText) -> Self {
        Self {
            widgets,
            open: OpenBlock::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        let widgets = self.widgets;

        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush();
            return;
        }

        if let Some(widget) = c.widget.and_then(|i| widgets.widget(i)) {
            self.flush();
            self.out.push(widget.to_block());
            return;
        }

        if let Some(kind) = c.fence {
            self.flush();
            self.open_fence(kind, c.content);
            return;
        }

        if let Some(rest) = c.quote {
            self.extend_quote(rest);
            return;
        }

        if self.continue_list(c) {
            return;
        }

        if let Some(marker) = c.list_marker {
            self.flush();
            self.open = OpenBlock::List {
                ordered: marker.ordered,
                start: marker.number,
                base_indent: c.indent,
                items: vec![item_text(c.content, marker).to_string()],
            };
            return;
        }

        if let Some((level, text)) = c.heading {
            self.flush();
            self.out.push(Block::Heading {
                level,
                text: widgets.restore(text),
            });
            return;
        }

        self.extend_paragraph(c.content);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush; an unterminated fence extends to the end of the section.
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.open, OpenBlock::Fence { .. })
    }

    fn open_fence(&mut self, kind: FenceKind, content: &str) {
        match CodeFence::open(kind, content) {
            (_, Some(body)) => self.out.push(Block::CodeFence {
                lang: None,
                text: self.widgets.restore(&body),
            }),
            (lang, None) => {
                self.open = OpenBlock::Fence {
                    kind,
                    lang,
                    lines: vec![],
                }
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        let OpenBlock::Fence { kind, lines, .. } = &mut self.open else {
            return;
        };
        if CodeFence::closes(*kind, c.fence) {
            self.flush();
        } else {
            lines.push(c.text.to_string());
        }
    }

    fn extend_quote(&mut self, rest: &str) {
        if let OpenBlock::Quote { lines } = &mut self.open {
            lines.push(rest.to_string());
            return;
        }
        self.flush();
        self.open = OpenBlock::Quote {
            lines: vec![rest.to_string()],
        };
    }

    /// Feeds the line to an open list. Only lines at exactly the base indent
    /// start a new item; deeper lines are continuation text of the current one.
    fn continue_list(&mut self, c: &LineClass<'_>) -> bool {
        let OpenBlock::List {
            ordered,
            base_indent,
            items,
            ..
        } = &mut self.open
        else {
            return false;
        };

        match c.list_marker {
            Some(marker) if c.indent == *base_indent && marker.ordered == *ordered => {
                items.push(item_text(c.content, marker).to_string());
                true
            }
            _ if c.indent > *base_indent => {
                if let Some(last) = items.last_mut() {
                    last.push(' ');
                    last.push_str(c.content);
                }
                true
            }
            _ => false,
        }
    }

    fn extend_paragraph(&mut self, content: &str) {
        if let OpenBlock::Paragraph { lines } = &mut self.open {
            lines.push(content.to_string());
            return;
        }
        self.flush();
        self.open = OpenBlock::Paragraph {
            lines: vec![content.to_string()],
        };
    }

    /// Only paragraphs carve out widget blocks. A directive inside a list
    /// item, quote, fence or heading comes back as its literal text, since a
    /// block cannot hold a widget.
    fn flush(&mut self) {
        match std::mem::take(&mut self.open) {
            OpenBlock::None => {}
            OpenBlock::Paragraph { lines } => self.emit_paragraph(&lines.join(" ")),
            OpenBlock::Fence { lang, lines, .. } => self.out.push(Block::CodeFence {
                lang,
                text: self.widgets.restore(&lines.join("\n")),
            }),
            OpenBlock::Quote { lines } => self.out.push(Block::Blockquote {
                text: self.widgets.restore(&lines.join("\n")),
            }),
            OpenBlock::List {
                ordered,
                start,
                items,
                ..
            } => self.out.push(Block::List {
                ordered,
                start,
                items: items
                    .iter()
                    .map(|item| normalize_whitespace(&self.widgets.restore(item)))
                    .collect(),
            }),
        }
    }

    /// Emits a paragraph, carving out any widget token as its own block
    /// positioned where the token appeared.
    fn emit_paragraph(&mut self, raw: &str) {
        let widgets = self.widgets;
        let text = normalize_whitespace(raw);
        let mut last = 0usize;
        for (range, index) in Placeholder::WIDGET.find_all(&text) {
            let Some(widget) = widgets.widget(index) else {
                continue;
            };
            self.push_paragraph_text(&text[last..range.start]);
            self.out.push(widget.to_block());
            last = range.end;
        }
        self.push_paragraph_text(&text[last..]);
    }

    fn push_paragraph_text(&mut self, text: &str) {
        let text = text.trim();
        if !text.is_empty() {
            self.out.push(Block::Paragraph {
                text: self.widgets.restore(text),
            });
        }
    }
}

fn item_text(content: &str, marker: ListMarker) -> &str {
    content[marker.content_offset..].trim()
}
