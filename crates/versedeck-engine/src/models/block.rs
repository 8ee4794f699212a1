use serde::Serialize;

/// The kind of external embed a widget placeholder stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// `[Bible: <reference>]` - a scripture reference panel.
    Bible,
    /// `[YouTube: <id>]` - an embeddable video player.
    Video,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Bible => "bible",
            WidgetKind::Video => "video",
        }
    }
}

/// A typed, immutable unit of slide content.
///
/// Splitting never mutates a block; it produces new blocks of the same
/// variant whose text concatenates back to the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `#`, `##` or `###` heading inside a section body.
    Heading { level: u8, text: String },
    /// Whitespace-normalised paragraph text (inline markup kept verbatim).
    Paragraph { text: String },
    /// Flat list; `start` is the first item's number (1 for bullet lists).
    List {
        ordered: bool,
        start: u32,
        items: Vec<String>,
    },
    /// Quote text with the `>` markers stripped, one source line per `\n`.
    Blockquote { text: String },
    /// Raw fenced code, delimiters excluded.
    CodeFence { lang: Option<String>, text: String },
    /// Opaque embed placeholder. Never split.
    Widget { kind: WidgetKind, payload: String },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn list<I, S>(ordered: bool, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::List {
            ordered,
            start: 1,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// True for blocks the splitters may subdivide.
    pub fn is_splittable(&self) -> bool {
        matches!(
            self,
            Block::Paragraph { .. } | Block::List { .. } | Block::Blockquote { .. }
        )
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Block::List { .. })
    }

    /// The list items this block contributes as reveal units.
    pub fn reveal_units(&self) -> &[String] {
        match self {
            Block::List { items, .. } => items,
            _ => &[],
        }
    }

    /// The block's textual content, without any markdown delimiters.
    ///
    /// List items are joined with a single space. Used to check that
    /// pagination neither drops nor duplicates content.
    pub fn content_text(&self) -> String {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::Blockquote { text }
            | Block::CodeFence { text, .. } => text.clone(),
            Block::List { items, .. } => items.join(" "),
            Block::Widget { payload, .. } => payload.clone(),
        }
    }

    /// Character count of [`Block::content_text`].
    pub fn char_len(&self) -> usize {
        match self {
            Block::List { items, .. } => {
                let chars: usize = items.iter().map(|i| i.chars().count()).sum();
                chars + items.len().saturating_sub(1)
            }
            _ => self.content_text().chars().count(),
        }
    }

    /// Re-emit the block as markdown source.
    pub fn to_markdown(&self) -> String {
        match self {
            Block::Heading { level, text } => {
                format!("{} {}", "#".repeat(*level as usize), text)
            }
            Block::Paragraph { text } => text.clone(),
            Block::List {
                ordered,
                start,
                items,
            } => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    if *ordered {
                        format!("{}. {}", *start as usize + i, item)
                    } else {
                        format!("- {item}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Blockquote { text } => text
                .lines()
                .map(|line| {
                    if line.is_empty() {
                        ">".to_string()
                    } else {
                        format!("> {line}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Block::CodeFence { lang, text } => {
                format!("```{}\n{}\n```", lang.as_deref().unwrap_or(""), text)
            }
            Block::Widget { kind, payload } => match kind {
                WidgetKind::Bible => format!("[Bible: {payload}]"),
                WidgetKind::Video => format!("[YouTube: {payload}]"),
            },
        }
    }
}

/// A top-level heading plus the blocks that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}
