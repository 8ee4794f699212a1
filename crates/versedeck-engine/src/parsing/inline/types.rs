/// A byte range `[start, end)` into the inline source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}

/// A parsed inline node with byte spans into the source string.
///
/// Styled variants are never nested: their inner text is plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any styled construct.
    Text(Span),
    /// `` `code` `` - a raw zone, no parsing inside.
    CodeSpan { full: Span, inner: Span },
    /// `**bold**`
    Strong { full: Span, inner: Span },
    /// `*italic*`
    Emphasis { full: Span, inner: Span },
}

impl InlineNode {
    /// Extracts the full span from any inline node variant.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. }
            | InlineNode::Strong { full, .. }
            | InlineNode::Emphasis { full, .. } => *full,
        }
    }

    pub fn is_styled(&self) -> bool {
        !matches!(self, InlineNode::Text(_))
    }
}
