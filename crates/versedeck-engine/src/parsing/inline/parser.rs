use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Strong},
    types::{InlineNode, Span},
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// Single pass, left to right. At each position constructs are tried in
/// precedence order: code span, strong, emphasis. Consumed runs are never
/// reconsidered, so a `**bold**` run cannot also yield an emphasis, and
/// nothing is parsed inside a code span.
///
/// # Returns
/// A vector of inline nodes covering the entire input. Text between styled
/// constructs is emitted as `InlineNode::Text`. Unclosed delimiters are text.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.offset();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.at_end() {
        let node = try_parse_code_span(&mut cur)
            .or_else(|| try_parse_strong(&mut cur))
            .or_else(|| try_parse_emphasis(&mut cur));
        if let Some(node) = node {
            flush_text(&mut out, text_start, node.full().start);
            text_start = node.full().end;
            out.push(node);
            continue;
        }
        cur.advance();
    }

    flush_text(&mut out, text_start, cur.offset());
    out
}

/// Attempts to parse a non-empty code span at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.current() != Some(CodeSpan::TICK) {
        return None;
    }
    delimited(cur, 1, CodeSpan::TICK, &[CodeSpan::TICK])
        .map(|(full, inner)| InlineNode::CodeSpan { full, inner })
}

fn try_parse_strong(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.looking_at(Strong::DELIM) {
        return None;
    }
    delimited(cur, Strong::DELIM.len(), Emphasis::STAR, Strong::DELIM)
        .map(|(full, inner)| InlineNode::Strong { full, inner })
}

/// Emphasis may not open directly after another `*`.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.current() != Some(Emphasis::STAR) || cur.preceding() == Some(Emphasis::STAR) {
        return None;
    }
    delimited(cur, 1, Emphasis::STAR, &[Emphasis::STAR])
        .map(|(full, inner)| InlineNode::Emphasis { full, inner })
}

/// Consumes `open_len` opener bytes, a non-empty run free of `stop`, and a
/// closer that must start at the first `stop` byte.
fn delimited(cur: &mut Cursor<'_>, open_len: usize, stop: u8, close: &[u8]) -> Option<(Span, Span)> {
    let saved = *cur;
    let start = cur.offset();
    cur.skip(open_len);
    let inner_start = cur.offset();
    cur.skip_to(stop);
    let inner_end = cur.offset();

    if inner_end == inner_start || !cur.looking_at(close) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.skip(close.len());

    Some((
        Span {
            start,
            end: cur.offset(),
        },
        Span {
            start: inner_start,
            end: inner_end,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<&'static str> {
        parse_inline(s)
            .iter()
            .map(|n| match n {
                InlineNode::Text(_) => "text",
                InlineNode::CodeSpan { .. } => "code",
                InlineNode::Strong { .. } => "strong",
                InlineNode::Emphasis { .. } => "em",
            })
            .collect()
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline("hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span { start: 0, end: 11 })]);
    }

    #[test]
    fn parse_code_span() {
        let nodes = parse_inline("`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::CodeSpan {
                full: Span { start: 0, end: 6 },
                inner: Span { start: 1, end: 5 },
            }]
        );
    }

    #[test]
    fn parse_strong_and_emphasis() {
        assert_eq!(kinds("a **b** c *d*"), vec!["text", "strong", "text", "em"]);
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        assert_eq!(kinds("`a *b* c`"), vec!["code"]);
    }

    #[test]
    fn strong_run_is_not_reconsidered_for_emphasis() {
        let nodes = parse_inline("**bold**");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], InlineNode::Strong { .. }));
    }

    #[test]
    fn emphasis_after_failed_strong() {
        assert_eq!(kinds("**a*b**"), vec!["text", "em", "text"]);
    }

    #[test]
    fn unclosed_constructs_become_text() {
        assert_eq!(kinds("`open and *open and **open"), vec!["text"]);
    }

    #[test]
    fn empty_delimiters_are_text() {
        assert_eq!(kinds("`` and **"), vec!["text"]);
    }

    #[test]
    fn multibyte_text_keeps_boundaries() {
        let s = "é *ü* ñ";
        let nodes = parse_inline(s);
        assert_eq!(nodes.len(), 3);
        if let InlineNode::Emphasis { inner, .. } = &nodes[1] {
            assert_eq!(inner.slice(s), "ü");
        } else {
            panic!("expected Emphasis");
        }
    }
}
