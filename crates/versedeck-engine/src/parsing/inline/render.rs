use super::{parser::parse_inline, types::InlineNode};

/// Renders inline markdown to HTML.
///
/// Structural characters (`&`, `<`, `>`) are escaped everywhere, including
/// inside code spans; styled runs become `<code>`, `<strong>` and `<em>`.
pub fn render_inline(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 4);
    for node in parse_inline(s) {
        match node {
            InlineNode::Text(span) => out.push_str(&html_escape::encode_text(span.slice(s))),
            InlineNode::CodeSpan { inner, .. } => wrap(&mut out, "code", inner.slice(s)),
            InlineNode::Strong { inner, .. } => wrap(&mut out, "strong", inner.slice(s)),
            InlineNode::Emphasis { inner, .. } => wrap(&mut out, "em", inner.slice(s)),
        }
    }
    out
}

/// Renders inline markdown as plain text: delimiters dropped, nothing escaped.
///
/// This is what a reader actually sees, so text-metrics measurement uses it.
pub fn plain_inline(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for node in parse_inline(s) {
        match node {
            InlineNode::Text(span) => out.push_str(span.slice(s)),
            InlineNode::CodeSpan { inner, .. }
            | InlineNode::Strong { inner, .. }
            | InlineNode::Emphasis { inner, .. } => out.push_str(inner.slice(s)),
        }
    }
    out
}

fn wrap(out: &mut String, tag: &str, inner: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&html_escape::encode_text(inner));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
