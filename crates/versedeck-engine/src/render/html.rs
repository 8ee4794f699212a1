use std::fmt::Write;

use crate::models::{Block, Slide, WidgetKind};
use crate::parsing::inline::render_inline;
use crate::reveal::RevealNavigator;

/// Turns a widget placeholder into markup.
pub trait WidgetRenderer {
    fn render_widget(&self, kind: WidgetKind, payload: &str) -> String;
}

/// Neutral markup carrying the widget's kind and payload as data attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderWidgets;

impl WidgetRenderer for PlaceholderWidgets {
    fn render_widget(&self, kind: WidgetKind, payload: &str) -> String {
        format!(
            r#"<div class="widget" data-kind="{}" data-payload="{}"></div>"#,
            kind.as_str(),
            html_escape::encode_double_quoted_attribute(payload)
        )
    }
}

pub struct HtmlRenderer<'w> {
    widgets: &'w dyn WidgetRenderer,
}

impl Default for HtmlRenderer<'static> {
    fn default() -> Self {
        Self {
            widgets: &PlaceholderWidgets,
        }
    }
}

impl<'w> HtmlRenderer<'w> {
    pub fn new(widgets: &'w dyn WidgetRenderer) -> Self {
        Self { widgets }
    }

    /// Renders a whole slide. With a navigator, list items carry
    /// `class="revealed"` once shown.
    pub fn render_slide(&self, slide: &Slide, navigator: Option<&RevealNavigator>) -> String {
        let mut revealed = navigator
            .map(|nav| {
                nav.visible_units(slide)
                    .into_iter()
                    .map(|u| u.revealed)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
            .into_iter();

        let mut out = String::new();
        let _ = writeln!(out, r#"<section class="slide" data-index="{}">"#, slide.index);
        let _ = writeln!(out, "<h1>{}</h1>", render_inline(&slide.heading.display()));
        for block in &slide.blocks {
            out.push_str(&self.render_block_with(block, &mut revealed));
            out.push('\n');
        }
        out.push_str("</section>");
        out
    }

    pub fn render_block(&self, block: &Block) -> String {
        self.render_block_with(block, &mut std::iter::empty::<bool>())
    }

    fn render_block_with(&self, block: &Block, revealed: &mut dyn Iterator<Item = bool>) -> String {
        match block {
            Block::Heading { level, text } => {
                let level = (*level).clamp(1, 3);
                format!("<h{level}>{}</h{level}>", render_inline(text))
            }
            Block::Paragraph { text } => format!("<p>{}</p>", render_inline(text)),
            Block::List {
                ordered,
                start,
                items,
            } => {
                let mut out = match (*ordered, *start) {
                    (true, 1) => "<ol>".to_string(),
                    (true, n) => format!(r#"<ol start="{n}">"#),
                    (false, _) => "<ul>".to_string(),
                };
                for item in items {
                    let class = match revealed.next() {
                        Some(true) => r#" class="revealed""#,
                        _ => "",
                    };
                    let _ = write!(out, "<li{class}>{}</li>", render_inline(item));
                }
                out.push_str(if *ordered { "</ol>" } else { "</ul>" });
                out
            }
            Block::Blockquote { text } => {
                let lines: Vec<String> = text.split('\n').map(render_inline).collect();
                format!("<blockquote>{}</blockquote>", lines.join("<br>"))
            }
            Block::CodeFence { lang, text } => {
                let class = lang
                    .as_deref()
                    .map(|l| {
                        format!(
                            r#" class="language-{}""#,
                            html_escape::encode_double_quoted_attribute(l)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"<pre class="codeblock"><code{class}>{}</code></pre>"#,
                    html_escape::encode_text(text)
                )
            }
            Block::Widget { kind, payload } => self.widgets.render_widget(*kind, payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlideHeading;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Block::Heading { level: 2, text: "A & B".into() }, "<h2>A &amp; B</h2>")]
    #[case(Block::paragraph("**hi** <there>"), "<p><strong>hi</strong> &lt;there&gt;</p>")]
    #[case(Block::list(false, ["a", "`b`"]), "<ul><li>a</li><li><code>b</code></li></ul>")]
    #[case(Block::List { ordered: true, start: 4, items: vec!["d".into()] }, r#"<ol start="4"><li>d</li></ol>"#)]
    #[case(Block::list(true, ["x"]), "<ol><li>x</li></ol>")]
    #[case(Block::Blockquote { text: "one\n*two*".into() }, "<blockquote>one<br><em>two</em></blockquote>")]
    #[case(
        Block::CodeFence { lang: Some("rust".into()), text: "a < b".into() },
        r#"<pre class="codeblock"><code class="language-rust">a &lt; b</code></pre>"#
    )]
    #[case(
        Block::Widget { kind: WidgetKind::Bible, payload: "John \"3\":16".into() },
        r#"<div class="widget" data-kind="bible" data-payload="John &quot;3&quot;:16"></div>"#
    )]
    fn renders_blocks(#[case] block: Block, #[case] expected: &str) {
        assert_eq!(HtmlRenderer::default().render_block(&block), expected);
    }

    struct Links;

    impl WidgetRenderer for Links {
        fn render_widget(&self, kind: WidgetKind, payload: &str) -> String {
            format!("[{}:{payload}]", kind.as_str())
        }
    }

    #[test]
    fn custom_widget_renderer_is_used() {
        let links = Links;
        let renderer = HtmlRenderer::new(&links);
        let widget = Block::Widget {
            kind: WidgetKind::Video,
            payload: "abc".into(),
        };
        assert_eq!(renderer.render_block(&widget), "[video:abc]");
    }

    #[test]
    fn slide_marks_revealed_items() {
        let slide = Slide {
            index: 0,
            heading: SlideHeading::new("Points", 2),
            blocks: vec![Block::list(false, ["a", "b"])],
        };
        let mut nav = RevealNavigator::for_slides(std::slice::from_ref(&slide));
        let html = HtmlRenderer::default().render_slide(&slide, Some(&nav));
        assert_eq!(
            html,
            "<section class=\"slide\" data-index=\"0\">\n<h1>Points (cont.)</h1>\n\
             <ul><li class=\"revealed\">a</li><li>b</li></ul>\n</section>"
        );
        nav.advance(0);
        let html = HtmlRenderer::default().render_slide(&slide, Some(&nav));
        assert!(html.contains(r#"<li class="revealed">b</li>"#));
    }
}
