//! Paragraph splitting.
//!
//! Styled spans are protected first, then sentences are bin-packed greedily.
//! A sentence longer than the ceiling on its own is hard-sliced at the last
//! whitespace inside the window.

use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{ProtectedText, protect_spans};
use crate::parsing::placeholder::Placeholder;

fn sentence_break_regex() -> &'static Regex {
    static SENTENCE_BREAK_REGEX: OnceLock<Regex> = OnceLock::new();
    SENTENCE_BREAK_REGEX
        .get_or_init(|| Regex::new(r"[.!?]\s+[\p{Lu}\p{Nd}]").expect("Invalid sentence regex"))
}

/// Splits paragraph text into segments of at most `max_chars` characters.
///
/// Segments rejoined with a single space reproduce whitespace-normalised
/// input. The ceiling is only exceeded by one unbreakable unit: a word or a
/// protected span that is longer than `max_chars` by itself.
pub fn split_paragraph(text: &str, max_chars: usize) -> Vec<String> {
    let max = max_chars.max(1);
    if text.chars().count() <= max {
        return vec![text.to_string()];
    }

    let protected = protect_spans(text);
    let mut packed: Vec<(String, usize)> = vec![];
    let mut current = String::new();
    let mut current_len = 0usize;

    for sentence in sentences(&protected.text) {
        let len = protected.display_len(sentence);
        if current.is_empty() {
            current.push_str(sentence);
            current_len = len;
        } else if current_len + 1 + len <= max {
            current.push(' ');
            current.push_str(sentence);
            current_len += 1 + len;
        } else {
            packed.push((std::mem::take(&mut current), current_len));
            current.push_str(sentence);
            current_len = len;
        }
    }
    if !current.is_empty() {
        packed.push((current, current_len));
    }

    let mut out = vec![];
    for (segment, len) in packed {
        if len <= max {
            out.push(protected.restore(&segment));
        } else {
            log::trace!("hard-slicing a {len}-char sentence run");
            out.extend(
                hard_slice(&segment, &protected, max)
                    .iter()
                    .map(|piece| protected.restore(piece)),
            );
        }
    }
    out
}

/// Sentence ranges in protected text: a terminator, whitespace, then an
/// uppercase letter or digit begins the next sentence.
fn sentences(text: &str) -> Vec<&str> {
    let mut out = vec![];
    let mut start = 0usize;
    for m in sentence_break_regex().find_iter(text) {
        let end = m.start() + 1;
        let next = m.start() + m.as_str().char_indices().last().map_or(0, |(i, _)| i);
        out.push(text[start..end].trim());
        start = next;
    }
    out.push(text[start..].trim());
    out.retain(|s| !s.is_empty());
    out
}

/// Smallest piece the hard slicer moves: one char, one whitespace char, or
/// one whole protected-span token.
#[derive(Debug, Clone, Copy)]
struct Unit {
    start: usize,
    end: usize,
    width: usize,
    is_space: bool,
}

fn units(segment: &str, protected: &ProtectedText) -> Vec<Unit> {
    let mut tokens = Placeholder::SPAN.find_all(segment).into_iter().peekable();
    let mut out = vec![];
    let mut i = 0usize;
    while i < segment.len() {
        if let Some((range, index)) = tokens.next_if(|(range, _)| range.start == i) {
            let width = protected.span(index).map_or(1, |s| s.chars().count());
            out.push(Unit {
                start: range.start,
                end: range.end,
                width,
                is_space: false,
            });
            i = range.end;
            continue;
        }
        let Some(c) = segment[i..].chars().next() else {
            break;
        };
        out.push(Unit {
            start: i,
            end: i + c.len_utf8(),
            width: 1,
            is_space: c.is_whitespace(),
        });
        i += c.len_utf8();
    }
    out
}

fn hard_slice(segment: &str, protected: &ProtectedText, max: usize) -> Vec<String> {
    let units = units(segment, protected);
    let piece = |from: usize, to: usize| -> String {
        segment[units[from].start..units[to - 1].end]
            .trim_end()
            .to_string()
    };

    let mut out = vec![];
    let mut from = 0usize;
    loop {
        while from < units.len() && units[from].is_space {
            from += 1;
        }
        if from >= units.len() {
            break;
        }

        let mut width = 0usize;
        let mut end = from;
        while end < units.len() && width + units[end].width <= max {
            width += units[end].width;
            end += 1;
        }
        if end == from {
            // a single unit wider than the window travels alone
            end = from + 1;
        }
        if end == units.len() {
            out.push(piece(from, end));
            break;
        }

        let cut = if units[end].is_space {
            end
        } else {
            (from + 1..end)
                .rev()
                .find(|&k| units[k].is_space)
                .unwrap_or(end)
        };
        out.push(piece(from, cut));
        from = cut;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(n: usize) -> String {
        (0..n)
            .map(|i| format!("word{i:03}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn short_text_is_one_segment() {
        assert_eq!(split_paragraph("Hello there.", 50), vec!["Hello there."]);
    }

    #[test]
    fn sentences_are_packed_greedily() {
        let text = "One two. Three four. Five six.";
        assert_eq!(
            split_paragraph(text, 20),
            vec!["One two. Three four.", "Five six."]
        );
    }

    #[test]
    fn sentence_break_needs_capital_or_digit() {
        let text = "e.g. this stays together. Then 3 more.";
        assert_eq!(
            sentences(text),
            vec!["e.g. this stays together.", "Then 3 more."]
        );
    }

    #[test]
    fn long_run_without_punctuation_is_hard_sliced() {
        let text = words(250);
        assert!(text.chars().count() >= 1900);
        let segments = split_paragraph(&text, 500);
        assert!(segments.len() >= 4);
        for seg in &segments {
            assert!(seg.chars().count() <= 500, "segment too long: {}", seg.len());
        }
        assert_eq!(segments.join(" "), text);
    }

    #[test]
    fn split_never_falls_inside_a_code_span() {
        let text = "Call `a. B. c. D` now. Then continue here.";
        let segments = split_paragraph(text, 24);
        assert!(segments.iter().any(|s| s.contains("`a. B. c. D`")));
        assert_eq!(segments.join(" "), text);
    }

    #[test]
    fn oversized_span_is_never_cut() {
        let code = format!("`{}`", "x".repeat(30));
        let text = format!("aa {code} bb");
        let segments = split_paragraph(&text, 10);
        assert_eq!(segments, vec!["aa".to_string(), code, "bb".to_string()]);
    }

    #[test]
    fn oversized_trailing_span_travels_alone() {
        let code = format!("`{}`", "x".repeat(30));
        let segments = split_paragraph(&format!("aa {code}"), 10);
        assert_eq!(segments, vec!["aa".to_string(), code]);
    }

    #[test]
    fn whole_italic_paragraph_stays_one_segment() {
        let verse = format!("*{}*", words(40));
        assert!(verse.chars().count() > 280);
        assert_eq!(split_paragraph(&verse, 280), vec![verse.clone()]);
    }

    #[test]
    fn single_giant_word_is_cut_mid_word() {
        let text = "y".repeat(25);
        let segments = split_paragraph(&text, 10);
        assert_eq!(segments.iter().map(String::len).collect::<Vec<_>>(), vec![10, 10, 5]);
    }

    #[test]
    fn zero_ceiling_still_terminates() {
        assert_eq!(split_paragraph("a b", 0), vec!["a", "b"]);
    }
}
