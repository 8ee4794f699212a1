use std::ops::Range;

/// An opaque placeholder alphabet: `<open><index><close>`.
///
/// Both delimiters are private-use code points, so they never collide with
/// markdown syntax and contain no whitespace or punctuation that block or
/// sentence detection would react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub open: char,
    pub close: char,
}

impl Placeholder {
    /// Tokens standing in for `[Bible: …]` / `[YouTube: …]` directives.
    pub const WIDGET: Placeholder = Placeholder {
        open: '\u{E000}',
        close: '\u{E001}',
    };

    /// Tokens standing in for protected inline spans (code, bold, italic).
    pub const SPAN: Placeholder = Placeholder {
        open: '\u{E002}',
        close: '\u{E003}',
    };

    /// Formats the token for slot `index`.
    pub fn token(&self, index: usize) -> String {
        format!("{}{}{}", self.open, index, self.close)
    }

    /// Returns the slot index if `s` is exactly one token.
    pub fn parse_exact(&self, s: &str) -> Option<usize> {
        let inner = s.strip_prefix(self.open)?.strip_suffix(self.close)?;
        if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        inner.parse().ok()
    }

    /// Finds every well-formed token in `s`, in order, as (byte range, index).
    pub fn find_all(&self, s: &str) -> Vec<(Range<usize>, usize)> {
        let mut out = vec![];
        let mut from = 0usize;
        while let Some(rel) = s[from..].find(self.open) {
            let start = from + rel;
            let digits_start = start + self.open.len_utf8();
            let Some(close_rel) = s[digits_start..].find(self.close) else {
                break;
            };
            let end = digits_start + close_rel + self.close.len_utf8();
            match self.parse_exact(&s[start..end]) {
                Some(index) => {
                    out.push((start..end, index));
                    from = end;
                }
                None => from = digits_start,
            }
        }
        out
    }

    /// Replaces every token in `s` with `lookup(index)`.
    ///
    /// Tokens whose index `lookup` does not know are left untouched.
    pub fn replace_all<'a, F>(&self, s: &str, lookup: F) -> String
    where
        F: Fn(usize) -> Option<&'a str>,
    {
        let mut out = String::with_capacity(s.len());
        let mut last = 0usize;
        for (range, index) in self.find_all(s) {
            if let Some(replacement) = lookup(index) {
                out.push_str(&s[last..range.start]);
                out.push_str(replacement);
                last = range.end;
            }
        }
        out.push_str(&s[last..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trips_through_parse_exact() {
        let p = Placeholder::WIDGET;
        assert_eq!(p.parse_exact(&p.token(12)), Some(12));
    }

    #[test]
    fn parse_exact_rejects_surrounding_text() {
        let p = Placeholder::WIDGET;
        assert_eq!(p.parse_exact(&format!("x{}", p.token(0))), None);
        assert_eq!(p.parse_exact(&format!("{}{}", p.open, p.close)), None);
    }

    #[test]
    fn alphabets_do_not_cross_match() {
        let w = Placeholder::WIDGET.token(0);
        assert!(Placeholder::SPAN.find_all(&w).is_empty());
    }

    #[test]
    fn find_all_returns_ranges_in_order() {
        let p = Placeholder::SPAN;
        let s = format!("a {} b {}", p.token(0), p.token(1));
        let found: Vec<usize> = p.find_all(&s).into_iter().map(|(_, i)| i).collect();
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn unterminated_token_is_ignored() {
        let p = Placeholder::SPAN;
        let s = format!("{}3 and more", p.open);
        assert!(p.find_all(&s).is_empty());
    }

    #[test]
    fn replace_all_swaps_known_tokens() {
        let p = Placeholder::SPAN;
        let s = format!("x {} y {}", p.token(0), p.token(7));
        let replaced = p.replace_all(&s, |i| (i == 0).then_some("ZERO"));
        assert_eq!(replaced, format!("x ZERO y {}", p.token(7)));
    }
}
