/// Byte cursor over one line of inline text.
///
/// Delimiters are all ASCII, so stepping one byte at a time never needs to
/// split a multi-byte character to find one.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a [u8],
    at: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            src: s.as_bytes(),
            at: 0,
        }
    }

    /// Byte offset into the source.
    pub fn offset(&self) -> usize {
        self.at
    }

    pub fn at_end(&self) -> bool {
        self.at >= self.src.len()
    }

    pub fn current(&self) -> Option<u8> {
        self.src.get(self.at).copied()
    }

    /// The byte just consumed, if any.
    pub fn preceding(&self) -> Option<u8> {
        self.at.checked_sub(1).and_then(|j| self.src.get(j).copied())
    }

    pub fn looking_at(&self, pat: &[u8]) -> bool {
        self.src
            .get(self.at..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    pub fn advance(&mut self) -> Option<u8> {
        let b = self.current()?;
        self.at += 1;
        Some(b)
    }

    /// Skips `n` bytes; callers only skip delimiters they have just matched.
    pub fn skip(&mut self, n: usize) {
        self.at = (self.at + n).min(self.src.len());
    }

    /// Moves up to the next `stop` byte, or to the end of input.
    pub fn skip_to(&mut self, stop: u8) {
        self.at = self.src[self.at.min(self.src.len())..]
            .iter()
            .position(|&b| b == stop)
            .map_or(self.src.len(), |rel| self.at + rel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_a_code_span() {
        let mut cur = Cursor::new("`x` y");
        assert!(cur.looking_at(b"`"));
        cur.advance();
        cur.skip_to(b'`');
        assert_eq!(cur.offset(), 2);
        assert_eq!(cur.preceding(), Some(b'x'));
        cur.skip(1);
        assert_eq!(cur.current(), Some(b' '));
    }

    #[test]
    fn skip_to_without_stop_reaches_end() {
        let mut cur = Cursor::new("*open emphasis");
        cur.advance();
        cur.skip_to(b'*');
        assert!(cur.at_end());
        assert_eq!(cur.advance(), None);
    }

    #[test]
    fn skip_is_clamped() {
        let mut cur = Cursor::new("**");
        cur.skip(5);
        assert!(cur.at_end());
        assert!(cur.looking_at(b""));
        assert!(!cur.looking_at(b"*"));
    }

    #[test]
    fn multibyte_text_is_stepped_bytewise() {
        let mut cur = Cursor::new("é*");
        cur.skip_to(b'*');
        assert_eq!(cur.offset(), "é".len());
        assert_eq!(Cursor::new("").preceding(), None);
    }
}
