/// A list-item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Item number for ordered markers, 1 for bullets.
    pub number: u32,
    /// Byte offset (into the indentation-stripped line) where item text begins.
    pub content_offset: usize,
}

impl ListMarker {
    pub const BULLETS: [char; 2] = ['-', '*'];
    pub const ORDERED_DELIMITER: char = '.';

    /// Parses `- item`, `* item` or `12. item`. The marker must be followed
    /// by whitespace; `*emphasis*` at line start is not a list item.
    pub fn parse(line: &str) -> Option<ListMarker> {
        let first = line.chars().next()?;

        if Self::BULLETS.contains(&first) {
            return Self::after_marker(line, 1).map(|content_offset| ListMarker {
                ordered: false,
                number: 1,
                content_offset,
            });
        }

        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || digits > 9 {
            return None;
        }
        if line[digits..].chars().next() != Some(Self::ORDERED_DELIMITER) {
            return None;
        }
        let number = line[..digits].parse().ok()?;
        Self::after_marker(line, digits + 1).map(|content_offset| ListMarker {
            ordered: true,
            number,
            content_offset,
        })
    }

    fn after_marker(line: &str, marker_len: usize) -> Option<usize> {
        let rest = &line[marker_len..];
        let ws = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        if ws == 0 {
            return None;
        }
        Some(marker_len + ws)
    }
}
