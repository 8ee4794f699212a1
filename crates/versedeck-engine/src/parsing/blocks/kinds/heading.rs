/// ATX heading type with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    /// Deepest heading level recognised inside a section body.
    pub const MAX_LEVEL: usize = 3;

    /// Parses `#`, `##` or `###` followed by whitespace and text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[level..];
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        Some((level as u8, text))
    }

    /// Parses a top-level (`# `) heading line, the section boundary.
    ///
    /// The text may be empty (`# ` on its own still opens a section).
    pub fn parse_top_level(line: &str) -> Option<&str> {
        let rest = line.strip_prefix(Self::MARKER)?;
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some(rest.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, "Title")))]
    #[case("## Sub  ", Some((2, "Sub")))]
    #[case("###\tDeep", Some((3, "Deep")))]
    #[case("#### Too deep", None)]
    #[case("#hashtag", None)]
    #[case("## ", None)]
    #[case("plain", None)]
    fn parses_heading_levels(#[case] line: &str, #[case] expected: Option<(u8, &str)>) {
        assert_eq!(Heading::parse(line), expected);
    }

    #[test]
    fn top_level_only_matches_single_marker() {
        assert_eq!(Heading::parse_top_level("# Intro"), Some("Intro"));
        assert_eq!(Heading::parse_top_level("## Intro"), None);
        assert_eq!(Heading::parse_top_level("#"), None);
        assert_eq!(Heading::parse_top_level("# "), Some(""));
    }
}
