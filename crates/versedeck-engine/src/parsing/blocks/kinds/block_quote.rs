/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one quote marker (and one following space) from a line.
    ///
    /// Leading spaces before the marker are allowed. Returns `None` when the
    /// line is not quoted. Deeper markers (`> > nested`) are kept in the
    /// remainder.
    pub fn strip_marker(s: &str) -> Option<&str> {
        let rest = s.trim_start_matches(' ').strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
