/// Which delimiter a fence was opened with. Only the same kind closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn delimiter(self) -> &'static str {
        match self {
            FenceKind::Backticks => CodeFence::BACKTICKS,
            FenceKind::Tildes => CodeFence::TILDES,
        }
    }
}

/// Fenced code block; owns the fence delimiters.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// The fence kind if the line (indentation allowed) starts with a fence.
    pub fn detect(line: &str) -> Option<FenceKind> {
        let t = line.trim_start();
        [FenceKind::Backticks, FenceKind::Tildes]
            .into_iter()
            .find(|kind| t.starts_with(kind.delimiter()))
    }

    pub fn closes(open: FenceKind, line: Option<FenceKind>) -> bool {
        line == Some(open)
    }

    /// Splits an opener line into its info string and, when the fence also
    /// closes on the same line (```` ```x = 1``` ````), the one-line body.
    pub fn open(kind: FenceKind, line: &str) -> (Option<String>, Option<String>) {
        let delim = kind.delimiter();
        let after = line.trim_start().trim_start_matches(|c: char| delim.starts_with(c));
        if let Some(close) = after.find(delim) {
            return (None, Some(after[..close].trim().to_string()));
        }
        let info = after.trim();
        ((!info.is_empty()).then(|| info.to_string()), None)
    }
}
