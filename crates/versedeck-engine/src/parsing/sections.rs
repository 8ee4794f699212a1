use super::blocks::kinds::{CodeFence, FenceKind, Heading};

/// A section's raw (isolated) text before block extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub heading: String,
    pub body: String,
}

/// Splits a document into sections at top-level `# ` headings.
///
/// Text before the first heading forms its own section whose heading is the
/// first non-blank line. A `# ` line inside a code fence is body text.
pub fn split_sections(text: &str) -> Vec<RawSection> {
    let mut sections: Vec<RawSection> = vec![];
    let mut preamble: Vec<&str> = vec![];
    let mut fence: Option<FenceKind> = None;

    for line in text.lines() {
        let detected = CodeFence::detect(line);
        if let Some(kind) = fence {
            if CodeFence::closes(kind, detected) {
                fence = None;
            }
        } else if let Some(heading) = Heading::parse_top_level(line) {
            sections.push(RawSection {
                heading: heading.to_string(),
                body: String::new(),
            });
            continue;
        } else if let Some(kind) = detected {
            // A fence that also closes on its opening line opens nothing.
            if CodeFence::open(kind, line).1.is_none() {
                fence = Some(kind);
            }
        }

        match sections.last_mut() {
            Some(section) => {
                section.body.push_str(line);
                section.body.push('\n');
            }
            None => preamble.push(line),
        }
    }

    if let Some(section) = preamble_section(&preamble) {
        sections.insert(0, section);
    }
    sections
}

fn preamble_section(lines: &[&str]) -> Option<RawSection> {
    let first = lines.iter().position(|l| !l.trim().is_empty())?;
    let mut body = String::new();
    for line in &lines[first + 1..] {
        body.push_str(line);
        body.push('\n');
    }
    Some(RawSection {
        heading: lines[first].trim().to_string(),
        body,
    })
}
