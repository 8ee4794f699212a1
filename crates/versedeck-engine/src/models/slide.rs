use serde::Serialize;

use super::block::Block;

/// Appended to the heading of every slide after the first of a section.
pub const CONTINUATION_SUFFIX: &str = " (cont.)";

/// A slide heading: the section's heading text plus its part number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideHeading {
    /// Heading text as written in the section, without any suffix.
    pub text: String,
    /// 1-based part index within the section.
    pub part: usize,
}

impl SlideHeading {
    pub fn new(text: impl Into<String>, part: usize) -> Self {
        Self {
            text: text.into(),
            part,
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.part > 1
    }

    /// Heading as shown to the reader, with `(cont.)` on continuation parts.
    pub fn display(&self) -> String {
        if self.is_continuation() {
            format!("{}{}", self.text, CONTINUATION_SUFFIX)
        } else {
            self.text.clone()
        }
    }
}

/// One unit of presentation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    /// Stable 0-based position within the whole deck.
    pub index: usize,
    pub heading: SlideHeading,
    pub blocks: Vec<Block>,
}

impl Slide {
    /// Number of list items across all list blocks on this slide.
    pub fn reveal_unit_count(&self) -> usize {
        self.blocks.iter().map(|b| b.reveal_units().len()).sum()
    }

    /// List items of this slide flattened in document order.
    pub fn reveal_units(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .flat_map(|b| b.reveal_units().iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_part_has_no_suffix() {
        let heading = SlideHeading::new("Grace", 1);
        assert!(!heading.is_continuation());
        assert_eq!(heading.display(), "Grace");
    }

    #[test]
    fn later_parts_carry_suffix() {
        let heading = SlideHeading::new("Grace", 3);
        assert!(heading.is_continuation());
        assert_eq!(heading.display(), "Grace (cont.)");
    }

    #[test]
    fn reveal_units_flatten_lists_in_order() {
        let slide = Slide {
            index: 0,
            heading: SlideHeading::new("T", 1),
            blocks: vec![
                Block::list(false, ["a", "b"]),
                Block::paragraph("between"),
                Block::list(true, ["c"]),
            ],
        };
        assert_eq!(slide.reveal_unit_count(), 3);
        assert_eq!(slide.reveal_units().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
