use log::debug;
use serde::Serialize;

use crate::models::{Section, Slide, SlideHeading};
use crate::parsing::Document;
use crate::split::SplitLimits;

use super::{Measure, Paginator};

/// Everything a deck build needs besides the text and the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeckOptions {
    /// Maximum slide extent, in the oracle's units.
    pub budget: usize,
    pub limits: SplitLimits,
    /// Emit a heading-only slide for a section with an empty body.
    pub title_only_slides: bool,
}

impl DeckOptions {
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            limits: SplitLimits::default(),
            title_only_slides: true,
        }
    }

    pub fn with_limits(self, limits: SplitLimits) -> Self {
        Self { limits, ..self }
    }

    pub fn with_title_only_slides(self, title_only_slides: bool) -> Self {
        Self {
            title_only_slides,
            ..self
        }
    }
}

/// The ordered slides of one document. Rebuilt wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Parses and paginates a whole document.
    pub fn build<M>(text: &str, options: &DeckOptions, oracle: &mut M) -> Self
    where
        M: Measure + ?Sized,
    {
        let document = Document::parse(text);
        Self::from_sections(&document.sections(), options, oracle)
    }

    /// Paginates already extracted sections, numbering slides globally.
    pub fn from_sections<M>(sections: &[Section], options: &DeckOptions, oracle: &mut M) -> Self
    where
        M: Measure + ?Sized,
    {
        let paginator = Paginator::new(options.budget, options.limits);
        let mut slides: Vec<Slide> = vec![];
        for section in sections {
            if section.blocks.is_empty() {
                if options.title_only_slides {
                    slides.push(Slide {
                        index: slides.len(),
                        heading: SlideHeading::new(section.heading.as_str(), 1),
                        blocks: vec![],
                    });
                }
                continue;
            }
            let first_index = slides.len();
            slides.extend(paginator.paginate_section(section, first_index, oracle));
        }
        debug!(
            "built deck: {} sections -> {} slides",
            sections.len(),
            slides.len()
        );
        Self { slides }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Block;

    fn count_blocks(_: &SlideHeading, blocks: &[Block]) -> usize {
        blocks.len()
    }

    #[test]
    fn indices_are_global_across_sections() {
        let text = "# A\n\na1\n\na2\n\na3\n\n# B\n\nb1\n";
        let deck = Deck::build(text, &DeckOptions::new(2), &mut count_blocks);
        let indices: Vec<usize> = deck.slides().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        let headings: Vec<String> = deck.slides().iter().map(|s| s.heading.display()).collect();
        assert_eq!(headings, vec!["A", "A (cont.)", "B"]);
    }

    #[test]
    fn empty_section_gets_a_title_slide() {
        let text = "# Welcome\n\n# Body\n\ntext\n";
        let deck = Deck::build(text, &DeckOptions::new(10), &mut count_blocks);
        assert_eq!(deck.len(), 2);
        assert!(deck.slides()[0].blocks.is_empty());
        assert_eq!(deck.slides()[1].index, 1);
    }

    #[test]
    fn title_slides_can_be_disabled() {
        let text = "# Welcome\n\n# Body\n\ntext\n";
        let options = DeckOptions::new(10).with_title_only_slides(false);
        let deck = Deck::build(text, &options, &mut count_blocks);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides()[0].heading.text, "Body");
        assert_eq!(deck.slides()[0].index, 0);
    }

    #[test]
    fn empty_document_is_an_empty_deck() {
        let deck = Deck::build("", &DeckOptions::new(10), &mut count_blocks);
        assert!(deck.is_empty());
        assert!(deck.get(0).is_none());
    }
}
