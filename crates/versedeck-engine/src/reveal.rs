//! Progressive disclosure of list items.
//!
//! Every slide owns one counter `p` in `[0, n - 1]`, where `n` is the number
//! of list items on that slide. Slides without list items have no counter
//! and are always fully shown. Counters are independent of the current
//! slide: moving around never touches them. They are only discarded when a
//! new navigator is built for a reprocessed document.

use serde::Serialize;

use crate::models::Slide;

/// Which slide is in view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    current: usize,
    slide_count: usize,
}

impl NavigationState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            current: 0,
            slide_count,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Moves to `index`. Out-of-range indices are ignored.
    pub fn move_to(&mut self, index: usize) -> bool {
        if index >= self.slide_count || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    pub fn next(&mut self) -> bool {
        self.move_to(self.current + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.move_to(index),
            None => false,
        }
    }

    pub fn first(&mut self) -> bool {
        self.move_to(0)
    }

    pub fn last(&mut self) -> bool {
        match self.slide_count.checked_sub(1) {
            Some(index) => self.move_to(index),
            None => false,
        }
    }

    /// `"k / N"`, 1-based. An empty deck reads `"0 / 0"`.
    pub fn slide_counter(&self) -> String {
        if self.slide_count == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.current + 1, self.slide_count)
    }
}

/// One list item together with whether it is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleUnit<'a> {
    pub text: &'a str,
    pub revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counter {
    shown: usize,
    total: usize,
}

/// Reveal counters for every slide of a deck plus the navigation position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealNavigator {
    counters: Vec<Option<Counter>>,
    navigation: NavigationState,
}

impl RevealNavigator {
    /// One entry per slide: the number of reveal units on that slide.
    pub fn new(unit_counts: impl IntoIterator<Item = usize>) -> Self {
        let counters: Vec<Option<Counter>> = unit_counts
            .into_iter()
            .map(|total| (total > 0).then_some(Counter { shown: 0, total }))
            .collect();
        let navigation = NavigationState::new(counters.len());
        Self {
            counters,
            navigation,
        }
    }

    pub fn for_slides(slides: &[Slide]) -> Self {
        Self::new(slides.iter().map(Slide::reveal_unit_count))
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current(&self) -> usize {
        self.navigation.current()
    }

    /// Reveal progress of `slide`, or `None` when it has nothing to reveal.
    pub fn progress(&self, slide: usize) -> Option<usize> {
        self.counter(slide).map(|c| c.shown)
    }

    /// Shows one more unit on `slide`. Returns whether anything changed.
    pub fn advance(&mut self, slide: usize) -> bool {
        match self.counters.get_mut(slide) {
            Some(Some(c)) if c.shown + 1 < c.total => {
                c.shown += 1;
                true
            }
            _ => false,
        }
    }

    /// Hides the last shown unit on `slide`. Returns whether anything changed.
    pub fn retreat(&mut self, slide: usize) -> bool {
        match self.counters.get_mut(slide) {
            Some(Some(c)) if c.shown > 0 => {
                c.shown -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn advance_reveal(&mut self) -> bool {
        self.advance(self.current())
    }

    pub fn retreat_reveal(&mut self) -> bool {
        self.retreat(self.current())
    }

    pub fn move_to_slide(&mut self, index: usize) -> bool {
        self.navigation.move_to(index)
    }

    pub fn next_slide(&mut self) -> bool {
        self.navigation.next()
    }

    pub fn previous_slide(&mut self) -> bool {
        self.navigation.previous()
    }

    pub fn first_slide(&mut self) -> bool {
        self.navigation.first()
    }

    pub fn last_slide(&mut self) -> bool {
        self.navigation.last()
    }

    /// Reveals the next unit if the current slide has one left, otherwise
    /// moves on to the next slide.
    pub fn step_forward(&mut self) -> bool {
        if self.has_more_reveal() {
            self.advance_reveal()
        } else {
            self.next_slide()
        }
    }

    pub fn step_back(&mut self) -> bool {
        self.previous_slide()
    }

    /// True when the current slide still has hidden units.
    pub fn has_more_reveal(&self) -> bool {
        self.counter(self.current())
            .is_some_and(|c| c.shown + 1 < c.total)
    }

    /// `"k / total"` for the current slide if it has reveal units.
    pub fn progress_label(&self) -> Option<String> {
        self.counter(self.current())
            .map(|c| format!("{} / {}", c.shown + 1, c.total))
    }

    /// The slide's list items, flattened, each flagged as shown or hidden.
    pub fn visible_units<'s>(&self, slide: &'s Slide) -> Vec<VisibleUnit<'s>> {
        let shown = self.counter(slide.index).map(|c| c.shown);
        slide
            .reveal_units()
            .enumerate()
            .map(|(i, text)| VisibleUnit {
                text,
                revealed: shown.is_none_or(|p| i <= p),
            })
            .collect()
    }

    fn counter(&self, slide: usize) -> Option<&Counter> {
        self.counters.get(slide).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, SlideHeading};
    use pretty_assertions::assert_eq;

    fn slide(index: usize, items: &[&str]) -> Slide {
        Slide {
            index,
            heading: SlideHeading::new("T", 1),
            blocks: if items.is_empty() {
                vec![Block::paragraph("no list")]
            } else {
                vec![Block::list(false, items.iter().copied())]
            },
        }
    }

    #[test]
    fn four_units_advance_and_retreat_within_bounds() {
        let mut nav = RevealNavigator::new([4]);
        assert_eq!(nav.progress(0), Some(0));
        for _ in 0..3 {
            assert!(nav.advance(0));
        }
        assert_eq!(nav.progress(0), Some(3));
        assert!(!nav.advance(0));
        assert_eq!(nav.progress(0), Some(3));

        for _ in 0..3 {
            assert!(nav.retreat(0));
        }
        assert!(!nav.retreat(0));
        assert_eq!(nav.progress(0), Some(0));
    }

    #[test]
    fn counters_persist_across_slide_switches() {
        let mut nav = RevealNavigator::new([3, 2]);
        assert!(nav.advance_reveal());
        assert!(nav.next_slide());
        assert!(nav.advance_reveal());
        assert!(nav.previous_slide());
        assert_eq!(nav.progress(0), Some(1));
        assert_eq!(nav.progress(1), Some(1));
    }

    #[test]
    fn slides_without_lists_have_no_counter() {
        let mut nav = RevealNavigator::new([0]);
        assert_eq!(nav.progress(0), None);
        assert!(!nav.advance(0));
        assert!(!nav.retreat(0));
        assert_eq!(nav.progress_label(), None);
    }

    #[test]
    fn single_unit_never_advances() {
        let mut nav = RevealNavigator::new([1]);
        assert!(!nav.advance(0));
        assert_eq!(nav.progress_label().as_deref(), Some("1 / 1"));
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut nav = RevealNavigator::new([2]);
        assert!(!nav.advance(7));
        assert!(!nav.retreat(7));
        assert_eq!(nav.progress(7), None);
        assert!(!nav.move_to_slide(7));
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn step_forward_reveals_then_moves_on() {
        let mut nav = RevealNavigator::new([2, 0]);
        assert!(nav.step_forward());
        assert_eq!(nav.progress(0), Some(1));
        assert_eq!(nav.current(), 0);
        assert!(nav.step_forward());
        assert_eq!(nav.current(), 1);
        assert!(!nav.step_forward());
        assert!(nav.step_back());
        assert_eq!(nav.progress(0), Some(1));
    }

    #[test]
    fn visible_units_flag_revealed_prefix() {
        let s = slide(0, &["a", "b", "c"]);
        let mut nav = RevealNavigator::for_slides(std::slice::from_ref(&s));
        nav.advance(0);
        let flags: Vec<(&str, bool)> = nav
            .visible_units(&s)
            .into_iter()
            .map(|u| (u.text, u.revealed))
            .collect();
        assert_eq!(flags, vec![("a", true), ("b", true), ("c", false)]);
        assert_eq!(nav.progress_label().as_deref(), Some("2 / 3"));
        assert!(nav.has_more_reveal());
    }

    #[test]
    fn slide_counter_is_one_based() {
        let mut nav = RevealNavigator::for_slides(&[slide(0, &[]), slide(1, &[])]);
        assert_eq!(nav.navigation().slide_counter(), "1 / 2");
        assert!(nav.last_slide());
        assert_eq!(nav.navigation().slide_counter(), "2 / 2");
        assert!(nav.first_slide());
        assert_eq!(NavigationState::new(0).slide_counter(), "0 / 0");
    }
}
