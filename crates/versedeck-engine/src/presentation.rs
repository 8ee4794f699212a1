use crate::models::Slide;
use crate::paginate::{Deck, DeckOptions, Measure};
use crate::reveal::RevealNavigator;

/// A built deck plus its reveal state, replaced together on every load.
#[derive(Debug, Clone)]
pub struct Presentation {
    options: DeckOptions,
    deck: Deck,
    navigator: RevealNavigator,
}

impl Presentation {
    pub fn load<M>(text: &str, options: DeckOptions, oracle: &mut M) -> Self
    where
        M: Measure + ?Sized,
    {
        let deck = Deck::build(text, &options, oracle);
        let navigator = RevealNavigator::for_slides(deck.slides());
        Self {
            options,
            deck,
            navigator,
        }
    }

    /// Rebuilds from new text with the same options. Reading position and
    /// every reveal counter start over.
    pub fn reload<M>(&mut self, text: &str, oracle: &mut M)
    where
        M: Measure + ?Sized,
    {
        *self = Self::load(text, self.options, oracle);
    }

    pub fn options(&self) -> &DeckOptions {
        &self.options
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn navigator(&self) -> &RevealNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut RevealNavigator {
        &mut self.navigator
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.navigator.current())
    }
}
