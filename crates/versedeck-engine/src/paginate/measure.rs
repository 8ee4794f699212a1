use crate::models::{Block, SlideHeading};

/// Reports the rendered extent of a candidate slide, in budget units.
///
/// Implementations may be costly; the paginator keeps call counts low.
pub trait Measure {
    fn measure(&mut self, heading: &SlideHeading, blocks: &[Block]) -> usize;
}

impl<F> Measure for F
where
    F: FnMut(&SlideHeading, &[Block]) -> usize,
{
    fn measure(&mut self, heading: &SlideHeading, blocks: &[Block]) -> usize {
        self(heading, blocks)
    }
}
