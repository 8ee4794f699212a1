pub mod block;
pub mod slide;

pub use block::{Block, Section, WidgetKind};
pub use slide::{CONTINUATION_SUFFIX, Slide, SlideHeading};
