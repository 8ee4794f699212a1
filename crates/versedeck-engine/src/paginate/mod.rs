//! # Pagination
//!
//! Turns sections into slides that fit a size budget.
//!
//! - **`measure`**: the [`Measure`] oracle seam; anything that can report a
//!   candidate slide's extent (a layout engine, the headless estimator, a
//!   scripted test double)
//! - **`metrics`**: [`TextMetrics`], a word-wrap line-count estimator
//! - **`paginator`**: the per-section shrink loop
//! - **`deck`**: whole-document builds with stable global slide indices
//!
//! Measurement is treated as expensive: blocks are pre-expanded through the
//! splitters once, then the loop only ever removes whole blocks from the
//! tail of the working set.

pub mod deck;
pub mod measure;
pub mod metrics;
pub mod paginator;

pub use deck::{Deck, DeckOptions};
pub use measure::Measure;
pub use metrics::TextMetrics;
pub use paginator::Paginator;
