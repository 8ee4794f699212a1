pub mod io;
pub mod models;
pub mod paginate;
pub mod parsing;
pub mod presentation;
pub mod render;
pub mod reveal;
pub mod split;

// Re-export key types for easier usage
pub use models::{block::*, slide::*};
pub use paginate::{Deck, DeckOptions, Measure, Paginator, TextMetrics};
pub use presentation::Presentation;
pub use reveal::{NavigationState, RevealNavigator, VisibleUnit};
pub use split::SplitLimits;
