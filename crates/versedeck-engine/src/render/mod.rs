//! HTML output for slides.
//!
//! Widgets are rendered through a [`WidgetRenderer`]; building scripture
//! links or player URLs is left to the embedding application.

pub mod html;

pub use html::{HtmlRenderer, PlaceholderWidgets, WidgetRenderer};
