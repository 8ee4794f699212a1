//! # Inline Rendering
//!
//! Cursor-based inline parsing with code spans as raw zones.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` (Text, CodeSpan, Strong, Emphasis) and `Span`
//! - **`kinds`**: inline types owning their delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte parsing
//! - **`parser`**: `parse_inline()` single-pass, non-nested matching
//! - **`render`**: HTML and plain-text output (escaping first)
//! - **`protect`**: token protection of styled spans for the splitters
//!
//! ## Precedence
//!
//! Code span, then strong, then emphasis. `` `*x*` `` is one code span.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod protect;
pub mod render;
pub mod types;

pub use parser::parse_inline;
pub use protect::{ProtectedText, protect_spans};
pub use render::{plain_inline, render_inline};
pub use types::{InlineNode, Span};
