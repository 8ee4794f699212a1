//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters. The parser calls these
//! constants; it never hardcodes `` ` `` or `*`.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
