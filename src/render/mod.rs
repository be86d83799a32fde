//! HTML rendering of token streams.
//!
//! Maps each token category to a display style and emits one styled
//! span per token, preserving source layout either exactly (when the
//! scan kept whitespace tokens) or approximately via line breaks.

pub mod html;
