//! A small syntax highlighter: classifies source text written in one of
//! three teaching grammars (a scripting language, a query language, a
//! C-like language) into typed, positioned tokens and renders the
//! result as styled HTML.

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod render;

pub use driver::driver::{detect_language, process_file, run_parallel, run_sequential, FileReport};
pub use errors::errors::HighlightError;
pub use lexer::lexer::{tokenize, ScanConfig};
pub use lexer::tokens::{Language, Token, TokenCategory};
