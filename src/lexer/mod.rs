//! Lexical analysis module for the highlighter.
//!
//! This module contains the tokenizer that converts raw source text
//! into a stream of classified, positioned tokens. It handles:
//!
//! - Per-language ordered regex rule tables (first match wins)
//! - Keyword reclassification of identifier-shaped matches
//! - Line and column tracking across multi-line tokens
//! - Recovery from unrecognized characters via Error tokens

pub mod lexer;
pub mod patterns;
pub mod position;
pub mod tokens;
