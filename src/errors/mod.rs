//! Error types for the batch driver.
//!
//! The core tokenizer is total and has no error path of its own;
//! everything here concerns the plumbing around it: mapping a file
//! extension to a language and reading or writing files.

pub mod errors;

#[cfg(test)]
mod tests;
