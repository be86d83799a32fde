//! Batch processing of input files.
//!
//! Maps file extensions to languages, runs one tokenize-and-render pass
//! per file, and fans the work out either sequentially or across a
//! bounded worker pool. Every file gets its own `Result`; a bad file
//! never takes the batch down with it.

pub mod driver;
