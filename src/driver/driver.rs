use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use crate::errors::errors::HighlightError;
use crate::lexer::lexer::{tokenize, ScanConfig};
use crate::lexer::tokens::{significant_token_count, Language};
use crate::render::html::render_page;

/// Outcome of processing one input file.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub language: Language,
    pub token_count: usize,
    pub elapsed: Duration,
}

/// Maps a file extension to its language. This is the one place the
/// "unsupported language" failure of the old string-keyed dispatch can
/// still occur.
pub fn detect_language(path: &Path) -> Result<Language, HighlightError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "py" => Ok(Language::Scripting),
        "sql" => Ok(Language::Query),
        "js" => Ok(Language::CLike),
        _ => Err(HighlightError::UnsupportedExtension { extension }),
    }
}

/// Reads one file, tokenizes it, and writes the rendered HTML report
/// into `output_dir` as `<stem>_<language>_result.html`.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    config: ScanConfig,
) -> Result<FileReport, HighlightError> {
    let language = detect_language(input)?;

    let text = fs::read_to_string(input)
        .map_err(|source| HighlightError::read(input.to_path_buf(), source))?;

    let start = Instant::now();
    let tokens = tokenize(&text, language, config);
    let elapsed = start.elapsed();

    fs::create_dir_all(output_dir)
        .map_err(|source| HighlightError::write(output_dir.to_path_buf(), source))?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let file_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(stem);

    let output = output_dir.join(format!("{}_{}_result.html", stem, language.name()));
    let page = render_page(file_name, language, &tokens, elapsed, config);

    fs::write(&output, page)
        .map_err(|source| HighlightError::write(output.clone(), source))?;

    let token_count = significant_token_count(&tokens);

    Ok(FileReport {
        input: input.to_path_buf(),
        output,
        language,
        token_count,
        elapsed,
    })
}

/// Processes the files one after another. Each file's outcome is its
/// own `Result`; a failure never stops the rest of the batch.
pub fn run_sequential(
    files: &[PathBuf],
    output_dir: &Path,
    config: ScanConfig,
) -> Vec<Result<FileReport, HighlightError>> {
    files
        .iter()
        .map(|file| process_file(file, output_dir, config))
        .collect()
}

/// Processes the files across a bounded pool of worker threads, one
/// contiguous chunk of the input list per worker. Tasks share nothing
/// besides the read-only inputs, one file's failure never affects its
/// siblings, and results come back in input order.
pub fn run_parallel(
    files: &[PathBuf],
    output_dir: &Path,
    config: ScanConfig,
) -> Vec<Result<FileReport, HighlightError>> {
    if files.is_empty() {
        return Vec::new();
    }

    let workers = thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(files.len());
    let chunk_size = (files.len() + workers - 1) / workers;

    thread::scope(|scope| {
        let handles: Vec<_> = files
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|file| process_file(file, output_dir, config))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut results = Vec::with_capacity(files.len());
        for handle in handles {
            match handle.join() {
                Ok(batch) => results.extend(batch),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        results
    })
}
