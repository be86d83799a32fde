use std::{
    env, fs,
    path::{Path, PathBuf},
    process::exit,
    time::Instant,
};

use highlighter::{run_parallel, run_sequential, HighlightError, ScanConfig};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input_dir = PathBuf::from("samples");
    let mut config = ScanConfig::default();

    for arg in &args[1..] {
        if arg == "--preserve-whitespace" {
            config.emit_whitespace = true;
        } else {
            input_dir = PathBuf::from(arg);
        }
    }

    if !input_dir.exists() {
        eprintln!("Error: input directory {:?} not found", input_dir);
        exit(1);
    }

    let files = collect_inputs(&input_dir);

    if files.is_empty() {
        println!("No .py, .sql or .js files found in {:?}", input_dir);
        return;
    }

    println!("Found {} files to process", files.len());

    let sequential_start = Instant::now();
    let sequential = run_sequential(&files, &PathBuf::from("results_sequential"), config);
    let sequential_total = sequential_start.elapsed();

    for result in &sequential {
        report(result);
    }

    let parallel_start = Instant::now();
    let parallel = run_parallel(&files, &PathBuf::from("results_parallel"), config);
    let parallel_total = parallel_start.elapsed();

    let failures = parallel.iter().filter(|r| r.is_err()).count();

    println!();
    println!("Total sequential time: {:?}", sequential_total);
    println!("Total parallel time:   {:?}", parallel_total);
    if failures > 0 {
        println!("{} file(s) failed, see messages above", failures);
    }
}

fn collect_inputs(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            eprintln!("Error: failed to read {:?}: {}", dir, error);
            exit(1);
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("py") | Some("sql") | Some("js")
            )
        })
        .collect();

    files.sort();
    files
}

fn report(result: &Result<highlighter::FileReport, HighlightError>) {
    match result {
        Ok(report) => {
            println!(
                "Processed {:?} ({}): {} tokens in {:?} -> {:?}",
                report.input, report.language, report.token_count, report.elapsed, report.output
            );
        }
        Err(error) => {
            println!("Error: {}", error);
        }
    }
}
