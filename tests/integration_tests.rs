//! Integration tests for end-to-end file processing.
//!
//! These tests verify the complete pipeline from files on disk through
//! language detection, tokenization, HTML rendering, and the
//! sequential and parallel batch runs.

use std::fs;

use highlighter::{
    process_file, run_parallel, run_sequential, tokenize, Language, ScanConfig, TokenCategory,
};

#[test]
fn test_tokenize_three_languages() {
    let scripting = tokenize(
        "def f(x):\n    return x\n",
        Language::Scripting,
        ScanConfig::default(),
    );
    assert_eq!(scripting[0].category, TokenCategory::Keyword);
    assert_eq!(scripting.last().unwrap().category, TokenCategory::EOF);

    let query = tokenize(
        "select * from t;",
        Language::Query,
        ScanConfig::default(),
    );
    assert_eq!(query[0].category, TokenCategory::Keyword);
    assert_eq!(query[0].value, "select");

    let clike = tokenize(
        "function f() { return 1; }",
        Language::CLike,
        ScanConfig::default(),
    );
    assert_eq!(clike[0].category, TokenCategory::Keyword);
    assert_eq!(clike[0].value, "function");
}

#[test]
fn test_end_to_end_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("demo.js");
    fs::write(&input, "var a = 1;\nif (a === 1) { a = 2; }\n").unwrap();

    let out_dir = dir.path().join("results");
    let report = process_file(&input, &out_dir, ScanConfig::default()).unwrap();

    assert_eq!(report.language, Language::CLike);

    let page = fs::read_to_string(&report.output).unwrap();
    assert!(page.contains("<span class=\"keyword\">var</span>"));
    assert!(page.contains("<span class=\"operator\">===</span>"));
    assert!(page.contains("Tokens found:"));
}

#[test]
fn test_end_to_end_batch_sequential_and_parallel() {
    let dir = tempfile::tempdir().unwrap();
    let files = vec![
        dir.path().join("one.py"),
        dir.path().join("two.sql"),
        dir.path().join("three.js"),
    ];
    fs::write(&files[0], "def one():\n    return 1  # comment\n").unwrap();
    fs::write(&files[1], "SELECT id FROM t WHERE id = 1;\n").unwrap();
    fs::write(&files[2], "function three() { return 3; }\n").unwrap();

    let seq_dir = dir.path().join("seq");
    let par_dir = dir.path().join("par");

    let sequential = run_sequential(&files, &seq_dir, ScanConfig::default());
    let parallel = run_parallel(&files, &par_dir, ScanConfig::default());

    assert_eq!(sequential.len(), 3);
    assert_eq!(parallel.len(), 3);

    for (s, p) in sequential.iter().zip(parallel.iter()) {
        let s = s.as_ref().unwrap();
        let p = p.as_ref().unwrap();
        assert_eq!(s.token_count, p.token_count);
        assert!(s.output.exists());
        assert!(p.output.exists());
    }

    // Same base names, different output directories.
    assert!(seq_dir.join("one_scripting_result.html").exists());
    assert!(par_dir.join("one_scripting_result.html").exists());
    assert!(seq_dir.join("two_query_result.html").exists());
    assert!(par_dir.join("three_clike_result.html").exists());
}

#[test]
fn test_end_to_end_preserves_layout_with_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("layout.py");
    let source = "def f():\n    return  1\n";
    fs::write(&input, source).unwrap();

    let config = ScanConfig {
        emit_whitespace: true,
    };
    let report = process_file(&input, &dir.path().join("out"), config).unwrap();
    assert!(report.token_count > 0);

    // The rendered page keeps the layout verbatim: the two-space run
    // before `1` sits between the spans and nothing is approximated
    // with breaks.
    let page = fs::read_to_string(&report.output).unwrap();
    assert!(page.contains("</span>  <span"));
    assert!(!page.contains("<br>"));

    let tokens = tokenize(source, Language::Scripting, config);
    let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(rebuilt, source);
}
