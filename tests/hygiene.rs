//! Hygiene: source-level standards checked at test time.
//!
//! Scans the production files under `src/` (sibling `*_test.rs` files are
//! skipped) for patterns that either crash the process or drop an error on
//! the floor. Every budget is zero and stays zero.

use std::fs;
use std::path::Path;

/// (pattern, budget, what it costs us)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the render loop"),
    ("unreachable!(", 0, "crashes the render loop"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a result unseen"),
    (".ok()", 0, "discards an error unseen"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        if !path.extension().is_some_and(|e| e == "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut report = Vec::new();
    for &(pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            report.push(format!("{pattern} ({why}): found {count}, max {budget}"));
            report.extend(found.iter().map(|(path, c)| format!("  {path}: {c}")));
        }
    }
    assert!(report.is_empty(), "hygiene budgets exceeded:\n{}", report.join("\n"));
}
