#![allow(dead_code)]

use log::debug;
use mrbgen::{ActionRecord, ProjectName, ScaffoldOptions, Scaffolder};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scaffolds `name` under `root` and returns the action log.
pub fn scaffold_in(root: &Path, name: &str) -> mrbgen::Result<Vec<ActionRecord>> {
    let name = ProjectName::new(name);
    let mut records: Vec<ActionRecord> = Vec::new();
    let options = ScaffoldOptions { output_root: root.to_path_buf(), dry_run: false };
    Scaffolder::new(&name, options, &mut records).run()?;
    Ok(records)
}

/// Every file below `dir`, keyed by its relative path.
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap().to_path_buf();
            (rel, fs::read(e.path()).unwrap())
        })
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = snapshot(dir1);
    let files2 = snapshot(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    println!();

    let keys1: HashSet<_> = files1.keys().collect();
    let keys2: HashSet<_> = files2.keys().collect();

    for file in keys1.difference(&keys2) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in keys2.difference(&keys1) {
        println!("  - {:?} (only in expected)", file);
    }

    for file in keys1.intersection(&keys2) {
        let (content1, content2) = (&files1[*file], &files2[*file]);
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:");
            println!("{}", String::from_utf8_lossy(content1));
            println!("  --- Expected content:");
            println!("{}", String::from_utf8_lossy(content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Scaffolds `name` into a fresh directory and asserts the result matches
/// `expected_dir` byte for byte.
pub fn run_and_assert(name: &str, expected_dir: &str) {
    let tmp_dir = tempfile::tempdir().unwrap();
    scaffold_in(tmp_dir.path(), name).unwrap();
    assert_same_tree(tmp_dir.path(), Path::new(expected_dir));
}

pub fn assert_same_tree(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Could not compare {actual:?} with {expected:?}");
        }
    }
}

/// Asserts that every file record is preceded by a directory record for
/// each of its ancestors, in root-to-leaf order.
pub fn assert_ancestors_precede_files(records: &[ActionRecord]) {
    for (idx, record) in records.iter().enumerate() {
        let ActionRecord::FileCreated(path) = record else { continue };
        let segments: Vec<&str> = path.split('/').collect();
        let mut last_seen = None;
        for depth in 1..segments.len() {
            let ancestor = segments[..depth].join("/");
            let position = records[..idx]
                .iter()
                .position(|r| r.is_directory() && r.path() == ancestor)
                .unwrap_or_else(|| panic!("'{ancestor}' not reported before '{path}'"));
            if let Some(previous) = last_seen {
                assert!(position > previous, "'{ancestor}' reported out of order");
            }
            last_seen = Some(position);
        }
    }
}
