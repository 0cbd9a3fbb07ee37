// src/discovery.rs
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name reserved for the checker's own test fixtures; directory
/// discovery never yields it.
pub const SELF_TEST_FILE: &str = "tests.py";

/// Resolves a target path to the ordered list of files to analyze.
///
/// A file path yields itself, whatever its name. A directory is walked
/// recursively with entries sorted by file name, keeping `.py` files and
/// skipping `SELF_TEST_FILE`. Unreadable entries yield nothing.
#[must_use]
pub fn discover(target: &Path, verbose: bool) -> Vec<PathBuf> {
    if target.is_file() {
        return vec![target.to_path_buf()];
    }

    let walker = WalkDir::new(target)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_target(entry.path()) {
                    paths.push(entry.path().to_path_buf());
                }
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 && verbose {
        eprintln!("WARN: Encountered {errors} errors during file walk");
    }
    paths
}

fn is_target(path: &Path) -> bool {
    if path.file_name().map_or(false, |n| n == SELF_TEST_FILE) {
        return false;
    }
    path.extension().and_then(|e| e.to_str()) == Some("py")
}
