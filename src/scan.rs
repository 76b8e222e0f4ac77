//! Source tree scanner.
//!
//! Resolves include paths against the source root, walks matching
//! directories, and reads text files into memory. Binary files (NUL byte in
//! the first 1KB) and excluded paths are skipped. The walk is sorted so that
//! scanning an unchanged tree always produces the same result.

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::exclude::should_exclude;

/// How many leading bytes are inspected for the binary check.
const BINARY_SNIFF_LEN: usize = 1024;

/// A file selected for embedding.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path relative to the source root.
    pub path: String,
    /// Raw text content.
    pub content: String,
    /// Content length in bytes.
    pub size: usize,
}

/// Result of scanning the include paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Relative directory paths, deduplicated, in discovery order.
    pub directories: Vec<String>,
    /// Files with content, in discovery order.
    pub files: Vec<FileEntry>,
}

/// Check if content looks binary: a NUL byte in the first 1KB.
pub fn is_binary(bytes: &[u8]) -> bool {
    bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

/// Scan the include paths under `source` and collect directories and files.
///
/// Missing include paths are skipped with a verbose note, not treated as
/// errors. Excluded directories are pruned, so none of their descendants are
/// visited.
pub fn scan_paths(
    source: &Path,
    include_paths: &[String],
    exclude_patterns: &[String],
    verbose: bool,
) -> Result<ScanResult> {
    let mut result = ScanResult::default();
    let mut seen_dirs: HashSet<String> = HashSet::new();

    for include_path in include_paths {
        let full_path = source.join(include_path);

        if !full_path.exists() {
            log_verbose(verbose, &format!("Include path does not exist: {}", include_path));
            continue;
        }

        log_verbose(verbose, &format!("Processing include path: {}", include_path));

        if full_path.is_file() {
            if should_exclude(include_path, exclude_patterns, verbose) {
                continue;
            }
            if let Some(entry) = read_entry(&full_path, include_path, verbose) {
                result.files.push(entry);
            }
        } else if full_path.is_dir() {
            walk_directory(
                source,
                &full_path,
                exclude_patterns,
                verbose,
                &mut seen_dirs,
                &mut result,
            );
        }
    }

    Ok(result)
}

/// Walk one included directory, pruning excluded subtrees.
fn walk_directory(
    source: &Path,
    dir: &Path,
    exclude_patterns: &[String],
    verbose: bool,
    seen_dirs: &mut HashSet<String>,
    result: &mut ScanResult,
) {
    let walker = walkdir::WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let rel = match e.path().strip_prefix(source) {
                Ok(rel) => rel,
                Err(_) => return false,
            };
            !should_exclude(&rel.to_string_lossy(), exclude_patterns, verbose)
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log_verbose(verbose, &format!("Error walking directory: {}", e));
                continue;
            }
        };

        let rel = match entry.path().strip_prefix(source) {
            Ok(rel) => rel.to_string_lossy().into_owned(),
            Err(_) => continue,
        };
        if rel.is_empty() {
            // The include path resolved to the source root itself.
            continue;
        }

        if entry.file_type().is_dir() {
            if seen_dirs.insert(rel.clone()) {
                log_verbose(verbose, &format!("Found directory: {}", rel));
                result.directories.push(rel);
            }
        } else if entry.file_type().is_file() {
            if let Some(file) = read_entry(entry.path(), &rel, verbose) {
                result.files.push(file);
            }
        }
    }
}

/// Read one file, skipping binary or unreadable content.
fn read_entry(full_path: &Path, rel_path: &str, verbose: bool) -> Option<FileEntry> {
    let bytes = match fs::read(full_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log_verbose(verbose, &format!("Error reading {}: {}", rel_path, e));
            return None;
        }
    };

    if is_binary(&bytes) {
        log_verbose(verbose, &format!("Skipping binary file: {}", rel_path));
        return None;
    }

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => {
            log_verbose(verbose, &format!("Skipping non-UTF-8 file: {}", rel_path));
            return None;
        }
    };

    let size = content.len();
    log_verbose(verbose, &format!("Added file: {} ({} bytes)", rel_path, size));

    Some(FileEntry {
        path: rel_path.to_string(),
        content,
        size,
    })
}

fn log_verbose(verbose: bool, message: &str) {
    if verbose {
        println!("  → {}", message);
    }
}
