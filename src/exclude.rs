//! Exclusion pattern matching.
//!
//! A pattern removes a path from consideration when it matches either the
//! full relative path or just the basename, as an exact string or as a glob
//! (`*.log`, `temp/*`, ...).

use std::path::Path;

/// Check if a path matches a single exclusion pattern.
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    if path == pattern {
        return true;
    }

    let basename = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if basename == pattern {
        return true;
    }

    match glob::Pattern::new(pattern) {
        Ok(glob) => glob.matches(path) || glob.matches(&basename),
        Err(_) => false,
    }
}

/// Check if a path should be excluded based on the pattern list.
pub fn should_exclude(path: &str, patterns: &[String], verbose: bool) -> bool {
    for pattern in patterns {
        if matches_pattern(path, pattern) {
            if verbose {
                println!("  → Excluding {} (matches pattern: {})", path, pattern);
            }
            return true;
        }
    }
    false
}
