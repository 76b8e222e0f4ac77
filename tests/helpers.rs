//! Shared test utilities for framepack tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with a source tree to scan and a target directory for
/// running generated installers.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Source directory containing the framework to scan
    pub source: PathBuf,
    /// Target directory where installers are executed
    pub target: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with empty source and target dirs.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let source = base.join("source");
        let target = base.join("target");

        fs::create_dir_all(&source).expect("Failed to create source dir");
        fs::create_dir_all(&target).expect("Failed to create target dir");

        Self {
            _temp_dir: temp_dir,
            source,
            target,
        }
    }
}

/// Create the canonical framework tree used across tests:
/// `.amazonq/rules/a.md` with "hello" and `AmazonQ.md` with "root".
pub fn create_framework_tree(source: &Path) {
    fs::create_dir_all(source.join(".amazonq/rules")).expect("Failed to create rules dir");
    fs::write(source.join(".amazonq/rules/a.md"), "hello").expect("Failed to write a.md");
    fs::write(source.join("AmazonQ.md"), "root").expect("Failed to write AmazonQ.md");
}

/// Assert that a file exists.
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "Expected file to exist: {}", path.display());
}

/// Assert that a directory exists.
pub fn assert_dir_exists(path: &Path) {
    assert!(path.is_dir(), "Expected directory to exist: {}", path.display());
}

/// Assert that a file contains expected content.
pub fn assert_file_contains(path: &Path, expected: &str) {
    let content =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read file: {}", path.display()));
    assert!(
        content.contains(expected),
        "File {} does not contain expected content.\nExpected to find: {}\nActual content: {}",
        path.display(),
        expected,
        content
    );
}

/// Extract the base64 blob embedded for `path` from a generated script.
///
/// Looks for the `create_file_from_base64 "<path>" "<blob>"` call and
/// returns the blob.
pub fn embedded_base64_for(script: &str, path: &str) -> Option<String> {
    let needle = format!("create_file_from_base64 \"{}\" \"", path);
    let start = script.find(&needle)? + needle.len();
    let rest = &script[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}
