//! Unit tests for the framepack scanner and generator.
//!
//! These tests exercise the scan-and-serialize pipeline through the library
//! API without executing any generated script.

mod helpers;

use helpers::{create_framework_tree, embedded_base64_for, TestEnv};

use framepack::manifest::{sha256_hex, ScanManifest};
use framepack::scan::{is_binary, scan_paths};
use framepack::script::generate_script;
use std::fs;

// =============================================================================
// Scanner
// =============================================================================

#[test]
fn test_default_includes_pick_up_framework_tree() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);

    let includes = vec![".amazonq".to_string(), "AmazonQ.md".to_string()];
    let result = scan_paths(&env.source, &includes, &[], false).expect("scan should succeed");

    assert!(result.directories.contains(&".amazonq".to_string()));
    assert!(result.directories.contains(&".amazonq/rules".to_string()));

    let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
    assert!(paths.contains(&".amazonq/rules/a.md"));
    assert!(paths.contains(&"AmazonQ.md"));
}

#[test]
fn test_scan_content_matches_disk() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);

    let includes = vec![".amazonq".to_string()];
    let result = scan_paths(&env.source, &includes, &[], false).expect("scan should succeed");

    let entry = result
        .files
        .iter()
        .find(|f| f.path == ".amazonq/rules/a.md")
        .expect("a.md should be scanned");
    assert_eq!(entry.content, "hello");
    assert_eq!(entry.size, 5);
}

#[test]
fn test_exclude_by_basename_removes_file() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);
    fs::write(env.source.join(".amazonq/rules/skip.md"), "skip").unwrap();

    let includes = vec![".amazonq".to_string()];
    let excludes = vec!["skip.md".to_string()];
    let result = scan_paths(&env.source, &includes, &excludes, false).unwrap();

    assert!(!result.files.iter().any(|f| f.path.ends_with("skip.md")));
    assert!(result.files.iter().any(|f| f.path == ".amazonq/rules/a.md"));
}

#[test]
fn test_exclude_glob_removes_matching_files() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);
    fs::write(env.source.join(".amazonq/build.log"), "log").unwrap();

    let includes = vec![".amazonq".to_string()];
    let excludes = vec!["*.log".to_string()];
    let result = scan_paths(&env.source, &includes, &excludes, false).unwrap();

    assert!(!result.files.iter().any(|f| f.path.ends_with(".log")));
}

#[test]
fn test_excluded_directory_removes_descendants() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);
    fs::create_dir_all(env.source.join(".amazonq/temp/nested")).unwrap();
    fs::write(env.source.join(".amazonq/temp/nested/t.md"), "t").unwrap();

    let includes = vec![".amazonq".to_string()];
    let excludes = vec![".amazonq/temp".to_string()];
    let result = scan_paths(&env.source, &includes, &excludes, false).unwrap();

    assert!(!result.directories.iter().any(|d| d.contains("temp")));
    assert!(!result.files.iter().any(|f| f.path.contains("temp")));
}

#[test]
fn test_binary_file_never_scanned() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);
    fs::write(env.source.join(".amazonq/blob.bin"), b"\x7fELF\0\x01\x02").unwrap();

    let includes = vec![".amazonq".to_string()];
    let result = scan_paths(&env.source, &includes, &[], false).unwrap();

    assert!(!result.files.iter().any(|f| f.path.ends_with("blob.bin")));
}

#[test]
fn test_is_binary_boundary() {
    // NUL exactly at byte 1023 counts, at 1024 it does not.
    let mut sniffed = vec![b'x'; 1024];
    sniffed[1023] = 0;
    assert!(is_binary(&sniffed));

    let mut beyond = vec![b'x'; 1025];
    beyond[1024] = 0;
    assert!(!is_binary(&beyond));
}

// =============================================================================
// Generator
// =============================================================================

#[test]
fn test_every_scanned_file_gets_a_creation_call() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);

    let includes = vec![".amazonq".to_string(), "AmazonQ.md".to_string()];
    let result = scan_paths(&env.source, &includes, &[], false).unwrap();
    let script = generate_script(&result, false);

    for file in &result.files {
        let blob = embedded_base64_for(&script, &file.path)
            .unwrap_or_else(|| panic!("no creation call for {}", file.path));
        let decoded =
            base64::Engine::decode(&base64::prelude::BASE64_STANDARD, blob.as_bytes()).unwrap();
        assert_eq!(decoded, file.content.as_bytes(), "content mismatch for {}", file.path);
    }
}

#[test]
fn test_rendered_directories_sorted_and_unique() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);
    fs::create_dir_all(env.source.join(".amazonq/scripts")).unwrap();

    // Include the tree twice to exercise deduplication.
    let includes = vec![".amazonq".to_string(), ".amazonq".to_string()];
    let result = scan_paths(&env.source, &includes, &[], false).unwrap();
    let script = generate_script(&result, false);

    let rendered: Vec<&str> = script
        .lines()
        .filter_map(|line| line.trim().strip_prefix("create_directory \""))
        .filter_map(|rest| rest.strip_suffix('"'))
        .collect();

    let mut sorted = rendered.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(rendered, sorted, "directory calls must be sorted and unique");
    assert!(rendered.contains(&".amazonq/scripts"));
}

#[test]
fn test_pipeline_is_deterministic() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);
    fs::create_dir_all(env.source.join(".amazonq/scripts")).unwrap();
    fs::write(env.source.join(".amazonq/scripts/run.sh"), "#!/bin/sh\necho hi\n").unwrap();

    let includes = vec![".amazonq".to_string(), "AmazonQ.md".to_string()];

    let first = generate_script(&scan_paths(&env.source, &includes, &[], false).unwrap(), false);
    let second = generate_script(&scan_paths(&env.source, &includes, &[], false).unwrap(), false);

    assert_eq!(first, second, "unchanged source must yield byte-identical scripts");
}

// =============================================================================
// Manifest
// =============================================================================

#[test]
fn test_manifest_records_sizes_and_digests() {
    let env = TestEnv::new();
    create_framework_tree(&env.source);

    let includes = vec![".amazonq".to_string(), "AmazonQ.md".to_string()];
    let result = scan_paths(&env.source, &includes, &[], false).unwrap();
    let manifest = ScanManifest::from_scan(&env.source, &result);

    let a_md = manifest
        .files
        .iter()
        .find(|f| f.path == ".amazonq/rules/a.md")
        .expect("a.md in manifest");
    assert_eq!(a_md.size, 5);
    assert_eq!(a_md.sha256, sha256_hex(b"hello"));

    let mut sorted = manifest.directories.clone();
    sorted.sort();
    assert_eq!(manifest.directories, sorted);
}
