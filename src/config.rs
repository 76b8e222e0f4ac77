//! Configuration management for framepack.
//!
//! Reads configuration from a .env file in the source directory and from
//! environment variables. Environment variables take precedence over the
//! .env file, and command-line flags take precedence over both.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default output filename for the generated installer.
pub const DEFAULT_OUTPUT: &str = "install_q_framework.sh";

/// Default include paths: the AmazonQ framework folder and its root doc.
pub const DEFAULT_INCLUDES: &[&str] = &[".amazonq", "AmazonQ.md"];

/// Framepack configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Output filename (default: install_q_framework.sh)
    pub output: String,
    /// Extra include paths from FRAMEPACK_INCLUDE (colon-separated)
    pub include: Vec<String>,
    /// Extra exclude patterns from FRAMEPACK_EXCLUDE (colon-separated)
    pub exclude: Vec<String>,
}

impl Config {
    /// Load configuration from .env file and environment.
    ///
    /// The .env file is looked up in the source directory.
    pub fn load(source_dir: &Path) -> Self {
        let mut env_vars = HashMap::new();

        // Try to load .env file
        let env_path = source_dir.join(".env");
        if env_path.exists() {
            if let Ok(content) = fs::read_to_string(&env_path) {
                for line in content.lines() {
                    let line = line.trim();
                    // Skip comments and empty lines
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    // Parse KEY=value
                    if let Some((key, value)) = line.split_once('=') {
                        let key = key.trim();
                        let value = value.trim();
                        // Remove quotes if present
                        let value = value.trim_matches('"').trim_matches('\'');
                        env_vars.insert(key.to_string(), value.to_string());
                    }
                }
            }
        }

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        let output = env_vars
            .get("FRAMEPACK_OUTPUT")
            .cloned()
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        let include = env_vars
            .get("FRAMEPACK_INCLUDE")
            .map(|s| split_list(s))
            .unwrap_or_default();

        let exclude = env_vars
            .get("FRAMEPACK_EXCLUDE")
            .map(|s| split_list(s))
            .unwrap_or_default();

        Self {
            output,
            include,
            exclude,
        }
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  FRAMEPACK_OUTPUT: {}", self.output);
        println!("  FRAMEPACK_INCLUDE: {}", self.include.join(":"));
        println!("  FRAMEPACK_EXCLUDE: {}", self.exclude.join(":"));
    }
}

/// Split a colon-separated list, dropping empty segments.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(':')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
