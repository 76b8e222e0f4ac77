//! Scan manifest - JSON record of what a generated installer embeds.
//!
//! The manifest is a machine-readable inventory of the scanned structure:
//! directory list plus per-file path, size, and SHA-256 digest. It lets a
//! consumer verify what an installer script will create without parsing
//! shell.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::scan::ScanResult;

/// One embedded file as recorded in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Path relative to the source root.
    pub path: String,
    /// Content length in bytes.
    pub size: usize,
    /// SHA-256 digest of the content, lowercase hex.
    pub sha256: String,
}

/// Inventory of a scanned source tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanManifest {
    /// Source root the scan ran against.
    pub source_root: String,
    /// Relative directory paths, sorted.
    pub directories: Vec<String>,
    /// Embedded files in scan order.
    pub files: Vec<ManifestFile>,
}

impl ScanManifest {
    /// Build a manifest from a scan result.
    pub fn from_scan(source: &Path, structure: &ScanResult) -> Self {
        let mut directories = structure.directories.clone();
        directories.sort();

        let files = structure
            .files
            .iter()
            .map(|file| ManifestFile {
                path: file.path.clone(),
                size: file.size,
                sha256: sha256_hex(file.content.as_bytes()),
            })
            .collect();

        Self {
            source_root: source.display().to_string(),
            directories,
            files,
        }
    }

    /// Save manifest to a pretty-printed JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write manifest to {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Load manifest from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest from {}", path.as_ref().display()))?;
        let manifest: Self = serde_json::from_str(&json)?;
        Ok(manifest)
    }
}

/// Compute the SHA-256 digest of a byte slice as lowercase hex.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
