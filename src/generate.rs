//! Generate command - scan the source tree and write the installer script.
//!
//! Drives the two phases end to end: resolve the include/exclude sets from
//! defaults, configuration, and flags; scan; render the installer; write it
//! next to the source tree and report what was produced.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common;
use crate::config::{Config, DEFAULT_INCLUDES};
use crate::manifest::ScanManifest;
use crate::scan;
use crate::script;

/// Options for the generate command, resolved from the CLI.
#[derive(Debug)]
pub struct GenerateOptions {
    /// Source directory to scan.
    pub source: PathBuf,
    /// Output filename override (-o). Falls back to configuration.
    pub output: Option<String>,
    /// Overwrite an existing output script without confirmation.
    pub force: bool,
    /// Verbose scan/generation output.
    pub verbose: bool,
    /// Skip setting the executable bit on the generated script.
    pub no_exec: bool,
    /// Include paths from --include, appended to defaults.
    pub include: Vec<String>,
    /// Exclude patterns from --exclude.
    pub exclude: Vec<String>,
    /// Drop default and configured includes, keep only --include.
    pub clear_defaults: bool,
    /// Optional path for a JSON manifest of the scanned structure.
    pub manifest: Option<PathBuf>,
}

/// Execute the generate command.
pub fn cmd_generate(opts: GenerateOptions) -> Result<()> {
    if !opts.source.exists() {
        bail!("Source directory {} does not exist", opts.source.display());
    }
    if !opts.source.is_dir() {
        bail!("{} is not a directory", opts.source.display());
    }
    let source = opts
        .source
        .canonicalize()
        .with_context(|| format!("Failed to resolve source path {}", opts.source.display()))?;

    let config = Config::load(&source);

    // Include set: built-in defaults plus configuration, unless cleared;
    // explicit --include paths always apply.
    let mut include_paths: Vec<String> = Vec::new();
    if !opts.clear_defaults {
        include_paths.extend(DEFAULT_INCLUDES.iter().map(|s| s.to_string()));
        include_paths.extend(config.include.iter().cloned());
    }
    include_paths.extend(opts.include.iter().cloned());
    dedup_preserving_order(&mut include_paths);

    let mut exclude_patterns = config.exclude.clone();
    exclude_patterns.extend(opts.exclude.iter().cloned());

    let output_name = opts.output.unwrap_or_else(|| config.output.clone());
    let output_file = source.join(&output_name);

    if opts.verbose {
        println!("  → Source directory: {}", source.display());
        println!("  → Include paths: {}", include_paths.join(", "));
        println!("  → Exclude patterns: {}", exclude_patterns.join(", "));
        println!("  → Output file: {}", output_file.display());
    }

    // Confirm before overwriting an existing script
    if output_file.exists() && !opts.force {
        let question = format!(
            "File {} already exists. Overwrite?",
            output_file.display()
        );
        if !common::confirm(&question) {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    println!("Scanning included paths...");
    let structure = scan::scan_paths(&source, &include_paths, &exclude_patterns, opts.verbose)?;

    println!(
        "Found {} directories and {} files",
        structure.directories.len(),
        structure.files.len()
    );

    if structure.files.is_empty() {
        println!("Warning: No files found to include. Check your include/exclude patterns.");
        println!("Include paths: {}", include_paths.join(", "));
        println!("Exclude patterns: {}", exclude_patterns.join(", "));
        if !common::confirm("Continue anyway?") {
            return Ok(());
        }
    }

    println!("Generating complete framework setup script...");
    let script_content = script::generate_script(&structure, opts.verbose);

    if opts.verbose {
        println!("  → Writing shell script content");
    }
    fs::write(&output_file, &script_content)
        .with_context(|| format!("Failed to write script to {}", output_file.display()))?;

    if !opts.no_exec {
        if opts.verbose {
            println!("  → Making script executable");
        }
        common::make_executable(&output_file)?;
    }

    if let Some(manifest_path) = &opts.manifest {
        let manifest_path = resolve_against(&source, manifest_path);
        ScanManifest::from_scan(&source, &structure).save(&manifest_path)?;
        println!("✓ Manifest: {}", manifest_path.display());
    }

    println!("✓ Generated: {}", output_file.display());
    if !opts.no_exec {
        println!("✓ Script is executable");
    }

    let file_size = fs::metadata(&output_file)?.len();
    println!("✓ Script size: {} bytes", format_thousands(file_size));
    println!(
        "✓ Included {} path(s): {}",
        include_paths.len(),
        include_paths.join(", ")
    );
    if !exclude_patterns.is_empty() {
        println!(
            "✓ Excluded {} pattern(s): {}",
            exclude_patterns.len(),
            exclude_patterns.join(", ")
        );
    }

    println!();
    println!("Next steps:");
    println!("1. Copy script to target location");
    println!("2. Run: ./{}", output_name);
    println!("3. Or with options: ./{} --help", output_name);

    Ok(())
}

/// Remove duplicates while preserving first occurrence.
fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

/// Resolve a possibly-relative path against a base directory.
fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Format a number with thousands separators (1234567 -> "1,234,567").
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
