//! Framepack - AmazonQ framework installer generator.
//!
//! Scans a curated set of files and directories (the .amazonq folder and
//! AmazonQ.md by default) and generates a self-contained shell script that
//! recreates the entire structure with all content on a target machine.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use framepack::generate::{cmd_generate, GenerateOptions};

#[derive(Parser)]
#[command(name = "framepack")]
#[command(about = "Generates a self-contained AmazonQ framework installer script")]
#[command(
    after_help = "QUICK START:\n  framepack                  Scan .amazonq/ and AmazonQ.md in the current directory\n  framepack -v ~/project     Verbose scan of another source tree\n  framepack --exclude '*.log'  Leave log files out of the installer\n  framepack --clear-defaults --include docs  Embed only docs/"
)]
struct Cli {
    /// Source directory to scan (default: current directory)
    path: Option<PathBuf>,

    /// Output filename (default: install_q_framework.sh)
    #[arg(short, long)]
    output: Option<String>,

    /// Overwrite existing script without confirmation
    #[arg(short, long)]
    force: bool,

    /// Enable verbose output during generation
    #[arg(short, long)]
    verbose: bool,

    /// Don't make the generated script executable
    #[arg(long)]
    no_exec: bool,

    /// Add file/directory to include (can be used multiple times)
    #[arg(long)]
    include: Vec<String>,

    /// Add pattern to exclude (can be used multiple times)
    #[arg(long)]
    exclude: Vec<String>,

    /// Clear default includes (.amazonq, AmazonQ.md)
    #[arg(long)]
    clear_defaults: bool,

    /// Also write a JSON manifest of the scanned structure
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();

    let source = match cli.path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    cmd_generate(GenerateOptions {
        source,
        output: cli.output,
        force: cli.force,
        verbose: cli.verbose,
        no_exec: cli.no_exec,
        include: cli.include,
        exclude: cli.exclude,
        clear_defaults: cli.clear_defaults,
        manifest: cli.manifest,
    })
}
