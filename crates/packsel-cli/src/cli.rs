//! CLI argument parsing using clap.

use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packsel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output archive file name, written under the project root
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Project root directory (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Root-relative path to archive (repeatable; order is preserved)
    #[arg(short = 'i', long = "include", value_name = "PATH", required = true)]
    pub include: Vec<PathBuf>,

    /// Start from a named exclusion preset
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Directory name to prune during traversal (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dir: Vec<String>,

    /// Exact filename to skip (repeatable)
    #[arg(long = "exclude-file", value_name = "NAME")]
    pub exclude_file: Vec<String>,

    /// Filename suffix to skip, e.g. ".log" (repeatable)
    #[arg(long = "exclude-ext", value_name = "SUFFIX")]
    pub exclude_ext: Vec<String>,

    /// Compression level (0-9, 0 stores entries uncompressed)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}

/// Named exclusion presets carried over from the tool this replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Build artifacts, VCS metadata, editor state, `.env`-family
    /// secrets, and `.zip`/`.log` extensions
    Strict,
    /// Dependency and VCS directories plus OS junk files only
    Minimal,
}
