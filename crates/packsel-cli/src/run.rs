//! Archive run: policy assembly and invocation.

use crate::cli::Cli;
use crate::cli::Preset;
use crate::error::add_archive_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use packsel_core::ArchivePolicy;
use packsel_core::NoopProgress;
use packsel_core::create_archive_with_progress;
use std::env;
use std::path::Path;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let root = match &args.root {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let policy = build_policy(args);

    // Use a progress bar only when it won't fight the output mode.
    let report = if CliProgress::should_show() && !args.quiet && !args.json {
        let mut progress = CliProgress::new("Archiving");
        add_archive_context(
            create_archive_with_progress(&root, &args.output, &policy, &mut progress),
            &args.output,
        )?
    } else {
        let mut noop = NoopProgress;
        add_archive_context(
            create_archive_with_progress(&root, &args.output, &policy, &mut noop),
            &args.output,
        )?
    };

    formatter.format_creation_result(Path::new(&args.output), &report)?;

    Ok(())
}

/// Builds the archive policy from the preset and the per-flag additions.
fn build_policy(args: &Cli) -> ArchivePolicy {
    let base = match args.preset {
        Some(Preset::Strict) => ArchivePolicy::strict(),
        Some(Preset::Minimal) => ArchivePolicy::minimal(),
        None => ArchivePolicy::new(),
    };

    let mut policy = base
        .with_include(args.include.clone())
        .with_exclude_dirs(args.exclude_dir.clone())
        .with_exclude_files(args.exclude_file.clone())
        .with_exclude_extensions(args.exclude_ext.clone());

    if let Some(level) = args.compression_level {
        policy = policy.with_compression_level(level);
    }

    policy
}
