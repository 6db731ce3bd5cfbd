//! ZIP archive writing.
//!
//! Streams a planned entry set into a deflate-compressed ZIP file. Error
//! handling is all-or-nothing: any filesystem error while reading a source
//! file or writing the archive aborts the run, and a failed run deletes
//! the half-written output file. Silent partial archives are a correctness
//! risk, so unreadable files fail fast instead of being skipped.

use crate::ArchiveError;
use crate::ArchivePolicy;
use crate::ArchiveReport;
use crate::ProgressCallback;
use crate::Result;
use crate::report::NoopProgress;
use crate::walker::ArchiveEntry;
use crate::walker::plan_entries;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates `<root>/<output_name>` from the policy's include list.
///
/// # Examples
///
/// ```no_run
/// use packsel_core::ArchivePolicy;
/// use packsel_core::create_archive;
///
/// let policy = ArchivePolicy::strict().with_include(["src", "README.md"]);
/// let report = create_archive(".", "project.zip", &policy)?;
/// println!("archived {} files", report.files_added);
/// # Ok::<(), packsel_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the policy is invalid, the output file cannot be
/// created, a source file cannot be read, or the archive stream fails.
/// The output file is removed before the error is returned.
pub fn create_archive<P: AsRef<Path>>(
    root: P,
    output_name: &str,
    policy: &ArchivePolicy,
) -> Result<ArchiveReport> {
    let mut noop = NoopProgress;
    create_archive_with_progress(root, output_name, policy, &mut noop)
}

/// Creates an archive with progress reporting.
///
/// The callback receives one `on_entry_start`/`on_entry_complete` pair per
/// archived file, `on_bytes_written` per copied chunk, and `on_complete`
/// once the archive is finalized.
///
/// # Errors
///
/// Same failure modes as [`create_archive`]; the output file never
/// survives a failed run.
pub fn create_archive_with_progress<P: AsRef<Path>>(
    root: P,
    output_name: &str,
    policy: &ArchivePolicy,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    policy.validate()?;
    let root = root.as_ref();
    let output = root.join(output_name);
    let file = File::create(&output)?;

    match write_archive(file, root, policy, progress) {
        Ok(mut report) => {
            report.bytes_compressed = std::fs::metadata(&output)?.len();
            Ok(report)
        }
        Err(err) => {
            // Callers must never see a half-written archive.
            let _ = std::fs::remove_file(&output);
            Err(err)
        }
    }
}

/// Writes the planned entries into any seekable writer.
///
/// Plans first, then streams; the plan's warnings and skip count carry
/// over into the report.
fn write_archive<W: Write + Seek>(
    writer: W,
    root: &Path,
    policy: &ArchivePolicy,
    progress: &mut dyn ProgressCallback,
) -> Result<ArchiveReport> {
    let start = std::time::Instant::now();

    let plan = plan_entries(root, policy)?;
    let mut report = ArchiveReport::new();
    report.warnings = plan.warnings;
    report.files_skipped = plan.files_skipped;

    let mut zip = ZipWriter::new(writer);
    let options = match policy.compression_level {
        Some(0) => SimpleFileOptions::default().compression_method(CompressionMethod::Stored),
        level => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level.unwrap_or(6)))),
    };

    let total = plan.entries.len();
    let mut buffer = vec![0u8; 64 * 1024];

    for (idx, entry) in plan.entries.iter().enumerate() {
        progress.on_entry_start(Path::new(&entry.name), total, idx + 1);
        add_file(&mut zip, entry, &options, &mut report, progress, &mut buffer)?;
        progress.on_entry_complete(Path::new(&entry.name));
    }

    zip.finish().map_err(|e| {
        ArchiveError::Io(std::io::Error::other(format!(
            "failed to finish archive: {e}"
        )))
    })?;

    report.duration = start.elapsed();
    progress.on_complete();

    Ok(report)
}

/// Copies one source file into the archive under its entry name.
fn add_file<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    entry: &ArchiveEntry,
    options: &SimpleFileOptions,
    report: &mut ArchiveReport,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<()> {
    let mut file = File::open(&entry.path)?;

    zip.start_file(&entry.name, *options).map_err(|e| {
        ArchiveError::Io(std::io::Error::other(format!(
            "failed to start entry {}: {e}",
            entry.name
        )))
    })?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    report.files_added += 1;
    report.bytes_written += bytes_written;

    Ok(())
}
