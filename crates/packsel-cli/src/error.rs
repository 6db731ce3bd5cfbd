//! Error conversion utilities for the CLI.
//!
//! Converts packsel-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use packsel_core::ArchiveError;

/// Converts `ArchiveError` to a user-friendly anyhow error with context.
pub fn convert_archive_error(err: ArchiveError, output: &str) -> anyhow::Error {
    match err {
        ArchiveError::EntryOutsideRoot { path } => {
            anyhow!(
                "Include entry resolves outside the project root: {}\n\
                 HINT: Include paths must be relative to --root and must not contain '..'.",
                path.display()
            )
        }
        ArchiveError::NonUtf8Path { path } => {
            anyhow!(
                "Cannot archive a path that is not valid UTF-8: {}\n\
                 HINT: ZIP entry names are UTF-8 strings; rename the file to archive it.",
                path.display()
            )
        }
        ArchiveError::InvalidCompressionLevel { level } => {
            anyhow!("Invalid compression level {level}: expected a value between 0 and 9.")
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while creating '{output}': {io_err}\n\
                 The partial archive has been removed; no output was produced."
            )
        }
    }
}

/// Adds archive context to a core result.
pub fn add_archive_context<T>(
    result: Result<T, ArchiveError>,
    output: &str,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, output))
}
