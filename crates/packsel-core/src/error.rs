//! Error types for archive creation operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while planning or writing an archive.
///
/// Missing include-list entries are deliberately *not* represented here:
/// they are recovered locally and surface as warnings on the
/// [`ArchiveReport`](crate::ArchiveReport) instead. Every variant below is
/// fatal and aborts the whole operation.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed (reading a source file or writing the
    /// archive stream; ZIP-writer failures are folded in here too).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An entry's archive name would escape the project root.
    #[error("path escapes project root: {path}")]
    EntryOutsideRoot {
        /// The offending source path.
        path: PathBuf,
    },

    /// A path cannot be represented as a UTF-8 archive entry name.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path {
        /// The offending source path.
        path: PathBuf,
    },

    /// Compression level outside the accepted 0-9 range.
    #[error("invalid compression level: {level} (expected 0-9)")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },
}

impl ArchiveError {
    /// Returns `true` if this error originated in the filesystem or the
    /// archive stream, as opposed to policy validation.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
