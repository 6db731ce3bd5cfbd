//! Archive operation reporting and progress callbacks.

use std::path::Path;
use std::time::Duration;

/// Report of an archive creation run.
///
/// # Examples
///
/// ```
/// use packsel_core::ArchiveReport;
///
/// let mut report = ArchiveReport::new();
/// report.files_added = 10;
/// report.bytes_written = 1000;
/// report.bytes_compressed = 400;
/// assert_eq!(report.compression_percentage(), 60.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchiveReport {
    /// Number of files written into the archive.
    pub files_added: usize,

    /// Number of candidate files rejected by an exclusion predicate.
    pub files_skipped: usize,

    /// Total uncompressed bytes copied from source files.
    pub bytes_written: u64,

    /// Size of the finished archive file on disk.
    pub bytes_compressed: u64,

    /// Duration of the whole operation.
    pub duration: Duration,

    /// Warnings produced during the run (e.g. missing include entries).
    pub warnings: Vec<String>,
}

impl ArchiveReport {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning message.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Returns whether any warnings were recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the space saved by compression as a percentage.
    ///
    /// Returns 0.0 when nothing was written.
    #[must_use]
    pub fn compression_percentage(&self) -> f64 {
        if self.bytes_written == 0 {
            return 0.0;
        }
        let saved = self.bytes_written.saturating_sub(self.bytes_compressed);
        (saved as f64 / self.bytes_written as f64) * 100.0
    }
}

/// Callback interface for observing archive creation progress.
///
/// Implementations receive one `on_entry_start`/`on_entry_complete` pair
/// per archived file, `on_bytes_written` for each copied chunk, and a
/// single `on_complete` when the archive is finalized.
pub trait ProgressCallback: Send {
    /// Called before a file is written into the archive.
    ///
    /// `current` is 1-indexed; `total` is the planned entry count.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of source bytes copied into the archive.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after a file has been fully written.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once when the archive has been finalized.
    fn on_complete(&mut self);
}

/// A progress callback that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
