//! Selective project archiving with exclusion filtering.
//!
//! `packsel-core` archives a project directory tree into a compressed ZIP
//! file, excluding build artifacts, secrets, and known junk paths. The
//! policy is explicit: an ordered include list of root-relative paths plus
//! three exclusion rule sets (directory names pruned during traversal,
//! exact filenames, extension suffixes).
//!
//! Two deliberate strengthenings over the tool this replaces: unreadable
//! source files abort the whole run instead of being silently skipped, and
//! a failed run deletes the half-written archive.
//!
//! # Examples
//!
//! ```no_run
//! use packsel_core::ArchivePolicy;
//! use packsel_core::create_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let policy = ArchivePolicy::strict()
//!     .with_include(["backend", "frontend", "README.md"]);
//! let report = create_archive(".", "project.zip", &policy)?;
//! println!("archived {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod filters;
pub mod policy;
pub mod report;
pub mod walker;
pub mod writer;

// Re-export main API types
pub use error::ArchiveError;
pub use error::Result;
pub use policy::ArchivePolicy;
pub use report::ArchiveReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use walker::ArchiveEntry;
pub use walker::ArchivePlan;
pub use walker::FilteredWalker;
pub use walker::plan_entries;
pub use writer::create_archive;
pub use writer::create_archive_with_progress;
