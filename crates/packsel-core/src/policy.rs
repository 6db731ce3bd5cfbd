//! Archiving policy: include list and exclusion rule sets.

use crate::ArchiveError;
use crate::Result;
use std::collections::HashSet;
use std::path::PathBuf;

/// Immutable configuration for a selective archiving run.
///
/// Holds the ordered root-relative include list and the three independent
/// exclusion rule sets. The policy is passed explicitly into every
/// operation; there is no process-wide state.
///
/// # Examples
///
/// ```
/// use packsel_core::ArchivePolicy;
///
/// let policy = ArchivePolicy::strict()
///     .with_include(["backend", "frontend", "README.md"])
///     .with_compression_level(9);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArchivePolicy {
    /// Root-relative paths (files or directories) eligible for archiving.
    ///
    /// Order determines archive-write order but has no other semantic
    /// effect.
    pub include: Vec<PathBuf>,

    /// Directory names whose subtrees are pruned during traversal.
    ///
    /// Matching is case-sensitive exact equality on the directory name.
    /// A pruned directory is never descended into.
    pub exclude_dirs: HashSet<String>,

    /// Exact filenames skipped wherever they appear.
    pub exclude_files: HashSet<String>,

    /// Filename suffixes skipped wherever they appear (e.g. `".log"`).
    ///
    /// Matching is a plain case-sensitive suffix test.
    pub exclude_extensions: HashSet<String>,

    /// Deflate compression level (0-9, 0 = store uncompressed).
    ///
    /// `None` uses the library default.
    pub compression_level: Option<u8>,
}

impl ArchivePolicy {
    /// Creates an empty policy: nothing included, nothing excluded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stricter of the two historical exclusion sets: build artifacts,
    /// VCS metadata, editor state, `.env`-family secrets, and log/zip
    /// extensions.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            include: Vec::new(),
            exclude_dirs: to_set([
                "node_modules",
                ".git",
                "dist",
                "build",
                "coverage",
                ".vscode",
                ".idea",
                "__pycache__",
            ]),
            exclude_files: to_set([
                ".DS_Store",
                "Thumbs.db",
                ".env",
                ".env.local",
                ".env.development",
                ".env.test",
                ".env.production",
            ]),
            exclude_extensions: to_set([".zip", ".log"]),
            compression_level: Some(6),
        }
    }

    /// The looser historical exclusion set: dependency and VCS directories
    /// plus OS junk files, with no extension-based rules.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            include: Vec::new(),
            exclude_dirs: to_set(["node_modules", ".git", "__pycache__"]),
            exclude_files: to_set([".DS_Store", "Thumbs.db"]),
            exclude_extensions: HashSet::new(),
            compression_level: Some(6),
        }
    }

    /// Replaces the include list, preserving order.
    #[must_use]
    pub fn with_include<I, P>(mut self, include: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.include = include.into_iter().map(Into::into).collect();
        self
    }

    /// Adds directory names to the excluded-directory set.
    #[must_use]
    pub fn with_exclude_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Adds exact filenames to the excluded-filename set.
    #[must_use]
    pub fn with_exclude_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_files.extend(files.into_iter().map(Into::into));
        self
    }

    /// Adds suffixes to the excluded-extension set.
    #[must_use]
    pub fn with_exclude_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_extensions
            .extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is not in the range 0-9. Use `validate()` for
    /// non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!(level <= 9, "compression level must be 0-9");
        self.compression_level = Some(level);
        self
    }

    /// Validates the policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is set but outside 0-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}

fn to_set<const N: usize>(items: [&str; N]) -> HashSet<String> {
    items.into_iter().map(str::to_string).collect()
}
