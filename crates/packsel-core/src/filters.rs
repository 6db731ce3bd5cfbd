//! Exclusion predicates and archive entry name computation.
//!
//! Three independent rules remove candidates from an archive: directory
//! names (applied during traversal, see [`crate::walker`]), exact
//! filenames, and extension suffixes. Per-file evaluation order is exact
//! filename first, then extension.

use crate::ArchiveError;
use crate::ArchivePolicy;
use crate::Result;
use std::path::Path;

/// Checks whether a directory name is in the excluded-directory set.
///
/// Matching is case-sensitive exact equality; `node_modules` does not
/// match `Node_Modules` or `node_modules2`.
#[must_use]
pub fn is_excluded_dir(name: &str, policy: &ArchivePolicy) -> bool {
    policy.exclude_dirs.contains(name)
}

/// Checks whether a file should be skipped by name or extension.
///
/// Exact filename match is tested first, then the extension suffix rules.
/// Both tests are case-sensitive; the extension test is a plain suffix
/// match, so `".log"` skips `data.log` and `archive.tar.log` alike.
///
/// # Examples
///
/// ```
/// use packsel_core::ArchivePolicy;
/// use packsel_core::filters::is_excluded_file;
///
/// let policy = ArchivePolicy::strict();
/// assert!(is_excluded_file(".env", &policy));
/// assert!(is_excluded_file("data.log", &policy));
/// assert!(!is_excluded_file("main.py", &policy));
/// ```
#[must_use]
pub fn is_excluded_file(name: &str, policy: &ArchivePolicy) -> bool {
    if policy.exclude_files.contains(name) {
        return true;
    }
    policy
        .exclude_extensions
        .iter()
        .any(|ext| name.ends_with(ext.as_str()))
}

/// Computes the archive entry name for a source path.
///
/// The name is the path relative to the project root, forward-slash
/// separated on every platform. Never absolute, never escaping the root.
///
/// # Errors
///
/// Returns [`ArchiveError::EntryOutsideRoot`] if `path` is not under
/// `root`, and [`ArchiveError::NonUtf8Path`] if the relative path cannot
/// be represented as UTF-8 (ZIP entry names are strings).
///
/// # Examples
///
/// ```
/// use packsel_core::filters::entry_name;
/// use std::path::Path;
///
/// let root = Path::new("/home/user/project");
/// let source = Path::new("/home/user/project/src/app.py");
/// assert_eq!(entry_name(source, root).unwrap(), "src/app.py");
/// ```
pub fn entry_name(path: &Path, root: &Path) -> Result<String> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| ArchiveError::EntryOutsideRoot {
            path: path.to_path_buf(),
        })?;

    let relative_str = relative.to_str().ok_or_else(|| ArchiveError::NonUtf8Path {
        path: path.to_path_buf(),
    })?;

    // ZIP entry names use forward slashes regardless of platform.
    #[cfg(windows)]
    let name = relative_str.replace('\\', "/");

    #[cfg(not(windows))]
    let name = relative_str.to_string();

    Ok(name)
}
