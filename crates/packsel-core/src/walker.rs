//! Directory traversal with subtree pruning and archive planning.
//!
//! [`FilteredWalker`] handles the traversal-time rule only: subdirectories
//! whose name is in the excluded-directory set are pruned before descent,
//! so nothing beneath them is ever evaluated. The per-file rules (exact
//! filename, extension suffix) are applied afterwards by [`plan_entries`],
//! which also resolves the include list and records warnings for entries
//! missing from the filesystem.

use crate::ArchiveError;
use crate::ArchivePolicy;
use crate::Result;
use crate::filters;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// One planned archive entry: a source file and its entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Absolute path of the source file.
    pub path: PathBuf,

    /// Root-relative, forward-slash entry name.
    pub name: String,
}

/// The resolved set of entries for one archiving run.
#[derive(Debug, Clone, Default)]
pub struct ArchivePlan {
    /// Files to write, in include-list order.
    pub entries: Vec<ArchiveEntry>,

    /// Warnings collected while planning (missing include entries).
    pub warnings: Vec<String>,

    /// Candidate files rejected by a per-file exclusion predicate.
    pub files_skipped: usize,
}

/// Walks a directory tree, pruning excluded subdirectory names.
///
/// Yields regular (non-directory) entries only; the original tool never
/// wrote explicit directory records, and neither does this one. The
/// traversal root itself is never pruned: explicitly including a directory
/// whose name matches an excluded one still archives it.
///
/// # Examples
///
/// ```no_run
/// use packsel_core::ArchivePolicy;
/// use packsel_core::walker::FilteredWalker;
/// use std::path::Path;
///
/// let policy = ArchivePolicy::strict();
/// let walker = FilteredWalker::new(Path::new("./src"), &policy);
/// for file in walker.files() {
///     println!("candidate: {}", file?.display());
/// }
/// # Ok::<(), packsel_core::ArchiveError>(())
/// ```
pub struct FilteredWalker<'a> {
    dir: &'a Path,
    policy: &'a ArchivePolicy,
}

impl<'a> FilteredWalker<'a> {
    /// Creates a walker rooted at `dir`.
    #[must_use]
    pub fn new(dir: &'a Path, policy: &'a ArchivePolicy) -> Self {
        Self { dir, policy }
    }

    /// Returns an iterator over the non-pruned files beneath the root.
    ///
    /// Entries are yielded in a deterministic order (sorted by file name
    /// at each level). Traversal errors are surfaced, not swallowed: a
    /// directory that cannot be read aborts the run.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        let policy = self.policy;
        WalkDir::new(self.dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !filters::is_excluded_dir(name, policy))
            })
            .filter_map(|entry| match entry {
                Ok(entry) => (!entry.file_type().is_dir()).then(|| Ok(entry.into_path())),
                Err(e) => Some(Err(ArchiveError::Io(std::io::Error::other(format!(
                    "directory walk failed: {e}"
                ))))),
            })
    }
}

/// Resolves the policy's include list into an ordered archive plan.
///
/// Each include entry is resolved against `root`:
///
/// - missing on disk: recorded as a warning, skipped (non-fatal);
/// - a regular file: tested against the per-file predicates;
/// - a directory: traversed with [`FilteredWalker`], every surviving file
///   tested against the same predicates.
///
/// # Errors
///
/// Returns an error if traversal fails, a candidate resolves outside
/// `root`, or a candidate's name is not valid UTF-8.
pub fn plan_entries(root: &Path, policy: &ArchivePolicy) -> Result<ArchivePlan> {
    let mut plan = ArchivePlan::default();

    for item in &policy.include {
        let path = root.join(item);

        if !path.exists() {
            plan.warnings.push(format!(
                "include path does not exist, skipping: {}",
                item.display()
            ));
            continue;
        }

        if path.is_dir() {
            let walker = FilteredWalker::new(&path, policy);
            for file in walker.files() {
                push_candidate(&mut plan, &file?, root, policy)?;
            }
        } else {
            push_candidate(&mut plan, &path, root, policy)?;
        }
    }

    Ok(plan)
}

/// Applies the per-file predicates to one candidate and records the
/// outcome: exact filename first, then extension suffix.
fn push_candidate(
    plan: &mut ArchivePlan,
    path: &Path,
    root: &Path,
    policy: &ArchivePolicy,
) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ArchiveError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;

    if filters::is_excluded_file(file_name, policy) {
        plan.files_skipped += 1;
        return Ok(());
    }

    let name = filters::entry_name(path, root)?;
    plan.entries.push(ArchiveEntry {
        path: path.to_path_buf(),
        name,
    });
    Ok(())
}
