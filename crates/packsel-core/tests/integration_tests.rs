//! End-to-end tests for selective archive creation.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use packsel_core::ArchiveError;
use packsel_core::ArchivePolicy;
use packsel_core::create_archive;
use std::collections::BTreeSet;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn archive_names(path: &Path) -> BTreeSet<String> {
    let file = File::open(path).expect("failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("invalid zip");
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

fn archive_content(path: &Path, name: &str) -> String {
    let file = File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

/// The canonical scenario: `src/` with an app file, a `node_modules`
/// subtree, and a log file; excluded dirs `{node_modules}`, excluded
/// extensions `{.log}`. Only `src/app.py` and `README.md` survive.
#[test]
fn test_scenario_selective_project_archive() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/app.py"), "app").unwrap();
    fs::create_dir(root.join("src/node_modules")).unwrap();
    fs::write(root.join("src/node_modules/pkg.js"), "pkg").unwrap();
    fs::write(root.join("src/data.log"), "log").unwrap();
    fs::write(root.join("README.md"), "readme").unwrap();

    let policy = ArchivePolicy::new()
        .with_include(["src", "README.md"])
        .with_exclude_dirs(["node_modules"])
        .with_exclude_extensions([".log"]);

    let report = create_archive(root, "clean.zip", &policy).unwrap();

    let names = archive_names(&root.join("clean.zip"));
    assert_eq!(
        names,
        BTreeSet::from(["src/app.py".to_string(), "README.md".to_string()])
    );
    assert_eq!(report.files_added, 2);
    assert!(!report.has_warnings());
}

/// A missing include entry is a warning, not an error; all other valid
/// entries are still processed.
#[test]
fn test_scenario_missing_include_entry() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("backend")).unwrap();
    fs::write(root.join("backend/main.py"), "main").unwrap();

    let policy = ArchivePolicy::minimal().with_include(["missing_dir", "backend"]);
    let report = create_archive(root, "out.zip", &policy).unwrap();

    assert_eq!(report.files_added, 1);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("missing_dir"));
    assert!(
        archive_names(&root.join("out.zip")).contains("backend/main.py"),
        "valid entries must still be archived"
    );
}

/// No file beneath an excluded directory name appears in the archive,
/// regardless of nesting depth.
#[test]
fn test_excluded_directory_pruned_at_every_depth() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("frontend/src/components")).unwrap();
    fs::write(root.join("frontend/src/components/App.jsx"), "x").unwrap();
    fs::create_dir_all(root.join("frontend/node_modules/react/lib")).unwrap();
    fs::write(root.join("frontend/node_modules/react/lib/index.js"), "x").unwrap();
    fs::create_dir_all(root.join("frontend/src/node_modules/sub")).unwrap();
    fs::write(root.join("frontend/src/node_modules/sub/x.js"), "x").unwrap();

    let policy = ArchivePolicy::strict().with_include(["frontend"]);
    create_archive(root, "out.zip", &policy).unwrap();

    let names = archive_names(&root.join("out.zip"));
    assert_eq!(
        names,
        BTreeSet::from(["frontend/src/components/App.jsx".to_string()])
    );
    assert!(names.iter().all(|n| !n.contains("node_modules")));
}

/// Excluded filenames and extensions never appear, even as explicit
/// non-directory include entries.
#[test]
fn test_excluded_files_skipped_even_when_explicitly_included() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join(".env"), "SECRET=1").unwrap();
    fs::write(root.join("error.log"), "boom").unwrap();
    fs::write(root.join("render.yaml"), "svc").unwrap();

    let policy = ArchivePolicy::strict().with_include([".env", "error.log", "render.yaml"]);
    let report = create_archive(root, "out.zip", &policy).unwrap();

    let names = archive_names(&root.join("out.zip"));
    assert_eq!(names, BTreeSet::from(["render.yaml".to_string()]));
    assert_eq!(report.files_skipped, 2);
}

/// Every entry name is root-relative with forward slashes, never absolute.
#[test]
fn test_entry_names_relative_forward_slash() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("backend/services")).unwrap();
    fs::write(root.join("backend/services/gemini.py"), "x").unwrap();

    let policy = ArchivePolicy::new().with_include(["backend"]);
    create_archive(root, "out.zip", &policy).unwrap();

    for name in archive_names(&root.join("out.zip")) {
        assert!(!name.starts_with('/'), "absolute entry name: {name}");
        assert!(!name.contains('\\'), "backslash in entry name: {name}");
    }
}

/// Two runs over an unchanged tree produce identical entry-name sets and
/// identical decompressed content.
#[test]
fn test_repeated_runs_are_equivalent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/a.py"), "alpha").unwrap();
    fs::write(root.join("src/b.py"), "beta").unwrap();
    fs::write(root.join("README.md"), "readme").unwrap();

    let policy = ArchivePolicy::strict().with_include(["src", "README.md"]);
    create_archive(root, "one.zip", &policy).unwrap();
    create_archive(root, "two.zip", &policy).unwrap();

    let one = archive_names(&root.join("one.zip"));
    let two = archive_names(&root.join("two.zip"));
    assert_eq!(one, two);

    for name in &one {
        assert_eq!(
            archive_content(&root.join("one.zip"), name),
            archive_content(&root.join("two.zip"), name),
            "content mismatch for {name}"
        );
    }
}

/// The original tool's shape end to end: backend, frontend, root-level
/// config files, with secrets and junk filtered out.
#[test]
fn test_full_project_layout() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("backend/services")).unwrap();
    fs::write(root.join("backend/server.js"), "srv").unwrap();
    fs::write(root.join("backend/services/extractor.js"), "ext").unwrap();
    fs::write(root.join("backend/.env"), "KEY=x").unwrap();
    fs::write(root.join("backend/error.log"), "err").unwrap();
    fs::create_dir_all(root.join("frontend/src")).unwrap();
    fs::write(root.join("frontend/src/App.jsx"), "app").unwrap();
    fs::create_dir(root.join("frontend/dist")).unwrap();
    fs::write(root.join("frontend/dist/bundle.js"), "min").unwrap();
    fs::write(root.join("render.yaml"), "deploy").unwrap();
    fs::write(root.join("README.md"), "docs").unwrap();
    fs::write(root.join(".gitignore"), "node_modules").unwrap();

    let policy = ArchivePolicy::strict().with_include([
        "backend",
        "frontend",
        "render.yaml",
        "README.md",
        ".gitignore",
    ]);
    let report = create_archive(root, "project_clean.zip", &policy).unwrap();

    let names = archive_names(&root.join("project_clean.zip"));
    assert_eq!(
        names,
        BTreeSet::from([
            "backend/server.js".to_string(),
            "backend/services/extractor.js".to_string(),
            "frontend/src/App.jsx".to_string(),
            "render.yaml".to_string(),
            "README.md".to_string(),
            ".gitignore".to_string(),
        ])
    );
    assert_eq!(report.files_added, 6);
    assert_eq!(report.files_skipped, 2); // .env and error.log
}

/// A source file that cannot be read while streaming (here a broken
/// symlink under an included directory) is a fatal error, not a silent
/// skip, and the partial archive is removed.
#[cfg(unix)]
#[test]
fn test_unreadable_source_fails_fast_and_cleans_up() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/app.py"), "app").unwrap();
    std::os::unix::fs::symlink(root.join("src/missing.py"), root.join("src/dangling.py"))
        .unwrap();

    let policy = ArchivePolicy::new().with_include(["src"]);
    let result = create_archive(root, "out.zip", &policy);

    assert!(matches!(result, Err(ArchiveError::Io(_))));
    assert!(!root.join("out.zip").exists());
}

/// A fatal planning error after the output file exists must not leave the
/// partial archive behind.
#[test]
fn test_no_partial_archive_on_failure() {
    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("leak.txt"), "x").unwrap();

    let policy = ArchivePolicy::new().with_include([outside.path().join("leak.txt")]);
    let result = create_archive(temp.path(), "broken.zip", &policy);

    assert!(matches!(result, Err(ArchiveError::EntryOutsideRoot { .. })));
    assert!(!temp.path().join("broken.zip").exists());
}
