use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Recursively collect source files under `root`.
///
/// Directories whose base name is in `ignored_dirs` are pruned. A file is kept
/// when its name matches at least one of `patterns` (e.g. `*.ts`) and is not
/// one of the `excluded` files (the cache and report this tool writes). Order
/// of the returned paths is unspecified.
pub fn scan_files(
    root: &Path,
    ignored_dirs: &[String],
    patterns: &[String],
    excluded: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("Source directory '{}' does not exist.", root.display());
    }

    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let patterns = compile_patterns(patterns)?;
    let excluded = resolve_excluded(excluded);
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, ignored_dirs));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to read source directory: {}", root.display()))?;

        if entry.file_type().is_file()
            && is_source_file(&entry, &patterns)
            && !is_excluded(&entry, &excluded)
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid source pattern: \"{}\"", p)))
        .collect()
}

/// Canonical forms of the excluded paths. Paths that do not exist yet cannot
/// be scanned and are dropped.
fn resolve_excluded(excluded: &[PathBuf]) -> Vec<PathBuf> {
    excluded
        .iter()
        .filter_map(|path| path.canonicalize().ok())
        .collect()
}

fn is_excluded(entry: &DirEntry, excluded: &[PathBuf]) -> bool {
    excluded
        .iter()
        .any(|path| path.file_name() == Some(entry.file_name()))
        && entry
            .path()
            .canonicalize()
            .is_ok_and(|path| excluded.contains(&path))
}

fn is_ignored_dir(entry: &DirEntry, ignored_dirs: &[String]) -> bool {
    // The root itself is never pruned, whatever its name.
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignored_dirs.iter().any(|ignored| ignored == name))
}

fn is_source_file(entry: &DirEntry, patterns: &[Pattern]) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| patterns.iter().any(|p| p.matches(name)))
}
