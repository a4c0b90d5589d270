//! Run-scoped source file contents.
//!
//! Every scanned file is read exactly once per run and kept in memory for all
//! depth passes, together with its normalized path and content hash.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::cache::content_hash;

#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the scan root, `/`-separated.
    pub rel_path: String,
    pub content: String,
    pub hash: String,
}

impl SourceFile {
    pub fn new(rel_path: impl Into<String>, content: impl Into<String>) -> Self {
        let rel_path = rel_path.into();
        let content = content.into();
        let hash = content_hash(&rel_path, &content);
        Self {
            rel_path,
            content,
            hash,
        }
    }
}

#[derive(Debug, Default)]
pub struct SourceSet {
    files: Vec<SourceFile>,
}

impl SourceSet {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }

    /// Read all `paths` (found under `root`). Any read failure aborts.
    ///
    /// Content is decoded lossily, so binary files never fail the run.
    pub fn load(root: &Path, paths: &[PathBuf]) -> Result<Self> {
        let files = paths
            .par_iter()
            .map(|path| {
                let bytes = fs::read(path)
                    .with_context(|| format!("Failed to read source file: {}", path.display()))?;
                let content = String::from_utf8_lossy(&bytes).into_owned();
                Ok(SourceFile::new(normalize_path(root, path), content))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { files })
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
///
/// Paths outside `root` are kept whole.
pub fn normalize_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
