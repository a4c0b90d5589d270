//! Content-hash cache of confirmed key matches.
//!
//! Each record maps a normalized source path to the hash of its content and
//! the keys ever confirmed present in it. A record is trusted only while the
//! stored hash equals the file's current hash. On mismatch the matched set is
//! cleared and the file is re-scanned in full.
//!
//! The cache is loaded once per run (best-effort) and persisted once at the
//! end. Records with no confirmed keys are not written.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{KeySet, SourceFile};

pub const CACHE_FILE_NAME: &str = ".i18n-validator.json";

/// Digest over a file's path and content.
///
/// BLAKE3 is used for speed; collision resistance is not relied upon.
pub fn content_hash(rel_path: &str, content: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(rel_path.as_bytes());
    hasher.update(&[0]);
    hasher.update(content.as_bytes());
    hasher.finalize().to_hex().to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRecord {
    pub hash: String,
    pub keys: KeySet,
}

/// On-disk shape of a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub path: String,
    pub hash: String,
    pub keys: Vec<String>,
}

#[derive(Debug)]
pub struct ContentCache {
    cache_path: PathBuf,
    records: HashMap<String, FileRecord>,
}

impl ContentCache {
    /// Empty cache persisted at `cache_path`.
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
            records: HashMap::new(),
        }
    }

    /// Load the cache stored in `source_root`.
    ///
    /// A missing, unreadable or malformed cache file yields an empty cache.
    pub fn load(source_root: &Path) -> Self {
        let mut cache = Self::new(source_root.join(CACHE_FILE_NAME));

        match read_records(&cache.cache_path) {
            Ok(records) => {
                debug!(path = %cache.cache_path.display(), records = records.len(), "loaded cache");
                cache.records = records;
            }
            Err(err) => {
                debug!(path = %cache.cache_path.display(), "starting with empty cache: {:#}", err);
            }
        }

        cache
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.records.get(path)
    }

    /// Keys that can be counted as matched for `path` without scanning.
    ///
    /// `None` unless a record exists, its hash equals `hash`, and it holds at
    /// least one key.
    pub fn confirmed(&self, path: &str, hash: &str) -> Option<&KeySet> {
        self.records
            .get(path)
            .filter(|record| record.hash == hash && !record.keys.is_empty())
            .map(|record| &record.keys)
    }

    /// Make the record for `path` valid for `hash` and return it.
    ///
    /// Creates a missing record. A stale record (other hash, or no keys) is
    /// reset: its keys are cleared and `hash` stored.
    pub fn validate(&mut self, path: &str, hash: &str) -> &mut FileRecord {
        let record = self.records.entry(path.to_string()).or_default();
        if record.hash != hash || record.keys.is_empty() {
            if !record.keys.is_empty() {
                debug!(path, "content changed, dropping cached matches");
            }
            record.keys.clear();
            record.hash = hash.to_string();
        }
        record
    }

    /// Add keys confirmed by content inspection to the record for `path`.
    pub fn record_matches<I>(&mut self, path: &str, hash: &str, keys: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.validate(path, hash).keys.extend(keys);
    }

    /// Drop records of files not in `files`, i.e. deleted or renamed since the
    /// cache was written.
    pub fn retain_files(&mut self, files: &[SourceFile]) {
        let live: HashSet<&str> = files.iter().map(|file| file.rel_path.as_str()).collect();
        let before = self.records.len();
        self.records.retain(|path, _| live.contains(path.as_str()));
        debug!(dropped = before - self.records.len(), "pruned cache records");
    }

    /// Records in their persisted form: non-empty only, sorted by path and key.
    pub fn to_records(&self) -> Vec<RawRecord> {
        let mut records: Vec<RawRecord> = self
            .records
            .iter()
            .filter(|(_, record)| !record.keys.is_empty())
            .map(|(path, record)| {
                let mut keys: Vec<String> = record.keys.iter().cloned().collect();
                keys.sort();
                RawRecord {
                    path: path.clone(),
                    hash: record.hash.clone(),
                    keys,
                }
            })
            .collect();
        records.sort_by(|a, b| a.path.cmp(&b.path));
        records
    }

    /// Persist the cache. A write failure is returned to the caller.
    pub fn finalize(&self) -> Result<()> {
        let content =
            serde_json::to_string(&self.to_records()).context("Failed to serialize cache")?;

        fs::write(&self.cache_path, content)
            .with_context(|| format!("Failed to write cache: {}", self.cache_path.display()))?;

        Ok(())
    }
}

fn read_records(path: &Path) -> Result<HashMap<String, FileRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cache: {}", path.display()))?;

    let raw: Vec<RawRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid cache file: {}", path.display()))?;

    Ok(raw
        .into_iter()
        .map(|RawRecord { path, hash, keys }| {
            (
                path,
                FileRecord {
                    hash,
                    keys: keys.into_iter().collect(),
                },
            )
        })
        .collect())
}
