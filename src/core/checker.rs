//! Depth-iterative key usage checker.
//!
//! Code often builds keys dynamically (`t(\`errors.${code}\`)`), so a literal
//! full-path match is too strict a bar for "used". The checker relaxes every
//! surviving key one segment at a time and tests again:
//!
//! - depth 0 tests the full keys
//! - depth d > 0 strips the last segment from every key that survived d - 1
//!
//! Survivors of the pass at depth d are stored at `DepthMap[d + 1]`. The loop
//! ends when the candidate set is empty or the maximum depth is reached.
//!
//! Files within a pass are tested in parallel against the same candidates.
//! A key survives only if no file contains it, so the merge is a set
//! difference against the union of per-file matches and file order never
//! affects the result.

use std::str::FromStr;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::{debug, trace};

use super::{ContentCache, DepthMap, KeySet, SourceFile, SourceSet};

/// Upper bound on the number of passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxDepth {
    #[default]
    Unbounded,
    Bounded(usize),
}

impl MaxDepth {
    /// Whether a pass at `depth` may run.
    pub fn allows(&self, depth: usize) -> bool {
        match self {
            MaxDepth::Unbounded => true,
            MaxDepth::Bounded(max) => depth < *max,
        }
    }
}

impl FromStr for MaxDepth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "none" | "unbounded" => Ok(MaxDepth::Unbounded),
            other => other
                .parse::<usize>()
                .map(MaxDepth::Bounded)
                .with_context(|| format!("Invalid depth: \"{}\"", s)),
        }
    }
}

/// Result of a checker run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsageReport {
    /// Number of distinct keys checked at depth 0.
    pub total: usize,
    /// Survivors per depth, starting at 1. Depth 0 ("not yet checked") is
    /// never included.
    pub depths: DepthMap,
}

impl UsageReport {
    /// Keys unmatched at full specificity.
    pub fn unused_count(&self) -> usize {
        self.depths.get(&1).map_or(0, |keys| keys.len())
    }
}

pub struct UsageChecker {
    max_depth: MaxDepth,
}

impl UsageChecker {
    pub fn new(max_depth: MaxDepth) -> Self {
        Self { max_depth }
    }

    pub fn run(
        &self,
        keys: KeySet,
        sources: &SourceSet,
        mut cache: Option<&mut ContentCache>,
    ) -> UsageReport {
        let total = keys.len();
        let mut depth_map = DepthMap::new();
        depth_map.insert(0, keys);

        let mut depth = 0;
        while self.max_depth.allows(depth) {
            let candidates = match depth_map.get(&depth) {
                Some(previous) => derive_candidates(depth, previous),
                None => break,
            };
            if candidates.is_empty() {
                break;
            }

            let survivors = check_pass(&candidates, sources, cache.as_deref_mut());
            debug!(
                depth,
                candidates = candidates.len(),
                survivors = survivors.len(),
                "finished pass"
            );

            depth += 1;
            depth_map.insert(depth, survivors);
        }

        depth_map.remove(&0);
        UsageReport {
            total,
            depths: depth_map,
        }
    }
}

/// Candidate keys for the pass at `depth`, given the survivors of the
/// previous depth (or the extracted keys when `depth` is 0).
pub fn derive_candidates(depth: usize, previous: &KeySet) -> KeySet {
    if depth == 0 {
        return previous.clone();
    }

    previous
        .iter()
        .map(|key| pop_segment(key))
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop the last dot segment. A single-segment key becomes empty.
pub fn pop_segment(key: &str) -> &str {
    key.rsplit_once('.').map_or("", |(head, _)| head)
}

/// Keys from `candidates` contained in no file.
///
/// With a cache, keys already confirmed for an unchanged file count as
/// matched without scanning, and newly found keys are recorded.
pub fn check_pass(
    candidates: &KeySet,
    sources: &SourceSet,
    mut cache: Option<&mut ContentCache>,
) -> KeySet {
    let scans: Vec<FileScan<'_>> = {
        let view = cache.as_deref();
        sources
            .files()
            .par_iter()
            .map(|file| {
                let confirmed = view.and_then(|cache| cache.confirmed(&file.rel_path, &file.hash));
                scan_file(file, candidates, confirmed)
            })
            .collect()
    };

    let mut survivors = candidates.clone();
    for (file, scan) in sources.files().iter().zip(&scans) {
        for key in scan.cached.iter().chain(&scan.found) {
            survivors.remove(*key);
        }

        if let Some(cache) = cache.as_deref_mut() {
            trace!(
                path = %file.rel_path,
                cached = scan.cached.len(),
                found = scan.found.len(),
                "scanned file"
            );
            cache.record_matches(
                &file.rel_path,
                &file.hash,
                scan.found.iter().map(|key| key.to_string()),
            );
        }
    }

    survivors
}

/// Matches of one file in one pass.
struct FileScan<'a> {
    /// Taken from the cache, content not inspected.
    cached: Vec<&'a str>,
    /// Confirmed by substring search of the content.
    found: Vec<&'a str>,
}

fn scan_file<'a>(file: &SourceFile, candidates: &'a KeySet, confirmed: Option<&KeySet>) -> FileScan<'a> {
    let mut scan = FileScan {
        cached: Vec::new(),
        found: Vec::new(),
    };

    for key in candidates {
        if confirmed.is_some_and(|known| known.contains(key)) {
            scan.cached.push(key);
        } else if file.content.contains(key.as_str()) {
            scan.found.push(key);
        }
    }

    scan
}
