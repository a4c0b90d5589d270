//! Core analysis engine.
//!
//! The unused-key pipeline runs in four steps:
//!
//! 1. `extract`: flatten the catalog into dot-path keys (plus structural warnings)
//! 2. `file_scanner` + `source`: enumerate and read the source tree once
//! 3. `checker`: test keys at decreasing specificity, consulting the `cache`
//! 4. the caller renders the resulting depth map (see `crate::report`)
//!
//! `untranslated` and `ignore` are independent helpers used by the CLI.
//!
//! Matching is plain substring containment. A key counts as "used" when its
//! text, or a coarser prefix of it, appears anywhere in a source file. This is
//! best-effort detection, not reachability analysis.

use std::collections::{BTreeMap, HashSet};

pub mod cache;
pub mod checker;
pub mod extract;
pub mod file_scanner;
pub mod ignore;
pub mod source;
pub mod untranslated;

pub use cache::{CACHE_FILE_NAME, ContentCache, FileRecord};
pub use checker::{MaxDepth, UsageChecker, UsageReport};
pub use extract::{CatalogEntry, ExtractWarning, Extraction, WarningKind, extract_keys};
pub use source::{SourceFile, SourceSet};

/// Set of dot-path catalog keys. Order carries no meaning.
pub type KeySet = HashSet<String>;

/// Depth → keys still unmatched after testing at that depth's specificity.
pub type DepthMap = BTreeMap<usize, KeySet>;
