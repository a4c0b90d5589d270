use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use super::KeySet;

/// Kind of structural anomaly found while flattening a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    /// An array node. Its elements are still flattened with index segments.
    Array,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::Array => write!(f, "array"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractWarning {
    pub kind: WarningKind,
    /// Dot path of the offending node. Empty for the catalog root.
    pub path: String,
}

/// A single string leaf of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub value: String,
}

/// Flattened catalog: leaf entries in document order plus warnings.
///
/// Entries are a bag, not a set. Use [`Extraction::key_set`] before checking.
#[derive(Debug, Default)]
pub struct Extraction {
    pub entries: Vec<CatalogEntry>,
    pub warnings: Vec<ExtractWarning>,
}

impl Extraction {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn key_set(&self) -> KeySet {
        self.keys().map(str::to_string).collect()
    }
}

/// Read and flatten a JSON catalog file.
pub fn extract_keys(path: &Path) -> Result<Extraction> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {}", path.display()))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;

    Ok(flatten_catalog(&json))
}

/// Flatten a catalog into dot-path leaf keys.
///
/// Walks with an explicit stack, so nesting depth is bounded by heap, not by
/// the call stack. Children are pushed in reverse to keep document order.
pub fn flatten_catalog(root: &Value) -> Extraction {
    let mut extraction = Extraction::default();
    let mut stack: Vec<(&Value, String)> = vec![(root, String::new())];

    while let Some((value, path)) = stack.pop() {
        match value {
            Value::String(s) => {
                // A string at the root has no key.
                if !path.is_empty() {
                    extraction.entries.push(CatalogEntry {
                        key: path,
                        value: s.clone(),
                    });
                }
            }
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    stack.push((child, join_path(&path, key)));
                }
            }
            Value::Array(items) => {
                extraction.warnings.push(ExtractWarning {
                    kind: WarningKind::Array,
                    path: path.clone(),
                });
                for (index, child) in items.iter().enumerate().rev() {
                    stack.push((child, join_path(&path, &index.to_string())));
                }
            }
            _ => {}
        }
    }

    extraction
}

fn join_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}
