use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::KeySet;

/// Read a newline-separated list of key prefixes. Blank lines are skipped.
pub fn read_ignore_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore list: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Remove every key starting with one of `prefixes`. Returns how many were removed.
pub fn apply_ignore_list(keys: &mut KeySet, prefixes: &[String]) -> usize {
    let before = keys.len();
    keys.retain(|key| !prefixes.iter().any(|prefix| key.starts_with(prefix.as_str())));
    before - keys.len()
}
