//! Untranslated key detection across locale catalogs.
//!
//! A locales directory holds one catalog per two-letter locale (`en.json`,
//! `fr.json`, ...). Every key of the base locale is checked against the
//! other locales: a key is untranslated in a locale when it is absent there
//! or its value is identical to the base value.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::extract::extract_keys;

/// Flattened catalog of one locale: key → value.
pub type LocaleMessages = HashMap<String, String>;

/// Locale code → messages.
pub type AllLocaleMessages = BTreeMap<String, LocaleMessages>;

/// Base key → locales where it is untranslated.
pub type UntranslatedKeys = BTreeMap<String, BTreeSet<String>>;

/// Two-letter locale files directly inside `dir`, sorted by locale.
pub fn find_locale_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read locales directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read locales directory: {}", dir.display()))?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        if let Some(locale) = path.file_stem().and_then(|s| s.to_str())
            && locale.chars().count() == 2
        {
            files.push((locale.to_string(), path));
        }
    }

    files.sort();
    Ok(files)
}

/// Flatten one locale catalog. A key defined twice is an error.
pub fn load_locale(path: &Path) -> Result<LocaleMessages> {
    let extraction = extract_keys(path)?;
    let mut messages = LocaleMessages::with_capacity(extraction.entries.len());

    for entry in extraction.entries {
        if messages.contains_key(&entry.key) {
            bail!("Duplicate key '{}' in {}", entry.key, path.display());
        }
        messages.insert(entry.key, entry.value);
    }

    Ok(messages)
}

/// Load every locale found in `dir`.
pub fn load_locales(dir: &Path) -> Result<AllLocaleMessages> {
    let files = find_locale_files(dir)?;
    if files.is_empty() {
        bail!("No locale files found in '{}'", dir.display());
    }

    files
        .into_iter()
        .map(|(locale, path)| Ok((locale, load_locale(&path)?)))
        .collect()
}

pub fn check_untranslated(locales: &AllLocaleMessages, base: &str) -> Result<UntranslatedKeys> {
    let Some(base_messages) = locales.get(base) else {
        bail!("Base locale '{}' not found", base);
    };

    let mut result = UntranslatedKeys::new();
    for (key, base_value) in base_messages {
        let missing: BTreeSet<String> = locales
            .iter()
            .filter(|(locale, _)| locale.as_str() != base)
            .filter(|(_, messages)| messages.get(key).is_none_or(|value| value == base_value))
            .map(|(locale, _)| locale.clone())
            .collect();

        if !missing.is_empty() {
            result.insert(key.clone(), missing);
        }
    }

    Ok(result)
}
