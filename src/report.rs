//! YAML report generation.
//!
//! Reports are plain data: every collection is sorted here, at
//! serialization time, so output is stable regardless of set iteration order.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::core::{
    ExtractWarning, UsageReport, WarningKind, untranslated::UntranslatedKeys,
};

/// Header written at the top of every report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub tool: String,
    pub version: String,
    pub generated_at: String,
}

impl Meta {
    pub fn now() -> Self {
        Self::at(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn at(generated_at: impl Into<String>) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: generated_at.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnusedSection {
    /// Distinct keys checked.
    pub total: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<WarningGroup>,
    pub results: Vec<DepthResult>,
}

#[derive(Debug, Serialize)]
pub struct WarningGroup {
    pub kind: WarningKind,
    pub paths: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DepthResult {
    /// Number of trailing segments stripped before the keys went unmatched.
    pub depth: usize,
    /// Keys with one `.*` per stripped segment.
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct UntranslatedSection {
    pub total: usize,
    pub results: Vec<UntranslatedResult>,
}

#[derive(Debug, Serialize)]
pub struct UntranslatedResult {
    pub key: String,
    pub missing: Vec<String>,
}

#[derive(Serialize)]
struct UnusedDocument<'a> {
    meta: &'a Meta,
    unused: UnusedSection,
}

#[derive(Serialize)]
struct UntranslatedDocument<'a> {
    meta: &'a Meta,
    untranslated: UntranslatedSection,
}

/// Build the `unused` section.
///
/// `DepthMap[d]` holds keys that survived the pass at depth `d - 1`, so it is
/// reported as depth `d - 1` with that many `.*` suffixes.
pub fn unused_section(report: &UsageReport, warnings: &[ExtractWarning]) -> UnusedSection {
    let mut grouped: BTreeMap<WarningKind, Vec<String>> = BTreeMap::new();
    for warning in warnings {
        grouped
            .entry(warning.kind)
            .or_default()
            .push(display_path(&warning.path));
    }

    let warnings = grouped
        .into_iter()
        .map(|(kind, mut paths)| {
            paths.sort();
            WarningGroup { kind, paths }
        })
        .collect();

    let results = report
        .depths
        .iter()
        .filter(|(depth, _)| **depth > 0)
        .map(|(depth, keys)| {
            let stripped = depth - 1;
            let suffix = ".*".repeat(stripped);
            let mut keys: Vec<String> = keys.iter().map(|key| format!("{}{}", key, suffix)).collect();
            keys.sort();
            DepthResult {
                depth: stripped,
                keys,
            }
        })
        .collect();

    UnusedSection {
        total: report.total,
        warnings,
        results,
    }
}

pub fn untranslated_section(result: &UntranslatedKeys) -> UntranslatedSection {
    UntranslatedSection {
        total: result.len(),
        results: result
            .iter()
            .map(|(key, locales)| UntranslatedResult {
                key: key.clone(),
                missing: locales.iter().cloned().collect(),
            })
            .collect(),
    }
}

pub fn render_unused(meta: &Meta, report: &UsageReport, warnings: &[ExtractWarning]) -> Result<String> {
    let document = UnusedDocument {
        meta,
        unused: unused_section(report, warnings),
    };
    serde_yaml::to_string(&document).context("Failed to serialize report")
}

pub fn render_untranslated(meta: &Meta, result: &UntranslatedKeys) -> Result<String> {
    let document = UntranslatedDocument {
        meta,
        untranslated: untranslated_section(result),
    };
    serde_yaml::to_string(&document).context("Failed to serialize report")
}

pub fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}
