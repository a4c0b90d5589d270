//! Remediation hints attached to fatal errors.

use std::fmt;

/// Stage of a run that failed, used to pick a remediation hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Catalog,
    Source,
    Report,
    Cache,
    Locales,
}

impl Hint {
    pub fn text(self) -> &'static str {
        match self {
            Hint::Catalog => {
                "Did you specify the correct path to the single language JSON catalog (--locale-path or 'localePath')?"
            }
            Hint::Source => "Did you specify the correct path to the source files (--path)?",
            Hint::Report => "Please check if the output path is correct (--output)",
            Hint::Cache => "Check that the source directory is writable, or disable the cache (--no-cache)",
            Hint::Locales => {
                "Did you specify the directory holding the <locale>.json catalogs (--path)?"
            }
        }
    }
}

/// A fatal error together with the hint printed below it.
#[derive(Debug)]
pub struct HintedError {
    pub hint: Hint,
    pub source: anyhow::Error,
}

impl fmt::Display for HintedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.source)
    }
}

impl std::error::Error for HintedError {}

pub trait WithHint<T> {
    fn hint(self, hint: Hint) -> anyhow::Result<T>;
}

impl<T> WithHint<T> for anyhow::Result<T> {
    fn hint(self, hint: Hint) -> anyhow::Result<T> {
        self.map_err(|source| anyhow::Error::new(HintedError { hint, source }))
    }
}
