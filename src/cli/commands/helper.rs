use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    config::{Config, FALLBACK_DEPTH, load_config},
    core::MaxDepth,
};

/// Configuration plus the directory its relative paths are resolved against.
///
/// Paths from the config file are relative to the file's directory; without a
/// config file they are relative to the working directory. CLI flags always
/// take precedence and are used as given.
pub struct ProjectConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

impl ProjectConfig {
    pub fn load() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine the working directory")?;
        Self::load_from(&cwd)
    }

    pub fn load_from(start_dir: &Path) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        let base_dir = loaded
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| start_dir.to_path_buf());

        Ok(Self {
            config: loaded.config,
            base_dir,
        })
    }

    pub fn resolve(&self, value: &str) -> PathBuf {
        self.base_dir.join(value)
    }

    /// `flag` if given, otherwise `value` resolved against the config directory.
    pub fn pick(&self, flag: Option<PathBuf>, value: &str) -> PathBuf {
        flag.unwrap_or_else(|| self.resolve(value))
    }
}

/// Maximum depth from `--depth`, falling back to the config value.
///
/// An unparsable flag yields [`FALLBACK_DEPTH`] together with the parse error,
/// which the caller reports as a warning.
pub fn resolve_max_depth(
    flag: Option<&str>,
    configured: Option<usize>,
) -> (MaxDepth, Option<anyhow::Error>) {
    match flag {
        Some(value) => match value.parse::<MaxDepth>() {
            Ok(depth) => (depth, None),
            Err(err) => (MaxDepth::Bounded(FALLBACK_DEPTH), Some(err)),
        },
        None => (configured.map_or(MaxDepth::Unbounded, MaxDepth::Bounded), None),
    }
}
