use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

/// Depth used when `--depth` cannot be parsed.
pub const FALLBACK_DEPTH: usize = 2;

pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", "node_modules", "dist", "build", "coverage"];

pub const DEFAULT_SOURCE_PATTERNS: &[&str] = &["*.ts", "*.html"];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Catalog checked by `unused`. Required, either here or via `--locale-path`.
    #[serde(default)]
    pub locale_path: Option<String>,
    #[serde(default = "default_output")]
    pub output: String,
    /// Absent means unbounded.
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default = "default_cache")]
    pub cache: bool,
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: Vec<String>,
    #[serde(default = "default_source_patterns")]
    pub source_patterns: Vec<String>,
    #[serde(default)]
    pub ignore_keys: Option<String>,
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_base_locale")]
    pub base_locale: String,
    #[serde(default = "default_untranslated_output")]
    pub untranslated_output: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_output() -> String {
    "unused_keys.yml".to_string()
}

fn default_cache() -> bool {
    true
}

fn default_ignored_dirs() -> Vec<String> {
    DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_source_patterns() -> Vec<String> {
    DEFAULT_SOURCE_PATTERNS.iter().map(|s| s.to_string()).collect()
}

fn default_locales_dir() -> String {
    "./locales".to_string()
}

fn default_base_locale() -> String {
    "en".to_string()
}

fn default_untranslated_output() -> String {
    "missing_translations.yml".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            locale_path: None,
            output: default_output(),
            max_depth: None,
            cache: default_cache(),
            ignored_dirs: default_ignored_dirs(),
            source_patterns: default_source_patterns(),
            ignore_keys: None,
            locales_dir: default_locales_dir(),
            base_locale: default_base_locale(),
            untranslated_output: default_untranslated_output(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `sourcePatterns` is invalid or
    /// `baseLocale` is not a two-letter code.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.source_patterns {
            Pattern::new(pattern).with_context(|| {
                format!("Invalid glob pattern in 'sourcePatterns': \"{}\"", pattern)
            })?;
        }

        validate_locale_code(&self.base_locale)
            .with_context(|| "Invalid 'baseLocale' in config file")?;

        Ok(())
    }
}

pub fn validate_locale_code(code: &str) -> Result<()> {
    if code.chars().count() != 2 {
        bail!("Base locale must be a two-letter code, got \"{}\"", code);
    }
    Ok(())
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
