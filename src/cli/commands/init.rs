use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let path = init_in(Path::new("."))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { path }),
        finding_count: 0,
        exit_on_findings: false,
    })
}

/// Write the default config into `dir`. Fails if one already exists.
pub fn init_in(dir: &Path) -> Result<std::path::PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(config_path)
}
