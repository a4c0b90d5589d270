use std::path::PathBuf;

use super::exit_status::ExitStatus;

pub mod helper;
pub mod init;
pub mod untranslated;
pub mod unused;

#[derive(Debug)]
pub enum CommandSummary {
    Unused(UnusedSummary),
    Untranslated(UntranslatedSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct UnusedSummary {
    /// Distinct keys checked.
    pub total: usize,
    pub files_checked: usize,
    /// Keys unmatched at full specificity.
    pub unused_count: usize,
    /// (reported depth, key count) pairs, ascending.
    pub per_depth: Vec<(usize, usize)>,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct UntranslatedSummary {
    pub locale_count: usize,
    pub untranslated_count: usize,
    pub output: PathBuf,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub finding_count: usize,
    /// If true, exit status 1 is returned when finding_count > 0.
    pub exit_on_findings: bool,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_findings && self.finding_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
