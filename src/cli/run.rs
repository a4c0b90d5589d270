use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, untranslated::untranslated, unused::unused},
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with finding counts and exit behavior
/// - `Err` if the command fails (e.g., catalog unreadable, report not writable)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Unused(cmd)) => unused(cmd),
        Some(Command::Untranslated(cmd)) => untranslated(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
