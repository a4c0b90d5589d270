//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `unused`: find catalog keys never referenced in the source tree
//! - `untranslated`: find keys missing or left untranslated in other locales
//! - `init`: write a default `.i18nrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Unused(cmd)) => cmd.common.verbose,
            Some(Command::Untranslated(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the check commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Exit with status 1 when any result is reported
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct UnusedCommand {
    /// Source files root directory (overrides config file)
    #[arg(short = 'p', long = "path")]
    pub source_root: Option<PathBuf>,

    /// Catalog JSON file to check, e.g. ./locales/en.json (overrides config file)
    #[arg(short = 'l', long)]
    pub locale_path: Option<PathBuf>,

    /// Report output path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of passes: an integer, or "full" for no limit
    #[arg(short, long)]
    pub depth: Option<String>,

    /// Disable the content-hash cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// File with key prefixes to skip, one per line (overrides config file)
    #[arg(short, long)]
    pub ignore: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UntranslatedCommand {
    /// Directory holding <locale>.json catalogs (overrides config file)
    #[arg(short = 'p', long = "path")]
    pub locales_dir: Option<PathBuf>,

    /// Two-letter base locale (overrides config file)
    #[arg(short, long)]
    pub base_locale: Option<String>,

    /// Report output path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find catalog keys never referenced in source files.
    ///
    /// Matching is plain text containment, relaxed one key segment per pass
    /// to catch keys built dynamically from a prefix. Results are best-effort:
    /// incidental text can hide an unused key, and keys assembled without any
    /// literal prefix are reported as unused.
    Unused(UnusedCommand),
    /// Find keys missing from, or identical to the base value in, other locales
    Untranslated(UntranslatedCommand),
    /// Initialize a new .i18nrc.json configuration file
    Init,
}
