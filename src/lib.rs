//! i18n-validator - unused and untranslated i18n key finder
//!
//! i18n-validator is a CLI tool and library that finds localization keys
//! declared in a JSON catalog but never referenced in a source tree, and keys
//! left untranslated across locale catalogs.
//!
//! Usage detection is deliberately approximate: keys are matched by plain
//! substring containment, and unmatched keys are retried with their last
//! segment stripped to catch references built from a literal prefix. Treat
//! the output as best-effort, not as exact reachability analysis.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, progress output, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Key extraction, file scanning, the depth checker and its cache
//! - `report`: YAML report rendering

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
