//! Terminal output: progress lines, warnings, errors and command summaries.
//!
//! Progress and diagnostics go to stderr; the final summary goes to stdout.
//! Separate from core logic to allow the crate to be used as a library.

use std::{
    io::{self, Write},
    time::Duration,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, UnusedSummary, UntranslatedSummary};
use super::hints::HintedError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Set to skip the timing line (used by tests for stable output).
pub const DISABLE_TIMING_ENV: &str = "I18N_VALIDATOR_DISABLE_TIMING";

pub fn print_step(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", SUCCESS_MARK.green(), message);
}

pub fn print_info(message: &str) {
    let _ = writeln!(io::stderr().lock(), "{} {}", "info:".bold().dimmed(), message);
}

pub fn print_warning(message: &str) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} {}",
        "warning:".bold().yellow(),
        message
    );
}

/// Print a fatal error, followed by its remediation hint when it has one.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        err
    );
    if let Some(hinted) = err.downcast_ref::<HintedError>() {
        let _ = writeln!(writer, "  {} {}", ">".dimmed(), hinted.hint.text());
    }
}

pub fn print_timing(elapsed: Duration) {
    if std::env::var_os(DISABLE_TIMING_ENV).is_some() {
        return;
    }
    let _ = writeln!(
        io::stderr().lock(),
        "Done! {}.{:03}s",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
}

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Unused(summary) => print_unused_summary(summary, writer),
        CommandSummary::Untranslated(summary) => print_untranslated_summary(summary, writer),
        CommandSummary::Init(summary) => {
            let _ = writeln!(
                writer,
                "{} Created {}",
                SUCCESS_MARK.green(),
                summary.path.display()
            );
        }
    }
}

fn print_unused_summary<W: Write>(summary: &UnusedSummary, writer: &mut W) {
    if summary.unused_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} in {} source {} - no unused keys found",
                summary.total,
                plural(summary.total, "key", "keys"),
                summary.files_checked,
                plural(summary.files_checked, "file", "files")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} of {} {} unused",
            FAILURE_MARK.red(),
            summary.unused_count.to_string().bold(),
            summary.total,
            plural(summary.total, "key", "keys")
        );
        for (depth, count) in &summary.per_depth {
            let _ = writeln!(
                writer,
                "  {} depth {}: {} {}",
                "-".dimmed(),
                depth,
                count,
                plural(*count, "key", "keys")
            );
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        "Report:".bold(),
        summary.output.display().to_string().cyan()
    );
}

fn print_untranslated_summary<W: Write>(summary: &UntranslatedSummary, writer: &mut W) {
    if summary.untranslated_count == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} - no untranslated keys found",
                summary.locale_count,
                plural(summary.locale_count, "locale", "locales")
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} untranslated {} across {} {}",
            FAILURE_MARK.red(),
            summary.untranslated_count.to_string().bold(),
            plural(summary.untranslated_count, "key", "keys"),
            summary.locale_count,
            plural(summary.locale_count, "locale", "locales")
        );
    }

    let _ = writeln!(
        writer,
        "{} {}",
        "Report:".bold(),
        summary.output.display().to_string().cyan()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
