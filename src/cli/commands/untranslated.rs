use anyhow::Result;

use super::{CommandResult, CommandSummary, UntranslatedSummary, helper::ProjectConfig};
use crate::{
    cli::{
        args::UntranslatedCommand,
        hints::{Hint, WithHint},
        report::print_step,
    },
    config::validate_locale_code,
    core::untranslated::{check_untranslated, load_locales},
    report::{Meta, render_untranslated, write_report},
};

pub fn untranslated(cmd: UntranslatedCommand) -> Result<CommandResult> {
    let project = ProjectConfig::load()?;
    let config = &project.config;

    let locales_dir = project.pick(cmd.locales_dir, &config.locales_dir);
    let output = project.pick(cmd.output, &config.untranslated_output);
    let base_locale = cmd.base_locale.unwrap_or_else(|| config.base_locale.clone());
    validate_locale_code(&base_locale)?;

    let locales = load_locales(&locales_dir).hint(Hint::Locales)?;
    print_step(&format!("Extracted {} locales", locales.len()));

    let result = check_untranslated(&locales, &base_locale).hint(Hint::Locales)?;
    print_step(&format!("Found {} untranslated keys", result.len()));

    let content = render_untranslated(&Meta::now(), &result)?;
    write_report(&output, &content).hint(Hint::Report)?;
    print_step(&format!("Report is ready: {}", output.display()));

    Ok(CommandResult {
        finding_count: result.len(),
        exit_on_findings: cmd.common.strict,
        summary: CommandSummary::Untranslated(UntranslatedSummary {
            locale_count: locales.len(),
            untranslated_count: result.len(),
            output,
        }),
    })
}
