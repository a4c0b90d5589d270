use anyhow::{Result, anyhow};
use tracing::debug;

use super::{
    CommandResult, CommandSummary, UnusedSummary,
    helper::{ProjectConfig, resolve_max_depth},
};
use crate::{
    cli::{
        args::UnusedCommand,
        hints::{Hint, WithHint},
        report::{print_info, print_step, print_warning},
    },
    config::FALLBACK_DEPTH,
    core::{
        CACHE_FILE_NAME, ContentCache, MaxDepth, SourceSet, UsageChecker, extract_keys,
        file_scanner::scan_files,
        ignore::{apply_ignore_list, read_ignore_list},
    },
    report::{Meta, render_unused, write_report},
};

pub fn unused(cmd: UnusedCommand) -> Result<CommandResult> {
    let project = ProjectConfig::load()?;
    let config = &project.config;

    let source_root = project.pick(cmd.source_root, &config.source_root);
    let output = project.pick(cmd.output, &config.output);
    let locale_path = match (cmd.locale_path, config.locale_path.as_deref()) {
        (Some(path), _) => path,
        (None, Some(path)) => project.resolve(path),
        (None, None) => {
            return Err::<CommandResult, _>(anyhow!("Catalog path is required")).hint(Hint::Catalog);
        }
    };

    let (max_depth, depth_error) = resolve_max_depth(cmd.depth.as_deref(), config.max_depth);
    if let Some(err) = depth_error {
        print_warning(&format!(
            "{}. Please check if the depth is a valid number. Using default depth of {}",
            err, FALLBACK_DEPTH
        ));
    }
    if max_depth == MaxDepth::Unbounded {
        print_info("Running at full depth");
    }

    let cache_enabled = config.cache && !cmd.no_cache;
    if !cache_enabled {
        print_info("Cache is disabled");
    }

    let extraction = extract_keys(&locale_path).hint(Hint::Catalog)?;
    let mut keys = extraction.key_set();
    print_step(&format!("Extracted {} keys", keys.len()));

    let ignore_path = cmd
        .ignore
        .or_else(|| config.ignore_keys.as_deref().map(|p| project.resolve(p)));
    if let Some(ignore_path) = ignore_path {
        match read_ignore_list(&ignore_path) {
            Ok(prefixes) => {
                let ignored = apply_ignore_list(&mut keys, &prefixes);
                print_info(&format!("Ignored {} keys", ignored));
            }
            Err(err) => print_warning(&format!("{:#}, skipping", err)),
        }
    }

    let cache_path = source_root.join(CACHE_FILE_NAME);
    let paths = scan_files(
        &source_root,
        &config.ignored_dirs,
        &config.source_patterns,
        &[cache_path, output.clone()],
    )
    .hint(Hint::Source)?;
    let sources = SourceSet::load(&source_root, &paths).hint(Hint::Source)?;
    print_step(&format!("Found {} source files", sources.len()));

    let mut cache = cache_enabled.then(|| ContentCache::load(&source_root));
    debug!(records = cache.as_ref().map_or(0, |c| c.len()), "cache ready");

    let report = UsageChecker::new(max_depth).run(keys, &sources, cache.as_mut());
    print_step(&format!("Checked {} files", sources.len()));

    if let Some(cache) = &mut cache {
        cache.retain_files(sources.files());
        cache.finalize().hint(Hint::Cache)?;
        print_step(&format!("Cache saved at {}", cache.cache_path().display()));
    }

    let content = render_unused(&Meta::now(), &report, &extraction.warnings)?;
    write_report(&output, &content).hint(Hint::Report)?;
    print_step(&format!("Report is ready: {}", output.display()));

    let per_depth = report
        .depths
        .iter()
        .filter(|(depth, _)| **depth > 0)
        .map(|(depth, keys)| (depth - 1, keys.len()))
        .collect();

    Ok(CommandResult {
        finding_count: report.unused_count(),
        exit_on_findings: cmd.common.strict,
        summary: CommandSummary::Unused(UnusedSummary {
            total: report.total,
            files_checked: sources.len(),
            unused_count: report.unused_count(),
            per_depth,
            output,
        }),
    })
}
