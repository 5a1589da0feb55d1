use crate::cli::Cli;
use crate::error::CliResult;
use fadecue_core::reporting::Reporter;
use fadecue_core::{CrateFfprobeExecutor, GenerationSummary, MediaProber};
use std::path::PathBuf;

/// Runs generation with the ffprobe-backed prober, rooted at the current directory.
pub fn run_generate(cli: &Cli, reporter: &dyn Reporter) -> CliResult<GenerationSummary> {
    let repo_root = std::env::current_dir()?;
    run_generate_with(cli, repo_root, &CrateFfprobeExecutor::new(), reporter)
}

/// Runs generation against an explicit repository root and prober.
pub fn run_generate_with(
    cli: &Cli,
    repo_root: PathBuf,
    prober: &dyn MediaProber,
    reporter: &dyn Reporter,
) -> CliResult<GenerationSummary> {
    let config = cli.to_config(repo_root);
    log::debug!(
        "Generating transitions: videos={} output={}",
        config.videos_path.display(),
        config.output_path.display()
    );

    let summary = fadecue_core::run(&config, prober, reporter)?;
    if summary.scenes_skipped > 0 {
        reporter.warning(&format!(
            "{} scene(s) skipped because their clips are missing",
            summary.scenes_skipped
        ));
    }
    Ok(summary)
}
