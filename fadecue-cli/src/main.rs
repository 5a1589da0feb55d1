// fadecue-cli/src/main.rs
//
// Entry point for the fadecue binary.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Installing env_logger.
// - Running generation rooted at the current working directory.
// - Mapping failures to a message on stderr and a non-zero exit status.

use console::style;
use fadecue::logging::init_logging;
use fadecue::{exit_code, parse_cli, run_generate};
use fadecue_core::reporting::TerminalReporter;
use std::process;

fn main() {
    let cli = parse_cli();
    init_logging();

    let reporter = TerminalReporter::new();
    match run_generate(&cli, &reporter) {
        Ok(summary) => {
            log::debug!(
                "Finished: {} entries written to {}",
                summary.entries_written,
                summary.output_path.display()
            );
        }
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            process::exit(exit_code(&e));
        }
    }
}
