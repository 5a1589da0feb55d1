// fadecue-cli/src/lib.rs
//
// Library portion of the fadecue CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, parse_cli, parse_cli_from};
pub use commands::generate::{run_generate, run_generate_with};
pub use error::{CliResult, exit_code};
