// ============================================================================
// fadecue-cli/src/logging.rs
// ============================================================================
//
// LOGGING: env_logger setup for the CLI
//
// The core library logs through the `log` facade. The CLI installs
// env_logger on stderr so stdout carries only the per-scene report lines.
//
// USAGE:
// - RUST_LOG unset: info for fadecue crates, warnings for everything else
// - RUST_LOG=debug: probe invocations and pace scores
// - RUST_LOG=trace: everything

use env_logger::{Builder, Env, Target};

/// Default filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,fadecue=info,fadecue_core=info";

/// Installs the global logger. Safe to call more than once.
pub fn init_logging() {
    let env = Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let _ = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp_secs()
        .try_init();
}
