// fadecue-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::Parser;
use fadecue_core::HintConfig;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "fadecue: Scene transition hint generator",
    long_about = "Probes every clip listed in the scene catalog with ffprobe and writes \
                  fade timings and easing curves for each scene."
)]
pub struct Cli {
    /// Path to videos.json (defaults to Assets/StreamingAssets/videos.json)
    #[arg(long = "videos", value_name = "VIDEOS_JSON")]
    pub videos: Option<PathBuf>,

    /// Where to write sceneTransitions.json (defaults to Assets/StreamingAssets/sceneTransitions.json)
    #[arg(long = "output", value_name = "OUTPUT_JSON")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Builds the run configuration, applying overrides on top of the
    /// repository-relative defaults.
    pub fn to_config(&self, repo_root: PathBuf) -> HintConfig {
        let mut config = HintConfig::new(repo_root);
        if let Some(videos) = &self.videos {
            config = config.with_videos_path(videos);
        }
        if let Some(output) = &self.output {
            config = config.with_output_path(output);
        }
        config
    }
}

/// Parses arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses arguments from an explicit iterator (used by tests).
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
