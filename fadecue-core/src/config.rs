//! Configuration structures and constants for the fadecue-core library.
//!
//! This module holds the repository-relative default locations, the
//! classifier thresholds, and the run configuration passed to the catalog
//! driver.

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

// Default constants

/// Scene catalog location, relative to the repository root.
pub const DEFAULT_VIDEOS_CONFIG: &str = "Assets/StreamingAssets/videos.json";

/// Transition document location, relative to the repository root.
pub const DEFAULT_OUTPUT_FILE: &str = "Assets/StreamingAssets/sceneTransitions.json";

/// Overlay color written into every entry and the defaults block.
pub const DEFAULT_OVERLAY_COLOR: &str = "#000000";

/// Indentation used when writing the transition document.
pub const DEFAULT_DOCUMENT_INDENT: &[u8] = b"    ";

// Classifier thresholds

/// Frame rate at or above which a clip reads as fast-paced.
pub const FAST_FPS_THRESHOLD: f64 = 48.0;

/// Frame rate at or below which a clip reads as cinematic.
pub const CINEMATIC_FPS_THRESHOLD: f64 = 24.0;

/// Clips no longer than this (seconds) count as short.
pub const SHORT_CLIP_SECS: f64 = 60.0;

/// Clips at least this long (seconds) count as long.
pub const LONG_CLIP_SECS: f64 = 150.0;

/// Bitrate (bits/second) at or above which a clip counts as high-motion.
pub const HIGH_BITRATE_BPS: f64 = 8_000_000.0;

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct HintConfig {
    /// Repository root; stripped from source paths written to the document
    pub repo_root: PathBuf,

    /// Scene catalog to read
    pub videos_path: PathBuf,

    /// Transition document to write
    pub output_path: PathBuf,
}

impl HintConfig {
    /// Creates a config with both documents at their default locations under `repo_root`.
    pub fn new(repo_root: PathBuf) -> Self {
        let videos_path = repo_root.join(DEFAULT_VIDEOS_CONFIG);
        let output_path = repo_root.join(DEFAULT_OUTPUT_FILE);
        Self {
            repo_root,
            videos_path,
            output_path,
        }
    }

    pub fn with_videos_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.videos_path = path.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Rejects empty paths and an output that would overwrite the catalog.
    pub fn validate(&self) -> CoreResult<()> {
        if self.videos_path.as_os_str().is_empty() {
            return Err(CoreError::Config("videos path must not be empty".to_string()));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(CoreError::Config("output path must not be empty".to_string()));
        }

        if self.videos_path == self.output_path {
            return Err(CoreError::Config(format!(
                "output path {} would overwrite the scene catalog",
                self.output_path.display()
            )));
        }

        Ok(())
    }
}
