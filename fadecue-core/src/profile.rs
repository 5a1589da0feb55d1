//! Builds one scene's transition entry from its clip statistics.

use crate::config::DEFAULT_OVERLAY_COLOR;
use crate::media::VideoStatistics;
use crate::paths::relative_source_path;
use crate::style::{StyleLabel, classify};
use crate::utils::round3;
use serde::Serialize;
use std::path::Path;

/// One scene's finished output record.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionEntry {
    pub name: String,
    pub style: StyleLabel,
    pub fade_out: f64,
    pub fade_in: f64,
    pub color: String,
    pub ease_out: String,
    pub ease_in: String,
    pub hold_after_load: f64,
    /// Clip path relative to the repository root
    pub source_video: String,
    pub duration_seconds: f64,
    pub avg_fps: f64,
    pub bitrate: f64,
}

/// Classifies `stats` and expands the matching preset into an entry.
pub fn build_entry(scene_name: &str, stats: &VideoStatistics, repo_root: &Path) -> TransitionEntry {
    let style = classify(stats);
    let preset = style.preset();

    TransitionEntry {
        name: scene_name.to_string(),
        style,
        fade_out: round3(preset.fade_out),
        fade_in: round3(preset.fade_in),
        color: DEFAULT_OVERLAY_COLOR.to_string(),
        ease_out: preset.ease_out.to_string(),
        ease_in: preset.ease_in.to_string(),
        hold_after_load: round3(preset.hold_after_load),
        source_video: relative_source_path(&stats.path, repo_root),
        duration_seconds: round3(stats.duration),
        avg_fps: round3(stats.fps),
        bitrate: stats.bitrate,
    }
}
