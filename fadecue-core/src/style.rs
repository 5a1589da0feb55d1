//! Transition style labels and the pace-score classifier.
//!
//! Each threshold check nudges an integer pace score by one. Fast, short or
//! high-bitrate clips push toward `snap`; long or low-frame-rate clips push
//! toward `linger`. Everything in between, including ties, is `steady`.

use crate::config::{
    CINEMATIC_FPS_THRESHOLD, FAST_FPS_THRESHOLD, HIGH_BITRATE_BPS, LONG_CLIP_SECS,
    SHORT_CLIP_SECS,
};
use crate::media::VideoStatistics;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Transition pacing category for a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleLabel {
    /// Quick cuts for short, fast clips.
    Snap,
    /// The middle ground.
    Steady,
    /// Slow fades for long or cinematic clips.
    Linger,
}

impl StyleLabel {
    /// Machine-friendly identifier for this style.
    pub const fn as_str(self) -> &'static str {
        match self {
            StyleLabel::Snap => "snap",
            StyleLabel::Steady => "steady",
            StyleLabel::Linger => "linger",
        }
    }

    /// Returns the supported style identifiers.
    pub const fn variants() -> &'static [&'static str] {
        &["snap", "steady", "linger"]
    }

    pub const fn variants_display() -> &'static str {
        "snap, steady, linger"
    }

    /// Maps a pace score onto a style.
    pub const fn from_pace(pace: i32) -> Self {
        if pace >= 2 {
            StyleLabel::Snap
        } else if pace <= -1 {
            StyleLabel::Linger
        } else {
            StyleLabel::Steady
        }
    }
}

impl fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing style names from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleLabelParseError {
    invalid_value: String,
}

impl StyleLabelParseError {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }
}

impl fmt::Display for StyleLabelParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown transition style '{}'. Valid options: {}",
            self.invalid_value,
            StyleLabel::variants_display()
        )
    }
}

impl std::error::Error for StyleLabelParseError {}

impl FromStr for StyleLabel {
    type Err = StyleLabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("snap") {
            Ok(StyleLabel::Snap)
        } else if s.eq_ignore_ascii_case("steady") {
            Ok(StyleLabel::Steady)
        } else if s.eq_ignore_ascii_case("linger") {
            Ok(StyleLabel::Linger)
        } else {
            Err(StyleLabelParseError::new(s))
        }
    }
}

/// Computes the pace score for a clip.
pub fn pace_score(stats: &VideoStatistics) -> i32 {
    let mut pace = 0;
    if stats.fps >= FAST_FPS_THRESHOLD {
        pace += 1;
    }
    if stats.duration <= SHORT_CLIP_SECS {
        pace += 1;
    }
    if stats.bitrate >= HIGH_BITRATE_BPS {
        pace += 1;
    }
    if stats.duration >= LONG_CLIP_SECS {
        pace -= 1;
    }
    if stats.fps <= CINEMATIC_FPS_THRESHOLD {
        pace -= 1;
    }
    pace
}

/// Classifies a clip into a transition style.
pub fn classify(stats: &VideoStatistics) -> StyleLabel {
    let pace = pace_score(stats);
    let style = StyleLabel::from_pace(pace);
    log::debug!(
        "Pace score for {}: {} (duration={:.1}s fps={:.2} bitrate={}) -> {}",
        stats.scene,
        pace,
        stats.duration,
        stats.fps,
        stats.bitrate,
        style
    );
    style
}
