//! Fixed transition timings and easing curves per style.
//!
//! These tables are not user-configurable. Easing identifiers are opaque
//! names understood by the playback runtime.

use crate::style::StyleLabel;

/// Timing and easing values bundled for one style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreset {
    /// Seconds to fade the outgoing scene to the overlay color
    pub fade_out: f64,
    /// Seconds to fade the incoming scene back in
    pub fade_in: f64,
    /// Seconds to hold the overlay after the next scene has loaded
    pub hold_after_load: f64,
    pub ease_out: &'static str,
    pub ease_in: &'static str,
}

pub const SNAP_PRESET: StylePreset = StylePreset {
    fade_out: 0.18,
    fade_in: 0.22,
    hold_after_load: 0.05,
    ease_out: "Linear",
    ease_in: "Linear",
};

pub const STEADY_PRESET: StylePreset = StylePreset {
    fade_out: 0.32,
    fade_in: 0.38,
    hold_after_load: 0.12,
    ease_out: "OutQuad",
    ease_in: "InQuad",
};

pub const LINGER_PRESET: StylePreset = StylePreset {
    fade_out: 0.55,
    fade_in: 0.7,
    hold_after_load: 0.2,
    ease_out: "InOutSine",
    ease_in: "InOutSine",
};

impl StyleLabel {
    /// Bundled transition values for this style.
    pub const fn preset(self) -> StylePreset {
        match self {
            StyleLabel::Snap => SNAP_PRESET,
            StyleLabel::Steady => STEADY_PRESET,
            StyleLabel::Linger => LINGER_PRESET,
        }
    }
}

/// Looks up a preset by style name, falling back to `steady` for unknown names.
pub fn preset_for_name(name: &str) -> StylePreset {
    match name.parse::<StyleLabel>() {
        Ok(style) => style.preset(),
        Err(err) => {
            log::warn!("{}; using steady preset", err);
            STEADY_PRESET
        }
    }
}
