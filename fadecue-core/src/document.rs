//! The transition document: defaults, generated entries, and lookup.
//!
//! The generator writes a [`TransitionDocument`]. The playback runtime reads
//! it back leniently as a [`TransitionLibrary`]: any entry field may be absent,
//! and unset numbers carry a `-1` sentinel. Lookup starts from built-in
//! fallbacks, layers the document's `defaults` on top, then the matching scene
//! entry, with the same override rules at both steps.

use crate::config::{DEFAULT_DOCUMENT_INDENT, DEFAULT_OVERLAY_COLOR};
use crate::error::{CoreError, CoreResult};
use crate::profile::TransitionEntry;
use crate::style::StyleLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Fade length the runtime uses when nothing overrides it.
const FALLBACK_FADE_SECS: f64 = 0.35;

/// Easing the runtime uses when nothing overrides it.
const FALLBACK_EASE: &str = "Linear";

/// Sentinel for a numeric entry field that was not set.
const UNSET: f64 = -1.0;

fn unset() -> f64 {
    UNSET
}

/// Style-independent fallback values for scenes without an entry.
///
/// Fields missing from a loaded document take the generator's values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionDefaults {
    pub fade_out: f64,
    pub fade_in: f64,
    pub color: String,
    pub ease_out: String,
    pub ease_in: String,
    pub hold_after_load: f64,
}

impl Default for TransitionDefaults {
    fn default() -> Self {
        Self {
            fade_out: 0.35,
            fade_in: 0.4,
            color: DEFAULT_OVERLAY_COLOR.to_string(),
            ease_out: FALLBACK_EASE.to_string(),
            ease_in: FALLBACK_EASE.to_string(),
            hold_after_load: 0.1,
        }
    }
}

/// Document produced by a generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDocument {
    /// ISO-8601 UTC timestamp with a trailing `Z`
    pub generated_at: String,
    pub defaults: TransitionDefaults,
    pub scenes: Vec<TransitionEntry>,
}

/// One scene entry as the runtime reads it.
///
/// Hand-edited documents may leave out any field. Unset fades and holds
/// are `-1`; unset strings are `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneOverride {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default = "unset")]
    pub fade_out: f64,
    #[serde(default = "unset")]
    pub fade_in: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub ease_out: Option<String>,
    #[serde(default)]
    pub ease_in: Option<String>,
    #[serde(default = "unset")]
    pub hold_after_load: f64,
    #[serde(default)]
    pub source_video: Option<String>,
    #[serde(default)]
    pub duration_seconds: f64,
    #[serde(default)]
    pub avg_fps: f64,
    #[serde(default)]
    pub bitrate: f64,
}

impl SceneOverride {
    /// An entry for `name` with every override unset.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: None,
            fade_out: UNSET,
            fade_in: UNSET,
            color: None,
            ease_out: None,
            ease_in: None,
            hold_after_load: UNSET,
            source_video: None,
            duration_seconds: 0.0,
            avg_fps: 0.0,
            bitrate: 0.0,
        }
    }

    /// The entry's style as a known label, if it is one.
    pub fn style_label(&self) -> Option<StyleLabel> {
        self.style.as_deref()?.parse().ok()
    }
}

impl From<&TransitionEntry> for SceneOverride {
    fn from(entry: &TransitionEntry) -> Self {
        Self {
            name: entry.name.clone(),
            style: Some(entry.style.as_str().to_string()),
            fade_out: entry.fade_out,
            fade_in: entry.fade_in,
            color: Some(entry.color.clone()),
            ease_out: Some(entry.ease_out.clone()),
            ease_in: Some(entry.ease_in.clone()),
            hold_after_load: entry.hold_after_load,
            source_video: Some(entry.source_video.clone()),
            duration_seconds: entry.duration_seconds,
            avg_fps: entry.avg_fps,
            bitrate: entry.bitrate,
        }
    }
}

/// Transition settings for one scene after defaults and entry are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTransition {
    pub fade_out: f64,
    pub fade_in: f64,
    pub color: String,
    pub ease_out: String,
    pub ease_in: String,
    pub hold_after_load: f64,
    /// Style of the matched entry, if it named one
    pub style: Option<String>,
}

impl Default for ResolvedTransition {
    fn default() -> Self {
        Self {
            fade_out: FALLBACK_FADE_SECS,
            fade_in: FALLBACK_FADE_SECS,
            color: DEFAULT_OVERLAY_COLOR.to_string(),
            ease_out: FALLBACK_EASE.to_string(),
            ease_in: FALLBACK_EASE.to_string(),
            hold_after_load: 0.0,
            style: None,
        }
    }
}

// Non-positive fades, negative holds and blank strings leave the current value.
fn override_fade(target: &mut f64, value: f64) {
    if value > 0.0 {
        *target = value;
    }
}

fn override_hold(target: &mut f64, value: f64) {
    if value >= 0.0 {
        *target = value;
    }
}

fn override_text(target: &mut String, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *target = value.to_string();
    }
}

impl ResolvedTransition {
    /// Built-in fallbacks with `defaults` layered on top.
    pub fn from_defaults(defaults: &TransitionDefaults) -> Self {
        let mut resolved = Self::default();
        override_fade(&mut resolved.fade_out, defaults.fade_out);
        override_fade(&mut resolved.fade_in, defaults.fade_in);
        override_text(&mut resolved.color, Some(&defaults.color));
        override_text(&mut resolved.ease_out, Some(&defaults.ease_out));
        override_text(&mut resolved.ease_in, Some(&defaults.ease_in));
        override_hold(&mut resolved.hold_after_load, defaults.hold_after_load);
        resolved
    }

    fn apply(&mut self, entry: &SceneOverride) {
        override_fade(&mut self.fade_out, entry.fade_out);
        override_fade(&mut self.fade_in, entry.fade_in);
        override_text(&mut self.color, entry.color.as_deref());
        override_text(&mut self.ease_out, entry.ease_out.as_deref());
        override_text(&mut self.ease_in, entry.ease_in.as_deref());
        override_hold(&mut self.hold_after_load, entry.hold_after_load);
        if let Some(style) = entry.style.as_deref().filter(|s| !s.is_empty()) {
            self.style = Some(style.to_string());
        }
    }

    /// The resolved style as a known label, if it is one.
    pub fn style_label(&self) -> Option<StyleLabel> {
        self.style.as_deref()?.parse().ok()
    }
}

/// A transition document as read back by the runtime.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionLibrary {
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub defaults: TransitionDefaults,
    #[serde(default)]
    pub scenes: Vec<SceneOverride>,
}

impl TransitionLibrary {
    /// Finds the first entry for `scene_name`, ignoring ASCII case.
    ///
    /// An empty name never matches, and unnamed entries are never returned.
    pub fn entry(&self, scene_name: &str) -> Option<&SceneOverride> {
        if scene_name.is_empty() {
            return None;
        }
        self.scenes
            .iter()
            .find(|e| !e.name.is_empty() && e.name.eq_ignore_ascii_case(scene_name))
    }

    /// Merges fallbacks, document defaults and the entry for `scene_name`.
    pub fn resolve(&self, scene_name: &str) -> ResolvedTransition {
        let mut resolved = ResolvedTransition::from_defaults(&self.defaults);
        if let Some(entry) = self.entry(scene_name) {
            resolved.apply(entry);
        }
        resolved
    }
}

impl From<&TransitionDocument> for TransitionLibrary {
    fn from(document: &TransitionDocument) -> Self {
        Self {
            generated_at: Some(document.generated_at.clone()),
            defaults: document.defaults.clone(),
            scenes: document.scenes.iter().map(SceneOverride::from).collect(),
        }
    }
}

impl TransitionDocument {
    /// Wraps entries with the static defaults and a timestamp for `generated_at`.
    pub fn new(scenes: Vec<TransitionEntry>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: format_timestamp(generated_at),
            defaults: TransitionDefaults::default(),
            scenes,
        }
    }

    /// Wraps entries, stamped with the current time.
    pub fn generated_now(scenes: Vec<TransitionEntry>) -> Self {
        Self::new(scenes, Utc::now())
    }

    /// Finds the generated entry for `scene_name`, ignoring ASCII case.
    pub fn entry(&self, scene_name: &str) -> Option<&TransitionEntry> {
        if scene_name.is_empty() {
            return None;
        }
        self.scenes
            .iter()
            .find(|e| !e.name.is_empty() && e.name.eq_ignore_ascii_case(scene_name))
    }

    /// Resolves `scene_name` exactly as the runtime would after loading this document.
    pub fn resolve(&self, scene_name: &str) -> ResolvedTransition {
        TransitionLibrary::from(self).resolve(scene_name)
    }

    /// Serializes with four-space indentation.
    pub fn to_json_string(&self) -> CoreResult<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(DEFAULT_DOCUMENT_INDENT);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Formats like `2026-10-19T08:15:30.123456Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Writes the document in one go, creating parent directories as needed.
pub fn write_document(document: &TransitionDocument, path: &Path) -> CoreResult<()> {
    let json = document.to_json_string()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CoreError::DocumentWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| CoreError::DocumentWrite {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Wrote transition document {} ({} entries)",
        path.display(),
        document.scenes.len()
    );
    Ok(())
}

/// Reads a transition document the way the runtime does.
pub fn load_document(path: &Path) -> CoreResult<TransitionLibrary> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
