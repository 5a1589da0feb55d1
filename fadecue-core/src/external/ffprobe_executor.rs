//! FFprobe integration for clip statistics.
//!
//! The ffprobe crate runs `ffprobe -show_format -show_streams` and hands back
//! its full schema. Only the handful of fields the extractor reads survive the
//! conversion into [`ProbeReport`], which can also be built straight from raw
//! ffprobe JSON.

use super::MediaProber;
use crate::error::{CoreError, CoreResult};
use ffprobe::{FfProbe, FfProbeError, ffprobe};
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Container-level summary.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ProbeFormat {
    /// Duration in seconds, as printed by ffprobe
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    /// Overall bitrate in bits per second
    #[serde(default, deserialize_with = "lenient_string")]
    pub bit_rate: Option<String>,
}

/// One elementary stream.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ProbeStream {
    /// `video`, `audio`, `subtitle`, ...
    #[serde(default, deserialize_with = "lenient_string")]
    pub codec_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub width: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub height: Option<i64>,
    /// Average frame rate as a rational string, e.g. `30000/1001`
    #[serde(default, deserialize_with = "lenient_string")]
    pub avg_frame_rate: Option<String>,
    /// Reported (base) frame rate as a rational string
    #[serde(default, deserialize_with = "lenient_string")]
    pub r_frame_rate: Option<String>,
}

impl ProbeStream {
    pub fn is_video(&self) -> bool {
        self.codec_type.as_deref() == Some("video")
    }
}

/// The parts of an ffprobe report used to build clip statistics.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ProbeReport {
    #[serde(default)]
    pub format: ProbeFormat,
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

impl ProbeReport {
    /// Parses raw `ffprobe -print_format json` output.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<FfProbe> for ProbeReport {
    fn from(metadata: FfProbe) -> Self {
        let streams = metadata
            .streams
            .into_iter()
            .map(|stream| ProbeStream {
                codec_type: stream.codec_type,
                width: stream.width,
                height: stream.height,
                avg_frame_rate: non_empty(stream.avg_frame_rate),
                r_frame_rate: non_empty(stream.r_frame_rate),
            })
            .collect();

        Self {
            format: ProbeFormat {
                duration: metadata.format.duration,
                bit_rate: metadata.format.bit_rate,
            },
            streams,
        }
    }
}

/// Prober backed by the ffprobe crate.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl MediaProber for CrateFfprobeExecutor {
    fn probe(&self, path: &Path) -> CoreResult<ProbeReport> {
        log::debug!("Running ffprobe (via crate) on: {}", path.display());
        match ffprobe(path) {
            Ok(metadata) => Ok(ProbeReport::from(metadata)),
            Err(err) => {
                log::error!("ffprobe failed on {}: {:?}", path.display(), err);
                Err(map_ffprobe_error(err, path))
            }
        }
    }
}

fn map_ffprobe_error(err: FfProbeError, path: &Path) -> CoreError {
    let message = match err {
        FfProbeError::Io(io_err) => format!("could not start ffprobe: {io_err}"),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            format!("ffprobe exited with {}: {}", output.status, stderr.trim())
        }
        FfProbeError::Deserialize(err) => format!("unreadable ffprobe output: {err}"),
        other => format!("unknown ffprobe error: {other:?}"),
    };
    CoreError::ProbeFailed {
        path: path.to_path_buf(),
        message,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

// ffprobe prints numbers as strings, but hand-written fixtures and other
// tools do not; a field of the wrong shape becomes None instead of failing
// the whole report.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => non_empty(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
