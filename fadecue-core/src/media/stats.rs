//! Normalized per-clip statistics.
//!
//! Extraction never fails on field-level defects: a missing or malformed
//! duration, bitrate, dimension or frame rate becomes zero. Only a failed
//! probe invocation is an error.

use crate::error::CoreResult;
use crate::external::{MediaProber, ProbeReport};
use crate::utils::{parse_frame_rate, parse_number};
use std::path::{Path, PathBuf};

/// Statistics for one clip, built once and read by the classifier and the
/// profile builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoStatistics {
    /// Scene the clip belongs to
    pub scene: String,
    /// Resolved location of the clip
    pub path: PathBuf,
    /// Duration in seconds
    pub duration: f64,
    /// Average frame rate
    pub fps: f64,
    /// Bitrate in bits per second
    pub bitrate: f64,
    pub width: u32,
    pub height: u32,
}

impl VideoStatistics {
    pub fn new(scene: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            scene: scene.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    pub fn with_bitrate(mut self, bitrate: f64) -> Self {
        self.bitrate = bitrate;
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Probes `path` and normalizes the report into statistics for `scene`.
pub fn extract<P: MediaProber + ?Sized>(
    prober: &P,
    scene: &str,
    path: &Path,
) -> CoreResult<VideoStatistics> {
    let report = prober.probe(path)?;
    Ok(statistics_from_report(scene, path, &report))
}

/// Normalizes a probe report.
///
/// Duration and bitrate come from the container summary. Dimensions and
/// frame rate come from the first video stream; the average frame rate is
/// preferred over the reported one.
pub fn statistics_from_report(scene: &str, path: &Path, report: &ProbeReport) -> VideoStatistics {
    let mut stats = VideoStatistics::new(scene, path)
        .with_duration(parse_number(report.format.duration.as_deref()))
        .with_bitrate(parse_number(report.format.bit_rate.as_deref()));

    if let Some(video) = report.streams.iter().find(|s| s.is_video()) {
        let rate = video
            .avg_frame_rate
            .as_deref()
            .filter(|r| !r.is_empty())
            .or(video.r_frame_rate.as_deref());
        stats.fps = parse_frame_rate(rate);
        stats.width = dimension(video.width);
        stats.height = dimension(video.height);
    } else {
        log::debug!("No video stream found in {}", path.display());
    }

    stats
}

fn dimension(value: Option<i64>) -> u32 {
    value
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::{ProbeFormat, ProbeStream};

    fn video_stream(avg: Option<&str>, r: Option<&str>) -> ProbeStream {
        ProbeStream {
            codec_type: Some("video".to_string()),
            width: Some(1920),
            height: Some(1080),
            avg_frame_rate: avg.map(str::to_string),
            r_frame_rate: r.map(str::to_string),
        }
    }

    fn audio_stream() -> ProbeStream {
        ProbeStream {
            codec_type: Some("audio".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_statistics_from_full_report() {
        let report = ProbeReport {
            format: ProbeFormat {
                duration: Some("45.0".to_string()),
                bit_rate: Some("10000000".to_string()),
            },
            streams: vec![audio_stream(), video_stream(Some("60/1"), Some("30/1"))],
        };

        let stats = statistics_from_report("Intro", Path::new("/clips/intro.mp4"), &report);
        assert_eq!(stats.scene, "Intro");
        assert_eq!(stats.path, PathBuf::from("/clips/intro.mp4"));
        assert_eq!(stats.duration, 45.0);
        assert_eq!(stats.bitrate, 10_000_000.0);
        assert_eq!(stats.fps, 60.0);
        assert_eq!((stats.width, stats.height), (1920, 1080));
    }

    #[test]
    fn test_first_video_stream_wins() {
        let mut second = video_stream(Some("24/1"), None);
        second.width = Some(640);
        let report = ProbeReport {
            streams: vec![video_stream(Some("50/1"), None), second],
            ..Default::default()
        };

        let stats = statistics_from_report("Scene", Path::new("a.mp4"), &report);
        assert_eq!(stats.fps, 50.0);
        assert_eq!(stats.width, 1920);
    }

    #[test]
    fn test_reported_frame_rate_fallback() {
        let report = ProbeReport {
            streams: vec![video_stream(None, Some("25/1"))],
            ..Default::default()
        };
        let stats = statistics_from_report("Scene", Path::new("a.mp4"), &report);
        assert_eq!(stats.fps, 25.0);
    }

    #[test]
    fn test_no_video_stream_leaves_zeroes() {
        let report = ProbeReport {
            format: ProbeFormat {
                duration: Some("200".to_string()),
                bit_rate: None,
            },
            streams: vec![audio_stream()],
        };

        let stats = statistics_from_report("Music", Path::new("a.mp3"), &report);
        assert_eq!(stats.duration, 200.0);
        assert_eq!(stats.bitrate, 0.0);
        assert_eq!(stats.fps, 0.0);
        assert_eq!((stats.width, stats.height), (0, 0));
    }

    #[test]
    fn test_malformed_fields_default_to_zero() {
        let mut stream = video_stream(Some("garbage"), Some("30/1"));
        stream.width = Some(-1);
        stream.height = None;
        let report = ProbeReport {
            format: ProbeFormat {
                duration: Some("N/A".to_string()),
                bit_rate: Some("fast".to_string()),
            },
            streams: vec![stream],
        };

        let stats = statistics_from_report("Scene", Path::new("a.mp4"), &report);
        assert_eq!(stats.duration, 0.0);
        assert_eq!(stats.bitrate, 0.0);
        // A present but unparseable average rate does not fall back.
        assert_eq!(stats.fps, 0.0);
        assert_eq!((stats.width, stats.height), (0, 0));
    }
}
