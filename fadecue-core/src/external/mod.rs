// ============================================================================
// fadecue-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe
//
// This module encapsulates the only external tool fadecue talks to. The
// `MediaProber` trait is the seam: production code uses the ffprobe crate,
// tests supply canned probe reports.
//
// KEY COMPONENTS:
// - MediaProber trait for probing a clip
// - CrateFfprobeExecutor, the ffprobe-backed implementation
// - ProbeReport, the subset of ffprobe output the extractor reads

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- Standard library imports ----
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the ffprobe-backed prober and the probe report model
pub mod ffprobe_executor;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffprobe_executor::{CrateFfprobeExecutor, ProbeFormat, ProbeReport, ProbeStream};

// ============================================================================
// PROBING
// ============================================================================

/// Trait for abstracting the video-probing capability.
///
/// Implementations block until the probe completes. A failed invocation must
/// be reported as [`crate::CoreError::ProbeFailed`]; missing fields inside a
/// successful report are not errors.
///
/// # Examples
///
/// ```rust
/// use fadecue_core::external::{MediaProber, ProbeReport};
/// use fadecue_core::CoreResult;
/// use std::path::Path;
///
/// struct EmptyProber;
///
/// impl MediaProber for EmptyProber {
///     fn probe(&self, _path: &Path) -> CoreResult<ProbeReport> {
///         Ok(ProbeReport::default())
///     }
/// }
///
/// let report = EmptyProber.probe(Path::new("/fake/clip.mp4")).unwrap();
/// assert!(report.streams.is_empty());
/// ```
pub trait MediaProber {
    /// Probes the clip at `path` and returns its format summary and streams.
    fn probe(&self, path: &Path) -> CoreResult<ProbeReport>;
}

impl<P: MediaProber + ?Sized> MediaProber for &P {
    fn probe(&self, path: &Path) -> CoreResult<ProbeReport> {
        (**self).probe(path)
    }
}
