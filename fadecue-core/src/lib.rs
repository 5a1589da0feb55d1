//! Core library for turning video metadata into scene transition hints.
//!
//! Each clip in a scene catalog is probed with ffprobe, classified into a
//! transition style (`snap`, `steady` or `linger`) from its duration, frame
//! rate and bitrate, and expanded into fade timings and easing curves for the
//! playback runtime.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use fadecue_core::{CrateFfprobeExecutor, HintConfig, run};
//! use fadecue_core::reporting::TerminalReporter;
//! use std::path::PathBuf;
//!
//! let config = HintConfig::new(PathBuf::from("/path/to/repo"))
//!     .with_output_path("/tmp/sceneTransitions.json");
//!
//! let summary = run(&config, &CrateFfprobeExecutor::new(), &TerminalReporter::new()).unwrap();
//! println!("{} entries", summary.entries_written);
//! ```

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod external;
pub mod media;
pub mod paths;
pub mod presets;
pub mod profile;
pub mod reporting;
pub mod style;
pub mod utils;

// Re-exports for public API
pub use catalog::{
    CatalogOutcome, GenerationSummary, SceneDescriptor, generate_document, load_catalog,
    parse_catalog, process_scene, run,
};
pub use config::HintConfig;
pub use document::{
    ResolvedTransition, SceneOverride, TransitionDefaults, TransitionDocument, TransitionLibrary,
    load_document, write_document,
};
pub use error::{CoreError, CoreResult};
pub use external::{CrateFfprobeExecutor, MediaProber, ProbeReport};
pub use media::{VideoStatistics, extract};
pub use presets::{StylePreset, preset_for_name};
pub use profile::{TransitionEntry, build_entry};
pub use style::{StyleLabel, classify, pace_score};
