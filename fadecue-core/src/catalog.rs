//! Scene catalog loading and the generation driver.
//!
//! The driver walks the catalog in order. A scene whose clip is missing is
//! skipped with a warning and the batch continues; a failed probe aborts the
//! batch.

use crate::config::HintConfig;
use crate::document::{TransitionDocument, write_document};
use crate::error::{CoreError, CoreResult};
use crate::external::MediaProber;
use crate::media::{VideoStatistics, extract};
use crate::paths::resolve_local_path;
use crate::profile::{TransitionEntry, build_entry};
use crate::reporting::{Reporter, SceneSummary, SkippedScene};
use serde::de;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// One usable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneDescriptor {
    pub name: String,
    /// Clip location as written in the catalog (usually a Windows path)
    pub source_path: String,
}

impl SceneDescriptor {
    pub fn new(name: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
        }
    }
}

fn string_field<'a>(scene: &'a Value, key: &str) -> Option<&'a str> {
    scene
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Parses catalog JSON, dropping entries without a name or source path.
///
/// The catalog must be a JSON object. Only `name` and `windowsLocalPath` are
/// read from each scene. A missing `scenes` key is an empty catalog; a
/// `scenes` value that is not an array is an error.
pub fn parse_catalog(json: &str) -> serde_json::Result<Vec<SceneDescriptor>> {
    let root: Value = serde_json::from_str(json)?;
    let catalog = root
        .as_object()
        .ok_or_else(|| <serde_json::Error as de::Error>::custom("scene catalog must be a JSON object"))?;

    let scenes = match catalog.get("scenes") {
        None => return Ok(Vec::new()),
        Some(Value::Array(scenes)) => scenes,
        Some(_) => return Err(de::Error::custom("`scenes` must be an array")),
    };

    Ok(scenes
        .iter()
        .filter_map(|scene| {
            let name = string_field(scene, "name")?;
            let source = string_field(scene, "windowsLocalPath")?;
            Some(SceneDescriptor::new(name, source))
        })
        .collect())
}

/// Reads the scene catalog at `path`.
pub fn load_catalog(path: &Path) -> CoreResult<Vec<SceneDescriptor>> {
    let json = fs::read_to_string(path).map_err(|source| CoreError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let scenes = parse_catalog(&json).map_err(|source| CoreError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded {} scenes from {}", scenes.len(), path.display());
    Ok(scenes)
}

/// Resolves, probes and classifies one scene.
///
/// Returns [`CoreError::MissingMedia`] when the clip does not exist.
pub fn process_scene<P: MediaProber + ?Sized>(
    scene: &SceneDescriptor,
    prober: &P,
    repo_root: &Path,
) -> CoreResult<(TransitionEntry, VideoStatistics)> {
    let clip_path = resolve_local_path(&scene.source_path);
    if !clip_path.exists() {
        return Err(CoreError::MissingMedia {
            scene: scene.name.clone(),
            path: clip_path,
        });
    }

    let stats = extract(prober, &scene.name, &clip_path)?;
    let entry = build_entry(&scene.name, &stats, repo_root);
    Ok((entry, stats))
}

/// Document plus the scenes that were left out of it.
#[derive(Debug, Clone)]
pub struct CatalogOutcome {
    pub document: TransitionDocument,
    pub skipped: Vec<SkippedScene>,
}

/// Builds the transition document for `scenes`, in order.
pub fn generate_document<P, R>(
    scenes: &[SceneDescriptor],
    prober: &P,
    reporter: &R,
    repo_root: &Path,
) -> CoreResult<CatalogOutcome>
where
    P: MediaProber + ?Sized,
    R: Reporter + ?Sized,
{
    let mut entries = Vec::with_capacity(scenes.len());
    let mut skipped = Vec::new();

    for scene in scenes {
        match process_scene(scene, prober, repo_root) {
            Ok((entry, stats)) => {
                reporter.scene_probed(&SceneSummary {
                    name: entry.name.clone(),
                    duration: stats.duration,
                    fps: stats.fps,
                    style: entry.style,
                });
                entries.push(entry);
            }
            Err(CoreError::MissingMedia { scene, path }) => {
                log::debug!("Skipping {}: missing file {}", scene, path.display());
                let skip = SkippedScene {
                    name: scene,
                    path: path.display().to_string(),
                };
                reporter.scene_skipped(&skip);
                skipped.push(skip);
            }
            Err(err) => return Err(err),
        }
    }

    Ok(CatalogOutcome {
        document: TransitionDocument::generated_now(entries),
        skipped,
    })
}

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub output_path: PathBuf,
    pub entries_written: usize,
    pub scenes_skipped: usize,
}

/// Loads the catalog, generates the document and writes it.
pub fn run<P, R>(config: &HintConfig, prober: &P, reporter: &R) -> CoreResult<GenerationSummary>
where
    P: MediaProber + ?Sized,
    R: Reporter + ?Sized,
{
    config.validate()?;

    let scenes = load_catalog(&config.videos_path)?;
    reporter.catalog_loaded(&config.videos_path, scenes.len());

    let outcome = generate_document(&scenes, prober, reporter, config.repo_root())?;
    write_document(&outcome.document, &config.output_path)?;

    let entries_written = outcome.document.scenes.len();
    reporter.document_written(&config.output_path, entries_written);

    Ok(GenerationSummary {
        output_path: config.output_path.clone(),
        entries_written,
        scenes_skipped: outcome.skipped.len(),
    })
}
