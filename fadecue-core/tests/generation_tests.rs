// fadecue-core/tests/generation_tests.rs

use fadecue_core::reporting::NullReporter;
use fadecue_core::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// --- Test Helper Functions ---

/// Prober that answers from canned ffprobe JSON keyed by file name.
struct CannedProber {
    reports: HashMap<String, String>,
}

impl CannedProber {
    fn new() -> Self {
        Self {
            reports: HashMap::new(),
        }
    }

    fn with(mut self, file_name: &str, json: &str) -> Self {
        self.reports.insert(file_name.to_string(), json.to_string());
        self
    }
}

impl MediaProber for CannedProber {
    fn probe(&self, path: &Path) -> CoreResult<ProbeReport> {
        let key = path.file_name().unwrap().to_string_lossy().to_string();
        match self.reports.get(&key) {
            Some(json) => ProbeReport::from_json(json),
            None => Err(CoreError::ProbeFailed {
                path: path.to_path_buf(),
                message: "ffprobe exited with exit status: 1".to_string(),
            }),
        }
    }
}

fn probe_json(duration: &str, bit_rate: &str, avg_frame_rate: &str) -> String {
    format!(
        r#"{{
            "streams": [
                {{"codec_type": "audio", "channels": 2}},
                {{"codec_type": "video", "width": 1920, "height": 1080,
                  "avg_frame_rate": "{avg_frame_rate}", "r_frame_rate": "30/1"}}
            ],
            "format": {{"duration": "{duration}", "bit_rate": "{bit_rate}"}}
        }}"#
    )
}

fn write_catalog(dir: &Path, scenes: &[(&str, PathBuf)]) -> PathBuf {
    let entries: Vec<serde_json::Value> = scenes
        .iter()
        .map(|(name, path)| {
            serde_json::json!({
                "name": name,
                "windowsLocalPath": path.to_string_lossy(),
                "timedButtons": []
            })
        })
        .collect();
    let catalog = dir.join("videos.json");
    fs::write(
        &catalog,
        serde_json::to_string(&serde_json::json!({ "scenes": entries })).unwrap(),
    )
    .unwrap();
    catalog
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"not really a video").unwrap();
}

#[test]
fn test_full_run_writes_one_entry_per_existing_clip() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let root = repo.path();
    let intro = root.join("Assets").join("Videos").join("intro.mp4");
    let finale = root.join("Assets").join("Videos").join("finale.mp4");
    touch(&intro);
    touch(&finale);

    let catalog = write_catalog(
        root,
        &[
            ("Intro", intro.clone()),
            ("Lost", root.join("Assets").join("Videos").join("lost.mp4")),
            ("Finale", finale.clone()),
        ],
    );
    let output = root.join("out").join("sceneTransitions.json");

    let prober = CannedProber::new()
        .with("intro.mp4", &probe_json("45.0", "10000000", "60/1"))
        .with("finale.mp4", &probe_json("200.0", "500000", "20/1"));
    let config = HintConfig::new(root.to_path_buf())
        .with_videos_path(&catalog)
        .with_output_path(&output);

    let summary = run(&config, &prober, &NullReporter)?;
    assert_eq!(summary.entries_written, 2);
    assert_eq!(summary.scenes_skipped, 1);

    let doc = load_document(&output)?;
    assert_eq!(doc.scenes.len(), 2);

    let intro_entry = &doc.scenes[0];
    assert_eq!(intro_entry.name, "Intro");
    assert_eq!(intro_entry.style_label(), Some(StyleLabel::Snap));
    assert_eq!(intro_entry.fade_out, 0.18);
    assert_eq!(intro_entry.fade_in, 0.22);
    assert_eq!(intro_entry.ease_out.as_deref(), Some("Linear"));
    assert_eq!(
        intro_entry.source_video.as_deref(),
        Some("Assets/Videos/intro.mp4")
    );
    assert_eq!(intro_entry.duration_seconds, 45.0);
    assert_eq!(intro_entry.avg_fps, 60.0);

    let finale_entry = &doc.scenes[1];
    assert_eq!(finale_entry.name, "Finale");
    assert_eq!(finale_entry.style_label(), Some(StyleLabel::Linger));
    assert_eq!(finale_entry.fade_out, 0.55);
    assert_eq!(finale_entry.ease_in.as_deref(), Some("InOutSine"));

    let root_prefix = root.to_string_lossy().to_string();
    assert!(
        doc.scenes
            .iter()
            .filter_map(|e| e.source_video.as_deref())
            .all(|source| !source.contains(&root_prefix))
    );
    Ok(())
}

#[test]
fn test_output_uses_four_space_indentation() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let root = repo.path();
    let clip = root.join("clip.mp4");
    touch(&clip);
    let catalog = write_catalog(root, &[("Clip", clip)]);
    let output = root.join("sceneTransitions.json");

    let prober = CannedProber::new().with("clip.mp4", &probe_json("90", "4000000", "30/1"));
    let config = HintConfig::new(root.to_path_buf())
        .with_videos_path(&catalog)
        .with_output_path(&output);
    run(&config, &prober, &NullReporter)?;

    let text = fs::read_to_string(&output)?;
    assert!(text.contains("\n    \"defaults\": {\n        \"fadeOut\": 0.35,"));
    assert!(text.contains("\n        {\n            \"name\": \"Clip\",\n            \"style\": \"steady\","));
    Ok(())
}

#[test]
fn test_probe_failure_aborts_the_batch() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let root = repo.path();
    let good = root.join("good.mp4");
    let broken = root.join("broken.mp4");
    touch(&good);
    touch(&broken);
    let catalog = write_catalog(root, &[("Good", good), ("Broken", broken)]);
    let output = root.join("sceneTransitions.json");

    let prober = CannedProber::new().with("good.mp4", &probe_json("45", "10000000", "60/1"));
    let config = HintConfig::new(root.to_path_buf())
        .with_videos_path(&catalog)
        .with_output_path(&output);

    match run(&config, &prober, &NullReporter) {
        Err(CoreError::ProbeFailed { path, .. }) => {
            assert_eq!(path.file_name().unwrap(), "broken.mp4");
        }
        other => panic!("Unexpected result: {:?}", other),
    }
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_malformed_catalog_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let catalog = repo.path().join("videos.json");
    fs::write(&catalog, "{ \"scenes\": [ { \"name\": ")?;

    let result = load_catalog(&catalog);
    assert!(matches!(result, Err(CoreError::CatalogParse { .. })));
    Ok(())
}

#[test]
fn test_probe_without_video_stream_still_produces_entry() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let root = repo.path();
    let clip = root.join("audio_only.m4a");
    touch(&clip);

    let prober = CannedProber::new().with("audio_only.m4a", r#"{"streams": [{"codec_type": "audio"}], "format": {}}"#);
    let scene = SceneDescriptor::new("Narration", clip.to_string_lossy());

    let (entry, stats) = process_scene(&scene, &prober, root)?;
    assert_eq!(stats.fps, 0.0);
    assert_eq!(stats.duration, 0.0);
    // duration 0 (+1) and fps 0 (-1) cancel out
    assert_eq!(entry.style, StyleLabel::Steady);
    assert_eq!(entry.fade_out, 0.32);
    assert_eq!(entry.ease_out, "OutQuad");
    Ok(())
}

#[test]
fn test_written_document_resolves_scenes_like_the_runtime() -> Result<(), Box<dyn std::error::Error>> {
    let repo = tempdir()?;
    let root = repo.path();
    let clip = root.join("intro.mp4");
    touch(&clip);
    let catalog = write_catalog(root, &[("Intro", clip)]);
    let output = root.join("sceneTransitions.json");

    let prober = CannedProber::new().with("intro.mp4", &probe_json("30", "9000000", "50/1"));
    let config = HintConfig::new(root.to_path_buf())
        .with_videos_path(&catalog)
        .with_output_path(&output);
    run(&config, &prober, &NullReporter)?;

    let doc = load_document(&output)?;
    let intro = doc.resolve("intro");
    assert_eq!(intro.style_label(), Some(StyleLabel::Snap));
    assert_eq!(intro.fade_in, 0.22);

    let unknown = doc.resolve("Credits");
    assert_eq!(unknown.style, None);
    assert_eq!(unknown.fade_out, 0.35);
    assert_eq!(unknown.fade_in, 0.4);
    assert_eq!(unknown.hold_after_load, 0.1);
    Ok(())
}
