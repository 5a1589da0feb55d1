use console::style;
use std::path::Path;

use crate::style::StyleLabel;

/// Per-scene result shown after a clip has been probed and classified.
#[derive(Clone, Debug)]
pub struct SceneSummary {
    pub name: String,
    pub duration: f64,
    pub fps: f64,
    pub style: StyleLabel,
}

/// Scene left out of the document because its clip is missing.
#[derive(Clone, Debug)]
pub struct SkippedScene {
    pub name: String,
    pub path: String,
}

/// Reporter interface for generation progress.
pub trait Reporter {
    fn catalog_loaded(&self, _path: &Path, _scene_count: usize) {}
    fn scene_probed(&self, _summary: &SceneSummary) {}
    fn scene_skipped(&self, _scene: &SkippedScene) {}
    fn document_written(&self, _path: &Path, _entry_count: usize) {}
    fn warning(&self, _message: &str) {}
}

/// No-op reporter that discards all updates.
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Human-friendly reporter that prints one line per scene.
#[derive(Default)]
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TerminalReporter {
    fn catalog_loaded(&self, path: &Path, scene_count: usize) {
        println!(
            "{} {} ({} scenes)",
            style("Catalog:").bold(),
            path.display(),
            scene_count
        );
    }

    fn scene_probed(&self, summary: &SceneSummary) {
        println!(
            "Probed {}: duration={:.1}s fps={:.2} style={}",
            style(&summary.name).bold(),
            summary.duration,
            summary.fps,
            style(summary.style).cyan()
        );
    }

    fn scene_skipped(&self, scene: &SkippedScene) {
        println!(
            "{}",
            style(format!(
                "[warn] Skipping {}: missing file {}",
                scene.name, scene.path
            ))
            .yellow()
        );
    }

    fn document_written(&self, path: &Path, entry_count: usize) {
        println!(
            "{} {} ({} entries)",
            style("Wrote").green().bold(),
            path.display(),
            entry_count
        );
    }

    fn warning(&self, message: &str) {
        println!("{}", style(format!("WARN: {}", message)).yellow().bold());
    }
}
