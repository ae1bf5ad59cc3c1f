// ============================================================
// Layer 2 — MergeUseCase
// ============================================================
// Step 1: Load every labeled source CSV     (Layer 4 - data)
//         A source that fails to load is handed to the
//         ErrorPolicy: skipped with a warning, or fatal.
// Step 2: Stamp + concatenate               (Layer 4 - data)
//         Zero loaded sources is always an error.
// Step 3: Write the merged CSV              (Layer 4 - data)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{loader::CsvLoader, merger::merge_labeled, writer::CsvWriter};
use crate::domain::error::{ErrorPolicy, PrepResult};
use crate::domain::labeled_record::Label;
use crate::domain::traits::{TableSink, TableSource};

/// One input CSV and the label every one of its rows receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSource {
    pub path:  PathBuf,
    pub label: Label,
}

impl LabeledSource {
    pub fn new(path: impl Into<PathBuf>, label: Label) -> Self {
        Self { path: path.into(), label }
    }
}

// ─── Merge Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub sources:      Vec<LabeledSource>,
    pub output:       PathBuf,
    pub label_column: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        let dir = "../generated_datasets";
        Self {
            sources: vec![
                LabeledSource::new(format!("{dir}/memorable_concreteness.csv"), Label::Memorable),
                LabeledSource::new(format!("{dir}/memorable_emotional.csv"), Label::Memorable),
                LabeledSource::new(format!("{dir}/memorable_imagery.csv"), Label::Memorable),
                LabeledSource::new(format!("{dir}/memorable_valence.csv"), Label::Memorable),
                LabeledSource::new(format!("{dir}/non_memorable_texts.csv"), Label::NonMemorable),
            ],
            output:       PathBuf::from(format!("{dir}/merged_dataset.csv")),
            label_column: "Memorable".to_string(),
        }
    }
}

/// What a merge run did.
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    pub loaded:  usize,
    pub skipped: Vec<PathBuf>,
    pub rows:    usize,
    pub written: bool,
}

// ─── MergeUseCase ─────────────────────────────────────────────────────────────
pub struct MergeUseCase {
    config: MergeConfig,
    policy: ErrorPolicy,
}

impl MergeUseCase {
    pub fn new(config: MergeConfig, policy: ErrorPolicy) -> Self {
        Self { config, policy }
    }

    pub fn execute(&self) -> PrepResult<MergeReport> {
        let cfg = &self.config;
        let mut report = MergeReport::default();

        // ── Step 1: Load each source ──────────────────────────────────────────
        let mut fragments = Vec::with_capacity(cfg.sources.len());
        for source in &cfg.sources {
            match CsvLoader::new(&source.path).load() {
                Ok(table) => {
                    if table.is_empty() {
                        tracing::warn!("'{}' has a header but no rows", source.path.display());
                    }
                    tracing::info!(
                        "Loaded {} rows from '{}' (label {})",
                        table.len(),
                        source.path.display(),
                        source.label
                    );
                    fragments.push((table, source.label));
                }
                Err(e) => {
                    self.policy.handle(e)?;
                    report.skipped.push(source.path.clone());
                }
            }
        }
        report.loaded = fragments.len();

        // ── Step 2: Stamp and concatenate ─────────────────────────────────────
        let merged = merge_labeled(fragments, &cfg.label_column)?;
        report.rows = merged.len();

        // ── Step 3: Write ─────────────────────────────────────────────────────
        match CsvWriter::new(&cfg.output).write(&merged) {
            Ok(()) => {
                tracing::info!("Dataset saved. ({} rows → '{}')", merged.len(), cfg.output.display());
                report.written = true;
            }
            Err(e) => self.policy.handle(e)?,
        }

        Ok(report)
    }
}
