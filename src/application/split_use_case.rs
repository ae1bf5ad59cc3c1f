// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Step 1: Load the labeled dataset            (Layer 4 - data)
// Step 2: Seeded 70/15/15 split               (Layer 4 - data)
// Step 3: Log each partition's label balance
// Step 4: Write train / val / test CSVs       (Layer 4 - data)
//
// Every error here is fatal regardless of the ErrorPolicy.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::data::{
    loader::CsvLoader,
    splitter::{SplitRatios, Splitter},
    writer::CsvWriter,
};
use crate::domain::error::PrepResult;
use crate::domain::table::Table;
use crate::domain::traits::{TableSink, TableSource};

// ─── Split Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub input:             PathBuf,
    pub train_output:      PathBuf,
    pub validation_output: PathBuf,
    pub test_output:       PathBuf,
    pub seed:              u64,
    pub ratios:            SplitRatios,
    /// Only used to log the label balance of each partition.
    pub label_column:      String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input:             PathBuf::from("../dataset/quotes_classification_data.csv"),
            train_output:      PathBuf::from("../dataset_splits/train_dataset.csv"),
            validation_output: PathBuf::from("../dataset_splits/val_dataset.csv"),
            test_output:       PathBuf::from("../dataset_splits/test_dataset.csv"),
            seed:              42,
            ratios:            SplitRatios::default(),
            label_column:      "Memorable".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SplitReport {
    pub train:      usize,
    pub validation: usize,
    pub test:       usize,
}

// ─── SplitUseCase ─────────────────────────────────────────────────────────────
pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> PrepResult<SplitReport> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let table = CsvLoader::new(&cfg.input).load()?;
        tracing::info!("Loaded {} rows from '{}'", table.len(), cfg.input.display());

        // ── Step 2: Split ─────────────────────────────────────────────────────
        let split = Splitter::new(cfg.ratios, cfg.seed)?.split(&table)?;
        tracing::info!(
            "Split (seed {}): {} train, {} validation, {} test",
            cfg.seed,
            split.train.len(),
            split.validation.len(),
            split.test.len()
        );

        // ── Step 3: Label balance ─────────────────────────────────────────────
        for (name, part) in [("train", &split.train), ("validation", &split.validation), ("test", &split.test)] {
            if let Some(counts) = label_counts(part, &cfg.label_column) {
                tracing::info!("{} label counts: {:?}", name, counts);
            }
        }

        // ── Step 4: Write ─────────────────────────────────────────────────────
        CsvWriter::new(&cfg.train_output).write(&split.train)?;
        CsvWriter::new(&cfg.validation_output).write(&split.validation)?;
        CsvWriter::new(&cfg.test_output).write(&split.test)?;
        tracing::info!(
            "Datasets saved: {}, {}, {}",
            cfg.train_output.display(),
            cfg.validation_output.display(),
            cfg.test_output.display()
        );

        Ok(SplitReport {
            train:      split.train.len(),
            validation: split.validation.len(),
            test:       split.test.len(),
        })
    }
}

/// Rows per distinct value of `column`, or None if the table has no such column.
fn label_counts(table: &Table, column: &str) -> Option<BTreeMap<String, usize>> {
    let idx = table.column_index(column)?;
    let mut counts = BTreeMap::new();
    for row in table.rows() {
        *counts.entry(row[idx].clone()).or_insert(0) += 1;
    }
    Some(counts)
}
