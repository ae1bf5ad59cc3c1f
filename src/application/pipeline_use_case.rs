// ============================================================
// Layer 2 — PipelineUseCase
// ============================================================
// Runs the four steps in file-handoff order:
//
//   merge → quotes → words → split
//
// The steps share nothing but the file system. With
// CollectAndContinue a failed step is logged and the next one
// still runs; with AbortOnFirst the first failure stops the run.

use serde::{Deserialize, Serialize};

use crate::application::{
    merge_use_case::{MergeConfig, MergeUseCase},
    quotes_use_case::{QuotesConfig, QuotesUseCase},
    split_use_case::{SplitConfig, SplitUseCase},
    words_use_case::{WordsConfig, WordsUseCase},
};
use crate::domain::error::{ErrorPolicy, PrepError, PrepResult};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Every path, the seed, and the split ratios in one place.
// Saved and loaded as JSON by infra::config_store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub error_policy: ErrorPolicy,
    pub merge:        MergeConfig,
    pub quotes:       QuotesConfig,
    pub words:        WordsConfig,
    pub split:        SplitConfig,
}

#[derive(Debug, Default)]
pub struct PipelineReport {
    pub completed: Vec<&'static str>,
    pub failed:    Vec<(&'static str, PrepError)>,
}

impl PipelineReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct PipelineUseCase {
    config: PipelineConfig,
}

impl PipelineUseCase {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> PrepResult<PipelineReport> {
        let cfg    = &self.config;
        let policy = cfg.error_policy;
        let mut report = PipelineReport::default();

        let merge  = || MergeUseCase::new(cfg.merge.clone(), policy).execute().map(|_| ());
        let quotes = || QuotesUseCase::new(cfg.quotes.clone(), policy).execute().map(|_| ());
        let words  = || WordsUseCase::new(cfg.words.clone()).execute().map(|_| ());
        let split  = || SplitUseCase::new(cfg.split.clone()).execute().map(|_| ());

        let steps: [(&'static str, &dyn Fn() -> PrepResult<()>); 4] = [
            ("merge", &merge),
            ("quotes", &quotes),
            ("words", &words),
            ("split", &split),
        ];

        for (name, step) in steps {
            tracing::info!("── {} ──", name);
            match step() {
                Ok(()) => report.completed.push(name),
                Err(e) if policy == ErrorPolicy::AbortOnFirst => return Err(e),
                Err(e) => {
                    tracing::error!("Step '{}' failed: {}", name, e);
                    report.failed.push((name, e));
                }
            }
        }

        Ok(report)
    }
}
