// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and loads the PipelineConfig as pretty-printed JSON.
//
// Example file (abridged):
//   {
//     "error_policy": "collect_and_continue",
//     "merge":  { "sources": [{ "path": "...", "label": 1 }], ... },
//     "quotes": { "input": "...", "output": "..." },
//     "words":  { ... },
//     "split":  { "seed": 42, "ratios": { "train": 0.7, ... } }
//   }
//
// Any section or field left out of the file takes its default.
//
// Reference: serde_json documentation
//            Rust Book §9 (Error Handling)

use std::{fs, path::PathBuf};

use crate::application::pipeline_use_case::PipelineConfig;
use crate::domain::error::{PrepError, PrepResult};

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write `cfg` as pretty JSON, creating the parent directory if needed.
    pub fn save(&self, cfg: &PipelineConfig) -> PrepResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }

        let json = serde_json::to_string_pretty(cfg).map_err(|e| self.error(e))?;
        fs::write(&self.path, json).map_err(|e| self.error(e))?;

        tracing::debug!("Saved pipeline config to '{}'", self.path.display());
        Ok(())
    }

    /// Read the config back. A missing file is an error, not an empty config.
    pub fn load(&self) -> PrepResult<PipelineConfig> {
        let json = fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        let cfg = serde_json::from_str(&json).map_err(|e| self.error(e))?;
        tracing::debug!("Loaded pipeline config from '{}'", self.path.display());
        Ok(cfg)
    }

    fn error(&self, e: impl std::fmt::Display) -> PrepError {
        PrepError::Config { path: self.path.clone(), message: e.to_string() }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorPolicy;

    #[test]
    fn test_save_then_load() {
        let dir   = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::new(dir.path().join("cfg").join("pipeline.json"));

        let mut cfg = PipelineConfig::default();
        cfg.error_policy = ErrorPolicy::AbortOnFirst;
        cfg.split.seed   = 1234;

        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
    }

    #[test]
    fn test_labels_are_saved_as_integers() {
        let dir   = tempfile::tempdir().expect("tempdir");
        let path  = dir.path().join("pipeline.json");
        ConfigStore::new(&path).save(&PipelineConfig::default()).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"label\": 1"));
        assert!(json.contains("\"label\": 0"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ConfigStore::new(dir.path().join("none.json")).load().unwrap_err();
        assert!(matches!(err, PrepError::Config { .. }));
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let dir  = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(ConfigStore::new(path).load(), Err(PrepError::Config { .. })));
    }
}
