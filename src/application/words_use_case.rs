// ============================================================
// Layer 2 — WordsUseCase
// ============================================================
// Step 1: Load the word-memorability CSV     (Layer 4 - data)
// Step 2: Drop missing pRecall, label by median (Layer 4 - data)
// Step 3: Keep the study columns             (Layer 3 - domain)
// Step 4: Write the processed CSV            (Layer 4 - data)
//
// Every error here is fatal: a missing file or column stops
// the run regardless of the ErrorPolicy.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{labeler::MedianLabeler, loader::CsvLoader, writer::CsvWriter};
use crate::domain::error::PrepResult;
use crate::domain::traits::{TableSink, TableSource};

// ─── Words Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    pub input:        PathBuf,
    pub output:       PathBuf,
    pub score_column: String,
    pub label_column: String,
    /// Output columns, in order. Must include the score and label columns
    /// if they are to appear in the output.
    pub keep_columns: Vec<String>,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            input:        PathBuf::from("dataset_word_memorability/word_memorability.csv"),
            output:       PathBuf::from("dataset_word_memorability/processed_words_dataset.csv"),
            score_column: "pRecall".to_string(),
            label_column: "Memorable".to_string(),
            keep_columns: ["word", "pRecall", "Memorable", "Concreteness", "Arousal", "Valence", "Animacy"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WordsReport {
    pub rows:      usize,
    pub threshold: f64,
}

// ─── WordsUseCase ─────────────────────────────────────────────────────────────
pub struct WordsUseCase {
    config: WordsConfig,
}

impl WordsUseCase {
    pub fn new(config: WordsConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> PrepResult<WordsReport> {
        let cfg = &self.config;

        let table = CsvLoader::new(&cfg.input).load()?;
        tracing::info!("Loaded {} words from '{}'", table.len(), cfg.input.display());

        let labeler = MedianLabeler::new(&cfg.score_column, &cfg.label_column);
        let (labeled, threshold) = labeler.label(table)?;
        tracing::info!("Median {} = {}", cfg.score_column, threshold);

        let keep: Vec<&str> = cfg.keep_columns.iter().map(String::as_str).collect();
        let processed = labeled.select(&keep)?;

        CsvWriter::new(&cfg.output).write(&processed)?;
        tracing::info!("Wrote {} words to '{}'", processed.len(), cfg.output.display());

        Ok(WordsReport { rows: processed.len(), threshold })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PrepError;
    use std::fs;
    use std::path::Path;

    const WORDS: &str = "\
word,Extra,pRecall,Concreteness,Arousal,Valence,Animacy
apple,x,0.60,4.9,3.1,6.2,0
ghost,x,,2.0,5.5,3.3,1
table,x,0.40,4.8,2.0,5.0,0
tiger,x,0.80,4.9,6.0,5.1,1
";

    fn config(dir: &Path, body: &str) -> WordsConfig {
        let input = dir.join("word_memorability.csv");
        fs::write(&input, body).unwrap();
        WordsConfig {
            input,
            output: dir.join("processed.csv"),
            ..WordsConfig::default()
        }
    }

    #[test]
    fn test_labels_and_projects() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = config(dir.path(), WORDS);

        let report = WordsUseCase::new(cfg.clone()).execute().unwrap();
        assert_eq!(report.rows, 3);
        assert_eq!(report.threshold, 0.60);

        let out = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(
            out,
            "word,pRecall,Memorable,Concreteness,Arousal,Valence,Animacy\n\
             apple,0.60,1,4.9,3.1,6.2,0\n\
             table,0.40,0,4.8,2.0,5.0,0\n\
             tiger,0.80,1,4.9,6.0,5.1,1\n"
        );
    }

    #[test]
    fn test_stale_labels_in_input_are_replaced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = config(
            dir.path(),
            "word,pRecall,Memorable,Concreteness,Arousal,Valence,Animacy\n\
             a,0.9,0,1,1,1,0\n\
             b,0.1,1,1,1,1,0\n\
             c,0.5,0,1,1,1,0\n",
        );

        WordsUseCase::new(cfg.clone()).execute().unwrap();
        let out = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(
            out,
            "word,pRecall,Memorable,Concreteness,Arousal,Valence,Animacy\n\
             a,0.9,1,1,1,1,0\n\
             b,0.1,0,1,1,1,0\n\
             c,0.5,1,1,1,1,0\n"
        );
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = config(dir.path(), "word,pRecall\napple,0.5\n");

        let err = WordsUseCase::new(cfg.clone()).execute().unwrap_err();
        assert!(matches!(err, PrepError::MissingColumn(c) if c == "Concreteness"));
        assert!(!cfg.output.exists());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = WordsConfig {
            input: dir.path().join("nope.csv"),
            ..WordsConfig::default()
        };
        assert!(WordsUseCase::new(cfg).execute().unwrap_err().is_missing_input());
    }
}
