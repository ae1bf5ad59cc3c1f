// ============================================================
// Layer 2 — QuotesUseCase
// ============================================================
// Step 1: Read the quote-pair text file      (Layer 4 - data)
//         A missing or unreadable file gives an empty result
//         and nothing is written (unless the policy aborts).
// Step 2: Keep trimmed, non-blank lines      (Layer 4 - data)
// Step 3: Group into 4-line blocks           (Layer 4 - data)
// Step 4: Write the Quote,Memorable CSV      (Layer 4 - data)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    loader::read_text_lossy,
    preprocessor::Preprocessor,
    quote_parser::QuoteParser,
    writer::CsvWriter,
};
use crate::domain::error::{ErrorPolicy, PrepResult};
use crate::domain::labeled_record::LabeledRecord;
use crate::domain::table::Table;
use crate::domain::traits::TableSink;

// ─── Quotes Configuration ────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotesConfig {
    pub input:        PathBuf,
    pub output:       PathBuf,
    pub text_column:  String,
    pub label_column: String,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            input:        PathBuf::from("../dataset/moviequotes.memorable_nonmemorable_pairs.txt"),
            output:       PathBuf::from("../dataset/quotes_classification_data1.csv"),
            text_column:  "Quote".to_string(),
            label_column: "Memorable".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuotesReport {
    pub records: usize,
    pub written: bool,
}

// ─── QuotesUseCase ────────────────────────────────────────────────────────────
pub struct QuotesUseCase {
    config: QuotesConfig,
    policy: ErrorPolicy,
}

impl QuotesUseCase {
    pub fn new(config: QuotesConfig, policy: ErrorPolicy) -> Self {
        Self { config, policy }
    }

    /// Read and parse the input file without writing anything.
    /// A read failure the policy tolerates yields an empty Vec.
    pub fn convert(&self) -> PrepResult<Vec<LabeledRecord>> {
        let text = match read_text_lossy(&self.config.input) {
            Ok(text) => text,
            Err(e) => {
                self.policy.handle(e)?;
                return Ok(Vec::new());
            }
        };

        let lines = Preprocessor::new().non_blank_lines(&text);
        tracing::debug!("{} non-blank lines in '{}'", lines.len(), self.config.input.display());

        QuoteParser::new(self.policy).parse(&lines)
    }

    pub fn execute(&self) -> PrepResult<QuotesReport> {
        let cfg = &self.config;

        let records = self.convert()?;
        let mut report = QuotesReport { records: records.len(), written: false };

        if records.is_empty() {
            tracing::warn!("No quotes parsed from '{}'; nothing written", cfg.input.display());
            return Ok(report);
        }

        let table = Table::from_records(&cfg.text_column, &cfg.label_column, &records);
        match CsvWriter::new(&cfg.output).write(&table) {
            Ok(()) => {
                tracing::info!("Wrote {} quotes to '{}'", records.len(), cfg.output.display());
                report.written = true;
            }
            Err(e) => self.policy.handle(e)?,
        }

        Ok(report)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PrepError;
    use std::fs;
    use std::path::Path;

    const SAMPLE: &str = "\
1
You're gonna need a bigger boat.

1
1 We will need a larger vessel.
2
I'll be back.
2
2   I   will   return   later.
";

    fn config(dir: &Path, body: Option<&[u8]>) -> QuotesConfig {
        let input = dir.join("pairs.txt");
        if let Some(body) = body {
            fs::write(&input, body).unwrap();
        }
        QuotesConfig {
            input,
            output: dir.join("quotes.csv"),
            ..QuotesConfig::default()
        }
    }

    #[test]
    fn test_converts_pairs_to_csv() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = config(dir.path(), Some(SAMPLE.as_bytes()));

        let report = QuotesUseCase::new(cfg.clone(), ErrorPolicy::default()).execute().unwrap();
        assert_eq!(report.records, 4);
        assert!(report.written);

        let out = fs::read_to_string(&cfg.output).unwrap();
        assert_eq!(
            out,
            "Quote,Memorable\n\
             You're gonna need a bigger boat.,1\n\
             We will need a larger vessel.,0\n\
             I'll be back.,1\n\
             I will return later.,0\n"
        );
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = config(dir.path(), None);

        let report = QuotesUseCase::new(cfg.clone(), ErrorPolicy::CollectAndContinue)
            .execute()
            .unwrap();
        assert_eq!(report.records, 0);
        assert!(!report.written);
        assert!(!cfg.output.exists());
    }

    #[test]
    fn test_missing_input_fails_fast() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = config(dir.path(), None);
        let err = QuotesUseCase::new(cfg, ErrorPolicy::AbortOnFirst).execute().unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_malformed_utf8_is_replaced() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = config(dir.path(), Some(&b"1\nCaf\xe9 society.\n1\n1 Plain cafe.\n"[..]));

        let records = QuotesUseCase::new(cfg, ErrorPolicy::default()).convert().unwrap();
        assert_eq!(records[0].text, "Caf\u{fffd} society.");
    }

    #[test]
    fn test_partial_trailing_block() {
        let dir = tempfile::tempdir().expect("tempdir");
        let body = format!("{SAMPLE}3\nHalf a block.\n");
        let cfg = config(dir.path(), Some(body.as_bytes()));

        let lenient = QuotesUseCase::new(cfg.clone(), ErrorPolicy::CollectAndContinue);
        assert_eq!(lenient.convert().unwrap().len(), 4);

        let strict = QuotesUseCase::new(cfg, ErrorPolicy::AbortOnFirst);
        assert!(matches!(strict.convert(), Err(PrepError::MalformedRecord { leftover: 2, .. })));
    }
}
