// ============================================================
// Layer 3 — Errors and Error Policy
// ============================================================
// Every step returns Result<T, PrepError>. The CLI layer wraps
// these in anyhow with extra context before printing them.
//
// ErrorPolicy decides what a step does with a file-level error:
//   CollectAndContinue → log it, skip the file, keep going
//   AbortOnFirst       → return it to the caller immediately
//
// Reference: thiserror crate documentation
//            Rust Book §9 (Recoverable Errors with Result)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Error type shared by every data-preparation step.
#[derive(Error, Debug)]
pub enum PrepError {
    /// An input file does not exist.
    #[error("File {} not found.", .path.display())]
    MissingInput { path: PathBuf },

    /// An input file exists but could not be read.
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be parsed as CSV.
    #[error("Error parsing {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A CSV record with more fields than the header.
    #[error("Error parsing {}: expected {expected} fields in line {line}, saw {found}", .path.display())]
    RaggedRow {
        path:     PathBuf,
        line:     u64,
        expected: usize,
        found:    usize,
    },

    /// An output file could not be written.
    #[error("Error writing to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A column required by the step is absent from the header.
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A cell that should hold a number does not.
    #[error("Invalid number '{value}' in column '{column}' (row {row})")]
    InvalidNumber {
        column: String,
        row:    usize,
        value:  String,
    },

    /// A label value other than 0 or 1.
    #[error("Invalid label '{0}', expected 0 or 1")]
    InvalidLabel(String),

    /// Nothing to work with.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A fixed-stride text file whose line count is not a whole number of records.
    #[error("{line_count} non-blank lines do not form whole {stride}-line records ({leftover} left over)")]
    MalformedRecord {
        line_count: usize,
        stride:     usize,
        leftover:   usize,
    },

    /// Bad split ratios, or too few rows to fill every partition.
    #[error("Invalid split: {0}")]
    InvalidSplit(String),

    /// The JSON config could not be read, parsed or written.
    #[error("Config error for {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl PrepError {
    /// True when the error is a missing input file (as opposed to any other failure).
    pub fn is_missing_input(&self) -> bool {
        matches!(self, PrepError::MissingInput { .. })
    }
}

pub type PrepResult<T> = Result<T, PrepError>;

/// How a step reacts to a file-level error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the error, skip the offending file, and carry on.
    #[default]
    CollectAndContinue,
    /// Return the first error.
    AbortOnFirst,
}

impl ErrorPolicy {
    /// Either swallow `err` (logging it) or hand it back, depending on the policy.
    ///
    /// Returns `Ok(())` when the caller should continue.
    pub fn handle(self, err: PrepError) -> PrepResult<()> {
        match self {
            ErrorPolicy::AbortOnFirst => Err(err),
            ErrorPolicy::CollectAndContinue => {
                if err.is_missing_input() {
                    tracing::warn!("Error: {}", err);
                } else {
                    tracing::error!("{}", err);
                }
                Ok(())
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message() {
        let e = PrepError::MissingInput { path: PathBuf::from("a/b.csv") };
        assert_eq!(e.to_string(), "File a/b.csv not found.");
        assert!(e.is_missing_input());
    }

    #[test]
    fn test_policy_continue_swallows() {
        let e = PrepError::EmptyInput("nothing".into());
        assert!(ErrorPolicy::CollectAndContinue.handle(e).is_ok());
    }

    #[test]
    fn test_policy_abort_returns_error() {
        let e = PrepError::MissingColumn("pRecall".into());
        let out = ErrorPolicy::AbortOnFirst.handle(e);
        assert!(matches!(out, Err(PrepError::MissingColumn(c)) if c == "pRecall"));
    }

    #[test]
    fn test_default_policy_is_continue() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::CollectAndContinue);
    }
}
